use crate::models::{AnswerRecord, AnswerStatus, Category, QuizResult};
use crate::ui::key_span;
use crate::utils::{calculate_max_scroll, estimate_text_height, option_label};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn status_span(status: AnswerStatus) -> Span<'static> {
    let (label, color) = match status {
        AnswerStatus::Correct => ("Correct", Color::Green),
        AnswerStatus::Incorrect => ("Incorrect", Color::Red),
        AnswerStatus::Unanswered => ("Unanswered", Color::DarkGray),
    };
    Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Every question with its options, the player's pick and the right answer.
pub fn review_text(category: &Category, answers: &[AnswerRecord]) -> Text<'static> {
    let mut text = Text::default();
    for (i, question) in category.questions.iter().enumerate() {
        let record = answers.iter().find(|a| a.question_id == question.id);
        let status = record.map_or(AnswerStatus::Unanswered, AnswerRecord::status);
        let selected = record.and_then(|r| r.selected_option);

        text.push_line(Line::from(vec![
            Span::styled(
                format!("{}. ", i + 1),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            status_span(status),
            Span::from(format!(
                "  ({}s)",
                record.map_or(category.time_per_question, |r| r.time_taken_secs)
            )),
        ]));
        text.push_line(Line::from(question.prompt.clone()));

        for (opt, option) in question.options.iter().enumerate() {
            let is_correct = opt == question.correct_option;
            let is_wrong_pick = selected == Some(opt) && !is_correct;
            let (suffix, style) = if is_correct {
                (
                    if selected == Some(opt) { "  <- your answer, correct" } else { "  <- correct" },
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )
            } else if is_wrong_pick {
                ("  <- your answer", Style::default().fg(Color::Red))
            } else {
                ("", Style::default())
            };
            text.push_line(Line::from(Span::styled(
                format!("   {}. {}{}", option_label(opt), option, suffix),
                style,
            )));
        }
        text.push_line(Line::from(""));
    }
    text
}

pub fn draw_review(f: &mut Frame, category: &Category, result: &QuizResult, scroll: &mut u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!(
        "Review Your Answers - {}  |  {} Correct  {} Incorrect  {} Skipped",
        category.name, result.correct, result.incorrect, result.unanswered
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let content = review_text(category, &result.answers);
    let visible_height = chunks[1].height.saturating_sub(2) as usize;
    let text_width = chunks[1].width.saturating_sub(2) as usize;
    let max_scroll = calculate_max_scroll(estimate_text_height(&content, text_width), visible_height);
    // Keep the stored position bounded so scrolling back up responds at once.
    *scroll = (*scroll).min(max_scroll);

    let review = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .scroll((*scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(review, chunks[1]);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Scroll  "),
        key_span("b/Esc"),
        Span::from(" Back to Results  "),
        key_span("r"),
        Span::from(" Retry  "),
        key_span("m"),
        Span::from(" Main Menu"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
