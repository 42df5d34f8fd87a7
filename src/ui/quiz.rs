use crate::countdown::{format_clock, urgency, Clock, Urgency};
use crate::models::QuizSession;
use crate::ui::key_span;
use crate::ui::layout::{calculate_quiz_chunks, centered_rect};
use crate::utils::option_label;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn timer_style(remaining: u32) -> Style {
    let color = match urgency(remaining) {
        Urgency::Normal => Color::Green,
        Urgency::Warning => Color::Yellow,
        Urgency::Critical => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn draw_quiz<C: Clock>(f: &mut Frame, session: &QuizSession<C>) {
    let layout = calculate_quiz_chunks(f.area());
    let (Some(category), Some(question)) = (session.category(), session.current_question()) else {
        return;
    };

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(layout.header_area);

    let progress = format!(
        "Question {} / {} - {}",
        session.current_index() + 1,
        session.question_count(),
        category.name
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, header_chunks[0]);

    let remaining = session.countdown().remaining;
    let timer_text = if session.is_time_up() {
        "Time's up".to_string()
    } else {
        format_clock(remaining)
    };
    let timer = Paragraph::new(timer_text)
        .style(timer_style(remaining))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Timer"));
    f.render_widget(timer, header_chunks[1]);

    let prompt = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Question {}", session.current_index() + 1)),
        );
    f.render_widget(prompt, layout.question_area);

    let selected = session.current_record().and_then(|r| r.selected_option);
    let locked = session.has_answered() || session.is_time_up();
    let mut options_text = Text::default();
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(i);
        let marker = if is_selected { "[x]" } else { "[ ]" };
        let style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        options_text.push_line(Line::from(Span::styled(
            format!("{} {}. {}", marker, option_label(i), option),
            style,
        )));
        options_text.push_line(Line::from(""));
    }
    let options = Paragraph::new(options_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let status = if session.is_time_up() && selected.is_none() {
        Line::from(Span::styled(
            "Time's up! This question will be marked as unanswered.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(format!(
            "{} of {} answered",
            session.answered_count(),
            session.question_count()
        ))
    };
    let status = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, layout.status_area);

    let next_label = if session.is_last_question() {
        " Submit Quiz  "
    } else {
        " Next Question  "
    };
    let mut help_spans = Vec::new();
    if !locked {
        help_spans.extend([key_span("a-d/1-4"), Span::from(" Answer  ")]);
    }
    help_spans.extend([
        key_span("Enter"),
        Span::from(next_label),
        key_span("s"),
        Span::from(" Submit  "),
        key_span("Esc"),
        Span::from(" Quit to Menu  "),
        key_span("Ctrl+C"),
        Span::from(" Exit App"),
    ]);
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_submit_confirmation<C: Clock>(f: &mut Frame, session: &QuizSession<C>) {
    let area = centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let unanswered = session.unanswered_count();
    let total = session.question_count();
    let mut text = Text::default();
    if unanswered > 0 {
        text.push_line(Line::from(Span::styled(
            format!(
                "You have {} unanswered question{} out of {}.",
                unanswered,
                if unanswered == 1 { "" } else { "s" },
                total
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from("Unanswered questions count as incorrect."));
    } else {
        text.push_line(Line::from("You have answered every question."));
    }
    text.push_line(Line::from(""));
    text.push_line(Line::from("Are you sure you want to submit?"));
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Submit  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" Keep Answering"),
    ]));

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Submit Quiz?")
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(popup, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let text = Text::from(vec![
        Line::from("Return to main menu? This attempt will be discarded."),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Yes (Return to Menu)  "),
            Span::styled(
                "n",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::from(" No (Continue Quiz)"),
        ]),
    ]);
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quit to Menu")
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(popup, area);
}
