use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::key_span;
use crate::models::{Category, OPTION_COUNT};

fn rules(category: &Category) -> [(&'static str, String); 4] {
    [
        (
            "Question Format",
            format!(
                "Each question has {} multiple-choice options. Select the best answer.",
                OPTION_COUNT
            ),
        ),
        (
            "Time Limit",
            format!(
                "You have {} seconds to answer each question.",
                category.time_per_question
            ),
        ),
        (
            "No Going Back",
            "Once you move to the next question, you cannot return to previous ones.".to_string(),
        ),
        (
            "Scoring",
            format!(
                "You need {}% or higher to pass the quiz.",
                category.passing_score
            ),
        ),
    ]
}

pub fn draw_instructions(f: &mut Frame, category: &Category) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(category.name.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let overview = Text::from(vec![
        Line::from(category.description.as_str()),
        Line::from(""),
        Line::from(format!(
            "{} questions  |  {}s per question  |  {}% to pass",
            category.questions.len(),
            category.time_per_question,
            category.passing_score
        )),
    ]);
    let overview = Paragraph::new(overview)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(overview, chunks[1]);

    let mut rules_text = Text::default();
    for (i, (title, description)) in rules(category).into_iter().enumerate() {
        if i > 0 {
            rules_text.push_line(Line::from(""));
        }
        rules_text.push_line(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        rules_text.push_line(Line::from(description));
    }
    let rules = Paragraph::new(rules_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Quiz Rules"));
    f.render_widget(rules, chunks[2]);

    let help_text = vec![Line::from(vec![
        key_span("Enter"),
        Span::from(" Begin Quiz  "),
        key_span("Esc"),
        Span::from(" Back to Categories  "),
        key_span("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
