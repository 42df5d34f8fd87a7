use crate::countdown::format_clock;
use crate::models::{Category, QuizResult};
use crate::ui::key_span;
use crate::ui::layout::calculate_results_chunks;
use chrono::{DateTime, Local};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn format_started_at(started_at: DateTime<Local>) -> String {
    started_at.format("%Y-%m-%d %H:%M").to_string()
}

pub fn draw_results(
    f: &mut Frame,
    category: &Category,
    result: &QuizResult,
    started_at: Option<DateTime<Local>>,
) {
    let layout = calculate_results_chunks(f.area());
    let verdict_color = if result.passed { Color::Green } else { Color::Red };

    let headline = if result.passed {
        "Congratulations! You've successfully passed the quiz!"
    } else {
        "Better Luck Next Time. Don't give up! Practice makes perfect."
    };
    let title = Paragraph::new(headline)
        .style(
            Style::default()
                .fg(verdict_color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Results - {}", category.name)),
        );
    f.render_widget(title, layout.header_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Score"))
        .gauge_style(Style::default().fg(verdict_color))
        .percent(result.percentage.min(100) as u16)
        .label(format!("{}%", result.percentage));
    f.render_widget(gauge, layout.gauge_area);

    let mut stats = Text::default();
    stats.push_line(Line::from(Span::styled(
        if result.passed { "PASSED" } else { "FAILED" },
        Style::default()
            .fg(verdict_color)
            .add_modifier(Modifier::BOLD),
    )));
    stats.push_line(Line::from(""));
    stats.push_line(Line::from(vec![
        Span::styled("Correct:    ", Style::default().fg(Color::Green)),
        Span::from(result.correct.to_string()),
    ]));
    stats.push_line(Line::from(vec![
        Span::styled("Incorrect:  ", Style::default().fg(Color::Red)),
        Span::from(result.incorrect.to_string()),
    ]));
    stats.push_line(Line::from(vec![
        Span::styled("Unanswered: ", Style::default().fg(Color::DarkGray)),
        Span::from(result.unanswered.to_string()),
    ]));
    stats.push_line(Line::from(""));
    stats.push_line(Line::from(format!(
        "Score: {} / {}",
        result.score, result.total_questions
    )));
    stats.push_line(Line::from(format!(
        "Passing score: {}%",
        category.passing_score
    )));
    stats.push_line(Line::from(format!(
        "Time spent: {}",
        format_clock(result.time_spent_secs)
    )));
    if let Some(started_at) = started_at {
        stats.push_line(Line::from(format!(
            "Started: {}",
            format_started_at(started_at)
        )));
    }

    let stats = Paragraph::new(stats)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Summary"));
    f.render_widget(stats, layout.stats_area);

    let help_text = vec![Line::from(vec![
        key_span("v"),
        Span::from(" Review Answers  "),
        key_span("r"),
        Span::from(" Retry  "),
        key_span("m/Esc"),
        Span::from(" Main Menu  "),
        key_span("q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
