use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::key_span;
use crate::catalog::Catalog;
use crate::models::Category;
use crate::utils::truncate_string;

fn format_category_item(category: &Category) -> String {
    format!(
        "{} ({} questions, {}s each)",
        category.name,
        category.questions.len(),
        category.time_per_question
    )
}

pub fn draw_menu(f: &mut Frame, catalog: &Catalog, selected_index: usize) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Timed Quiz v0.1.0")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Borders plus the two-column selection marker.
    let item_width = chunks[1].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let style = if i == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if i == selected_index { "> " } else { "  " };
            let label = truncate_string(&format_category_item(category), item_width);
            ListItem::new(format!("{}{}", marker, label)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Choose a Category")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, chunks[1]);

    let description = catalog
        .categories()
        .get(selected_index)
        .map(|c| c.description.as_str())
        .unwrap_or_default();
    let details = Paragraph::new(description)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("About"));
    f.render_widget(details, chunks[2]);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Navigate  "),
        key_span("Enter"),
        Span::from(" Select  "),
        key_span("Esc/q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
