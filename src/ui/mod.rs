pub mod layout;
mod instructions;
mod menu;
mod quiz;
mod results;
mod review;

use crate::app::App;
use crate::countdown::Clock;
use crate::models::AppState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub use instructions::draw_instructions;
pub use layout::{calculate_quiz_chunks, calculate_results_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz, draw_submit_confirmation};
pub use results::{draw_results, format_started_at};
pub use review::draw_review;

/// Draw the screen for the app's current state.
pub fn draw<C: Clock>(f: &mut Frame, app: &mut App<C>) {
    match app.state {
        AppState::Menu => draw_menu(f, app.session.catalog(), app.selected_category),
        AppState::Instructions => {
            if let Some(category) = app.session.category() {
                draw_instructions(f, category);
            }
        }
        AppState::Quiz => draw_quiz(f, &app.session),
        AppState::SubmitConfirm => {
            draw_quiz(f, &app.session);
            draw_submit_confirmation(f, &app.session);
        }
        AppState::QuizQuitConfirm => {
            draw_quiz(f, &app.session);
            draw_quit_confirmation(f);
        }
        AppState::Results => {
            if let (Some(category), Some(result)) = (app.session.category(), app.session.result())
            {
                draw_results(f, category, result, app.session.started_at());
            }
        }
        AppState::Review => {
            if let (Some(category), Some(result)) = (app.session.category(), app.session.result())
            {
                draw_review(f, category, result, &mut app.review_scroll);
            }
        }
    }
}

pub(crate) fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
