use crate::countdown::{Clock, SystemClock, Ticker};
use crate::models::{AppState, QuizSession, TickOutcome};
use std::time::Duration;

/// Everything the terminal front end owns: the session, which screen is
/// showing, the menu cursor and review scroll, and the countdown ticker.
#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    pub session: QuizSession<C>,
    pub state: AppState,
    pub selected_category: usize,
    pub review_scroll: u16,
    pub ticker: Ticker,
    pub should_quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(session: QuizSession<C>, tick_interval: Duration) -> Self {
        Self {
            session,
            state: AppState::Menu,
            selected_category: 0,
            review_scroll: 0,
            ticker: Ticker::new(tick_interval),
            should_quit: false,
        }
    }

    /// Drain whatever ticks fell due and feed them to the session.
    pub fn on_tick(&mut self) -> TickOutcome {
        let due = self.ticker.due_ticks();
        let outcome = self.apply_ticks(due);
        self.sync_ticker();
        outcome
    }

    pub fn apply_ticks(&mut self, count: usize) -> TickOutcome {
        let mut last = TickOutcome::Idle;
        for _ in 0..count {
            last = self.session.tick();
            if !matches!(last, TickOutcome::Running(_)) {
                break;
            }
        }
        last
    }

    /// Arm the ticker for the current question while its countdown runs,
    /// release it otherwise.
    pub fn sync_ticker(&mut self) {
        let countdown = self.session.countdown();
        self.ticker.sync(self.session.tick_key(), countdown.active);
    }

    /// Screens that need state the session no longer has fall back to the
    /// nearest screen that makes sense.
    pub fn enforce_screen_guards(&mut self) {
        let target = match self.state {
            AppState::Instructions if self.session.category().is_none() => AppState::Menu,
            AppState::Quiz | AppState::SubmitConfirm | AppState::QuizQuitConfirm
                if !self.session.is_started() =>
            {
                if self.session.category().is_some() {
                    AppState::Instructions
                } else {
                    AppState::Menu
                }
            }
            AppState::Results | AppState::Review if self.session.result().is_none() => {
                AppState::Menu
            }
            state => state,
        };
        if target != self.state {
            tracing::debug!(from = ?self.state, to = ?target, "redirecting screen");
            self.state = target;
        }
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.ticker.disarm();
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::countdown::ManualClock;

    fn app() -> App<ManualClock> {
        let session = QuizSession::with_clock(Catalog::builtin().unwrap(), ManualClock::new());
        App::new(session, Duration::from_millis(5))
    }

    #[test]
    fn test_new_app_starts_on_menu() {
        let app = app();
        assert_eq!(app.state, AppState::Menu);
        assert!(!app.ticker.is_armed());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ticker_follows_countdown() {
        let mut app = app();
        app.session.select_category("science").unwrap();
        app.session.start_attempt().unwrap();
        app.sync_ticker();
        assert_eq!(app.ticker.key(), Some(app.session.tick_key()));

        app.session.select_answer(0).unwrap();
        app.sync_ticker();
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn test_apply_ticks_stops_at_time_up() {
        let mut app = app();
        app.session.select_category("geography").unwrap();
        app.session.start_attempt().unwrap();
        assert_eq!(app.apply_ticks(3), TickOutcome::Running(22));
        assert_eq!(app.apply_ticks(100), TickOutcome::TimeUp);
        assert!(app.session.is_time_up());
        app.sync_ticker();
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn test_guards_redirect_without_state() {
        let mut app = app();
        app.state = AppState::Instructions;
        app.enforce_screen_guards();
        assert_eq!(app.state, AppState::Menu);

        app.session.select_category("history").unwrap();
        app.state = AppState::Quiz;
        app.enforce_screen_guards();
        assert_eq!(app.state, AppState::Instructions);

        app.state = AppState::Results;
        app.enforce_screen_guards();
        assert_eq!(app.state, AppState::Menu);
    }

    #[test]
    fn test_quit_releases_ticker() {
        let mut app = app();
        app.session.select_category("science").unwrap();
        app.session.start_attempt().unwrap();
        app.sync_ticker();
        app.quit();
        assert!(app.should_quit);
        assert!(!app.ticker.is_armed());
    }
}
