use crate::app::App;
use crate::countdown::Clock;
use crate::error::QuizError;
use crate::models::{Advance, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const REVIEW_SCROLL_STEP: u16 = 1;

impl<C: Clock> App<C> {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.state {
            AppState::Menu => self.handle_menu_input(key),
            AppState::Instructions => self.handle_instructions_input(key),
            AppState::Quiz => self.handle_quiz_input(key),
            AppState::SubmitConfirm => self.handle_submit_confirm_input(key),
            AppState::QuizQuitConfirm => self.handle_quit_confirm_input(key),
            AppState::Results => self.handle_results_input(key),
            AppState::Review => self.handle_review_input(key),
        }

        if self.should_quit {
            return;
        }
        self.enforce_screen_guards();
        self.sync_ticker();
    }

    fn handle_menu_input(&mut self, key: KeyEvent) {
        let count = self.session.catalog().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_category = self.selected_category.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_category + 1 < count {
                    self.selected_category += 1;
                }
            }
            KeyCode::Enter => {
                let Some(category) = self.session.catalog().categories().get(self.selected_category)
                else {
                    return;
                };
                let id = category.id.clone();
                match self.session.select_category(&id) {
                    Ok(_) => self.state = AppState::Instructions,
                    Err(err) => declined("select category", &err),
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_instructions_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => match self.session.start_attempt() {
                Ok(()) => self.state = AppState::Quiz,
                Err(err) => {
                    declined("start attempt", &err);
                    self.state = AppState::Menu;
                }
            },
            KeyCode::Esc => self.state = AppState::Menu,
            _ => {}
        }
    }

    fn handle_quiz_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                if let Some(option) = option_for_key(c) {
                    self.choose_option(option);
                } else if c == 's' {
                    self.state = AppState::SubmitConfirm;
                }
            }
            KeyCode::Enter | KeyCode::Right => {
                if self.session.is_last_question() {
                    self.state = AppState::SubmitConfirm;
                    return;
                }
                match self.session.advance_to_next() {
                    Ok(Advance::Moved(_)) => {}
                    Ok(Advance::AtLastQuestion) => self.state = AppState::SubmitConfirm,
                    Err(err) => declined("advance", &err),
                }
            }
            KeyCode::Esc => self.state = AppState::QuizQuitConfirm,
            _ => {}
        }
    }

    fn choose_option(&mut self, option: usize) {
        // Options lock once the question is answered or out of time.
        if self.session.has_answered() || self.session.is_time_up() {
            tracing::debug!(option, "selection ignored, question locked");
            return;
        }
        if let Err(err) = self.session.select_answer(option) {
            declined("select answer", &err);
        }
    }

    fn handle_submit_confirm_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => match self.session.submit() {
                Ok(_) => {
                    self.review_scroll = 0;
                    self.state = AppState::Results;
                }
                Err(err) => declined("submit", &err),
            },
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state = AppState::Quiz;
            }
            _ => {}
        }
    }

    fn handle_quit_confirm_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.session.reset_attempt();
                self.state = AppState::Menu;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state = AppState::Quiz;
            }
            _ => {}
        }
    }

    fn handle_results_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('v') => {
                self.review_scroll = 0;
                self.state = AppState::Review;
            }
            KeyCode::Char('r') => self.retry(),
            KeyCode::Char('m') | KeyCode::Esc => self.go_home(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_review_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.review_scroll = self.review_scroll.saturating_sub(REVIEW_SCROLL_STEP);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.review_scroll = self.review_scroll.saturating_add(REVIEW_SCROLL_STEP);
            }
            KeyCode::Char('b') | KeyCode::Esc => self.state = AppState::Results,
            KeyCode::Char('r') => self.retry(),
            KeyCode::Char('m') => self.go_home(),
            _ => {}
        }
    }

    fn retry(&mut self) {
        self.session.reset_attempt();
        self.state = AppState::Instructions;
    }

    fn go_home(&mut self) {
        self.session.reset_attempt();
        self.state = AppState::Menu;
    }
}

/// `a`-`d` or `1`-`4` to an option index.
fn option_for_key(c: char) -> Option<usize> {
    match c {
        'a'..='d' => Some(c as usize - 'a' as usize),
        'A'..='D' => Some(c as usize - 'A' as usize),
        '1'..='4' => Some(c as usize - '1' as usize),
        _ => None,
    }
}

fn declined(operation: &str, err: &QuizError) {
    if err.is_precondition() {
        tracing::debug!(operation, error = %err, "operation declined");
    } else {
        tracing::warn!(operation, error = %err, "operation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::countdown::ManualClock;
    use crate::models::{Lifecycle, QuizSession};
    use std::time::Duration;

    fn app() -> App<ManualClock> {
        let session = QuizSession::with_clock(Catalog::builtin().unwrap(), ManualClock::new());
        App::new(session, Duration::from_millis(5))
    }

    fn press(app: &mut App<ManualClock>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn start_quiz(app: &mut App<ManualClock>) {
        press(app, KeyCode::Enter);
        press(app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn test_option_keys() {
        assert_eq!(option_for_key('a'), Some(0));
        assert_eq!(option_for_key('D'), Some(3));
        assert_eq!(option_for_key('3'), Some(2));
        assert_eq!(option_for_key('e'), None);
        assert_eq!(option_for_key('5'), None);
    }

    #[test]
    fn test_menu_navigation_is_bounded() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_category, 0);
        for _ in 0..20 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.selected_category, 5);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_category, 4);
    }

    #[test]
    fn test_menu_enter_selects_category() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Instructions);
        assert_eq!(app.session.category_id().as_deref(), Some("history"));
        assert_eq!(app.session.lifecycle(), Lifecycle::NotStarted);
    }

    #[test]
    fn test_instructions_start_arms_ticker() {
        let mut app = app();
        start_quiz(&mut app);
        assert!(app.session.is_started());
        assert_eq!(app.ticker.key(), Some(app.session.tick_key()));
    }

    #[test]
    fn test_answer_locks_question_and_releases_ticker() {
        let mut app = app();
        start_quiz(&mut app);
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.ticker.is_armed());
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session.answers().len(), 1);
        assert_eq!(app.session.answers()[0].selected_option, Some(1));
    }

    #[test]
    fn test_selection_ignored_after_time_up() {
        let mut app = app();
        start_quiz(&mut app);
        app.apply_ticks(30);
        press(&mut app, KeyCode::Char('1'));
        assert!(app.session.answers().is_empty());
    }

    #[test]
    fn test_next_rearms_for_new_question() {
        let mut app = app();
        start_quiz(&mut app);
        let first = app.ticker.key();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.current_index(), 1);
        assert_ne!(app.ticker.key(), first);
        assert_eq!(app.session.answers().len(), 1);
    }

    #[test]
    fn test_last_question_enter_opens_submit_confirm() {
        let mut app = app();
        start_quiz(&mut app);
        for _ in 0..9 {
            press(&mut app, KeyCode::Right);
        }
        assert!(app.session.is_last_question());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::SubmitConfirm);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Quiz);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.session.result().unwrap().total_questions, 10);
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn test_quit_confirm_resets_attempt() {
        let mut app = app();
        start_quiz(&mut app);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::QuizQuitConfirm);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Quiz);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.session.lifecycle(), Lifecycle::NotStarted);
        assert!(app.session.answers().is_empty());
    }

    #[test]
    fn test_results_retry_review_and_home() {
        let mut app = app();
        start_quiz(&mut app);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('y'));

        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.state, AppState::Review);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.review_scroll, 2);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.state, AppState::Results);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::Instructions);
        assert!(app.session.result().is_none());
        assert_eq!(app.session.category_id().as_deref(), Some("science"));

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.state, AppState::Menu);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app();
        start_quiz(&mut app);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(!app.ticker.is_armed());
    }

    #[test]
    fn test_menu_q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
