use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use timed_quiz::{logger, App, Catalog, Config, QuizSession};

const INPUT_POLL: Duration = Duration::from_millis(50);

fn main() -> timed_quiz::Result<()> {
    let config = Config::from_env();
    logger::init(&config)?;

    let catalog = match &config.categories_file {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    tracing::info!(categories = catalog.len(), "starting");
    let mut app = App::new(QuizSession::new(catalog), config.tick_interval);

    enable_raw_mode()?;
    let outcome = with_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            run(&mut terminal, &mut app)
        },
        || {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, Show)?;
            Ok(())
        },
    );
    app.ticker.disarm();

    if let Err(err) = &outcome {
        tracing::error!(error = %err, "exiting after error");
    }
    tracing::info!("shut down");
    outcome
}

/// Runs `body`, then `restore` no matter how `body` ended. An error from
/// `body` wins over one from `restore`.
fn with_restore<T>(
    body: impl FnOnce() -> timed_quiz::Result<T>,
    restore: impl FnOnce() -> timed_quiz::Result<()>,
) -> timed_quiz::Result<T> {
    let outcome = body();
    let restored = restore();
    let value = outcome?;
    restored?;
    Ok(value)
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> timed_quiz::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| timed_quiz::draw(f, app))?;

        if event::poll(INPUT_POLL.min(app.ticker.period()))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        app.on_tick();
    }
    Ok(())
}
