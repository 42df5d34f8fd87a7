use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings, read from the environment at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Where log output goes. The terminal UI owns stdout.
    pub log_file: PathBuf,
    /// `EnvFilter` directive, e.g. `info` or `timed_quiz=debug`.
    pub log_level: String,
    /// Optional JSON catalog replacing the built-in categories.
    pub categories_file: Option<PathBuf>,
    pub tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("quiz.log"),
            log_level: "info".to_string(),
            categories_file: None,
            tick_interval: Duration::from_millis(1000),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing, empty or malformed
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_file: get("QUIZ_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(default.log_file),
            log_level: get("QUIZ_LOG_LEVEL").unwrap_or(default.log_level),
            categories_file: get("QUIZ_CATEGORIES_FILE").map(PathBuf::from),
            tick_interval: get("QUIZ_TICK_MILLIS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(default.tick_interval),
        }
    }
}
