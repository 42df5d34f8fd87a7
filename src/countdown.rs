use crossbeam_channel::Receiver;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const WARNING_SECS: u32 = 10;
pub const CRITICAL_SECS: u32 = 5;

/// Source of "now" for elapsed-time measurement.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Identifies which question a tick stream belongs to: the attempt
/// generation and the question index.
pub type TickKey = (u64, usize);

/// Repeating countdown tick, held only while a question's countdown is
/// active. Dropping the receiver is what stops it, so a stale stream can
/// never reach a later question or a finished attempt.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    armed: Option<(TickKey, Receiver<Instant>)>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Bring the ticker in line with the session: re-arm for a new key,
    /// release it when the countdown is no longer active.
    pub fn sync(&mut self, key: TickKey, active: bool) {
        if !active {
            self.disarm();
            return;
        }
        if self.key() == Some(key) {
            return;
        }
        tracing::debug!(attempt = key.0, question = key.1, "countdown armed");
        self.armed = Some((key, crossbeam_channel::tick(self.period)));
    }

    pub fn disarm(&mut self) {
        if let Some((key, _)) = self.armed.take() {
            tracing::debug!(attempt = key.0, question = key.1, "countdown released");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn key(&self) -> Option<TickKey> {
        self.armed.as_ref().map(|(key, _)| *key)
    }

    /// Number of ticks that fell due since the last call. Never blocks.
    pub fn due_ticks(&self) -> usize {
        match &self.armed {
            Some((_, rx)) => rx.try_iter().count(),
            None => 0,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Formats seconds as `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Warning,
    Critical,
}

pub fn urgency(remaining: u32) -> Urgency {
    if remaining <= CRITICAL_SECS {
        Urgency::Critical
    } else if remaining <= WARNING_SECS {
        Urgency::Warning
    } else {
        Urgency::Normal
    }
}
