//! Round bookkeeping around a maze run: the elapsed-time stopwatch and the final report.

use std::{
    fmt,
    time::{Duration, Instant},
};

/// Wall-clock stopwatch for a single maze run.
///
/// The stopwatch starts running when created and freezes at the value it had when stopped.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Stopwatch {
    /// Instant the run started.
    started: Instant,
    /// Elapsed time captured when the stopwatch was stopped.
    frozen: Option<Duration>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl Stopwatch {
    /// Starts a new stopwatch now.
    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
            frozen: None,
        }
    }

    /// Time elapsed since the start, or up to the stop once stopped.
    pub(crate) fn elapsed(&self) -> Duration {
        self.frozen.unwrap_or_else(|| self.started.elapsed())
    }

    /// Freezes the stopwatch. Stopping twice keeps the first value.
    pub(crate) fn stop(&mut self) {
        if self.frozen.is_none() {
            self.frozen = Some(self.started.elapsed());
        }
    }

    /// Whether the stopwatch has been stopped.
    pub(crate) const fn is_stopped(&self) -> bool {
        self.frozen.is_some()
    }
}

/// Formats whole elapsed seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so a very long run shows e.g. `125:07`.
pub(crate) fn format_clock(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Outcome of a solved round, handed to whatever runs the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// Code revealed on solve.
    pub code: char,
    /// Time taken to reach the goal.
    pub elapsed: Duration,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "code={} elapsed={}",
            self.code,
            self.elapsed.as_secs()
        )
    }
}
