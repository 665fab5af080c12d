//! Elapsed-time accounting for a single stopwatch.
//!
//! Time is banked per run segment: `stop` folds the open segment into
//! `accumulated`, so the displayed value is always `accumulated` plus the
//! length of the segment currently running, if any.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

#[derive(Debug, Clone, Default)]
pub struct ElapsedTimeTracker {
    accumulated: Duration,
    segment_start: Option<Instant>,
}

impl ElapsedTimeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        if self.segment_start.is_some() {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.segment_start.is_some()
    }

    /// Time banked from completed segments since the last reset.
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Open a new segment at `now`. Already running: no-op.
    pub fn start_at(&mut self, now: Instant) {
        if self.segment_start.is_none() {
            self.segment_start = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    /// Close the open segment at `now` and bank it. Already stopped: no-op.
    pub fn stop_at(&mut self, now: Instant) {
        if let Some(start) = self.segment_start.take() {
            self.accumulated += now.saturating_duration_since(start);
        }
    }

    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// Zero the banked time. A running tracker keeps running, counting
    /// again from `now`.
    pub fn reset_at(&mut self, now: Instant) {
        self.accumulated = Duration::ZERO;
        if self.segment_start.is_some() {
            self.segment_start = Some(now);
        }
    }

    pub fn current_elapsed(&self) -> Duration {
        self.current_elapsed_at(Instant::now())
    }

    pub fn current_elapsed_at(&self, now: Instant) -> Duration {
        match self.segment_start {
            Some(start) => self.accumulated + now.saturating_duration_since(start),
            None => self.accumulated,
        }
    }
}
