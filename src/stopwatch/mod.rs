//! Stopwatch core: elapsed-time accounting, the ordered collection of
//! stopwatches shown on screen, and the `HH:MM:SS.ss` readout.

pub mod collection;
pub mod format;
pub mod tracker;

pub use collection::{TimerCollection, TimerId};
pub use format::format_elapsed;
pub use tracker::{ElapsedTimeTracker, RunState};
