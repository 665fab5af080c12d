//! stopwatches - several independent stopwatches in one terminal.
//!
//! The timing core lives in [`stopwatch`]; [`app`] turns terminal input into
//! [`app::action::Action`]s and owns all state, [`ui`] draws it.

pub mod app;
pub mod config;
pub mod logging;
pub mod stopwatch;
pub mod ui;

pub use config::AppConfig;
