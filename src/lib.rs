//! A trace-driven simulator for branch direction prediction schemes.
//!
//! The [`Simulator`] replays a sequence of `(pc, outcome)` events through one
//! of three prediction schemes (bimodal, gshare, or a hybrid of the two) and
//! an optional set-associative branch target cache, accumulating the
//! misprediction statistics needed for the final report.

pub mod branch;
pub mod config;
pub mod history;
pub mod predictor;
pub mod sim;
pub mod stats;
pub mod trace;

pub use branch::*;
pub use config::*;
pub use history::*;
pub use predictor::*;
pub use sim::*;
pub use stats::*;
pub use trace::*;
