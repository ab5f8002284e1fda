//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the REPL is active.
//!
//! # Tasks
//! - Cache sweep: removes expired cache entries once per cache interval

mod sweep;

pub use sweep::{start_sweep, SweepHandle};
