//! Parallel fan-out for zero-argument tasks: run a whole batch concurrently
//! and wait for all of it, optionally capping how many tasks run at once.

pub mod gate;
pub mod run;

pub use gate::{Gate, Slot};
pub use run::{default_limit, run, run_with_limit};
