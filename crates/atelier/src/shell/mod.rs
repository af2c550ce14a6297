//! Shell
//!
//! The top-level coordinator wiring the six stores to a tabbed front end.

pub mod controller;
pub mod state;

pub use controller::ShellController;
pub use state::{ShellCommand, ShellSnapshot, Tab};
