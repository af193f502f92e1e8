//! Interactive debate session
//!
//! Renders debate events and applies control commands typed on stdin.

mod repl;

pub use repl::{DebateRepl, SessionEnd};
