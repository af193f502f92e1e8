//! Presentation layer for persona-debate
//!
//! This crate contains the CLI definition, console output, the thinking
//! spinner, and the interactive debate loop.

pub mod cli;
pub mod control;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use control::ControlCommand;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::ThinkingSpinner;
pub use session::{DebateRepl, SessionEnd};
