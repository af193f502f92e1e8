//! Interactive debate controls read from stdin

mod command;

pub use command::ControlCommand;
