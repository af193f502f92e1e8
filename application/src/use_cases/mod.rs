//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod debate_controller;
pub mod lifecycle;
pub mod narration;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod test_support;
