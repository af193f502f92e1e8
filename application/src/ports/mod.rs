//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod conversation_logger;
pub mod debate_event;
pub mod llm_gateway;
pub mod settings;
pub mod speech;
