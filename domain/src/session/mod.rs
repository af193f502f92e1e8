//! Generation message protocol.
//!
//! - [`entities::Message`] — a single role-tagged message
//! - [`entities::GenerationRequest`] — the ordered list sent to a provider

pub mod entities;
