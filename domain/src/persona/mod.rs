//! Persona domain.
//!
//! - [`registry::Persona`] — display name plus system instruction
//! - [`registry::PersonaRegistry`] — closed catalog keyed by [`registry::PersonaId`]

mod catalog;
pub mod registry;
