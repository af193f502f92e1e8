//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`] — the validated subject of a debate
//! - [`language::Language`] — reply and narration language
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod language;
pub mod string;
pub mod topic;
