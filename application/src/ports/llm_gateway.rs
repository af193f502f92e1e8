//! LLM Gateway port
//!
//! Defines the interface for communicating with generation backends.
//! One call takes the provider-agnostic message list plus the provider
//! configuration for this turn and returns plain text.

use crate::ports::debate_event::DebateErrorKind;
use async_trait::async_trait;
use debate_domain::{GenerationRequest, ProviderConfig};
use thiserror::Error;

/// Normalized failures of a generation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Missing credential or unusable provider settings; raised before any network call
    #[error("{0}")]
    Configuration(String),

    /// Connection failure or non-success HTTP status
    #[error("{0}")]
    Transport(String),

    /// Success envelope without usable text
    #[error("{0}")]
    ProviderResponse(String),

    /// The run was cancelled while the call was in flight
    #[error("Operation cancelled")]
    Cancelled,
}

impl GatewayError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GatewayError::Cancelled)
    }

    /// Category reported to the presentation layer
    pub fn classify(&self) -> DebateErrorKind {
        match self {
            GatewayError::Configuration(_) => DebateErrorKind::Configuration,
            GatewayError::Transport(_) => DebateErrorKind::Transport,
            GatewayError::ProviderResponse(_) => DebateErrorKind::ProviderResponse,
            GatewayError::Cancelled => DebateErrorKind::Cancelled,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to generation backends.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Run one generation call and return the generated text
    async fn generate(
        &self,
        request: &GenerationRequest,
        config: &ProviderConfig,
    ) -> Result<String, GatewayError>;
}
