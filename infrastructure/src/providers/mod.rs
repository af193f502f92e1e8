//! Generation backends.
//!
//! Each [`ProviderAdapter`] speaks one wire-format family; the
//! [`routing::RoutingGateway`] picks the adapter for the provider configured
//! for the current turn.

pub mod gemini;
mod http;
pub mod openai_compat;
pub mod routing;

use async_trait::async_trait;
use debate_application::GatewayError;
use debate_domain::{Credential, GenerationRequest, ProviderConfig, ProviderKind};

pub use http::ProviderEndpoints;

/// Sampling temperature used for every debate turn.
pub(crate) const SAMPLING_TEMPERATURE: f64 = 0.7;

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn supports(&self, kind: ProviderKind) -> bool;

    /// Send one generation request. The credential has already been checked.
    async fn generate(
        &self,
        request: &GenerationRequest,
        config: &ProviderConfig,
        credential: &Credential,
    ) -> Result<String, GatewayError>;
}
