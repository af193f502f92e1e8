//! Shared HTTP plumbing for the provider adapters

use debate_application::GatewayError;
use debate_domain::ProviderKind;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Base URLs and timeout for the HTTP adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub openai: String,
    pub groq: String,
    pub gemini: String,
    pub timeout: Option<Duration>,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            openai: ProviderKind::OpenAi.default_base_url().to_string(),
            groq: ProviderKind::Groq.default_base_url().to_string(),
            gemini: ProviderKind::Gemini.default_base_url().to_string(),
            timeout: Some(Duration::from_secs(60)),
        }
    }
}

impl ProviderEndpoints {
    pub fn with_base_url(mut self, kind: ProviderKind, url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_string();
        match kind {
            ProviderKind::OpenAi => self.openai = url,
            ProviderKind::Groq => self.groq = url,
            ProviderKind::Gemini => self.gemini = url,
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Groq => &self.groq,
            ProviderKind::Gemini => &self.gemini,
        }
    }

    pub(crate) fn build_client(&self) -> Result<Client, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client setup failed: {}", e)))
    }
}

/// Send a request and decode the JSON success envelope.
///
/// Non-success statuses become [`GatewayError::Transport`] carrying the
/// provider's `error.message` when the body has one.
pub(crate) async fn send_json(
    builder: RequestBuilder,
    provider: ProviderKind,
) -> Result<Value, GatewayError> {
    let response = builder.send().await.map_err(transport_error)?;
    let status = response.status();
    debug!(provider = %provider, status = status.as_u16(), "Provider responded");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            format!(
                "Unknown {} API Error (HTTP {})",
                provider.display_name(),
                status.as_u16()
            )
        });
        return Err(GatewayError::Transport(message));
    }

    response.json::<Value>().await.map_err(|e| {
        GatewayError::ProviderResponse(format!(
            "{} sent an unreadable response: {}",
            provider.display_name(),
            e
        ))
    })
}

/// `error.message` from a provider error envelope
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value["error"]["message"]
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Transport("Request timed out".to_string())
    } else {
        GatewayError::Transport(format!("Request failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_envelope() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("Incorrect API key provided")
        );
    }

    #[test]
    fn test_error_message_absent() {
        assert_eq!(error_message("Bad Gateway"), None);
        assert_eq!(error_message(r#"{"error": {}}"#), None);
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let endpoints =
            ProviderEndpoints::default().with_base_url(ProviderKind::Groq, "http://localhost:9/v1/");
        assert_eq!(endpoints.base_url(ProviderKind::Groq), "http://localhost:9/v1");
        assert_eq!(
            endpoints.base_url(ProviderKind::OpenAi),
            "https://api.openai.com/v1"
        );
    }
}
