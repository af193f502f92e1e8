use super::gemini::GeminiAdapter;
use super::openai_compat::OpenAiCompatAdapter;
use super::{ProviderAdapter, ProviderEndpoints};
use async_trait::async_trait;
use debate_application::{GatewayError, LlmGateway};
use debate_domain::{GenerationRequest, ProviderConfig};
use std::sync::Arc;

/// Gateway that dispatches each call to the adapter for the configured provider
pub struct RoutingGateway {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
}

impl RoutingGateway {
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { adapters }
    }

    /// Gateway over the HTTP adapters for every supported provider
    pub fn http(endpoints: ProviderEndpoints) -> Result<Self, GatewayError> {
        let client = endpoints.build_client()?;
        Ok(Self::new(vec![
            Arc::new(OpenAiCompatAdapter::new(client.clone(), endpoints.clone())),
            Arc::new(GeminiAdapter::new(client, endpoints)),
        ]))
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn generate(
        &self,
        request: &GenerationRequest,
        config: &ProviderConfig,
    ) -> Result<String, GatewayError> {
        // Checked before any network traffic
        let credential = config.credential.as_ref().ok_or_else(|| {
            GatewayError::Configuration(format!(
                "{} API Key is missing",
                config.provider.display_name()
            ))
        })?;

        let adapter = self
            .adapters
            .iter()
            .find(|a| a.supports(config.provider))
            .ok_or_else(|| {
                GatewayError::Configuration(format!(
                    "No adapter registered for provider '{}'",
                    config.provider
                ))
            })?;

        adapter.generate(request, config, credential).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{Credential, Message, ProviderKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingAdapter {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProviderAdapter for CountingAdapter {
        fn supports(&self, kind: ProviderKind) -> bool {
            kind == ProviderKind::Groq
        }

        async fn generate(
            &self,
            _request: &GenerationRequest,
            _config: &ProviderConfig,
            credential: &Credential,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("key={}", credential.expose()))
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(vec![Message::user("hi")])
    }

    #[tokio::test]
    async fn test_missing_credential_never_reaches_adapter() {
        let adapter = Arc::new(CountingAdapter::default());
        let gateway = RoutingGateway::new(vec![adapter.clone()]);

        let err = gateway
            .generate(&request(), &ProviderConfig::new(ProviderKind::Groq))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GatewayError::Configuration("Groq API Key is missing".into())
        );
        assert_eq!(adapter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_routes_to_supporting_adapter() {
        let adapter = Arc::new(CountingAdapter::default());
        let gateway = RoutingGateway::new(vec![adapter.clone()]);
        let config =
            ProviderConfig::new(ProviderKind::Groq).with_credential(Credential::new("gsk-1"));

        let text = gateway.generate(&request(), &config).await.unwrap();
        assert_eq!(text, "key=gsk-1");
        assert_eq!(adapter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsupported_provider_is_configuration_error() {
        let gateway = RoutingGateway::new(vec![Arc::new(CountingAdapter::default())]);
        let config =
            ProviderConfig::new(ProviderKind::Gemini).with_credential(Credential::new("k"));

        let err = gateway.generate(&request(), &config).await.unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));
    }
}
