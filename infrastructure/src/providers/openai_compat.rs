//! Flat-role wire format (OpenAI and Groq)
//!
//! Request: `{model, messages: [{role, content}], temperature}`.
//! Response text lives at `choices[0].message.content`.

use super::http::{ProviderEndpoints, send_json};
use super::{ProviderAdapter, SAMPLING_TEMPERATURE};
use async_trait::async_trait;
use debate_application::GatewayError;
use debate_domain::{
    Credential, GenerationRequest, ProviderConfig, ProviderFamily, ProviderKind,
};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

/// Adapter for the OpenAI-compatible chat completions API
pub struct OpenAiCompatAdapter {
    client: Client,
    endpoints: ProviderEndpoints,
}

impl OpenAiCompatAdapter {
    pub fn new(client: Client, endpoints: ProviderEndpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiCompatAdapter {
    fn supports(&self, kind: ProviderKind) -> bool {
        kind.family() == ProviderFamily::FlatRole
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        config: &ProviderConfig,
        credential: &Credential,
    ) -> Result<String, GatewayError> {
        let url = format!(
            "{}/chat/completions",
            self.endpoints.base_url(config.provider)
        );
        debug!(
            provider = %config.provider,
            model = %config.model,
            url = %url,
            messages = request.len(),
            "Sending chat completion request"
        );

        let builder = self
            .client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&build_body(request, &config.model));
        let response = send_json(builder, config.provider).await?;
        extract_text(&response, config.provider)
    }
}

/// Build the `/chat/completions` request body
pub fn build_body(request: &GenerationRequest, model: &str) -> Value {
    json!({
        "model": model,
        "messages": request.messages(),
        "temperature": SAMPLING_TEMPERATURE,
    })
}

/// Pull the generated text out of a success envelope
pub fn extract_text(response: &Value, provider: ProviderKind) -> Result<String, GatewayError> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            GatewayError::ProviderResponse(format!(
                "{} returned an empty response.",
                provider.display_name()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::Message;

    #[test]
    fn test_body_keeps_flat_roles() {
        let request = GenerationRequest::new(vec![
            Message::system("You are a poet."),
            Message::user("The topic is: \"Rain\". Conversation so far:"),
            Message::assistant("Drops sing."),
            Message::user("Your response:"),
        ]);

        let body = build_body(&request, "gpt-3.5-turbo");

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["messages"].as_array().unwrap().len(), 4);
        assert_eq!(
            body["messages"][0],
            json!({"role": "system", "content": "You are a poet."})
        );
        assert_eq!(body["messages"][2]["role"], "assistant");
    }

    #[test]
    fn test_extract_text() {
        let response = json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hello!"}}]
        });
        assert_eq!(
            extract_text(&response, ProviderKind::OpenAi).unwrap(),
            "Hello!"
        );
    }

    #[test]
    fn test_extract_text_missing_choices() {
        let err = extract_text(&json!({"choices": []}), ProviderKind::Groq).unwrap_err();
        assert_eq!(
            err,
            GatewayError::ProviderResponse("Groq returned an empty response.".into())
        );
    }

    #[test]
    fn test_extract_text_null_content() {
        let response = json!({"choices": [{"message": {"role": "assistant", "content": null}}]});
        assert!(matches!(
            extract_text(&response, ProviderKind::OpenAi),
            Err(GatewayError::ProviderResponse(_))
        ));
    }
}
