//! Turn-structured wire format (Gemini)
//!
//! System text travels in `system_instruction`, except for Gemma models which
//! do not accept it: there the system text is folded into the first user turn.
//! Assistant turns are sent with the `model` role.

use super::http::{ProviderEndpoints, send_json};
use super::{ProviderAdapter, SAMPLING_TEMPERATURE};
use async_trait::async_trait;
use debate_application::GatewayError;
use debate_domain::{
    Credential, GenerationRequest, ProviderConfig, ProviderFamily, ProviderKind, Role,
};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

/// Adapter for the Gemini `generateContent` API
pub struct GeminiAdapter {
    client: Client,
    endpoints: ProviderEndpoints,
}

impl GeminiAdapter {
    pub fn new(client: Client, endpoints: ProviderEndpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn supports(&self, kind: ProviderKind) -> bool {
        kind.family() == ProviderFamily::TurnStructured
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        config: &ProviderConfig,
        credential: &Credential,
    ) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoints.base_url(config.provider),
            config.model
        );
        debug!(
            model = %config.model,
            url = %url,
            system_instruction = supports_system_instruction(&config.model),
            "Sending generateContent request"
        );

        let builder = self
            .client
            .post(&url)
            .query(&[("key", credential.expose())])
            .json(&build_body(request, &config.model));
        let response = send_json(builder, config.provider).await?;
        extract_text(&response)
    }
}

/// Whether the model accepts a separate system instruction
pub fn supports_system_instruction(model: &str) -> bool {
    !model.to_lowercase().contains("gemma")
}

/// Build the `:generateContent` request body
pub fn build_body(request: &GenerationRequest, model: &str) -> Value {
    let system = request
        .messages()
        .iter()
        .find(|m| m.role == Role::System)
        .map(|m| m.content.as_str());

    let mut contents: Vec<Value> = request
        .messages()
        .iter()
        .filter(|m| m.role != Role::System)
        .map(|m| {
            let role = match m.role {
                Role::Assistant => "model",
                _ => "user",
            };
            json!({ "role": role, "parts": [{ "text": m.content }] })
        })
        .collect();

    let mut body = json!({
        "generationConfig": { "temperature": SAMPLING_TEMPERATURE },
    });

    if let Some(system) = system {
        if supports_system_instruction(model) {
            body["system_instruction"] = json!({ "parts": [{ "text": system }] });
        } else {
            merge_into_first_user(&mut contents, system);
        }
    }

    body["contents"] = Value::Array(contents);
    body
}

fn merge_into_first_user(contents: &mut Vec<Value>, system: &str) {
    let first_is_user = contents.first().is_some_and(|c| c["role"] == "user");
    if first_is_user {
        let text = contents[0]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        contents[0]["parts"][0]["text"] =
            Value::String(format!("System Instruction: {}\n\n{}", system, text));
    } else {
        contents.insert(
            0,
            json!({
                "role": "user",
                "parts": [{ "text": format!("System Instruction: {}", system) }],
            }),
        );
    }
}

/// Pull the generated text out of a success envelope
pub fn extract_text(response: &Value) -> Result<String, GatewayError> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| GatewayError::ProviderResponse("Gemini returned an empty response.".into()))
}
