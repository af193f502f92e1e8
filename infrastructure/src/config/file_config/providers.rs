//! Provider configuration from TOML (`[providers]` section)

use debate_domain::{Credential, ProviderKind};
use serde::{Deserialize, Serialize};

/// Settings for one provider endpoint.
///
/// Unset fields fall back to the provider's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderEndpoint {
    /// Environment variable holding the API key (e.g. "OPENAI_API_KEY").
    pub api_key_env: Option<String>,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Base URL override.
    pub base_url: Option<String>,
    /// Model override.
    pub model: Option<String>,
}

impl FileProviderEndpoint {
    pub fn api_key_env(&self, kind: ProviderKind) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or(kind.default_api_key_env())
    }

    pub fn base_url(&self, kind: ProviderKind) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(kind.default_base_url())
    }

    pub fn model(&self, kind: ProviderKind) -> &str {
        self.model.as_deref().unwrap_or(kind.default_model())
    }

    /// Credential from the configured env var, else the literal key
    pub fn resolve_credential(&self, kind: ProviderKind) -> Option<Credential> {
        std::env::var(self.api_key_env(kind))
            .ok()
            .and_then(Credential::new)
            .or_else(|| self.api_key.clone().and_then(Credential::new))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Provider used for generation: "openai", "groq" or "gemini" (default: "openai")
    pub default: String,
    /// Request timeout in seconds; 0 disables it (default: 60)
    pub timeout_secs: u64,
    pub openai: FileProviderEndpoint,
    pub groq: FileProviderEndpoint,
    pub gemini: FileProviderEndpoint,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            default: "openai".to_string(),
            timeout_secs: 60,
            openai: FileProviderEndpoint::default(),
            groq: FileProviderEndpoint::default(),
            gemini: FileProviderEndpoint::default(),
        }
    }
}

impl FileProvidersConfig {
    pub fn endpoint(&self, kind: ProviderKind) -> &FileProviderEndpoint {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Groq => &self.groq,
            ProviderKind::Gemini => &self.gemini,
        }
    }

    pub fn endpoint_mut(&mut self, kind: ProviderKind) -> &mut FileProviderEndpoint {
        match kind {
            ProviderKind::OpenAi => &mut self.openai,
            ProviderKind::Groq => &mut self.groq,
            ProviderKind::Gemini => &mut self.gemini,
        }
    }

    pub fn parse_default(&self) -> Result<ProviderKind, String> {
        self.default.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_defaults_per_provider() {
        let providers = FileProvidersConfig::default();
        assert_eq!(
            providers.groq.base_url(ProviderKind::Groq),
            "https://api.groq.com/openai/v1"
        );
        assert_eq!(
            providers.gemini.model(ProviderKind::Gemini),
            "gemini-2.5-flash-lite"
        );
        assert_eq!(
            providers.openai.api_key_env(ProviderKind::OpenAi),
            "OPENAI_API_KEY"
        );
    }

    #[test]
    fn test_literal_key_used_when_env_missing() {
        let endpoint = FileProviderEndpoint {
            api_key_env: Some("PERSONA_DEBATE_TEST_UNSET_KEY_VAR".into()),
            api_key: Some("sk-literal".into()),
            ..Default::default()
        };
        assert_eq!(
            endpoint
                .resolve_credential(ProviderKind::OpenAi)
                .unwrap()
                .expose(),
            "sk-literal"
        );
    }

    #[test]
    fn test_no_key_anywhere() {
        let endpoint = FileProviderEndpoint {
            api_key_env: Some("PERSONA_DEBATE_TEST_UNSET_KEY_VAR".into()),
            ..Default::default()
        };
        assert!(endpoint.resolve_credential(ProviderKind::Groq).is_none());
    }
}
