//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application settings
//! with [`FileConfig::to_settings`].

mod debate;
mod narration;
mod personas;
mod providers;

pub use debate::FileDebateConfig;
pub use narration::{FileNarrationConfig, FileSpeechEngine};
pub use personas::FilePersonaConfig;
pub use providers::{FileProviderEndpoint, FileProvidersConfig};

use crate::providers::ProviderEndpoints;
use debate_application::{DebateSettings, NarrationSettings};
use debate_domain::{
    ConfigIssue, ConfigIssueCode, DomainError, Language, PersonaRegistry, ProviderConfig,
    ProviderKind, Seat,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Turn limit, pacing, seat personas and reply language
    pub debate: FileDebateConfig,
    /// Mute flag, voice language and speech engine
    pub narration: FileNarrationConfig,
    /// Provider selection and endpoints
    pub providers: FileProvidersConfig,
    /// Extra personas appended after the built-in catalog
    pub personas: Vec<FilePersonaConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors prevent a debate from starting; warnings are informational.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Provider name
        if let Err(message) = self.providers.parse_default() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnknownProvider,
                format!("providers.default: {}", message),
            ));
        }

        // 2. Turn limit
        if self.debate.max_turns == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroMaxTurns,
                "debate.max_turns must be greater than 0",
            ));
        }

        // 3. Personas
        match self.persona_registry() {
            Ok(registry) => {
                for (field, id) in [
                    ("debate.persona_a", &self.debate.persona_a),
                    ("debate.persona_b", &self.debate.persona_b),
                ] {
                    if !registry.contains(id) {
                        issues.push(ConfigIssue::error(
                            ConfigIssueCode::UnknownPersona,
                            format!("{}: unknown persona '{}'", field, id),
                        ));
                    }
                }
            }
            Err(e) => issues.push(ConfigIssue::error(
                ConfigIssueCode::DuplicatePersona,
                format!("[[personas]]: {}", e),
            )),
        }

        // 4. Voice genders
        for (seat, field) in [(Seat::A, "narration.gender_a"), (Seat::B, "narration.gender_b")] {
            if let Some(message) = self.narration.gender_error(seat) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownGender,
                    format!(
                        "{}: {}, using '{}'",
                        field,
                        message,
                        self.narration.gender_for(seat)
                    ),
                ));
            }
        }

        // 5. Credential for the selected provider
        let kind = self.provider_kind();
        let endpoint = self.providers.endpoint(kind);
        if endpoint.resolve_credential(kind).is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingCredential,
                format!(
                    "No API key for {}: set {} or providers.{}.api_key",
                    kind.display_name(),
                    endpoint.api_key_env(kind),
                    kind
                ),
            ));
        }

        issues
    }

    /// Built-in personas followed by the configured ones
    pub fn persona_registry(&self) -> Result<PersonaRegistry, DomainError> {
        PersonaRegistry::builtin()
            .with_personas(self.personas.iter().map(|p| p.to_persona()).collect())
    }

    /// Selected provider, falling back to the default on an unknown name
    pub fn provider_kind(&self) -> ProviderKind {
        self.providers.parse_default().unwrap_or_default()
    }

    /// Provider config for `kind`, with its credential resolved
    pub fn provider_config(&self, kind: ProviderKind) -> ProviderConfig {
        let endpoint = self.providers.endpoint(kind);
        ProviderConfig::new(kind)
            .with_model(endpoint.model(kind))
            .with_credential(endpoint.resolve_credential(kind))
    }

    /// Base URLs and timeout for the HTTP adapters
    pub fn endpoints(&self) -> ProviderEndpoints {
        let timeout = match self.providers.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        ProviderKind::ALL
            .iter()
            .fold(ProviderEndpoints::default(), |endpoints, &kind| {
                endpoints.with_base_url(kind, self.providers.endpoint(kind).base_url(kind))
            })
            .with_timeout(timeout)
    }

    /// Convert to the settings snapshot used by the application layer
    pub fn to_settings(&self) -> DebateSettings {
        let language = self.debate.language.as_deref().and_then(Language::parse_tag);
        let narration = NarrationSettings {
            muted: self.narration.muted,
            language: self.narration.language.as_deref().and_then(Language::parse_tag),
            gender_a: self.narration.gender_for(Seat::A),
            gender_b: self.narration.gender_for(Seat::B),
        };

        DebateSettings::default()
            .with_provider(self.provider_config(self.provider_kind()))
            .with_personas(&self.debate.persona_a, &self.debate.persona_b)
            .with_max_turns(self.debate.max_turns)
            .with_turn_delay(Duration::from_secs(self.debate.turn_delay_secs))
            .with_language(language)
            .with_narration(narration)
    }
}
