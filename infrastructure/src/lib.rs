//! Infrastructure layer for persona-debate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP provider adapters, speech engines,
//! the live settings store, transcript logging and configuration loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod settings;
pub mod speech;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDebateConfig, FileNarrationConfig, FilePersonaConfig,
    FileProviderEndpoint, FileProvidersConfig, FileSpeechEngine,
};
pub use logging::JsonlConversationLogger;
pub use providers::{
    ProviderAdapter, ProviderEndpoints, gemini::GeminiAdapter,
    openai_compat::OpenAiCompatAdapter, routing::RoutingGateway,
};
pub use settings::LiveSettings;
pub use speech::{CommandSpeechSynthesizer, NullSpeechSynthesizer};
