//! Configuration file loading for persona-debate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./debate.toml` or `./.debate.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/persona-debate/config.toml`
//! 4. Fallback: `~/.config/persona-debate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDebateConfig, FileNarrationConfig, FilePersonaConfig, FileProviderEndpoint,
    FileProvidersConfig, FileSpeechEngine,
};
pub use loader::ConfigLoader;
