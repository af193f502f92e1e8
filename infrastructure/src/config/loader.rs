//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = "persona-debate";
const PROJECT_FILES: [&str; 2] = ["debate.toml", ".debate.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./debate.toml` or `./.debate.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/persona-debate/config.toml`
    /// 4. Fallback: `~/.config/persona-debate/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let project = Self::project_config_path();
        Self::load_from(
            Self::global_config_path().as_deref(),
            project.as_deref(),
            config_path.map(PathBuf::as_path),
        )
    }

    fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load API keys from a `.env` file into the process environment.
    ///
    /// With no path, searches the current directory and its parents.
    /// Variables already set in the environment are left alone. Returns the
    /// file that was loaded, if any.
    pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
        let result = match path {
            Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
            None => dotenvy::dotenv(),
        };
        match result {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded environment file");
                Some(path)
            }
            Err(e) if e.not_found() => None,
            Err(e) => {
                warn!(error = %e, "Could not read environment file");
                None
            }
        }
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/persona-debate/config.toml if set,
    /// otherwise falls back to ~/.config/persona-debate/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            println!("  [FOUND] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./debate.toml or ./.debate.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_env_file_supplies_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        fs::write(
            &env_file,
            "PERSONA_DEBATE_TEST_DOTENV_KEY=sk-from-file\n# comment\n",
        )
        .unwrap();

        let loaded = ConfigLoader::load_env_file(Some(&env_file));
        assert_eq!(loaded.as_deref(), Some(env_file.as_path()));
        assert_eq!(
            std::env::var("PERSONA_DEBATE_TEST_DOTENV_KEY").as_deref(),
            Ok("sk-from-file")
        );

        let mut config = FileConfig::default();
        config.providers.openai.api_key_env = Some("PERSONA_DEBATE_TEST_DOTENV_KEY".into());
        let settings = config.to_settings();
        assert_eq!(
            settings.provider.credential.as_ref().map(|c| c.expose()),
            Some("sk-from-file")
        );
    }

    #[test]
    fn test_missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ConfigLoader::load_env_file(Some(&dir.path().join(".env"))), None);
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.debate.max_turns, 10);
        assert!(config.personas.is_empty());
        assert!(!config.narration.muted);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("persona-debate"));
    }

    #[test]
    fn test_later_sources_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("debate.toml");
        fs::write(
            &global,
            "[debate]\nmax_turns = 20\npersona_a = \"poet\"\n\n[narration]\nmuted = true\n",
        )
        .unwrap();
        fs::write(&project, "[debate]\nmax_turns = 6\n").unwrap();

        let config = ConfigLoader::load_from(Some(&global), Some(&project), None).unwrap();
        assert_eq!(config.debate.max_turns, 6);
        assert_eq!(config.debate.persona_a, "poet");
        assert_eq!(config.debate.persona_b, "skeptic");
        assert!(config.narration.muted);
    }

    #[test]
    fn test_explicit_path_has_highest_priority() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("debate.toml");
        let explicit = dir.path().join("custom.toml");
        fs::write(&project, "[providers]\ndefault = \"groq\"\n").unwrap();
        fs::write(&explicit, "[providers]\ndefault = \"gemini\"\n").unwrap();

        let config = ConfigLoader::load_from(None, Some(&project), Some(&explicit)).unwrap();
        assert_eq!(config.providers.default, "gemini");
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ConfigLoader::load_from(None, None, Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[debate]\nmax_turns = \"many\"\n").unwrap();
        assert!(ConfigLoader::load_from(None, None, Some(&path)).is_err());
    }
}
