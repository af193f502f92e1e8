//! CLI entrypoint for persona-debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use debate_application::{
    DebateController, DebateOrchestrator, Narrator, SpeechSynthesizer, debate_event_channel,
};
use debate_domain::Seat;
use debate_infrastructure::{
    CommandSpeechSynthesizer, ConfigLoader, FileConfig, FileSpeechEngine,
    JsonlConversationLogger, LiveSettings, NullSpeechSynthesizer, RoutingGateway,
};
use debate_presentation::{Cli, ConsoleFormatter, DebateRepl};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli);

    info!("Starting persona-debate");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // API keys from ./.env, without overriding the real environment
    ConfigLoader::load_env_file(None);

    // Load configuration (files, then CLI overrides)
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    let registry = config
        .persona_registry()
        .context("Invalid [[personas]] configuration")?;

    if cli.list_personas {
        print!("{}", ConsoleFormatter::format_persona_list(&registry));
        return Ok(());
    }

    let issues = config.validate();
    for issue in &issues {
        eprintln!("{}", ConsoleFormatter::format_issue(issue));
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Configuration has errors, see above");
    }

    let topic = match cli.topic.as_deref() {
        Some(topic) => topic,
        None => bail!("A topic is required. Use --list-personas to see who can debate."),
    };

    // === Dependency Injection ===
    let settings = Arc::new(LiveSettings::new(config.to_settings()));
    let gateway = Arc::new(RoutingGateway::http(config.endpoints())?);
    let synthesizer: Arc<dyn SpeechSynthesizer> = match config.narration.engine {
        FileSpeechEngine::Command => {
            Arc::new(CommandSpeechSynthesizer::new(&config.narration.command))
        }
        FileSpeechEngine::None => Arc::new(NullSpeechSynthesizer),
    };
    let registry = Arc::new(registry);

    let (tx, rx) = debate_event_channel();
    let mut orchestrator = DebateOrchestrator::new(
        Arc::clone(&registry),
        gateway,
        Arc::new(Narrator::new(synthesizer)),
        settings.clone(),
        tx,
    );

    if let Some(path) = &cli.transcript {
        let logger = JsonlConversationLogger::open(path)
            .with_context(|| format!("Could not open transcript {}", path.display()))?;
        info!(path = %logger.path().display(), "Writing transcript");
        orchestrator = orchestrator.with_conversation_logger(Arc::new(logger));
    }

    if !cli.quiet {
        let snapshot = config.to_settings();
        let persona_a = registry.lookup(snapshot.persona_for(Seat::A))?;
        let persona_b = registry.lookup(snapshot.persona_for(Seat::B))?;
        println!(
            "{}",
            ConsoleFormatter::header(topic, persona_a, persona_b, snapshot.max_turns)
        );
        println!("Type 'help' for commands.\n");
    }

    let controller = Arc::new(DebateController::new(Arc::new(orchestrator)));
    let repl = DebateRepl::new(controller, settings).with_quiet(cli.quiet);
    let end = repl.run(topic, rx).await?;

    info!(status = %end.status, "Debate session ended");
    if let Some(error) = end.error {
        bail!("Debate paused after a failed turn: {}", error);
    }
    Ok(())
}

/// Install the tracing subscriber: stderr always, plus a daily file with `--log-dir`
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "persona-debate.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter()),
        )
        .with(file_layer)
        .init();

    guard
}

/// CLI flags take precedence over every config file
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(id) = &cli.persona_a {
        config.debate.persona_a = id.clone();
    }
    if let Some(id) = &cli.persona_b {
        config.debate.persona_b = id.clone();
    }
    if let Some(provider) = &cli.provider {
        config.providers.default = provider.clone();
    }
    if let Some(model) = &cli.model {
        match config.providers.parse_default() {
            Ok(kind) => config.providers.endpoint_mut(kind).model = Some(model.clone()),
            Err(_) => warn!(model = %model, "Ignoring --model for an unknown provider"),
        }
    }
    if let Some(max_turns) = cli.max_turns {
        config.debate.max_turns = max_turns;
    }
    if let Some(delay) = cli.delay {
        config.debate.turn_delay_secs = delay;
    }
    if let Some(language) = &cli.language {
        config.debate.language = Some(language.clone());
    }
    if cli.mute {
        config.narration.muted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from([
            "persona-debate",
            "--provider",
            "groq",
            "--model",
            "llama-3.1-8b-instant",
            "-a",
            "poet",
            "--delay",
            "1",
            "--mute",
            "Tabs or spaces?",
        ]);
        let mut config = FileConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.providers.default, "groq");
        assert_eq!(
            config.providers.groq.model.as_deref(),
            Some("llama-3.1-8b-instant")
        );
        assert!(config.providers.openai.model.is_none());
        assert_eq!(config.debate.persona_a, "poet");
        assert_eq!(config.debate.persona_b, "skeptic");
        assert_eq!(config.debate.turn_delay_secs, 1);
        assert!(config.narration.muted);
    }
}
