//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for persona-debate
#[derive(Parser, Debug)]
#[command(name = "persona-debate")]
#[command(author, version, about = "Two AI personas debate a topic, turn by turn")]
#[command(long_about = r#"
Persona Debate lets two AI personas argue about a topic of your choice.

Seat A opens, seat B answers, and they alternate until the turn limit is
reached. Each turn is narrated aloud unless muted.

While a debate runs, type a command and press Enter:
  stop            pause the debate
  resume          continue a paused debate
  mute / unmute   toggle narration
  delay <secs>    change the pause between turns
  quit            leave

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./debate.toml          Project-level config
3. ~/.config/persona-debate/config.toml   Global config

Example:
  persona-debate "Is a hot dog a sandwich?"
  persona-debate -a comedian -b philosopher --max-turns 6 "Should we colonize Mars?"
  persona-debate --provider gemini --language fr-FR --mute "Le fromage"
"#)]
pub struct Cli {
    /// The topic to debate (not required with --list-personas or --show-config)
    pub topic: Option<String>,

    /// Persona for seat A (speaks first)
    #[arg(short = 'a', long, value_name = "ID")]
    pub persona_a: Option<String>,

    /// Persona for seat B
    #[arg(short = 'b', long, value_name = "ID")]
    pub persona_b: Option<String>,

    /// Provider: openai, groq or gemini
    #[arg(long, value_name = "NAME")]
    pub provider: Option<String>,

    /// Model name for the selected provider
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Number of turns before the debate completes
    #[arg(long, value_name = "N")]
    pub max_turns: Option<usize>,

    /// Seconds to wait between turns
    #[arg(long, value_name = "SECS")]
    pub delay: Option<u64>,

    /// Language tag for replies and narration (e.g. en-US, fr-FR)
    #[arg(short, long, value_name = "TAG")]
    pub language: Option<String>,

    /// Disable narration
    #[arg(long)]
    pub mute: bool,

    /// List available personas and exit
    #[arg(long)]
    pub list_personas: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory for daily-rolling diagnostic log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Append the debate transcript as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}
