//! Console output formatter for debate events

use colored::{ColoredString, Colorize};
use debate_application::{DebateErrorKind, DebateEvent};
use debate_domain::{ConfigIssue, ConversationTurn, Persona, PersonaRegistry, Seat, Severity};

/// Formats debate events for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed before the first turn
    pub fn header(topic: &str, persona_a: &Persona, persona_b: &Persona, max_turns: usize) -> String {
        let mut output = String::new();
        output.push_str(&Self::rule());
        output.push_str(&format!("\n{:^60}\n", "Persona Debate".bold()));
        output.push_str(&Self::rule());
        output.push_str(&format!("\n\n{} {}\n", "Topic:".cyan().bold(), topic));
        output.push_str(&format!(
            "{} {} vs {}\n",
            "Seats:".cyan().bold(),
            Self::speaker(Seat::A, persona_a.display_name()),
            Self::speaker(Seat::B, persona_b.display_name())
        ));
        output.push_str(&format!("{} {}\n", "Turns:".cyan().bold(), max_turns));
        output
    }

    /// One line (or block) per event; `None` for events shown elsewhere
    pub fn format_event(event: &DebateEvent) -> Option<String> {
        match event {
            DebateEvent::DebateStarted { topic } => Some(format!(
                "{} {}\n",
                "Debate started:".green().bold(),
                topic
            )),
            DebateEvent::PlaceholderShown { .. } | DebateEvent::PlaceholderRemoved { .. } => None,
            DebateEvent::TurnAppended {
                index,
                seat,
                speaker_name,
                text,
            } => Some(Self::format_turn(*index, *seat, speaker_name, text)),
            DebateEvent::DebateCompleted { turns } => Some(format!(
                "\n{} ({} turns)\n",
                "Debate completed".green().bold(),
                turns
            )),
            DebateEvent::DebateStopped => Some(format!(
                "{} (type 'resume' to continue)",
                "Debate stopped".yellow().bold()
            )),
            DebateEvent::DebateResumed { turns } => Some(format!(
                "{} after {} turns",
                "Debate resumed".green().bold(),
                turns
            )),
            DebateEvent::DebateError { kind, message } => Some(Self::format_error(*kind, message)),
        }
    }

    pub fn format_turn(index: usize, seat: Seat, speaker_name: &str, text: &str) -> String {
        format!(
            "\n{} {}\n{}\n",
            format!("[{}]", index + 1).dimmed(),
            Self::speaker(seat, speaker_name).bold(),
            Self::indent(text.trim(), "  ")
        )
    }

    fn format_error(kind: DebateErrorKind, message: &str) -> String {
        let hint = match kind {
            DebateErrorKind::Configuration => "fix the configuration, then type 'resume'",
            _ => "type 'resume' to retry",
        };
        format!("{}\n  {}", message.red().bold(), hint.dimmed())
    }

    /// Full transcript, e.g. for `status`
    pub fn format_transcript(turns: &[ConversationTurn]) -> String {
        turns
            .iter()
            .map(|t| Self::format_turn(t.index(), t.seat(), t.speaker_name(), t.text()))
            .collect()
    }

    /// Persona catalog for `--list-personas`
    pub fn format_persona_list(registry: &PersonaRegistry) -> String {
        let width = registry
            .iter()
            .map(|p| p.id().as_str().len())
            .max()
            .unwrap_or(0);

        let mut output = format!("{}\n", "Available personas:".cyan().bold());
        for persona in registry.iter() {
            output.push_str(&format!(
                "  {:width$}  {} {}\n",
                persona.id().as_str(),
                persona.display_name().bold(),
                format!("- {}", persona.description()).dimmed(),
                width = width
            ));
        }
        output
    }

    pub fn format_issue(issue: &ConfigIssue) -> String {
        match issue.severity {
            Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
            Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
        }
    }

    fn speaker(seat: Seat, name: &str) -> ColoredString {
        let label = format!("{} ({})", name, seat);
        match seat {
            Seat::A => label.yellow(),
            Seat::B => label.magenta(),
        }
    }

    fn rule() -> String {
        "=".repeat(60).cyan().to_string()
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
