//! Event/command loop for a running debate

use crate::control::ControlCommand;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::ThinkingSpinner;
use colored::Colorize;
use debate_application::{
    DebateController, DebateError, DebateEvent, DebateEventReceiver, SettingsControl,
};
use debate_domain::DebateStatus;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEnd {
    pub status: DebateStatus,
    /// Notice of the failure that paused the debate, if it was the last thing to happen
    pub error: Option<String>,
}

/// Interactive debate loop
pub struct DebateRepl {
    controller: Arc<DebateController>,
    settings: Arc<dyn SettingsControl>,
    quiet: bool,
}

impl DebateRepl {
    pub fn new(controller: Arc<DebateController>, settings: Arc<dyn SettingsControl>) -> Self {
        Self {
            controller,
            settings,
            quiet: false,
        }
    }

    /// Set whether to hide the thinking spinner
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Start a debate on `topic` and run until it completes or the user quits.
    ///
    /// When stdin closes the loop keeps rendering until the debate settles:
    /// it completes, fails or is stopped.
    pub async fn run(
        &self,
        topic: &str,
        events: DebateEventReceiver,
    ) -> Result<SessionEnd, DebateError> {
        self.run_with_input(topic, events, BufReader::new(tokio::io::stdin()))
            .await
    }

    pub async fn run_with_input<R>(
        &self,
        topic: &str,
        mut events: DebateEventReceiver,
        input: R,
    ) -> Result<SessionEnd, DebateError>
    where
        R: AsyncBufRead + Unpin,
    {
        self.controller.start(topic)?;

        let mut spinner = ThinkingSpinner::new(self.quiet);
        let mut lines = input.lines();
        let mut input_open = true;
        // Whether the last lifecycle event left the debate at rest
        let mut settled = false;
        let mut error = None;

        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    self.render(&mut spinner, &event);
                    match &event {
                        DebateEvent::DebateStarted { .. } | DebateEvent::DebateResumed { .. } => {
                            settled = false;
                            error = None;
                        }
                        DebateEvent::DebateStopped => settled = true,
                        DebateEvent::DebateError { message, .. } => {
                            settled = true;
                            error = Some(message.clone());
                        }
                        DebateEvent::DebateCompleted { .. } => break,
                        _ => {}
                    }
                }
                line = lines.next_line(), if input_open => match line {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        if self.handle_line(&line, &spinner) == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) | Err(_) => {
                        debug!("Control input closed");
                        input_open = false;
                    }
                },
            }

            if !input_open && settled {
                break;
            }
        }

        spinner.clear();
        Ok(SessionEnd {
            status: self.controller.status(),
            error,
        })
    }

    fn render(&self, spinner: &mut ThinkingSpinner, event: &DebateEvent) {
        match event {
            DebateEvent::PlaceholderShown { speaker_name, .. } => spinner.show(speaker_name),
            DebateEvent::PlaceholderRemoved { .. } => spinner.clear(),
            other => {
                if let Some(line) = ConsoleFormatter::format_event(other) {
                    spinner.println(&line);
                }
            }
        }
    }

    fn handle_line(&self, line: &str, spinner: &ThinkingSpinner) -> Flow {
        let command = match line.parse::<ControlCommand>() {
            Ok(command) => command,
            Err(e) => {
                spinner.println(&format!("{} {}", "?".yellow().bold(), e));
                return Flow::Continue;
            }
        };
        debug!(command = %command, "Control command");

        match command {
            ControlCommand::Stop => {
                if !self.controller.stop() {
                    spinner.println("Nothing is running.");
                }
            }
            ControlCommand::Resume => {
                if let Err(e) = self.controller.resume() {
                    spinner.println(&format!("{} {}", "Cannot resume:".red(), e));
                }
            }
            ControlCommand::Mute => {
                self.settings.set_muted(true);
                self.controller.silence();
                spinner.println("Narration muted.");
            }
            ControlCommand::Unmute => {
                self.settings.set_muted(false);
                spinner.println("Narration on.");
            }
            ControlCommand::Delay(delay) => {
                self.settings.set_turn_delay(delay);
                spinner.println(&format!("Delay between turns: {:.1}s", delay.as_secs_f64()));
            }
            ControlCommand::Status => {
                let transcript = self.controller.transcript();
                spinner.println(&format!(
                    "{} {} ({} turns)",
                    "Status:".cyan().bold(),
                    self.controller.status(),
                    transcript.len()
                ));
            }
            ControlCommand::Help => spinner.println(ControlCommand::HELP),
            ControlCommand::Quit => {
                self.controller.stop();
                return Flow::Quit;
            }
        }
        Flow::Continue
    }
}
