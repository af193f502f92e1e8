//! Control command parsing

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A line typed by the user while a debate runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Stop,
    Resume,
    Mute,
    Unmute,
    Delay(Duration),
    Status,
    Help,
    Quit,
}

impl ControlCommand {
    pub const HELP: &'static str = "\
Commands:
  stop            pause the debate
  resume          continue a paused debate
  mute / unmute   toggle narration
  delay <secs>    change the pause between turns
  status          show the debate state
  help            show this help
  quit            leave";
}

impl FromStr for ControlCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".to_string());
        };
        let head = head.trim_start_matches('/').to_lowercase();
        let arg = words.next();

        let command = match head.as_str() {
            "stop" | "pause" => Self::Stop,
            "resume" | "continue" => Self::Resume,
            "mute" => Self::Mute,
            "unmute" => Self::Unmute,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "delay" => {
                let secs = arg.ok_or_else(|| "usage: delay <secs>".to_string())?;
                let secs: f64 = secs
                    .parse()
                    .map_err(|_| format!("invalid delay '{}'", secs))?;
                let delay = Duration::try_from_secs_f64(secs)
                    .map_err(|_| format!("invalid delay '{}'", secs))?;
                return Ok(Self::Delay(delay));
            }
            other => return Err(format!("unknown command '{}' (type 'help')", other)),
        };

        match arg {
            None => Ok(command),
            Some(_) => Err(format!("'{}' takes no arguments", head)),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Resume => write!(f, "resume"),
            Self::Mute => write!(f, "mute"),
            Self::Unmute => write!(f, "unmute"),
            Self::Delay(d) => write!(f, "delay {}", d.as_secs_f64()),
            Self::Status => write!(f, "status"),
            Self::Help => write!(f, "help"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("stop".parse(), Ok(ControlCommand::Stop));
        assert_eq!("  Resume ".parse(), Ok(ControlCommand::Resume));
        assert_eq!("/mute".parse(), Ok(ControlCommand::Mute));
        assert_eq!("unmute".parse(), Ok(ControlCommand::Unmute));
        assert_eq!("q".parse(), Ok(ControlCommand::Quit));
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(
            "delay 3".parse(),
            Ok(ControlCommand::Delay(Duration::from_secs(3)))
        );
        assert_eq!(
            "delay 0.5".parse(),
            Ok(ControlCommand::Delay(Duration::from_millis(500)))
        );
        assert!("delay".parse::<ControlCommand>().is_err());
        assert!("delay -1".parse::<ControlCommand>().is_err());
        assert!("delay soon".parse::<ControlCommand>().is_err());
    }

    #[test]
    fn test_rejects_unknown_and_extra_args() {
        assert!("".parse::<ControlCommand>().is_err());
        assert!("dance".parse::<ControlCommand>().is_err());
        assert!("stop now".parse::<ControlCommand>().is_err());
    }
}
