//! Structured configuration issues.
//!
//! Loaders report problems as [`ConfigIssue`]s instead of failing outright,
//! so the caller can print warnings and refuse to start only on errors.

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: a debate cannot start with this configuration.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `providers.default` names a provider we do not support.
    UnknownProvider,
    /// `debate.max_turns` is zero.
    ZeroMaxTurns,
    /// A seat refers to a persona id missing from the registry.
    UnknownPersona,
    /// Two configured personas share an id, or shadow a built-in one.
    DuplicatePersona,
    /// A narration gender preference is not female/male/any.
    UnknownGender,
    /// No API key is available for the selected provider.
    MissingCredential,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let err = ConfigIssue::error(ConfigIssueCode::ZeroMaxTurns, "max_turns must be > 0");
        let warn = ConfigIssue::warning(ConfigIssueCode::MissingCredential, "no key");
        assert!(err.is_error());
        assert!(!warn.is_error());
        assert_eq!(err.to_string(), "error: max_turns must be > 0");
        assert_eq!(warn.to_string(), "warning: no key");
    }
}
