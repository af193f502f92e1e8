//! Topic value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The subject both seats debate (Value Object)
///
/// Fixed for the lifetime of a debate. Leading and trailing whitespace is
/// stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a topic, rejecting empty or whitespace-only input
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTopic(
                "topic cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the topic text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner text
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Topic {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Topic::new(s)
    }
}

impl TryFrom<String> for Topic {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Topic::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation_trims() {
        let topic = Topic::new("  Is AI good for art?  ").unwrap();
        assert_eq!(topic.content(), "Is AI good for art?");
    }

    #[test]
    fn test_empty_topic_rejected() {
        assert!(matches!(Topic::new(""), Err(DomainError::InvalidTopic(_))));
        assert!(matches!(
            Topic::new("   \n"),
            Err(DomainError::InvalidTopic(_))
        ));
    }

    #[test]
    fn test_topic_try_from() {
        let topic: Topic = "Pineapple on pizza".try_into().unwrap();
        assert_eq!(topic.to_string(), "Pineapple on pizza");
    }
}
