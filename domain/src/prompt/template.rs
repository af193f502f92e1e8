//! Prompt templates for debate turns

use crate::core::language::Language;

/// Templates for the fixed parts of a debate thread
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the acting persona, with an optional reply-language directive
    pub fn system_instruction(instruction: &str, language: Option<&Language>) -> String {
        match language {
            Some(lang) => format!("{} {}", instruction, lang.reply_directive()),
            None => instruction.to_string(),
        }
    }

    /// User message framing the topic
    pub fn topic_framing(topic: &str) -> String {
        format!(r#"The topic is: "{}". Conversation so far:"#, topic)
    }

    /// User message relaying the other seat's turn
    pub fn opponent_said(speaker_name: &str, text: &str) -> String {
        format!("{} said: {}", speaker_name, text)
    }

    /// Trailing cue asking for the next turn
    pub fn response_cue() -> &'static str {
        "Your response:"
    }
}
