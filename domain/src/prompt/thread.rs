//! History thread builder
//!
//! Turns the accumulated debate into the message list for the next
//! generation call. The layout is fixed:
//!
//! | # | Role                    | Content                                   |
//! |---|-------------------------|-------------------------------------------|
//! | 1 | system                  | persona instruction (+ reply language)    |
//! | 2 | user                    | topic framing                             |
//! | … | assistant / user        | one entry per prior turn                  |
//! | n | user                    | response cue                              |
//!
//! Prior turns spoken from the acting seat become `assistant` entries; turns
//! from the other seat become `user` entries prefixed with the speaker name.

use super::template::PromptTemplate;
use crate::core::language::Language;
use crate::core::topic::Topic;
use crate::debate::entities::ConversationTurn;
use crate::debate::seat::Seat;
use crate::persona::registry::Persona;
use crate::session::entities::{GenerationRequest, Message};

/// Builds the generation context for one turn
#[derive(Debug, Clone, Copy)]
pub struct HistoryThreadBuilder<'a> {
    topic: &'a Topic,
    language: Option<&'a Language>,
}

impl<'a> HistoryThreadBuilder<'a> {
    pub fn new(topic: &'a Topic) -> Self {
        Self {
            topic,
            language: None,
        }
    }

    pub fn with_language(mut self, language: Option<&'a Language>) -> Self {
        self.language = language;
        self
    }

    /// Build the request for `persona` speaking from `seat`
    pub fn build(
        &self,
        persona: &Persona,
        seat: Seat,
        turns: &[ConversationTurn],
    ) -> GenerationRequest {
        let mut messages = Vec::with_capacity(turns.len() + 3);

        messages.push(Message::system(PromptTemplate::system_instruction(
            persona.instruction(),
            self.language,
        )));
        messages.push(Message::user(PromptTemplate::topic_framing(
            self.topic.content(),
        )));

        for turn in turns {
            if turn.seat() == seat {
                messages.push(Message::assistant(turn.text()));
            } else {
                messages.push(Message::user(PromptTemplate::opponent_said(
                    turn.speaker_name(),
                    turn.text(),
                )));
            }
        }

        messages.push(Message::user(PromptTemplate::response_cue()));
        GenerationRequest::new(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::entities::ConversationState;
    use crate::persona::registry::PersonaRegistry;
    use crate::session::entities::Role;

    fn three_turn_state(registry: &PersonaRegistry) -> ConversationState {
        let optimist = registry.lookup("optimist").unwrap();
        let skeptic = registry.lookup("skeptic").unwrap();
        let mut state = ConversationState::new(Topic::new("Remote work").unwrap(), 10);
        state.record(Seat::A, optimist, "It frees everyone!").unwrap();
        state.record(Seat::B, skeptic, "It isolates people.").unwrap();
        state.record(Seat::A, optimist, "Video calls fix that!").unwrap();
        state
    }

    #[test]
    fn test_first_turn_has_fixed_frame() {
        let registry = PersonaRegistry::builtin();
        let optimist = registry.lookup("optimist").unwrap();
        let topic = Topic::new("Remote work").unwrap();

        let request = HistoryThreadBuilder::new(&topic).build(optimist, Seat::A, &[]);
        let messages = request.messages();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], Message::system(optimist.instruction()));
        assert_eq!(
            messages[1],
            Message::user(r#"The topic is: "Remote work". Conversation so far:"#)
        );
        assert_eq!(messages[2], Message::user("Your response:"));
    }

    #[test]
    fn test_retagging_for_fourth_turn() {
        let registry = PersonaRegistry::builtin();
        let skeptic = registry.lookup("skeptic").unwrap();
        let state = three_turn_state(&registry);

        let request =
            HistoryThreadBuilder::new(state.topic()).build(skeptic, Seat::B, state.turns());
        let messages = request.messages();

        assert_eq!(messages.len(), 6);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[1].content.starts_with("The topic is:"));
        assert_eq!(messages[2], Message::user("Optimist said: It frees everyone!"));
        assert_eq!(messages[3], Message::assistant("It isolates people."));
        assert_eq!(
            messages[4],
            Message::user("Optimist said: Video calls fix that!")
        );
        assert_eq!(messages[5], Message::user("Your response:"));

        let history = &messages[2..5];
        assert_eq!(
            history.iter().filter(|m| m.role == Role::Assistant).count(),
            1
        );
        assert_eq!(
            history
                .iter()
                .filter(|m| m.role == Role::User && m.content.starts_with("Optimist said: "))
                .count(),
            2
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let registry = PersonaRegistry::builtin();
        let skeptic = registry.lookup("skeptic").unwrap();
        let state = three_turn_state(&registry);
        let builder = HistoryThreadBuilder::new(state.topic());

        let first = builder.build(skeptic, Seat::B, state.turns());
        let second = builder.build(skeptic, Seat::B, state.turns());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_same_persona_in_both_seats_keys_on_seat() {
        let registry = PersonaRegistry::builtin();
        let poet = registry.lookup("poet").unwrap();
        let mut state = ConversationState::new(Topic::new("Rain").unwrap(), 4);
        state.record(Seat::A, poet, "Drops sing.").unwrap();
        state.record(Seat::B, poet, "Clouds weep.").unwrap();

        let request =
            HistoryThreadBuilder::new(state.topic()).build(poet, Seat::A, state.turns());
        let messages = request.messages();

        assert_eq!(messages[2], Message::assistant("Drops sing."));
        assert_eq!(messages[3], Message::user("Poet said: Clouds weep."));
    }

    #[test]
    fn test_language_directive_is_appended() {
        let registry = PersonaRegistry::builtin();
        let stoic = registry.lookup("stoic").unwrap();
        let topic = Topic::new("Fate").unwrap();
        let lang = Language::new("de-DE");

        let request = HistoryThreadBuilder::new(&topic)
            .with_language(Some(&lang))
            .build(stoic, Seat::A, &[]);

        assert!(request.messages()[0].content.ends_with(" Reply in German."));
    }
}
