//! Persona registry - a closed catalog of debate personas

use super::catalog::BUILTIN_PERSONAS;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable persona identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaId(String);

impl PersonaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonaId {
    fn from(s: &str) -> Self {
        PersonaId::new(s)
    }
}

impl From<String> for PersonaId {
    fn from(s: String) -> Self {
        PersonaId(s)
    }
}

/// A reusable behavioural profile assignable to a seat (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    id: PersonaId,
    display_name: String,
    description: String,
    instruction: String,
}

impl Persona {
    pub fn new(
        id: impl Into<PersonaId>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            instruction: instruction.into(),
        }
    }

    pub fn id(&self) -> &PersonaId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The system instruction sent when this persona speaks
    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

/// Immutable map from persona id to persona, preserving insertion order
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
    index: HashMap<PersonaId, usize>,
}

impl PersonaRegistry {
    /// Build a registry, rejecting duplicate ids
    pub fn new(personas: Vec<Persona>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(personas.len());
        for (i, persona) in personas.iter().enumerate() {
            if index.insert(persona.id.clone(), i).is_some() {
                return Err(DomainError::DuplicatePersona(persona.id.to_string()));
            }
        }
        Ok(Self { personas, index })
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        let personas = BUILTIN_PERSONAS
            .iter()
            .map(|(id, name, description, instruction)| {
                Persona::new(*id, *name, *description, *instruction)
            })
            .collect();
        Self::new(personas).expect("built-in persona ids are unique")
    }

    /// Consume the registry and append further personas after the existing ones
    pub fn with_personas(self, extra: Vec<Persona>) -> Result<Self, DomainError> {
        let mut personas = self.personas;
        personas.extend(extra);
        Self::new(personas)
    }

    /// Look up a persona by id
    pub fn lookup(&self, id: &str) -> Result<&Persona, DomainError> {
        self.index
            .get(&PersonaId::new(id))
            .map(|&i| &self.personas[i])
            .ok_or_else(|| DomainError::PersonaNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(&PersonaId::new(id))
    }

    /// Persona ids in insertion order
    pub fn list_ids(&self) -> Vec<&PersonaId> {
        self.personas.iter().map(|p| &p.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = PersonaRegistry::builtin();
        let optimist = registry.lookup("optimist").unwrap();
        assert_eq!(optimist.display_name(), "Optimist");
        assert!(optimist.instruction().contains("eternal optimist"));
    }

    #[test]
    fn test_unknown_persona_is_typed_error() {
        let registry = PersonaRegistry::builtin();
        assert_eq!(
            registry.lookup("pirate"),
            Err(DomainError::PersonaNotFound("pirate".to_string()))
        );
    }

    #[test]
    fn test_list_ids_preserves_insertion_order() {
        let registry = PersonaRegistry::builtin();
        let ids: Vec<&str> = registry.list_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(&ids[..3], &["optimist", "skeptic", "philosopher"]);
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = PersonaRegistry::new(vec![
            Persona::new("a", "A", "", "first"),
            Persona::new("a", "A again", "", "second"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicatePersona("a".to_string())
        );
    }

    #[test]
    fn test_with_personas_appends_after_builtin() {
        let registry = PersonaRegistry::builtin()
            .with_personas(vec![Persona::new(
                "pirate",
                "Pirate",
                "Arr.",
                "You are a pirate. Keep your responses short (under 50 words).",
            )])
            .unwrap();

        assert_eq!(
            registry.list_ids().last().map(|id| id.as_str()),
            Some("pirate")
        );
        assert!(registry.contains("pirate"));
        assert!(registry.contains("optimist"));
    }

    #[test]
    fn test_with_personas_rejects_shadowing_builtin() {
        let result = PersonaRegistry::builtin().with_personas(vec![Persona::new(
            "skeptic", "Other", "", "",
        )]);
        assert!(matches!(result, Err(DomainError::DuplicatePersona(_))));
    }
}
