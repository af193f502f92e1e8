//! Extra personas from TOML (`[[personas]]` array)

use debate_domain::Persona;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePersonaConfig {
    pub id: String,
    /// Display name shown and used in "<name> said:" lines
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// System instruction sent when this persona speaks
    pub instruction: String,
}

impl FilePersonaConfig {
    pub fn to_persona(&self) -> Persona {
        Persona::new(
            self.id.trim(),
            self.name.as_str(),
            self.description.as_str(),
            self.instruction.as_str(),
        )
    }
}
