//! Voice descriptors and selection

use crate::core::language::Language;
use crate::debate::seat::Seat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared gender of a voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Female,
    Male,
    #[default]
    Unknown,
}

/// A voice offered by the speech engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Engine-specific identifier passed back when speaking
    pub id: String,
    pub name: String,
    /// Language tag as reported by the engine (e.g. `en-us`)
    pub language: String,
    #[serde(default)]
    pub gender: VoiceGender,
}

impl VoiceInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language: language.into(),
            gender: VoiceGender::Unknown,
        }
    }

    pub fn with_gender(mut self, gender: VoiceGender) -> Self {
        self.gender = gender;
        self
    }

    /// Declared gender, falling back to name heuristics
    pub fn apparent_gender(&self) -> VoiceGender {
        if self.gender != VoiceGender::Unknown {
            return self.gender;
        }
        gender_from_name(&self.name)
    }
}

const FEMALE_NAMES: &[&str] = &[
    "google us english",
    "zira",
    "samantha",
    "victoria",
    "karen",
    "hazel",
    "susan",
];

const MALE_NAMES: &[&str] = &["microsoft david", "daniel", "alex", "fred", "mark", "george"];

fn gender_from_name(name: &str) -> VoiceGender {
    let lower = name.to_lowercase();
    if lower.contains("female") || FEMALE_NAMES.iter().any(|n| lower.contains(n)) {
        VoiceGender::Female
    } else if lower.contains("male") || MALE_NAMES.iter().any(|n| lower.contains(n)) {
        VoiceGender::Male
    } else {
        VoiceGender::Unknown
    }
}

/// Preferred voice gender for a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    Female,
    Male,
    Any,
}

impl GenderPreference {
    /// Seat A leans female and seat B male, so the two speakers sound distinct
    pub fn default_for(seat: Seat) -> Self {
        match seat {
            Seat::A => GenderPreference::Female,
            Seat::B => GenderPreference::Male,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderPreference::Female => "female",
            GenderPreference::Male => "male",
            GenderPreference::Any => "any",
        }
    }

    fn accepts(&self, gender: VoiceGender) -> bool {
        match self {
            GenderPreference::Female => gender == VoiceGender::Female,
            GenderPreference::Male => gender == VoiceGender::Male,
            GenderPreference::Any => true,
        }
    }
}

impl fmt::Display for GenderPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GenderPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Ok(GenderPreference::Female),
            "male" | "m" => Ok(GenderPreference::Male),
            "any" => Ok(GenderPreference::Any),
            other => Err(format!(
                "Unknown gender preference '{}'. Valid: female, male, any",
                other
            )),
        }
    }
}

/// Per-seat prosody: (pitch, rate), both relative to 1.0
pub fn prosody_for(seat: Seat) -> (f32, f32) {
    match seat {
        Seat::A => (1.1, 1.0),
        Seat::B => (0.9, 0.95),
    }
}

/// Pick a voice for the given language and gender preference.
///
/// Returns `None` when no voice matches the language, meaning the engine's
/// default voice should be used. Without a language every voice is a candidate.
pub fn select_voice<'a>(
    voices: &'a [VoiceInfo],
    language: Option<&Language>,
    preference: GenderPreference,
) -> Option<&'a VoiceInfo> {
    let candidates: Vec<&VoiceInfo> = match language {
        Some(lang) => language_candidates(voices, lang),
        None => voices.iter().collect(),
    };

    candidates
        .iter()
        .find(|v| preference.accepts(v.apparent_gender()))
        .or_else(|| candidates.first())
        .copied()
}

fn language_candidates<'a>(voices: &'a [VoiceInfo], lang: &Language) -> Vec<&'a VoiceInfo> {
    let exact: Vec<_> = voices
        .iter()
        .filter(|v| lang.matches_exactly(&v.language))
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let family: Vec<_> = voices
        .iter()
        .filter(|v| lang.same_family(&v.language))
        .collect();
    if !family.is_empty() {
        return family;
    }

    let display = lang.display_name().to_lowercase();
    let primary = lang.primary();
    voices
        .iter()
        .filter(|v| {
            let name = v.name.to_lowercase();
            name.contains(&display) || name.split(|c: char| !c.is_alphanumeric()).any(|w| w == primary)
        })
        .collect()
}
