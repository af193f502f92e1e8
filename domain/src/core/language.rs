//! Language value object used for reply directives and voice matching

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// English display names for the primary subtags we recognise.
const KNOWN_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// A language tag such as `fr-FR` or `en` (Value Object)
///
/// Tags are normalised to use `-` as the separator. Comparison helpers are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    tag: String,
}

impl Language {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().trim().replace('_', "-");
        Self { tag }
    }

    /// Parse an optional user-supplied tag; blank means "no language"
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let language = Self::new(tag);
        (!language.tag.is_empty()).then_some(language)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The primary subtag, lowercased (`fr` for `fr-FR`)
    pub fn primary(&self) -> String {
        self.tag
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// English name of the language, falling back to the raw tag
    pub fn display_name(&self) -> &str {
        let primary = self.primary();
        KNOWN_LANGUAGES
            .iter()
            .find(|(code, _)| *code == primary)
            .map(|(_, name)| *name)
            .unwrap_or(self.tag.as_str())
    }

    /// Exact tag equality, ignoring case and separator style
    pub fn matches_exactly(&self, other: &str) -> bool {
        self.tag
            .eq_ignore_ascii_case(&other.trim().replace('_', "-"))
    }

    /// Same language family (primary subtag), ignoring region
    pub fn same_family(&self, other: &str) -> bool {
        Language::new(other).primary() == self.primary()
    }

    /// The instruction appended to a persona's system prompt
    pub fn reply_directive(&self) -> String {
        format!("Reply in {}.", self.display_name())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag)
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::new(s))
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.tag)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Language::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_subtag() {
        assert_eq!(Language::new("fr-FR").primary(), "fr");
        assert_eq!(Language::new("EN_us").primary(), "en");
        assert_eq!(Language::new("de").primary(), "de");
    }

    #[test]
    fn test_blank_tag_is_no_language() {
        assert_eq!(Language::parse_tag(""), None);
        assert_eq!(Language::parse_tag("   "), None);
        assert_eq!(Language::parse_tag(" es_ES "), Some(Language::new("es-ES")));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Language::new("fr-CA").display_name(), "French");
        assert_eq!(Language::new("xx-YY").display_name(), "xx-YY");
    }

    #[test]
    fn test_matching() {
        let lang = Language::new("pt-BR");
        assert!(lang.matches_exactly("pt_br"));
        assert!(!lang.matches_exactly("pt-PT"));
        assert!(lang.same_family("pt-PT"));
        assert!(!lang.same_family("es-ES"));
    }

    #[test]
    fn test_reply_directive() {
        assert_eq!(Language::new("fr").reply_directive(), "Reply in French.");
    }
}
