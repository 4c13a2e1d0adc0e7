//! Case-sensitive tag type for categorizing notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A case-sensitive tag for categorizing notes.
///
/// Tags are flat (non-hierarchical) labels. Equality is an exact string
/// match: `Draft` and `draft` are two different tags, and the relationship
/// resolver treats them as unrelated. Case is preserved as written.
///
/// # Validation Rules
/// - Non-empty after trimming surrounding whitespace
/// - Must contain only alphanumeric characters, hyphens, and underscores
///
/// # Examples
///
/// ```
/// use quill::domain::Tag;
///
/// let tag = Tag::new("knowledge-management").unwrap();
/// assert_eq!(tag.as_str(), "knowledge-management");
///
/// // Exact-match equality
/// let other = Tag::new("Knowledge-Management").unwrap();
/// assert_ne!(tag, other);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// Surrounding whitespace is trimmed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if:
    /// - The tag is empty or whitespace-only
    /// - The tag contains invalid characters (only alphanumeric, hyphens, underscores allowed)
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags must contain only alphanumeric characters, hyphens, and underscores",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn new_with_valid_tag() {
        let tag = Tag::new("productivity").unwrap();
        assert_eq!(tag.to_string(), "productivity");
    }

    #[test]
    fn new_rejects_empty_string() {
        assert!(Tag::new("").is_err());
    }

    #[test]
    fn new_rejects_whitespace_only() {
        assert!(Tag::new("   ").is_err());
    }

    #[test]
    fn preserves_case() {
        let tag = Tag::new("Draft").unwrap();
        assert_eq!(tag.to_string(), "Draft");
    }

    #[test]
    fn trims_whitespace() {
        let tag = Tag::new("  daily  ").unwrap();
        assert_eq!(tag.to_string(), "daily");
    }

    #[test]
    fn allows_alphanumeric() {
        assert!(Tag::new("tag123").is_ok());
    }

    #[test]
    fn allows_hyphens() {
        assert!(Tag::new("knowledge-management").is_ok());
    }

    #[test]
    fn allows_underscores() {
        assert!(Tag::new("work_in_progress").is_ok());
    }

    #[test]
    fn rejects_spaces() {
        assert!(Tag::new("needs review").is_err());
    }

    #[test]
    fn rejects_special_chars() {
        assert!(Tag::new("tag@home").is_err());
        assert!(Tag::new("tag#1").is_err());
    }

    #[test]
    fn rejects_slashes() {
        assert!(Tag::new("path/tag").is_err());
    }

    #[test]
    fn equality_is_case_sensitive() {
        let t1 = Tag::new("Draft").unwrap();
        let t2 = Tag::new("draft").unwrap();
        assert_ne!(t1, t2);

        let t3 = Tag::new("Draft").unwrap();
        assert_eq!(t1, t3);
    }

    #[test]
    fn hashset_keeps_case_variants_distinct() {
        let mut set = HashSet::new();
        set.insert(Tag::new("draft").unwrap());
        set.insert(Tag::new("Draft").unwrap());
        set.insert(Tag::new("DRAFT").unwrap());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn display_shows_value_as_written() {
        let tag = Tag::new("NeedsReview").unwrap();
        assert_eq!(format!("{}", tag), "NeedsReview");
    }

    #[test]
    fn debug_format() {
        let tag = Tag::new("draft").unwrap();
        assert_eq!(format!("{:?}", tag), "Tag(\"draft\")");
    }

    #[test]
    fn parse_via_fromstr() {
        let tag: Tag = "research".parse().unwrap();
        assert_eq!(tag.to_string(), "research");
    }

    #[test]
    fn parse_error_display() {
        let err = "".parse::<Tag>().unwrap_err();
        assert!(err.to_string().contains("empty") || err.to_string().contains("invalid"));
    }

    #[test]
    fn serde_roundtrip() {
        let tag = Tag::new("zettelkasten").unwrap();
        let yaml = serde_yaml::to_string(&tag).unwrap();
        let parsed: Tag = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(tag, parsed);
    }

    #[test]
    fn serde_preserves_case_on_deserialize() {
        let yaml = "'Draft'\n";
        let tag: Tag = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tag.to_string(), "Draft");
    }

    #[test]
    fn serde_rejects_invalid_on_deserialize() {
        let yaml = "''\n";
        let result: Result<Tag, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn as_str_returns_value() {
        let tag = Tag::new("pkm").unwrap();
        assert_eq!(tag.as_str(), "pkm");
    }
}
