//! Text-valued typed values: names, tags, keywords
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

use crate::failure::{Checked, FailureDescriptor};
use std::fmt;

/// Maximum length of a style name in characters
const STYLE_NAME_MAX: usize = 128;

/// Maximum length of a tag in characters
const TAG_MAX: usize = 64;

/// A catalog style name: non-empty after trimming, at most 128 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleName(String);

impl StyleName {
    /// Validate raw input into a style name
    pub fn parse(raw: &str) -> Checked<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FailureDescriptor::domain("style name must not be empty"));
        }
        if trimmed.chars().count() > STYLE_NAME_MAX {
            return Err(FailureDescriptor::domain(format!(
                "style name must be at most {} characters",
                STYLE_NAME_MAX
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag: non-empty, at most 64 characters, ASCII alphanumeric plus `-`/`_`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

impl Tag {
    /// Validate raw input into a tag
    pub fn parse(raw: &str) -> Checked<Self> {
        if raw.is_empty() {
            return Err(FailureDescriptor::domain("tag must not be empty"));
        }
        if raw.chars().count() > TAG_MAX {
            return Err(FailureDescriptor::domain(format!(
                "tag must be at most {} characters",
                TAG_MAX
            )));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(FailureDescriptor::domain(
                "tag may contain only ASCII letters, digits, '-' and '_'",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A keyword drawn from a fixed allowed set supplied at the call site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    /// Validate raw input against the allowed set for this call site
    pub fn parse(raw: &str, allowed: &[&str]) -> Checked<Self> {
        if allowed.iter().any(|k| *k == raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(FailureDescriptor::domain(format!(
                "keyword '{}' is not one of: {}",
                raw,
                allowed.join(", ")
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Origin;

    #[test]
    fn test_style_name_valid() {
        let name = StyleName::parse("  Watercolor  ").unwrap();
        assert_eq!(name.as_str(), "Watercolor");
    }

    #[test]
    fn test_style_name_empty() {
        let failure = StyleName::parse("   ").unwrap_err();
        assert_eq!(failure.code, 400);
        assert_eq!(failure.origin, Origin::Domain);
    }

    #[test]
    fn test_style_name_too_long() {
        let raw = "x".repeat(STYLE_NAME_MAX + 1);
        assert!(StyleName::parse(&raw).is_err());
        let raw = "x".repeat(STYLE_NAME_MAX);
        assert!(StyleName::parse(&raw).is_ok());
    }

    #[test]
    fn test_tag_charset() {
        assert!(Tag::parse("retro_film-01").is_ok());
        assert!(Tag::parse("retro film").is_err());
        assert!(Tag::parse("").is_err());
        assert!(Tag::parse("ünïcode").is_err());
    }

    #[test]
    fn test_keyword_membership() {
        let allowed = ["draft", "published", "archived"];
        let keyword = Keyword::parse("draft", &allowed).unwrap();
        assert_eq!(keyword.as_str(), "draft");

        let failure = Keyword::parse("deleted", &allowed).unwrap_err();
        assert_eq!(failure.code, 400);
        assert!(failure.message.contains("deleted"));
    }
}
