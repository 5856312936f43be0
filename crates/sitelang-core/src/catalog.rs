// crates/sitelang-core/src/catalog.rs
// ============================================================================
// Module: Locale Catalog
// Description: Locale tag syntax and the ordered set of supported locales.
// Purpose: Provide canonical, validated locale identifiers for negotiation.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`LocaleTag`] is a `language[-REGION]` identifier. Tags are canonicalized
//! at construction (lowercase language, uppercase region) so equality is
//! case-insensitive by construction. A [`LocaleCatalog`] is the ordered set of
//! locales the site can render; its first entry is the default.
//!
//! ## Invariants
//! - Language subtags are 2-3 ASCII letters.
//! - Region subtags are 2-3 ASCII letters or exactly 3 ASCII digits.
//! - Catalogs are non-empty, duplicate-free, and immutable once built.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Locales supported by the site when no configuration overrides them.
pub const DEFAULT_SUPPORTED_LOCALES: &[&str] = &["en-US", "es-MX"];

// ============================================================================
// SECTION: Locale Tag
// ============================================================================

/// Canonical `language[-REGION]` locale identifier.
///
/// # Invariants
/// - The language subtag is lowercase; the region subtag is uppercase.
/// - The stored text always round-trips through [`LocaleTag::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag {
    /// Canonical tag text.
    text: String,
    /// Byte length of the language subtag within `text`.
    language_len: usize,
}

impl LocaleTag {
    /// Parses and canonicalizes a locale tag, returning `None` when malformed.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let (language, region) = match value.split_once('-') {
            Some((language, region)) => (language, Some(region)),
            None => (value, None),
        };
        if !is_language_subtag(language) {
            return None;
        }
        let mut text = language.to_ascii_lowercase();
        if let Some(region) = region {
            if !is_region_subtag(region) {
                return None;
            }
            text.push('-');
            text.push_str(&region.to_ascii_uppercase());
        }
        Some(Self {
            language_len: language.len(),
            text,
        })
    }

    /// Returns the canonical tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the lowercase language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        self.text.get(.. self.language_len).unwrap_or(&self.text)
    }

    /// Returns the uppercase region subtag when present.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.text.get(self.language_len + 1 ..)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(CatalogError::MalformedTag(value))
    }
}

impl TryFrom<&str> for LocaleTag {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value).ok_or_else(|| CatalogError::MalformedTag(value.to_string()))
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.text
    }
}

/// Returns the language subtag of a raw, possibly malformed locale string.
///
/// The subtag is the trimmed text before the first hyphen; no validation is
/// applied, so callers compare it case-insensitively.
#[must_use]
pub fn language_subtag(value: &str) -> &str {
    let value = value.trim();
    value.split_once('-').map_or(value, |(language, _)| language)
}

/// Returns true when `value` is a syntactically valid language subtag.
#[must_use]
pub fn is_language_subtag(value: &str) -> bool {
    (2 ..= 3).contains(&value.len()) && value.bytes().all(|byte| byte.is_ascii_alphabetic())
}

/// Returns true when `value` is a syntactically valid region subtag.
fn is_region_subtag(value: &str) -> bool {
    let alpha = (2 ..= 3).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_alphabetic());
    let numeric = value.len() == 3 && value.bytes().all(|b| b.is_ascii_digit());
    alpha || numeric
}

// ============================================================================
// SECTION: Locale Catalog
// ============================================================================

/// Ordered, immutable set of supported locales.
///
/// # Invariants
/// - Non-empty; the first entry is the default locale.
/// - Entries are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    /// Supported tags in priority order.
    tags: Vec<LocaleTag>,
    /// Default tag (copy of the first entry).
    default: LocaleTag,
}

impl LocaleCatalog {
    /// Builds a catalog from ordered tags.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the list is empty or contains duplicates.
    pub fn new(tags: Vec<LocaleTag>) -> Result<Self, CatalogError> {
        let Some(default) = tags.first().cloned() else {
            return Err(CatalogError::Empty);
        };
        for (index, tag) in tags.iter().enumerate() {
            if tags[.. index].contains(tag) {
                return Err(CatalogError::Duplicate(tag.to_string()));
            }
        }
        Ok(Self {
            tags,
            default,
        })
    }

    /// Parses and builds a catalog from raw tag strings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when any tag is malformed, or the list is
    /// empty or contains duplicates.
    pub fn from_strs<S: AsRef<str>>(values: &[S]) -> Result<Self, CatalogError> {
        let tags = values
            .iter()
            .map(|value| LocaleTag::try_from(value.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tags)
    }

    /// Returns the default locale.
    #[must_use]
    pub const fn default_locale(&self) -> &LocaleTag {
        &self.default
    }

    /// Returns the supported locales in priority order.
    #[must_use]
    pub fn tags(&self) -> &[LocaleTag] {
        &self.tags
    }

    /// Finds the entry equal to `value`, ignoring ASCII case.
    #[must_use]
    pub fn find_exact(&self, value: &str) -> Option<&LocaleTag> {
        let value = value.trim();
        self.tags.iter().find(|tag| tag.as_str().eq_ignore_ascii_case(value))
    }

    /// Finds the first entry whose language subtag equals `language`.
    #[must_use]
    pub fn find_language(&self, language: &str) -> Option<&LocaleTag> {
        self.tags.iter().find(|tag| tag.language().eq_ignore_ascii_case(language))
    }
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        let tags = DEFAULT_SUPPORTED_LOCALES.iter().filter_map(|value| LocaleTag::parse(value));
        let tags: Vec<LocaleTag> = tags.collect();
        let default = tags.first().cloned().unwrap_or_else(|| LocaleTag {
            text: "en".to_string(),
            language_len: 2,
        });
        Self {
            tags,
            default,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Locale catalog construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No locales were supplied.
    #[error("locale catalog must not be empty")]
    Empty,
    /// A tag did not match `language[-REGION]`.
    #[error("malformed locale tag: {0}")]
    MalformedTag(String),
    /// A tag appeared more than once.
    #[error("duplicate locale tag: {0}")]
    Duplicate(String),
}
