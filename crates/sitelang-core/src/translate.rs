// crates/sitelang-core/src/translate.rs
// ============================================================================
// Module: Translation Lookup
// Description: Typed message catalog with total fallback to source text.
// Purpose: Localize canonical source messages by language subtag.
// Dependencies: crate::catalog, thiserror
// ============================================================================

//! ## Overview
//! A [`TranslationCatalog`] maps canonical source text to per-language
//! renderings. Lookups are exact on the message and region-insensitive on the
//! locale: an `es` entry serves `es-MX`, `es-ES`, and plain `es`.
//!
//! ## Invariants
//! - [`TranslationCatalog::translate`] is total: a missing message or
//!   language returns the source message unchanged.
//! - The catalog is built once and only read afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::catalog::is_language_subtag;
use crate::catalog::language_subtag;

// ============================================================================
// SECTION: Language Subtag
// ============================================================================

/// Lowercase language subtag used as a translation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageSubtag(String);

impl LanguageSubtag {
    /// Parses a language subtag (2-3 ASCII letters, any case).
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::MalformedLanguage`] for anything else.
    pub fn parse(value: &str) -> Result<Self, TranslationError> {
        let trimmed = value.trim();
        if !is_language_subtag(trimmed) {
            return Err(TranslationError::MalformedLanguage(value.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Returns the subtag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LanguageSubtag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageSubtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Translation Catalog
// ============================================================================

/// Two-level mapping: source message, then language subtag, then text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    /// Localized renderings keyed by canonical source text.
    messages: BTreeMap<String, BTreeMap<LanguageSubtag, String>>,
}

impl TranslationCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Builds a catalog from `(message, language, text)` entries.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when a language key is malformed.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, TranslationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut catalog = Self::new();
        for (message, language, text) in entries {
            catalog.insert(message, language, text)?;
        }
        Ok(catalog)
    }

    /// Adds or replaces one localized rendering.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::MalformedLanguage`] when `language` is not
    /// a 2-3 letter subtag.
    pub fn insert(
        &mut self,
        message: impl Into<String>,
        language: &str,
        text: impl Into<String>,
    ) -> Result<(), TranslationError> {
        let language = LanguageSubtag::parse(language)?;
        self.messages.entry(message.into()).or_default().insert(language, text.into());
        Ok(())
    }

    /// Merges `other` into this catalog; entries from `other` win.
    pub fn merge(&mut self, other: Self) {
        for (message, renderings) in other.messages {
            self.messages.entry(message).or_default().extend(renderings);
        }
    }

    /// Translates `message` for `locale`, falling back to `message` itself.
    ///
    /// `locale` may be any string; only its language subtag is consulted.
    #[must_use]
    pub fn translate<'a>(&'a self, message: &'a str, locale: &str) -> &'a str {
        let language = language_subtag(locale).to_ascii_lowercase();
        self.messages
            .get(message)
            .and_then(|renderings| renderings.get(language.as_str()))
            .map_or(message, String::as_str)
    }

    /// Returns the number of source messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true when the catalog holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// ============================================================================
// SECTION: Bound Translator
// ============================================================================

/// Translation lookup bound to one locale for the duration of a render.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    /// Shared read-only catalog.
    catalog: &'a TranslationCatalog,
    /// Locale the lookups are bound to.
    locale: &'a str,
}

impl<'a> Translator<'a> {
    /// Binds `catalog` to `locale`.
    #[must_use]
    pub const fn new(catalog: &'a TranslationCatalog, locale: &'a str) -> Self {
        Self {
            catalog,
            locale,
        }
    }

    /// Translates `message` for the bound locale.
    #[must_use]
    pub fn t(&self, message: &'a str) -> &'a str {
        self.catalog.translate(message, self.locale)
    }

    /// Returns the bound locale.
    #[must_use]
    pub const fn locale(&self) -> &'a str {
        self.locale
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Translation catalog construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A language key was not a 2-3 letter subtag.
    #[error("malformed translation language: {0}")]
    MalformedLanguage(String),
}
