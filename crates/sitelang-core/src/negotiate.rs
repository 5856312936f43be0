// crates/sitelang-core/src/negotiate.rs
// ============================================================================
// Module: Locale Negotiator
// Description: Resolves exactly one supported locale per request.
// Purpose: Combine override and header signals into a deterministic choice.
// Dependencies: crate::catalog, crate::ranges, serde
// ============================================================================

//! ## Overview
//! Resolution order, first hit wins:
//! 1. override equal to a catalog entry (ASCII case-insensitive)
//! 2. override sharing a language subtag with a catalog entry
//! 3. each header range by descending quality: exact entry, then language
//! 4. the catalog default
//!
//! Exact matches always outrank language matches at the same step. The
//! result records which rule fired so callers can log it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::catalog::LocaleCatalog;
use crate::catalog::LocaleTag;
use crate::catalog::language_subtag;
use crate::ranges::LanguageRange;

// ============================================================================
// SECTION: Types
// ============================================================================

/// The rule that produced a resolution.
///
/// # Invariants
/// - Variants are stable for audit labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Override matched a catalog entry exactly.
    OverrideExact,
    /// Override matched a catalog entry by language subtag.
    OverrideLanguage,
    /// A header range matched a catalog entry exactly.
    HeaderExact,
    /// A header range matched a catalog entry by language subtag.
    HeaderLanguage,
    /// No usable signal; the catalog default was used.
    Default,
}

impl ResolutionSource {
    /// Returns a stable label for the source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OverrideExact => "override_exact",
            Self::OverrideLanguage => "override_language",
            Self::HeaderExact => "header_exact",
            Self::HeaderLanguage => "header_language",
            Self::Default => "default",
        }
    }
}

/// Negotiation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The resolved catalog entry.
    pub locale: LocaleTag,
    /// Rule that selected the entry.
    pub source: ResolutionSource,
}

// ============================================================================
// SECTION: Negotiation
// ============================================================================

/// Resolves one catalog entry from header ranges and an optional override.
///
/// Never fails: unusable overrides and ranges fall through to the default.
#[must_use]
pub fn negotiate(
    ranges: &[LanguageRange],
    override_value: Option<&str>,
    catalog: &LocaleCatalog,
) -> Resolution {
    if let Some(resolution) = override_value.and_then(|value| resolve_override(value, catalog)) {
        return resolution;
    }
    for range in ranges {
        if let Some(locale) = catalog.find_exact(range.tag().as_str()) {
            return resolved(locale, ResolutionSource::HeaderExact);
        }
        if let Some(locale) = catalog.find_language(range.tag().language()) {
            return resolved(locale, ResolutionSource::HeaderLanguage);
        }
    }
    resolved(catalog.default_locale(), ResolutionSource::Default)
}

/// Matches an explicit override against the catalog.
fn resolve_override(value: &str, catalog: &LocaleCatalog) -> Option<Resolution> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Some(locale) = catalog.find_exact(value) {
        return Some(resolved(locale, ResolutionSource::OverrideExact));
    }
    catalog
        .find_language(language_subtag(value))
        .map(|locale| resolved(locale, ResolutionSource::OverrideLanguage))
}

/// Builds a resolution from a borrowed catalog entry.
fn resolved(locale: &LocaleTag, source: ResolutionSource) -> Resolution {
    Resolution {
        locale: locale.clone(),
        source,
    }
}
