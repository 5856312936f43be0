// crates/sitelang-core/src/ranges.rs
// ============================================================================
// Module: Language Range Parser
// Description: Parses Accept-Language style headers into weighted preferences.
// Purpose: Turn untrusted header text into an ordered preference list.
// Dependencies: crate::catalog
// ============================================================================

//! ## Overview
//! [`parse_accept_language`] never fails: entries with a malformed tag or an
//! unparsable quality are dropped, wildcards are skipped, and the worst case
//! is an empty list. Output is a stable sort by descending quality, so equal
//! qualities keep header order.
//!
//! ## Invariants
//! - Every returned quality lies in `(0, 1]`.
//! - At most [`MAX_LANGUAGE_RANGES`] header entries are examined.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::catalog::LocaleTag;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum number of comma-separated header entries examined.
pub const MAX_LANGUAGE_RANGES: usize = 32;

/// Quality applied when an entry carries no `q` parameter.
const DEFAULT_QUALITY: f32 = 1.0;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A weighted language preference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRange {
    /// Preferred locale tag.
    tag: LocaleTag,
    /// Preference weight in `(0, 1]`.
    quality: f32,
}

impl LanguageRange {
    /// Returns the preferred tag.
    #[must_use]
    pub const fn tag(&self) -> &LocaleTag {
        &self.tag
    }

    /// Returns the preference weight.
    #[must_use]
    pub const fn quality(&self) -> f32 {
        self.quality
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a raw `Accept-Language` value into ranges ordered by preference.
///
/// An absent header behaves exactly like an empty one.
#[must_use]
pub fn parse_accept_language(header: Option<&str>) -> Vec<LanguageRange> {
    let Some(header) = header else {
        return Vec::new();
    };
    let mut ranges: Vec<LanguageRange> =
        header.split(',').take(MAX_LANGUAGE_RANGES).filter_map(parse_entry).collect();
    ranges.sort_by(|left, right| right.quality.total_cmp(&left.quality));
    ranges
}

/// Parses one `tag;param=value` entry.
fn parse_entry(entry: &str) -> Option<LanguageRange> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() || tag == "*" {
        return None;
    }
    let tag = LocaleTag::parse(tag)?;
    let mut quality = DEFAULT_QUALITY;
    for param in parts {
        let param = param.trim();
        if param.is_empty() {
            continue;
        }
        let (key, value) = param.split_once('=').unwrap_or((param, ""));
        if key.trim().eq_ignore_ascii_case("q") {
            quality = parse_quality(value)?;
        }
    }
    if quality <= 0.0 {
        return None;
    }
    Some(LanguageRange {
        tag,
        quality,
    })
}

/// Parses and clamps a numeric quality value.
///
/// Overflowing numerals such as `1e400` clamp like any other out-of-range
/// value; spelled-out `inf` and `NaN` are malformed.
fn parse_quality(value: &str) -> Option<f32> {
    let value = value.trim();
    let numeric =
        |byte: u8| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-');
    if value.is_empty() || !value.bytes().all(numeric) {
        return None;
    }
    let quality = value.parse::<f32>().ok()?;
    (!quality.is_nan()).then_some(quality.clamp(0.0, 1.0))
}
