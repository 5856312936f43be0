// crates/sitelang-core/src/navigation.rs
// ============================================================================
// Module: Sticky Navigation
// Description: Carries selected query parameters onto generated links.
// Purpose: Keep an explicit locale override alive across page navigation.
// Dependencies: url (form_urlencoded)
// ============================================================================

//! ## Overview
//! [`StickyNavigation`] snapshots the sticky parameters present in the
//! current address and appends them to link targets that do not already set
//! the same key. The destination text is otherwise preserved byte-for-byte,
//! so unrelated parameters are never re-encoded, duplicated, or reordered.
//!
//! ## Invariants
//! - With no active sticky parameter, [`StickyNavigation::href`] returns its
//!   input unchanged.
//! - [`StickyNavigation::href`] is idempotent.
//! - Off-site targets (`scheme:` or `//host`) are never modified.

// ============================================================================
// SECTION: Imports
// ============================================================================

use url::form_urlencoded;

// ============================================================================
// SECTION: Sticky Navigation
// ============================================================================

/// Link builder carrying sticky parameters from the current address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickyNavigation {
    /// Sticky `(key, value)` pairs active in the current address.
    sticky: Vec<(String, String)>,
}

impl StickyNavigation {
    /// Captures the first value of each sticky key found in `pairs`.
    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)], keys: &[&str]) -> Self {
        let sticky = keys
            .iter()
            .filter_map(|key| {
                pairs
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(name, value)| (name.clone(), value.clone()))
            })
            .collect();
        Self {
            sticky,
        }
    }

    /// Returns `destination` with every active sticky parameter it lacks.
    #[must_use]
    pub fn href(&self, destination: &str) -> String {
        if self.sticky.is_empty() || is_off_site(destination) {
            return destination.to_string();
        }
        let (target, fragment) = match destination.split_once('#') {
            Some((target, fragment)) => (target, Some(fragment)),
            None => (destination, None),
        };
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };
        let present = parse_query(query);
        let mut appended = form_urlencoded::Serializer::new(String::new());
        let mut missing = false;
        for (key, value) in &self.sticky {
            if !present.iter().any(|(name, _)| name == key) {
                appended.append_pair(key, value);
                missing = true;
            }
        }
        if !missing {
            return destination.to_string();
        }
        let mut href = String::with_capacity(destination.len() + 16);
        href.push_str(path);
        href.push('?');
        href.push_str(query);
        if !query.is_empty() && !query.ends_with('&') {
            href.push('&');
        }
        href.push_str(&appended.finish());
        if let Some(fragment) = fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

// ============================================================================
// SECTION: Query Helpers
// ============================================================================

/// Decodes a query string into ordered `(key, value)` pairs.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

/// Encodes ordered pairs as a query string (without the leading `?`).
#[must_use]
pub fn serialize_query(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish()
}

/// Sets `key` to `value`, replacing the first occurrence and dropping others.
///
/// Returns false without touching `pairs` when the first value already
/// equals `value`.
pub fn set_query_param(pairs: &mut Vec<(String, String)>, key: &str, value: &str) -> bool {
    let Some(position) = pairs.iter().position(|(name, _)| name == key) else {
        pairs.push((key.to_string(), value.to_string()));
        return true;
    };
    if pairs[position].1 == value {
        return false;
    }
    pairs[position].1 = value.to_string();
    let mut index = 0;
    pairs.retain(|(name, _)| {
        let keep = index <= position || name != key;
        index += 1;
        keep
    });
    true
}

/// Returns true when `destination` names another origin.
fn is_off_site(destination: &str) -> bool {
    if destination.starts_with("//") {
        return true;
    }
    let Some(colon) = destination.find(':') else {
        return false;
    };
    let scheme = &destination[.. colon];
    let mut bytes = scheme.bytes();
    bytes.next().is_some_and(|first| first.is_ascii_alphabetic())
        && bytes.all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.'))
}
