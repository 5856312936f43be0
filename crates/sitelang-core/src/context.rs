// crates/sitelang-core/src/context.rs
// ============================================================================
// Module: Locale Context
// Description: Render-scoped holder of the current locale and address.
// Purpose: Seed rendering from the resolved locale and record overrides.
// Dependencies: crate::catalog, crate::navigation, crate::translate
// ============================================================================

//! ## Overview
//! A [`LocaleContext`] is created per render from the resolved locale and the
//! current address, and is dropped with the render. [`LocaleContext::set_locale`]
//! accepts any string without validation: it updates the locale seen by the
//! rest of the render immediately and writes the override parameter into the
//! context's address, so links generated afterwards carry it. Whether the
//! value maps to a supported locale is decided by negotiation on the next
//! request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::catalog::LocaleTag;
use crate::navigation::StickyNavigation;
use crate::navigation::parse_query;
use crate::navigation::serialize_query;
use crate::navigation::set_query_param;
use crate::translate::TranslationCatalog;
use crate::translate::Translator;

// ============================================================================
// SECTION: Locale Context
// ============================================================================

/// Locale state for a single render tree.
///
/// # Invariants
/// - `current` equals the seed until [`LocaleContext::set_locale`] is called.
/// - Never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    /// Resolved locale the render was seeded with.
    seed: LocaleTag,
    /// Locale visible to the remainder of the render.
    current: String,
    /// Path component of the current address.
    path: String,
    /// Decoded query pairs of the current address, in order.
    query: Vec<(String, String)>,
    /// Query key carrying the locale override.
    override_param: String,
}

impl LocaleContext {
    /// Seeds a context from a resolved locale and the current `path?query`.
    #[must_use]
    pub fn new(seed: LocaleTag, address: &str, override_param: impl Into<String>) -> Self {
        let address = address.split_once('#').map_or(address, |(target, _)| target);
        let (path, query) = match address.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (address, Vec::new()),
        };
        let path = if path.is_empty() { "/" } else { path };
        Self {
            current: seed.as_str().to_string(),
            seed,
            path: path.to_string(),
            query,
            override_param: override_param.into(),
        }
    }

    /// Returns the locale the render was seeded with.
    #[must_use]
    pub const fn seed(&self) -> &LocaleTag {
        &self.seed
    }

    /// Returns the locale currently visible to rendering.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Returns the override value present in the current address.
    #[must_use]
    pub fn active_override(&self) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| *name == self.override_param)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the current address as `path[?query]`.
    #[must_use]
    pub fn address(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        format!("{}?{}", self.path, serialize_query(&self.query))
    }

    /// Switches the visible locale and records `tag` as the active override.
    ///
    /// Returns the address to navigate to when the override changed, or
    /// `None` when the address already carried `tag`. Navigation is the
    /// caller's concern; the context does not wait on it.
    pub fn set_locale(&mut self, tag: &str) -> Option<String> {
        tag.clone_into(&mut self.current);
        set_query_param(&mut self.query, &self.override_param, tag).then(|| self.address())
    }

    /// Returns a link builder reflecting the current address.
    #[must_use]
    pub fn navigation(&self) -> StickyNavigation {
        StickyNavigation::from_pairs(&self.query, &[self.override_param.as_str()])
    }

    /// Returns `destination` with the active override carried onto it.
    #[must_use]
    pub fn href(&self, destination: &str) -> String {
        self.navigation().href(destination)
    }

    /// Binds `catalog` to the current locale.
    #[must_use]
    pub fn translator<'a>(&'a self, catalog: &'a TranslationCatalog) -> Translator<'a> {
        Translator::new(catalog, &self.current)
    }
}
