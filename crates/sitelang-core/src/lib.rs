// crates/sitelang-core/src/lib.rs
// ============================================================================
// Module: Sitelang Core
// Description: Locale negotiation and propagation for per-visitor rendering.
// Purpose: Provide pure, independently testable locale building blocks.
// Dependencies: serde, thiserror, url
// ============================================================================

//! ## Overview
//! Sitelang core resolves one supported locale per request and carries the
//! visitor's explicit choice forward through URL state alone. Everything here
//! is synchronous and free of I/O:
//! - [`catalog`]: locale tags and the supported-locale catalog.
//! - [`ranges`]: `Accept-Language` parsing.
//! - [`negotiate`]: override/header/default resolution.
//! - [`context`]: render-scoped current locale with `set_locale`.
//! - [`navigation`]: sticky override propagation onto links.
//! - [`translate`]: typed message catalog with total fallback.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod context;
pub mod navigation;
pub mod negotiate;
pub mod ranges;
pub mod translate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::CatalogError;
pub use catalog::DEFAULT_SUPPORTED_LOCALES;
pub use catalog::LocaleCatalog;
pub use catalog::LocaleTag;
pub use catalog::language_subtag;
pub use context::LocaleContext;
pub use navigation::StickyNavigation;
pub use negotiate::Resolution;
pub use negotiate::ResolutionSource;
pub use negotiate::negotiate;
pub use ranges::LanguageRange;
pub use ranges::MAX_LANGUAGE_RANGES;
pub use ranges::parse_accept_language;
pub use translate::LanguageSubtag;
pub use translate::TranslationCatalog;
pub use translate::TranslationError;
pub use translate::Translator;
