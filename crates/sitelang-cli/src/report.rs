// crates/sitelang-cli/src/report.rs
// ============================================================================
// Module: CLI Reports
// Description: Offline negotiation and translation for the CLI.
// Purpose: Show what the site would resolve or render without serving.
// Dependencies: sitelang-config, sitelang-core, sitelang-server, serde
// ============================================================================

//! ## Overview
//! [`resolve_report`] runs the same parser and negotiator the edge stage uses.
//! [`translate_message`] looks a message up in the merged catalog the server
//! would build (built-in site messages plus the configured translation file).

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use sitelang_config::ConfigError;
use sitelang_config::SiteConfig;
use sitelang_core::LanguageRange;
use sitelang_core::LocaleTag;
use sitelang_core::ResolutionSource;
use sitelang_core::TranslationCatalog;
use sitelang_core::negotiate;
use sitelang_core::parse_accept_language;
use sitelang_server::content::site_messages;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Result of an offline negotiation.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    /// Resolved catalog entry.
    pub locale: LocaleTag,
    /// Rule that selected the entry.
    pub source: ResolutionSource,
    /// Parsed header ranges in preference order.
    pub ranges: Vec<LanguageRange>,
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Negotiates a locale for the given header and override values.
///
/// # Errors
///
/// Returns [`ConfigError`] when the locale catalog is invalid.
pub fn resolve_report(
    config: &SiteConfig,
    accept_language: Option<&str>,
    override_value: Option<&str>,
) -> Result<ResolveReport, ConfigError> {
    let catalog = config.locale_catalog()?;
    let ranges = parse_accept_language(accept_language);
    let resolution = negotiate(&ranges, override_value, &catalog);
    Ok(ResolveReport {
        locale: resolution.locale,
        source: resolution.source,
        ranges,
    })
}

/// Builds the merged catalog the server would render with.
///
/// # Errors
///
/// Returns [`ConfigError`] when the translation file cannot be loaded.
pub fn site_catalog(config: &SiteConfig) -> Result<TranslationCatalog, ConfigError> {
    let mut catalog = site_messages().map_err(|err| ConfigError::Invalid(err.to_string()))?;
    catalog.merge(config.load_translations()?);
    Ok(catalog)
}

/// Translates `message` for `locale` using the merged site catalog.
///
/// # Errors
///
/// Returns [`ConfigError`] when the translation file cannot be loaded.
pub fn translate_message(
    config: &SiteConfig,
    locale: &str,
    message: &str,
) -> Result<String, ConfigError> {
    let catalog = site_catalog(config)?;
    Ok(catalog.translate(message, locale).to_string())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
