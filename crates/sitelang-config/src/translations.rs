// crates/sitelang-config/src/translations.rs
// ============================================================================
// Module: Translation File Loader
// Description: Loads extra translations from a TOML message table.
// Purpose: Let operators extend or override built-in site messages.
// Dependencies: sitelang-core, serde, toml
// ============================================================================

//! ## Overview
//! A translation file maps source-language messages to per-language text:
//!
//! ```toml
//! [messages."My projects"]
//! es = "Mis proyectos"
//! ```
//!
//! Files share the config file limits (path length, 1 MiB, UTF-8). Keys must
//! be bare language subtags; region-qualified keys are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use sitelang_core::TranslationCatalog;

use crate::config::ConfigError;
use crate::config::read_limited_utf8;

// ============================================================================
// SECTION: Types
// ============================================================================

/// On-disk translation file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TranslationFile {
    /// Message text to language subtag to translated text.
    #[serde(default)]
    messages: BTreeMap<String, BTreeMap<String, String>>,
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Loads a translation file into a catalog.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file is unreadable, malformed, or names an
/// invalid language.
pub fn load_translation_file(path: &Path) -> Result<TranslationCatalog, ConfigError> {
    let content = read_limited_utf8(path, "translations")?;
    parse_translations(&content)
}

/// Parses translation file content into a catalog.
///
/// # Errors
///
/// Returns [`ConfigError`] when the content is malformed.
pub fn parse_translations(content: &str) -> Result<TranslationCatalog, ConfigError> {
    let file: TranslationFile =
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
    let mut catalog = TranslationCatalog::new();
    for (message, languages) in file.messages {
        if message.is_empty() {
            return Err(ConfigError::Invalid("translation message must be non-empty".into()));
        }
        for (language, text) in languages {
            catalog.insert(&message, &language, &text).map_err(|err| {
                ConfigError::Invalid(format!("translations for \"{message}\": {err}"))
            })?;
        }
    }
    Ok(catalog)
}
