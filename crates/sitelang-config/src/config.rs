// crates/sitelang-config/src/config.rs
// ============================================================================
// Module: Sitelang Configuration
// Description: Configuration loading and validation for the locale site.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: sitelang-core, serde, toml, thiserror
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits
//! and validated before use. Every section has defaults, so an empty file is a
//! valid configuration. Invalid configuration fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use sitelang_core::DEFAULT_SUPPORTED_LOCALES;
use sitelang_core::LocaleCatalog;
use sitelang_core::TranslationCatalog;
use thiserror::Error;

use crate::translations::load_translation_file;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "sitelang.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SITELANG_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the override parameter name and forwarding header name.
pub(crate) const MAX_ROUTING_NAME_LENGTH: usize = 64;
/// Default bind address for the HTTP server.
const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// Default query key carrying the locale override.
pub const DEFAULT_OVERRIDE_PARAM: &str = "hl";
/// Default header carrying the resolved locale to rendering.
pub const DEFAULT_FORWARDING_HEADER: &str = "x-selected-locale";
/// Headers the edge stage reads and therefore must not overwrite.
const RESERVED_HEADERS: &[&str] = &["accept-language", "host", "content-length", "content-type"];

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Sitelang configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Supported locale configuration.
    #[serde(default)]
    pub locales: LocalesConfig,
    /// Override parameter and forwarding header names.
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Optional translation file configuration.
    #[serde(default)]
    pub translations: TranslationsConfig,
    /// Audit logging configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Path the configuration was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The path comes from `path`, then `SITELANG_CONFIG`, then
    /// `sitelang.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let content = read_limited_utf8(&resolved, "config")?;
        let mut config: Self =
            toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.source_path = Some(resolved);
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.locales.validate()?;
        self.routing.validate()?;
        self.translations.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Builds the supported-locale catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the locale list is invalid.
    pub fn locale_catalog(&self) -> Result<LocaleCatalog, ConfigError> {
        self.locales.catalog()
    }

    /// Loads the configured translation file, or an empty catalog when none.
    ///
    /// Relative paths resolve against the directory of the config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the translation file cannot be loaded.
    pub fn load_translations(&self) -> Result<TranslationCatalog, ConfigError> {
        let Some(path) = self.translations.path.as_deref() else {
            return Ok(TranslationCatalog::new());
        };
        load_translation_file(&self.resolve_relative(path.trim()))
    }

    /// Returns the configured audit log path, resolved like translation paths.
    #[must_use]
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.audit.path.as_deref().map(|path| self.resolve_relative(path.trim()))
    }

    /// Resolves `path` against the config file directory when relative.
    fn resolve_relative(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        self.source_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| path.to_path_buf(), |dir| dir.join(path))
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    /// Returns the parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("server.bind is invalid: {}", self.bind)))
    }

    /// Validates server configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr().map(|_| ())
    }
}

/// Supported locale configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalesConfig {
    /// Supported locale tags; the first entry is the default.
    #[serde(default = "default_supported_locales")]
    pub supported: Vec<String>,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            supported: default_supported_locales(),
        }
    }
}

impl LocalesConfig {
    /// Builds the catalog, mapping catalog errors into config errors.
    fn catalog(&self) -> Result<LocaleCatalog, ConfigError> {
        LocaleCatalog::from_strs(&self.supported)
            .map_err(|err| ConfigError::Invalid(format!("locales.supported: {err}")))
    }

    /// Validates the supported locale list.
    fn validate(&self) -> Result<(), ConfigError> {
        self.catalog().map(|_| ())
    }
}

/// Names used to carry locale state through URLs and headers.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    /// Query key carrying the visitor's explicit locale override.
    #[serde(default = "default_override_param")]
    pub override_param: String,
    /// Request header carrying the resolved locale to rendering.
    #[serde(default = "default_forwarding_header")]
    pub forwarding_header: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            override_param: default_override_param(),
            forwarding_header: default_forwarding_header(),
        }
    }
}

impl RoutingConfig {
    /// Validates routing names.
    fn validate(&self) -> Result<(), ConfigError> {
        let param = self.override_param.as_str();
        if param.is_empty() {
            return Err(ConfigError::Invalid("routing.override_param must be non-empty".into()));
        }
        if param.len() > MAX_ROUTING_NAME_LENGTH {
            return Err(ConfigError::Invalid("routing.override_param exceeds max length".into()));
        }
        if !param.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_')) {
            return Err(ConfigError::Invalid(
                "routing.override_param must use [A-Za-z0-9_-]".to_string(),
            ));
        }
        let header = self.forwarding_header.as_str();
        if header.is_empty() {
            return Err(ConfigError::Invalid("routing.forwarding_header must be non-empty".into()));
        }
        if header.len() > MAX_ROUTING_NAME_LENGTH {
            return Err(ConfigError::Invalid(
                "routing.forwarding_header exceeds max length".to_string(),
            ));
        }
        if !header.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-') {
            return Err(ConfigError::Invalid(
                "routing.forwarding_header must use lowercase [a-z0-9-]".to_string(),
            ));
        }
        if RESERVED_HEADERS.contains(&header) {
            return Err(ConfigError::Invalid(format!(
                "routing.forwarding_header must not be the reserved header {header}"
            )));
        }
        Ok(())
    }
}

/// Translation file configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationsConfig {
    /// Optional TOML file with extra or overriding translations.
    #[serde(default)]
    pub path: Option<String>,
}

impl TranslationsConfig {
    /// Validates the translation path.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("translations.path", path)?;
        }
        Ok(())
    }
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Whether render audit events are emitted.
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
    /// Optional JSON-lines log file (stderr when absent).
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            path: None,
        }
    }
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default bind address.
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Default supported locales.
fn default_supported_locales() -> Vec<String> {
    DEFAULT_SUPPORTED_LOCALES.iter().map(ToString::to_string).collect()
}

/// Default override parameter name.
fn default_override_param() -> String {
    DEFAULT_OVERRIDE_PARAM.to_string()
}

/// Default forwarding header name.
fn default_forwarding_header() -> String {
    DEFAULT_FORWARDING_HEADER.to_string()
}

/// Audit logging is on unless disabled.
const fn default_audit_enabled() -> bool {
    true
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Reads a size-limited UTF-8 file after validating its path.
pub(crate) fn read_limited_utf8(path: &Path, kind: &str) -> Result<String, ConfigError> {
    validate_path(path, kind)?;
    let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    if bytes.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::Invalid(format!("{kind} file exceeds size limit")));
    }
    String::from_utf8(bytes)
        .map_err(|_| ConfigError::Invalid(format!("{kind} file must be utf-8")))
}

/// Validates a path against security limits.
fn validate_path(path: &Path, kind: &str) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{kind} path exceeds max length")));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{kind} path component too long")));
        }
    }
    Ok(())
}

/// Validates a configured path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}
