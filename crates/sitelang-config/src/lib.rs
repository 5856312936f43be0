// crates/sitelang-config/src/lib.rs
// ============================================================================
// Module: Sitelang Config Library
// Description: Canonical config model and translation file loading.
// Purpose: Single source of truth for sitelang.toml semantics.
// Dependencies: sitelang-core, serde, toml
// ============================================================================

//! ## Overview
//! `sitelang-config` defines the configuration model for the locale site:
//! bind address, supported locales, the override parameter and forwarding
//! header names, an optional translation file, and audit logging. Validation
//! is strict and fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod translations;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::DEFAULT_FORWARDING_HEADER;
pub use config::DEFAULT_OVERRIDE_PARAM;
pub use config::LocalesConfig;
pub use config::RoutingConfig;
pub use config::ServerConfig;
pub use config::SiteConfig;
pub use config::TranslationsConfig;
pub use translations::load_translation_file;
pub use translations::parse_translations;
