// crates/sitelang-core/tests/context.rs
// ============================================================================
// Module: Locale Context Tests
// Description: Seeding, set_locale, and link generation from the context.
// Purpose: Ensure overrides take effect within the render and on later links.
// Dependencies: sitelang-core
// ============================================================================

//! ## Overview
//! Validates the render-scoped locale context:
//! - The seed is visible until `set_locale` runs.
//! - `set_locale` accepts any string and reports the navigation target.
//! - Links generated after `set_locale` carry the new override.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use sitelang_core::LocaleContext;
use sitelang_core::LocaleTag;
use sitelang_core::TranslationCatalog;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn context(seed: &str, address: &str) -> LocaleContext {
    LocaleContext::new(LocaleTag::parse(seed).unwrap(), address, "hl")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// The seed is the current locale until changed.
#[test]
fn seed_is_current_until_changed() {
    let context = context("es-MX", "/projects");
    assert_eq!(context.current(), "es-MX");
    assert_eq!(context.seed().as_str(), "es-MX");
    assert_eq!(context.active_override(), None);
    assert_eq!(context.address(), "/projects");
}

/// `set_locale` updates the visible locale and reports the new address.
#[test]
fn set_locale_updates_current_and_address() {
    let mut context = context("en-US", "/posts/hello?ref=home");
    let target = context.set_locale("es-MX");
    assert_eq!(target.as_deref(), Some("/posts/hello?ref=home&hl=es-MX"));
    assert_eq!(context.current(), "es-MX");
    assert_eq!(context.seed().as_str(), "en-US");
    assert_eq!(context.active_override(), Some("es-MX"));
}

/// Re-selecting the active override requests no navigation.
#[test]
fn set_locale_same_value_is_no_op_navigation() {
    let mut context = context("es-MX", "/?hl=es-MX");
    assert_eq!(context.set_locale("es-MX"), None);
    assert_eq!(context.address(), "/?hl=es-MX");
}

/// Unsupported tags are accepted without validation.
#[test]
fn set_locale_accepts_unsupported_values() {
    let mut context = context("en-US", "/");
    assert_eq!(context.set_locale("klingon").as_deref(), Some("/?hl=klingon"));
    assert_eq!(context.current(), "klingon");
    assert_eq!(context.set_locale("").as_deref(), Some("/?hl="));
}

/// Links generated after `set_locale` carry the new override.
#[test]
fn links_follow_set_locale() {
    let mut context = context("en-US", "/");
    assert_eq!(context.href("/projects"), "/projects");
    let _ = context.set_locale("es-MX");
    assert_eq!(context.href("/projects"), "/projects?hl=es-MX");
}

/// An override present in the address is carried onto links.
#[test]
fn address_override_is_sticky() {
    let context = context("es-MX", "/?hl=es-MX");
    assert_eq!(context.href("/projects"), "/projects?hl=es-MX");
}

/// Empty paths and fragments normalize to a clean address.
#[test]
fn address_normalization() {
    assert_eq!(context("en-US", "").address(), "/");
    assert_eq!(context("en-US", "?hl=es#top").address(), "/?hl=es");
}

/// The bound translator follows the current locale.
#[test]
fn translator_follows_current_locale() {
    let catalog =
        TranslationCatalog::from_entries([("My projects", "es", "Mis proyectos")]).unwrap();
    let mut context = context("en-US", "/");
    assert_eq!(context.translator(&catalog).t("My projects"), "My projects");
    let _ = context.set_locale("es-MX");
    let translator = context.translator(&catalog);
    assert_eq!(translator.locale(), "es-MX");
    assert_eq!(translator.t("My projects"), "Mis proyectos");
}
