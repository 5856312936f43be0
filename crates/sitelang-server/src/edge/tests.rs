// crates/sitelang-server/src/edge/tests.rs
// ============================================================================
// Module: Edge Locale Resolution Unit Tests
// Description: Unit tests for request-level locale resolution.
// Purpose: Validate override extraction and header negotiation per request.
// Dependencies: sitelang-server
// ============================================================================

//! ## Overview
//! Exercises [`super::resolve_request`] with synthetic URIs and header maps.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

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
    reason = "Test-only resolution assertions."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use axum::http::HeaderMap;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::Uri;
use axum::http::header::ACCEPT_LANGUAGE;
use sitelang_core::LocaleCatalog;
use sitelang_core::ResolutionSource;

use super::EdgeSettings;
use super::query_value;
use super::resolve_request;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn settings() -> EdgeSettings {
    EdgeSettings::new(
        LocaleCatalog::default(),
        "hl",
        HeaderName::from_static("x-selected-locale"),
    )
}

fn resolve(uri: &str, accept_language: Option<&str>) -> (String, ResolutionSource) {
    let uri: Uri = uri.parse().unwrap();
    let mut headers = HeaderMap::new();
    if let Some(value) = accept_language {
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(value).unwrap());
    }
    let resolution = resolve_request(&settings(), &uri, &headers);
    (resolution.locale.as_str().to_string(), resolution.source)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn header_only_request_resolves_by_language() {
    let (locale, source) = resolve("/", Some("es-ES,es;q=0.9,en;q=0.8"));
    assert_eq!(locale, "es-MX");
    assert_eq!(source, ResolutionSource::HeaderLanguage);
}

#[test]
fn override_beats_header() {
    let (locale, source) = resolve("/?hl=en-US", Some("es-MX"));
    assert_eq!(locale, "en-US");
    assert_eq!(source, ResolutionSource::OverrideExact);
}

#[test]
fn unsupported_override_falls_through_to_header() {
    let (locale, source) = resolve("/?hl=fr", Some("es-MX"));
    assert_eq!(locale, "es-MX");
    assert_eq!(source, ResolutionSource::HeaderExact);
}

#[test]
fn no_signals_resolve_to_default() {
    assert_eq!(resolve("/projects", None), ("en-US".to_string(), ResolutionSource::Default));
}

#[test]
fn override_value_is_percent_decoded() {
    let (locale, source) = resolve("/?x=1&hl=es%2DMX", None);
    assert_eq!(locale, "es-MX");
    assert_eq!(source, ResolutionSource::OverrideExact);
}

#[test]
fn first_override_occurrence_wins() {
    let (locale, _) = resolve("/?hl=es-MX&hl=en-US", None);
    assert_eq!(locale, "es-MX");
}

#[test]
fn non_ascii_entry_drops_only_that_entry() {
    let uri: Uri = "/".parse().unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_bytes(b"es-MX, fr-\xc3\xa9;q=0.1").unwrap());
    let resolution = resolve_request(&settings(), &uri, &headers);
    assert_eq!(resolution.locale.as_str(), "es-MX");
    assert_eq!(resolution.source, ResolutionSource::HeaderExact);
}

#[test]
fn non_ascii_only_header_resolves_to_default() {
    let uri: Uri = "/".parse().unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_bytes(b"es-\xff").unwrap());
    let resolution = resolve_request(&settings(), &uri, &headers);
    assert_eq!(resolution.locale.as_str(), "en-US");
    assert_eq!(resolution.source, ResolutionSource::Default);
}

#[test]
fn repeated_header_lines_form_one_list() {
    let uri: Uri = "/".parse().unwrap();
    let mut headers = HeaderMap::new();
    headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("fr"));
    headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("es-MX;q=0.8"));
    let resolution = resolve_request(&settings(), &uri, &headers);
    assert_eq!(resolution.locale.as_str(), "es-MX");
    assert_eq!(resolution.source, ResolutionSource::HeaderExact);
}

#[test]
fn repeated_header_lines_keep_quality_order() {
    let uri: Uri = "/".parse().unwrap();
    let mut headers = HeaderMap::new();
    headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("es-MX;q=0.4"));
    headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US;q=0.9"));
    let resolution = resolve_request(&settings(), &uri, &headers);
    assert_eq!(resolution.locale.as_str(), "en-US");
}

#[test]
fn query_value_ignores_other_keys() {
    assert_eq!(query_value("hlx=es&xhl=es", "hl"), None);
    assert_eq!(query_value("a=1&hl=", "hl").as_deref(), Some(""));
}
