// crates/sitelang-server/src/edge.rs
// ============================================================================
// Module: Edge Locale Resolution
// Description: Per-request locale resolution ahead of rendering.
// Purpose: Attach exactly one resolved locale to every inbound request.
// Dependencies: sitelang-core, axum
// ============================================================================

//! ## Overview
//! The edge stage reads the override query parameter and `Accept-Language`,
//! negotiates one supported locale, and writes it to the forwarding header
//! before the request reaches any page handler.
//!
//! ## Invariants
//! - Every request leaves this stage with exactly one forwarding header value.
//! - A client-supplied forwarding header is always overwritten.
//! - The stage performs no I/O and never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use axum::extract::Request;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::Uri;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::middleware::Next;
use axum::response::Response;
use sitelang_core::LocaleCatalog;
use sitelang_core::Resolution;
use sitelang_core::navigation::parse_query;
use sitelang_core::negotiate;
use sitelang_core::parse_accept_language;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Immutable settings shared by every edge invocation.
#[derive(Debug, Clone)]
pub struct EdgeSettings {
    /// Supported locales.
    catalog: LocaleCatalog,
    /// Query key carrying the visitor's override.
    override_param: String,
    /// Header the resolved locale is written to.
    forwarding_header: HeaderName,
}

impl EdgeSettings {
    /// Builds edge settings.
    #[must_use]
    pub fn new(
        catalog: LocaleCatalog,
        override_param: impl Into<String>,
        forwarding_header: HeaderName,
    ) -> Self {
        Self {
            catalog,
            override_param: override_param.into(),
            forwarding_header,
        }
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the locale for one request from its URI and headers.
#[must_use]
pub fn resolve_request(settings: &EdgeSettings, uri: &Uri, headers: &HeaderMap) -> Resolution {
    let override_value = uri.query().and_then(|query| query_value(query, &settings.override_param));
    let accept_language = accept_language(headers);
    let ranges = parse_accept_language(accept_language.as_deref());
    negotiate(&ranges, override_value.as_deref(), &settings.catalog)
}

/// Joins every `Accept-Language` field line into one list.
///
/// Bytes are decoded lossily so one bad entry is dropped by the parser
/// instead of discarding the whole field.
fn accept_language(headers: &HeaderMap) -> Option<String> {
    let mut lines = headers.get_all(ACCEPT_LANGUAGE).iter().peekable();
    lines.peek()?;
    let decoded: Vec<_> = lines.map(|value| String::from_utf8_lossy(value.as_bytes())).collect();
    Some(decoded.join(","))
}

/// Returns the decoded value of the first occurrence of `key`.
pub(crate) fn query_value(query: &str, key: &str) -> Option<String> {
    parse_query(query).into_iter().find(|(name, _)| name == key).map(|(_, value)| value)
}

/// Middleware that writes the resolved locale to the forwarding header.
pub async fn resolve_locale(
    State(settings): State<Arc<EdgeSettings>>,
    mut request: Request,
    next: Next,
) -> Response {
    let resolution = resolve_request(&settings, request.uri(), request.headers());
    let headers = request.headers_mut();
    headers.remove(&settings.forwarding_header);
    if let Ok(value) = HeaderValue::from_str(resolution.locale.as_str()) {
        headers.insert(settings.forwarding_header.clone(), value);
    }
    next.run(request).await
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
