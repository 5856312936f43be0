// crates/sitelang-server/src/render/tests.rs
// ============================================================================
// Module: Page Rendering Unit Tests
// Description: Unit tests for seeding, selector links, and escaping.
// Purpose: Validate rendering against a forwarded locale without a socket.
// Dependencies: sitelang-server
// ============================================================================

//! ## Overview
//! Renders pages directly from synthetic requests and inspects the HTML,
//! response headers, and recorded audit events.

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
    reason = "Test-only rendering assertions."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use axum::http::HeaderMap;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::CONTENT_LANGUAGE;
use axum::http::header::VARY;
use axum::response::Response;
use sitelang_core::LocaleCatalog;
use sitelang_core::LocaleTag;

use super::Page;
use super::RenderState;
use super::escape;
use super::language_label;
use super::region_flag;
use super::render;
use crate::audit::RenderAuditEvent;
use crate::audit::SiteAuditSink;
use crate::content::find_post;
use crate::content::site_messages;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Audit sink that keeps render events in memory.
#[derive(Default)]
struct CapturingSink {
    events: Mutex<Vec<RenderAuditEvent>>,
}

impl SiteAuditSink for CapturingSink {
    fn record_render(&self, event: &RenderAuditEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

const FORWARDING_HEADER: &str = "x-selected-locale";

fn state(sink: Arc<CapturingSink>) -> RenderState {
    RenderState::new(
        site_messages().unwrap(),
        LocaleCatalog::default(),
        "hl",
        HeaderName::from_static(FORWARDING_HEADER),
        sink,
    )
}

fn forwarded(locale: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(FORWARDING_HEADER, HeaderValue::from_str(locale).unwrap());
    headers
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn render_page(uri: &str, headers: &HeaderMap, page: Page) -> (Response, Arc<CapturingSink>) {
    let sink = Arc::new(CapturingSink::default());
    let state = state(Arc::clone(&sink));
    let uri: Uri = uri.parse().unwrap();
    (render(&state, &uri, headers, page), sink)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[tokio::test]
async fn forwarded_locale_seeds_document() {
    let (response, _) = render_page("/", &forwarded("es-MX"), Page::Home);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(CONTENT_LANGUAGE).unwrap(), "es-MX");
    assert_eq!(response.headers().get(VARY).unwrap(), "accept-language");
    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"es-MX\">"));
    assert!(html.contains("Soy ingeniero de software y explorador."));
    assert!(html.contains("Entradas recientes"));
    assert!(html.contains("5 ene 2024"));
}

#[tokio::test]
async fn missing_forwarded_locale_uses_default() {
    let (response, _) = render_page("/", &HeaderMap::new(), Page::Home);
    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"en-US\">"));
    assert!(html.contains("I’m a software engineer and explorer."));
    assert!(html.contains("Jan 5, 2024"));
}

#[tokio::test]
async fn unsupported_forwarded_locale_uses_default() {
    let (response, _) = render_page("/", &forwarded("fr-FR"), Page::Home);
    assert_eq!(response.headers().get(CONTENT_LANGUAGE).unwrap(), "en-US");
}

#[tokio::test]
async fn override_in_address_is_sticky_on_links() {
    let (response, _) = render_page("/projects?hl=es-MX", &forwarded("es-MX"), Page::Projects);
    let html = body_text(response).await;
    assert!(html.contains("<a class=\"site-title\" href=\"/?hl=es-MX\">"));
    assert!(html.contains("<p class=\"back\"><a href=\"/?hl=es-MX\">Regresar</a></p>"));
    assert!(html.contains("href=\"https://github.com/joshuakto/fit\""));
}

#[tokio::test]
async fn selector_links_are_set_locale_targets() {
    let (response, _) =
        render_page("/posts/revamped-website?ref=home", &forwarded("en-US"), Page::Home);
    let html = body_text(response).await;
    assert!(html.contains(
        "<a href=\"/posts/revamped-website?ref=home&amp;hl=en-US\" hreflang=\"en-US\" \
         aria-current=\"true\">English 🇺🇸</a>"
    ));
    assert!(html.contains(
        "<a href=\"/posts/revamped-website?ref=home&amp;hl=es-MX\" hreflang=\"es-MX\">Español \
         🇲🇽</a>"
    ));
}

#[tokio::test]
async fn reselecting_active_override_links_to_current_address() {
    let (response, _) = render_page("/?hl=es-MX", &forwarded("es-MX"), Page::Home);
    let html = body_text(response).await;
    assert!(html.contains("<a href=\"/?hl=es-MX\" hreflang=\"es-MX\" aria-current=\"true\">"));
    assert!(html.contains("<a href=\"/?hl=en-US\" hreflang=\"en-US\">"));
}

#[tokio::test]
async fn not_found_is_localized() {
    let (response, sink) = render_page("/nope?hl=es-MX", &forwarded("es-MX"), Page::NotFound);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Página no encontrada"));
    let events = sink.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, "page_render");
    assert_eq!(events[0].path, "/nope");
    assert_eq!(events[0].locale, "es-MX");
    assert!(events[0].override_present);
    assert_eq!(events[0].status, 404);
}

#[tokio::test]
async fn post_page_renders_title_and_date() {
    let post = find_post("markdown-tailwind").unwrap();
    let headers = forwarded("en-US");
    let (response, sink) = render_page("/posts/markdown-tailwind", &headers, Page::Post(post));
    let html = body_text(response).await;
    assert!(html.contains("<h1>Markdown Tailwind struggles</h1>"));
    assert!(html.contains("<time datetime=\"2023-11-20\">Nov 20, 2023</time>"));
    assert!(!sink.events.lock().unwrap()[0].override_present);
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(escape("<a href=\"x\">&'</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn language_labels_use_autonyms_and_flags() {
    assert_eq!(language_label(&LocaleTag::parse("es-MX").unwrap()), "Español 🇲🇽");
    assert_eq!(language_label(&LocaleTag::parse("en").unwrap()), "English");
    assert_eq!(language_label(&LocaleTag::parse("es-419").unwrap()), "Español");
    assert_eq!(language_label(&LocaleTag::parse("nl-BE").unwrap()), "nl 🇧🇪");
}

#[test]
fn region_flags_require_two_letters() {
    assert_eq!(region_flag("US").as_deref(), Some("🇺🇸"));
    assert_eq!(region_flag("419"), None);
    assert_eq!(region_flag("USA"), None);
}
