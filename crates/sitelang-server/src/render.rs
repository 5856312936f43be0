// crates/sitelang-server/src/render.rs
// ============================================================================
// Module: Page Rendering
// Description: Localized HTML pages seeded from the forwarded locale.
// Purpose: Render each page in the resolved locale with sticky links.
// Dependencies: sitelang-core, axum, time
// ============================================================================

//! ## Overview
//! Page handlers read the locale the edge stage forwarded, seed a
//! [`LocaleContext`] for the render, and build every internal link through
//! sticky navigation. The language selector links are the navigation targets
//! `set_locale` reports on a preview copy of the context.
//!
//! ## Invariants
//! - The document `lang` attribute and `Content-Language` header carry the
//!   context's current locale.
//! - All interpolated text is HTML-escaped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::CONTENT_LANGUAGE;
use axum::http::header::VARY;
use axum::http::uri::PathAndQuery;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use sitelang_core::LocaleCatalog;
use sitelang_core::LocaleContext;
use sitelang_core::LocaleTag;
use sitelang_core::TranslationCatalog;
use sitelang_core::Translator;

use crate::audit::RenderAuditEvent;
use crate::audit::RenderAuditEventParams;
use crate::audit::SiteAuditSink;
use crate::content::BACK_TO_HOME;
use crate::content::INTRO;
use crate::content::LANGUAGE;
use crate::content::MY_PROJECTS;
use crate::content::PAGE_NOT_FOUND;
use crate::content::PAGE_NOT_FOUND_DETAIL;
use crate::content::POSTS;
use crate::content::PROJECTS;
use crate::content::PROJECTS_LEAD;
use crate::content::Post;
use crate::content::RECENT_POSTS;
use crate::content::SITE_DESCRIPTION;
use crate::content::SITE_TITLE;
use crate::content::VIEW_ON_GITHUB;
use crate::content::find_post;
use crate::date::format_date;

// ============================================================================
// SECTION: State
// ============================================================================

/// Shared, read-only state for page handlers.
pub struct RenderState {
    /// Translation catalog (built-in messages merged with the file).
    messages: TranslationCatalog,
    /// Supported locales, listed in the language selector.
    locales: LocaleCatalog,
    /// Query key carrying the locale override.
    override_param: String,
    /// Header the edge stage writes the resolved locale to.
    forwarding_header: HeaderName,
    /// Audit sink for render events.
    audit: Arc<dyn SiteAuditSink>,
}

impl RenderState {
    /// Builds render state.
    #[must_use]
    pub fn new(
        messages: TranslationCatalog,
        locales: LocaleCatalog,
        override_param: impl Into<String>,
        forwarding_header: HeaderName,
        audit: Arc<dyn SiteAuditSink>,
    ) -> Self {
        Self {
            messages,
            locales,
            override_param: override_param.into(),
            forwarding_header,
            audit,
        }
    }

    /// Returns the seed locale for a request.
    ///
    /// Falls back to the catalog default when the forwarded value is missing
    /// or not a catalog entry, which only happens without the edge stage.
    fn seed_locale(&self, headers: &HeaderMap) -> LocaleTag {
        headers
            .get(&self.forwarding_header)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| self.locales.find_exact(value))
            .unwrap_or_else(|| self.locales.default_locale())
            .clone()
    }
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Renders the home page.
pub async fn home(
    State(state): State<Arc<RenderState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    render(&state, &uri, &headers, Page::Home)
}

/// Renders the projects page.
pub async fn projects(
    State(state): State<Arc<RenderState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    render(&state, &uri, &headers, Page::Projects)
}

/// Renders one post, or the not-found page for an unknown identifier.
pub async fn post(
    State(state): State<Arc<RenderState>>,
    Path(id): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let page = find_post(&id).map_or(Page::NotFound, Page::Post);
    render(&state, &uri, &headers, page)
}

/// Renders the localized not-found page.
pub async fn not_found(
    State(state): State<Arc<RenderState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    render(&state, &uri, &headers, Page::NotFound)
}

// ============================================================================
// SECTION: Pages
// ============================================================================

/// Renderable pages.
#[derive(Debug, Clone, Copy)]
enum Page {
    /// Introduction, projects link, recent posts.
    Home,
    /// Project showcase.
    Projects,
    /// A single post.
    Post(&'static Post),
    /// Unknown path or post.
    NotFound,
}

impl Page {
    /// HTTP status for the page.
    const fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Home | Self::Projects | Self::Post(_) => StatusCode::OK,
        }
    }

    /// Source-language document title.
    const fn title(self) -> &'static str {
        match self {
            Self::Home => SITE_TITLE,
            Self::Projects => MY_PROJECTS,
            Self::Post(post) => post.title,
            Self::NotFound => PAGE_NOT_FOUND,
        }
    }
}

/// Renders `page` for the request and records the render.
fn render(state: &RenderState, uri: &Uri, headers: &HeaderMap, page: Page) -> Response {
    let seed = state.seed_locale(headers);
    let address = uri.path_and_query().map_or("/", PathAndQuery::as_str);
    let context = LocaleContext::new(seed, address, state.override_param.as_str());
    let status = page.status();
    let body = render_document(state, &context, page);
    state.audit.record_render(&RenderAuditEvent::new(RenderAuditEventParams {
        path: uri.path().to_string(),
        locale: context.seed().as_str().to_string(),
        override_present: context.active_override().is_some(),
        status: status.as_u16(),
    }));
    let mut response = (status, Html(body)).into_response();
    if let Ok(value) = HeaderValue::from_str(context.current()) {
        response.headers_mut().insert(CONTENT_LANGUAGE, value);
    }
    response.headers_mut().insert(VARY, HeaderValue::from_static("accept-language"));
    response
}

/// Renders the full HTML document.
fn render_document(state: &RenderState, context: &LocaleContext, page: Page) -> String {
    let t = context.translator(&state.messages);
    let main = match page {
        Page::Home => home_body(context, t),
        Page::Projects => projects_body(context, t),
        Page::Post(post) => post_body(context, t, post),
        Page::NotFound => not_found_body(context, t),
    };
    let title = match page {
        Page::Home => t.t(SITE_TITLE).to_string(),
        _ => format!("{} | {}", t.t(page.title()), t.t(SITE_TITLE)),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<meta name=\"description\" content=\"{description}\">\n\
         </head>\n<body>\n<header>\n<a class=\"site-title\" href=\"{home}\">{site}</a>\n\
         {selector}</header>\n<main>\n{main}</main>\n</body>\n</html>\n",
        lang = escape(context.current()),
        title = escape(&title),
        description = escape(t.t(SITE_DESCRIPTION)),
        home = escape(&context.href("/")),
        site = escape(t.t(SITE_TITLE)),
        selector = language_selector(state, context, t),
    )
}

/// Home page body.
fn home_body(context: &LocaleContext, t: Translator<'_>) -> String {
    let mut html = format!(
        "<section class=\"intro\"><p>{}</p></section>\n<ul>\n\
         <li><a href=\"{}\">{}</a></li>\n\
         <li><a href=\"https://github.com/dbarnett\">GitHub</a></li>\n</ul>\n",
        escape(t.t(INTRO)),
        escape(&context.href("/projects")),
        escape(t.t(MY_PROJECTS)),
    );
    html.push_str(&format!("<section>\n<h2>{}</h2>\n<ul>\n", escape(t.t(RECENT_POSTS))));
    for post in POSTS {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a><br><small>{}</small></li>\n",
            escape(&context.href(&format!("/posts/{}", post.id))),
            escape(t.t(post.title)),
            date_element(post, t),
        ));
    }
    html.push_str("</ul>\n</section>\n");
    html
}

/// Projects page body.
fn projects_body(context: &LocaleContext, t: Translator<'_>) -> String {
    let mut html = format!(
        "<h1>{}</h1>\n<p>{}</p>\n",
        escape(t.t(MY_PROJECTS)),
        escape(t.t(PROJECTS_LEAD)),
    );
    for project in PROJECTS {
        html.push_str(&format!(
            "<section>\n<h2>{}</h2>\n<p>{}</p>\n<p><a href=\"{}\">{}</a></p>\n</section>\n",
            escape(project.name),
            escape(t.t(project.description)),
            escape(&context.href(project.url)),
            escape(t.t(VIEW_ON_GITHUB)),
        ));
    }
    html.push_str(&back_link(context, t));
    html
}

/// Post page body.
fn post_body(context: &LocaleContext, t: Translator<'_>, post: &'static Post) -> String {
    format!(
        "<article>\n<h1>{}</h1>\n<p>{}</p>\n<p>{}</p>\n</article>\n{}",
        escape(t.t(post.title)),
        date_element(post, t),
        escape(t.t(post.summary)),
        back_link(context, t),
    )
}

/// Not-found page body.
fn not_found_body(context: &LocaleContext, t: Translator<'_>) -> String {
    format!(
        "<h1>{}</h1>\n<p>{}</p>\n{}",
        escape(t.t(PAGE_NOT_FOUND)),
        escape(t.t(PAGE_NOT_FOUND_DETAIL)),
        back_link(context, t),
    )
}

/// Link back to the home page.
fn back_link(context: &LocaleContext, t: Translator<'_>) -> String {
    format!(
        "<p class=\"back\"><a href=\"{}\">{}</a></p>\n",
        escape(&context.href("/")),
        escape(t.t(BACK_TO_HOME)),
    )
}

/// Post date as a `<time>` element formatted for the bound locale.
fn date_element(post: &Post, t: Translator<'_>) -> String {
    format!(
        "<time datetime=\"{}\">{}</time>",
        post.date,
        escape(&format_date(post.date, t.locale())),
    )
}

// ============================================================================
// SECTION: Language Selector
// ============================================================================

/// Renders one link per supported locale.
///
/// Each href is the navigation target `set_locale` reports on a preview copy
/// of the context; re-selecting the active choice links to the current
/// address.
fn language_selector(state: &RenderState, context: &LocaleContext, t: Translator<'_>) -> String {
    let mut html =
        format!("<nav class=\"lang-selector\" aria-label=\"{}\">\n", escape(t.t(LANGUAGE)));
    for tag in state.locales.tags() {
        let mut preview = context.clone();
        let href = preview.set_locale(tag.as_str()).unwrap_or_else(|| context.address());
        let current =
            if tag.as_str() == context.current() { " aria-current=\"true\"" } else { "" };
        html.push_str(&format!(
            "<a href=\"{}\" hreflang=\"{}\"{current}>{}</a>\n",
            escape(&href),
            escape(tag.as_str()),
            escape(&language_label(tag)),
        ));
    }
    html.push_str("</nav>\n");
    html
}

/// Language name in its own language plus the region flag, when known.
fn language_label(tag: &LocaleTag) -> String {
    let name = match tag.language() {
        "en" => "English",
        "es" => "Español",
        "pt" => "Português",
        "fr" => "Français",
        "de" => "Deutsch",
        "it" => "Italiano",
        other => other,
    };
    tag.region()
        .and_then(region_flag)
        .map_or_else(|| name.to_string(), |flag| format!("{name} {flag}"))
}

/// Regional indicator pair for a two-letter region.
fn region_flag(region: &str) -> Option<String> {
    if region.len() != 2 || !region.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    region
        .bytes()
        .map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
        .collect()
}

// ============================================================================
// SECTION: Escaping
// ============================================================================

/// Escapes text for HTML element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
