// crates/sitelang-server/src/lib.rs
// ============================================================================
// Module: Sitelang Server
// Description: HTTP surface for per-visitor locale negotiation.
// Purpose: Resolve a locale at the edge and render localized pages.
// Dependencies: sitelang-config, sitelang-core, axum, time, tokio
// ============================================================================

//! ## Overview
//! The server runs an edge resolution stage in front of every route. It
//! writes the negotiated locale to a forwarding header that page handlers
//! read to seed their render-scoped locale context:
//! - [`edge`]: request-level resolution middleware.
//! - [`render`]: localized pages with sticky links and a language selector.
//! - [`content`]: built-in posts, projects, and messages.
//! - [`date`]: medium-style date formatting per locale.
//! - [`audit`]: JSON-line audit sinks.
//! - [`server`]: router assembly and serving.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod content;
pub mod date;
pub mod edge;
pub mod render;
pub mod server;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::RenderAuditEvent;
pub use audit::ServerAuditEvent;
pub use audit::SiteAuditSink;
pub use audit::StderrAuditSink;
pub use date::format_date;
pub use edge::EdgeSettings;
pub use edge::resolve_request;
pub use server::SiteServer;
pub use server::SiteServerError;
