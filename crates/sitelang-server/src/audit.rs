// crates/sitelang-server/src/audit.rs
// ============================================================================
// Module: Site Audit Logging
// Description: Structured audit events for page rendering and server startup.
// Purpose: Emit JSON-line logs without hard dependencies on a log pipeline.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines audit event payloads and sinks for the site. Events are
//! serialized as one JSON object per line. Sink failures are swallowed so that
//! logging never affects a response.
//!
//! Only the rendering layer and server bootstrap record events; the edge
//! resolution stage stays free of I/O.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Page render audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct RenderAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Request path.
    pub path: String,
    /// Locale the render was seeded with.
    pub locale: String,
    /// Whether the request carried the override parameter.
    pub override_present: bool,
    /// HTTP status of the rendered page.
    pub status: u16,
}

/// Inputs for constructing render audit events.
pub struct RenderAuditEventParams {
    /// Request path.
    pub path: String,
    /// Locale the render was seeded with.
    pub locale: String,
    /// Whether the request carried the override parameter.
    pub override_present: bool,
    /// HTTP status of the rendered page.
    pub status: u16,
}

impl RenderAuditEvent {
    /// Builds a render audit event.
    #[must_use]
    pub fn new(params: RenderAuditEventParams) -> Self {
        Self {
            event: "page_render",
            timestamp_ms: now_ms(),
            path: params.path,
            locale: params.locale,
            override_present: params.override_present,
            status: params.status,
        }
    }
}

/// Server startup audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct ServerAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Bound socket address.
    pub bind: String,
    /// Supported locale tags; the first is the default.
    pub locales: Vec<String>,
    /// Number of translated source messages.
    pub translations: usize,
}

impl ServerAuditEvent {
    /// Builds a server startup audit event.
    #[must_use]
    pub fn new(bind: String, locales: Vec<String>, translations: usize) -> Self {
        Self {
            event: "server_start",
            timestamp_ms: now_ms(),
            bind,
            locales,
            translations,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for site events.
pub trait SiteAuditSink: Send + Sync {
    /// Record a page render event.
    fn record_render(&self, event: &RenderAuditEvent);

    /// Record a server startup event.
    fn record_server(&self, _event: &ServerAuditEvent) {}
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl SiteAuditSink for StderrAuditSink {
    fn record_render(&self, event: &RenderAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }

    fn record_server(&self, event: &ServerAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one serialized payload.
    fn append<T: Serialize>(&self, event: &T) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

impl SiteAuditSink for FileAuditSink {
    fn record_render(&self, event: &RenderAuditEvent) {
        self.append(event);
    }

    fn record_server(&self, event: &ServerAuditEvent) {
        self.append(event);
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl SiteAuditSink for NoopAuditSink {
    fn record_render(&self, _event: &RenderAuditEvent) {}

    fn record_server(&self, _event: &ServerAuditEvent) {}
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the current timestamp in milliseconds.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}
