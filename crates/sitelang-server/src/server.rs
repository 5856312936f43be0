// crates/sitelang-server/src/server.rs
// ============================================================================
// Module: Site Server
// Description: HTTP server bootstrap wiring the edge stage to page handlers.
// Purpose: Build the router from validated configuration and serve it.
// Dependencies: sitelang-config, sitelang-core, axum, tokio
// ============================================================================

//! ## Overview
//! [`SiteServer`] validates configuration, builds the locale and translation
//! catalogs once, and mounts the edge resolution middleware in front of every
//! route (including the not-found fallback).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderName;
use axum::middleware;
use axum::routing::get;
use sitelang_config::SiteConfig;
use sitelang_core::LocaleCatalog;
use sitelang_core::TranslationCatalog;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::audit::FileAuditSink;
use crate::audit::NoopAuditSink;
use crate::audit::ServerAuditEvent;
use crate::audit::SiteAuditSink;
use crate::audit::StderrAuditSink;
use crate::content::site_messages;
use crate::edge::EdgeSettings;
use crate::edge::resolve_locale;
use crate::render::RenderState;
use crate::render::home;
use crate::render::not_found;
use crate::render::post;
use crate::render::projects;

// ============================================================================
// SECTION: Site Server
// ============================================================================

/// Site server instance.
pub struct SiteServer {
    /// Validated configuration.
    config: SiteConfig,
    /// Supported locales.
    locales: LocaleCatalog,
    /// Built-in messages merged with the configured translation file.
    messages: TranslationCatalog,
    /// Forwarding header name.
    forwarding_header: HeaderName,
    /// Audit sink for render and startup events.
    audit: Arc<dyn SiteAuditSink>,
}

impl SiteServer {
    /// Builds a new site server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SiteServerError`] when initialization fails.
    pub fn from_config(config: SiteConfig) -> Result<Self, SiteServerError> {
        config.validate().map_err(|err| SiteServerError::Config(err.to_string()))?;
        let locales =
            config.locale_catalog().map_err(|err| SiteServerError::Config(err.to_string()))?;
        let mut messages = site_messages().map_err(|err| SiteServerError::Init(err.to_string()))?;
        let overrides =
            config.load_translations().map_err(|err| SiteServerError::Config(err.to_string()))?;
        messages.merge(overrides);
        let forwarding_header = HeaderName::from_bytes(config.routing.forwarding_header.as_bytes())
            .map_err(|_| SiteServerError::Config("invalid forwarding header".to_string()))?;
        let audit = build_audit_sink(&config)?;
        Ok(Self {
            config,
            locales,
            messages,
            forwarding_header,
            audit,
        })
    }

    /// Builds the application router.
    #[must_use]
    pub fn router(&self) -> Router {
        let edge = Arc::new(EdgeSettings::new(
            self.locales.clone(),
            self.config.routing.override_param.clone(),
            self.forwarding_header.clone(),
        ));
        let state = Arc::new(RenderState::new(
            self.messages.clone(),
            self.locales.clone(),
            self.config.routing.override_param.clone(),
            self.forwarding_header.clone(),
            Arc::clone(&self.audit),
        ));
        Router::new()
            .route("/", get(home))
            .route("/projects", get(projects))
            .route("/posts/{id}", get(post))
            .fallback(not_found)
            .with_state(state)
            .layer(middleware::from_fn_with_state(edge, resolve_locale))
    }

    /// Binds the configured address and serves requests.
    ///
    /// # Errors
    ///
    /// Returns [`SiteServerError`] when the server fails.
    pub async fn serve(self) -> Result<(), SiteServerError> {
        let addr: SocketAddr = self
            .config
            .server
            .bind_addr()
            .map_err(|err| SiteServerError::Config(err.to_string()))?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|_| SiteServerError::Transport("http bind failed".to_string()))?;
        self.serve_listener(listener).await
    }

    /// Serves requests on an already bound listener.
    ///
    /// # Errors
    ///
    /// Returns [`SiteServerError`] when the server fails.
    pub async fn serve_listener(self, listener: TcpListener) -> Result<(), SiteServerError> {
        let bind = listener
            .local_addr()
            .map_err(|_| SiteServerError::Transport("http bind failed".to_string()))?;
        self.audit.record_server(&ServerAuditEvent::new(
            bind.to_string(),
            self.locales.tags().iter().map(ToString::to_string).collect(),
            self.messages.len(),
        ));
        let app = self.router();
        axum::serve(listener, app)
            .await
            .map_err(|_| SiteServerError::Transport("http server failed".to_string()))
    }
}

/// Selects the audit sink from configuration.
fn build_audit_sink(config: &SiteConfig) -> Result<Arc<dyn SiteAuditSink>, SiteServerError> {
    if !config.audit.enabled {
        return Ok(Arc::new(NoopAuditSink));
    }
    match config.audit_path() {
        Some(path) => {
            let sink = FileAuditSink::new(&path)
                .map_err(|err| SiteServerError::Init(format!("audit log: {err}")))?;
            Ok(Arc::new(sink))
        }
        None => Ok(Arc::new(StderrAuditSink)),
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Site server errors.
#[derive(Debug, Error)]
pub enum SiteServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}
