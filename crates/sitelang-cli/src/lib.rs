// crates/sitelang-cli/src/lib.rs
// ============================================================================
// Module: Sitelang CLI Library
// Description: Shared helpers for the sitelang command-line interface.
// Purpose: Keep command logic testable apart from the binary entry point.
// Dependencies: sitelang-config, sitelang-core, sitelang-server, serde
// ============================================================================

//! ## Overview
//! The binary entry point (`src/main.rs`) parses arguments and writes output;
//! the offline `resolve` and `translate` commands are computed here.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Offline negotiation and translation reports.
pub mod report;
