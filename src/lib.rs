//! # GCP DevOps Demo - Health Check API
//!
//! A small HTTP service exposing informational endpoints for a Cloud
//! Run deployment: a welcome message, a health check, and deployment
//! metadata, plus uniform JSON 404/500 handling.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the endpoints
//! - [`models`] - The immutable startup-time configuration
//! - [`error`] - Centralized error types and HTTP error responses
//! - [`utils`] - Constants and timestamp formatting

pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_check, home, info, not_found};
use crate::models::AppConfig;

/// Creates the Axum router with all application routes and state.
///
/// The configuration is injected as shared state rather than read from
/// the environment inside handlers, so every handler sees the same
/// immutable values for the process lifetime.
///
/// Each route carries its own `not_found` fallback in addition to the
/// router-level one: a method mismatch on a known path must produce the
/// same 404 body as an unknown path, never a 405.
pub fn app(config: AppConfig) -> Router {
    let state = Arc::new(config);

    Router::new()
        .route("/", get(home).fallback(not_found))
        .route("/health", get(health_check).fallback(not_found))
        .route("/info", get(info).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
