//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! Cloud Run, load balancers, and deployment tools use this to verify
//! that the service is running. It performs no dependency checks.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::models::AppConfig;

/// Response body for the health check endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
}

/// Health check endpoint.
///
/// GET /health
///
/// Always returns `200 OK` with a fixed `"healthy"` status and the
/// configured version.
#[instrument(skip_all)]
pub async fn health_check(State(config): State<Arc<AppConfig>>) -> Json<HealthResponse> {
    debug!("Health check endpoint accessed");

    Json(HealthResponse {
        status: "healthy",
        version: config.version.clone(),
    })
}
