//! # Info Handler
//!
//! Metadata endpoint describing the running deployment. Useful for
//! debugging and for verifying that configuration landed as intended.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::models::AppConfig;
use crate::utils::constant::{APP_NAME, REGION, RUNTIME_VERSION};
use crate::utils::timestamp::utc_timestamp;

/// Response body for the info endpoint.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: &'static str,
    pub version: String,
    pub environment: String,
    pub region: &'static str,
    pub python_version: &'static str,
    pub timestamp: String,
}

/// Deployment metadata endpoint.
///
/// GET /info
///
/// Echoes the configured version and environment alongside fixed
/// deployment facts and a fresh timestamp.
#[instrument(skip_all)]
pub async fn info(State(config): State<Arc<AppConfig>>) -> AppResult<Json<InfoResponse>> {
    debug!("Serving deployment metadata");

    Ok(Json(InfoResponse {
        app: APP_NAME,
        version: config.version.clone(),
        environment: config.environment.clone(),
        region: REGION,
        python_version: RUNTIME_VERSION,
        timestamp: utc_timestamp()?,
    }))
}
