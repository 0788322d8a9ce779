//! # Welcome Handler
//!
//! Root endpoint returning a greeting, the current time, and the
//! deployed version.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::models::AppConfig;
use crate::utils::constant::WELCOME_MESSAGE;
use crate::utils::timestamp::utc_timestamp;

/// Response body for the root endpoint.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub version: String,
}

/// Welcome endpoint with the current timestamp.
///
/// GET /
///
/// The timestamp is recomputed on every request; nothing here is
/// cached.
#[instrument(skip_all)]
pub async fn home(State(config): State<Arc<AppConfig>>) -> AppResult<Json<HomeResponse>> {
    debug!("Serving welcome response");

    Ok(Json(HomeResponse {
        message: WELCOME_MESSAGE,
        timestamp: utc_timestamp()?,
        version: config.version.clone(),
    }))
}
