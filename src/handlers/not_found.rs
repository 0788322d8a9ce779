//! # Not-Found Handler
//!
//! Fallback for every request the router does not match. Installed both
//! at the router level (unknown paths) and on each method router, so a
//! method mismatch on a known path gets the same 404 body instead of
//! axum's default 405.

use tracing::{debug, instrument};

use crate::error::AppError;

/// Fallback handler returning the fixed 404 JSON body.
#[instrument]
pub async fn not_found() -> AppError {
    debug!("Unmatched route requested");
    AppError::NotFound
}
