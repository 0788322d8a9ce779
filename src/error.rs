//! # Centralized Error Handling
//!
//! This module provides the unified error types for the application:
//! [`AppError`] for request-time failures and [`ConfigError`] for fatal
//! startup problems. Request errors are converted at the router
//! boundary into fixed JSON bodies; no internal detail ever reaches a
//! response.

use std::num::ParseIntError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Request-time error type covering every failure a handler can surface.
///
/// Anything that is not an explicit `NotFound` collapses to a generic
/// 500 on the wire. Details are logged here, centrally, rather than at
/// each call site.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("timestamp formatting error")]
    TimestampFormat(#[from] time::error::Format),

    #[error("internal server error")]
    Internal,
}

/// Fatal configuration problem detected at process startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {value:?}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "The requested endpoint does not exist",
            ),
            AppError::TimestampFormat(e) => {
                error!(?e, "Failed to format response timestamp");
                internal_error()
            }
            AppError::Internal => internal_error(),
        };

        let body = Json(ErrorBody { error, message });
        (status, body).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, &'static str) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        "An unexpected error occurred",
    )
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
