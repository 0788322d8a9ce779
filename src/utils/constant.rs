//! # Application Constants
//!
//! This module defines the literal strings and configuration defaults
//! used throughout the service. Response bodies echo several of these
//! verbatim, so they live in one place.

/// Application identifier reported by the `/info` endpoint.
pub const APP_NAME: &str = "gcp-devops-demo";

/// Greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Welcome to GCP DevOps Demo";

/// Deployment region reported by the `/info` endpoint.
///
/// Fixed at build time; this service is only deployed to one region.
pub const REGION: &str = "asia-east1";

/// Runtime version string reported by the `/info` endpoint.
///
/// Kept as `python_version: "3.11"` on the wire so dashboards and
/// deployment checks built against the previous deployment keep
/// working unchanged.
pub const RUNTIME_VERSION: &str = "3.11";

/// Port the server binds to when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Version string used when `VERSION` is unset.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Environment name used when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";
