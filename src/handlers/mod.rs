//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the service. Each
//! handler processes one endpoint and returns a JSON response.
//!
//! ## Available Handlers
//!
//! - **Home** (`home`) - Welcome message with the current timestamp
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Info** (`info`) - Deployment metadata
//! - **Not Found** (`not_found`) - Fallback for unmatched routes

mod health_check;
mod home;
mod info;
mod not_found;

pub use health_check::*;
pub use home::*;
pub use info::*;
pub use not_found::*;
