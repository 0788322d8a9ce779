//! # Utility Modules
//!
//! This module contains constants and small helpers used throughout the
//! service.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Literal strings and configuration defaults
//! - **Timestamp** (`timestamp`) - Naive-UTC ISO-8601 formatting

pub mod constant;
pub mod timestamp;
