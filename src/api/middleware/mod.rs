//! HTTP middleware for request processing.
//!
//! Provides keeper session resolution and request tracing.

pub mod session;
pub mod tracing;
