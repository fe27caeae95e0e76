//! HTTP middleware for request logging.

pub mod access_log;
pub mod tracing;
