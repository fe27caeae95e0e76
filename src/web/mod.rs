//! Web layer: server-rendered pages and HTMX fragments.
//!
//! # Modules
//!
//! - [`handlers`] - Page and fragment handlers
//! - [`htmx`] - HX response headers and the multi-fragment response builder
//! - [`routes`] - Route configuration
//! - [`templates`] - Askama templates

pub mod handlers;
pub mod htmx;
pub mod routes;
pub mod templates;
