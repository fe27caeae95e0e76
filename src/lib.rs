//! # HTMX Demos
//!
//! A demo server for hypermedia-driven UI patterns, built with Axum, Askama
//! and HTMX. Every endpoint answers with server-rendered HTML: full pages or
//! fragments, steered on the client through `HX-*` response headers.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Contacts, the route registry and the demo catalog
//! - **Application Layer** ([`application`]) - The rules each demo applies
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory contact store
//! - **Web Layer** ([`web`]) - Handlers, templates and HTMX helpers
//!
//! ## Demos
//!
//! - Search with form replacement and `HX-Reswap`
//! - Slow search for loading indicators
//! - Three-step survey with out-of-band updates and virtual history URLs
//! - Error pages retargeted to the body with `HX-Retarget` and `HX-Push-Url`
//! - Next/previous wizard with client-carried state
//! - List with soft delete and a `422` refusal
//!
//! ## Quick Start
//!
//! ```bash
//! export SEARCH_DELAY_MS=1000  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for integration tests and tools.
pub mod prelude {
    pub use crate::application::services::ContactService;
    pub use crate::domain::entities::{Contact, Demo, Route};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
