//! Domain layer: entities, static configuration and repository traits.
//!
//! - [`entities`] - Contacts, the route registry and the demo catalog
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
