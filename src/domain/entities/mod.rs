//! Core domain entities.
//!
//! - [`Contact`] - A record in the list-and-delete demo
//! - [`Route`] - A statically declared route with optional fallback
//! - [`Demo`] - A numbered demo page

pub mod contact;
pub mod demo;
pub mod route;

pub use contact::{Contact, PROTECTED_CONTACT_IDS};
pub use demo::{DEMOS, Demo};
pub use route::{Interaction, Permission, ROUTES, RegistryError, Route};
