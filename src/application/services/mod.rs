//! Business rules of the demos, kept apart from rendering.

pub mod contact_service;
pub mod error_simulation;
pub mod search;
pub mod survey;
pub mod wizard;

pub use contact_service::ContactService;
