//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure`. Mock implementations
//! are generated via `mockall` for unit tests.

pub mod contact_repository;

pub use contact_repository::ContactRepository;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
