//! Process-lifetime storage backends.

mod contact_repository;

pub use contact_repository::InMemoryContactRepository;
