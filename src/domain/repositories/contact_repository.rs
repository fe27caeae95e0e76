//! Repository trait for the contact list.

use crate::domain::entities::Contact;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for contacts.
///
/// Records are addressed by index and are never removed.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryContactRepository`] - process-lifetime store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Returns every contact, deleted ones included, in id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn list(&self) -> Result<Vec<Contact>, AppError>;

    /// Finds a contact by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn find_by_id(&self, id: usize) -> Result<Option<Contact>, AppError>;

    /// Sets the `deleted` flag and returns the updated record, or `None` if
    /// the id is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn mark_deleted(&self, id: usize) -> Result<Option<Contact>, AppError>;
}
