//! In-memory contact store.

use crate::domain::entities::Contact;
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-lifetime contact store guarded by a table-level lock.
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }

    /// Store pre-filled with [`Contact::seed`].
    pub fn seeded() -> Self {
        Self::new(Contact::seed())
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find_by_id(&self, id: usize) -> Result<Option<Contact>, AppError> {
        Ok(self.contacts.read().await.get(id).cloned())
    }

    async fn mark_deleted(&self, id: usize) -> Result<Option<Contact>, AppError> {
        let mut contacts = self.contacts.write().await;
        let Some(contact) = contacts.get_mut(id) else {
            return Ok(None);
        };

        contact.deleted = true;
        debug!(id, name = %contact.name, "contact marked deleted");
        Ok(Some(contact.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_includes_deleted() {
        let repo = InMemoryContactRepository::seeded();

        let contacts = repo.list().await.unwrap();

        assert_eq!(contacts.len(), 16);
        assert!(contacts[0].deleted);
    }

    #[tokio::test]
    async fn test_mark_deleted_keeps_record() {
        let repo = InMemoryContactRepository::seeded();

        let updated = repo.mark_deleted(3).await.unwrap().unwrap();
        assert!(updated.deleted);

        let contacts = repo.list().await.unwrap();
        assert_eq!(contacts.len(), 16);
        assert!(contacts[3].deleted);
        assert!(!contacts[4].deleted);
    }

    #[tokio::test]
    async fn test_out_of_range() {
        let repo = InMemoryContactRepository::seeded();

        assert!(repo.find_by_id(16).await.unwrap().is_none());
        assert!(repo.mark_deleted(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_deletes() {
        let repo = Arc::new(InMemoryContactRepository::seeded());

        let handles: Vec<_> = (1..16)
            .map(|id| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.mark_deleted(id).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().unwrap().is_some());
        }

        let contacts = repo.list().await.unwrap();
        assert!(contacts.iter().all(|c| c.deleted));
    }
}
