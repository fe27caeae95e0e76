//! Contact list service.

use crate::domain::entities::Contact;
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Rules of the list-and-delete demo on top of a [`ContactRepository`].
pub struct ContactService<R: ContactRepository> {
    repository: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every contact, deleted ones included.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        self.repository.list().await
    }

    /// Soft-deletes a contact and returns it.
    ///
    /// Deleting an already deleted contact succeeds again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is negative or past the end of
    /// the list.
    /// Returns [`AppError::Unprocessable`] if the contact is protected.
    pub async fn delete_contact(&self, id: i64) -> Result<Contact, AppError> {
        let not_found = || AppError::not_found(format!("Contact {id} does not exist"));

        let index = usize::try_from(id).map_err(|_| not_found())?;

        let contact = self
            .repository
            .find_by_id(index)
            .await?
            .ok_or_else(not_found)?;

        if contact.is_protected() {
            tracing::info!(id, name = %contact.name, "refused to delete protected contact");
            return Err(AppError::unprocessable(format!(
                "\"{}\" cannot be deleted",
                contact.name
            )));
        }

        self.repository
            .mark_deleted(index)
            .await?
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockContactRepository;

    fn contact(id: usize, name: &str) -> Contact {
        Contact::new(id, name)
    }

    #[tokio::test]
    async fn test_delete_contact_success() {
        let mut mock_repo = MockContactRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(Some(contact(3, "Item 3"))));
        mock_repo
            .expect_mark_deleted()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| {
                let mut c = contact(3, "Item 3");
                c.deleted = true;
                Ok(Some(c))
            });

        let service = ContactService::new(Arc::new(mock_repo));

        let deleted = service.delete_contact(3).await.unwrap();
        assert!(deleted.deleted);
        assert_eq!(deleted.name, "Item 3");
    }

    #[tokio::test]
    async fn test_delete_protected_contact_never_marks() {
        for id in [5usize, 8] {
            let mut mock_repo = MockContactRepository::new();

            mock_repo
                .expect_find_by_id()
                .times(1)
                .returning(move |_| Ok(Some(contact(id, "Here to stay"))));
            mock_repo.expect_mark_deleted().times(0);

            let service = ContactService::new(Arc::new(mock_repo));

            let err = service.delete_contact(id as i64).await.unwrap_err();
            assert!(matches!(err, AppError::Unprocessable { .. }));
            assert_eq!(err.to_string(), "\"Here to stay\" cannot be deleted");
        }
    }

    #[tokio::test]
    async fn test_delete_out_of_range() {
        let mut mock_repo = MockContactRepository::new();

        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        mock_repo.expect_mark_deleted().times(0);

        let service = ContactService::new(Arc::new(mock_repo));

        let err = service.delete_contact(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_negative_id_skips_lookup() {
        let mut mock_repo = MockContactRepository::new();
        mock_repo.expect_find_by_id().times(0);

        let service = ContactService::new(Arc::new(mock_repo));

        let err = service.delete_contact(-1).await.unwrap_err();
        assert_eq!(err.to_string(), "Contact -1 does not exist");
    }

    #[tokio::test]
    async fn test_list_contacts() {
        let mut mock_repo = MockContactRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![contact(0, "Item 0"), contact(1, "Item 1")]));

        let service = ContactService::new(Arc::new(mock_repo));

        let contacts = service.list_contacts().await.unwrap();
        assert_eq!(contacts.len(), 2);
    }
}
