//! Domain entity for the list-and-delete demo.

/// Number of contacts seeded at startup.
pub const SEED_CONTACT_COUNT: usize = 16;

/// Contacts that refuse deletion.
pub const PROTECTED_CONTACT_IDS: [usize; 2] = [5, 8];

/// A contact shown in the list-and-delete demo.
///
/// The `id` is the record's position in the store. Records are never removed,
/// deletion only flips `deleted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: usize,
    pub name: String,
    pub deleted: bool,
}

impl Contact {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            deleted: false,
        }
    }

    /// Whether this contact is one of the hard-coded non-deletable records.
    pub fn is_protected(&self) -> bool {
        PROTECTED_CONTACT_IDS.contains(&self.id)
    }

    /// Builds the initial contact list.
    ///
    /// `Item 0` starts out deleted, and the two protected records carry names
    /// hinting that they cannot be removed.
    pub fn seed() -> Vec<Contact> {
        let mut contacts: Vec<Contact> = (0..SEED_CONTACT_COUNT)
            .map(|i| Contact::new(i, format!("Item {i}")))
            .collect();

        contacts[0].deleted = true;
        contacts[5].name = "Can't make me move".to_string();
        contacts[8].name = "Here to stay".to_string();

        contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_layout() {
        let contacts = Contact::seed();

        assert_eq!(contacts.len(), SEED_CONTACT_COUNT);
        assert!(contacts.iter().enumerate().all(|(i, c)| c.id == i));
        assert!(contacts[0].deleted);
        assert!(contacts[1..].iter().all(|c| !c.deleted));
        assert_eq!(contacts[3].name, "Item 3");
        assert_eq!(contacts[5].name, "Can't make me move");
        assert_eq!(contacts[8].name, "Here to stay");
    }

    #[test]
    fn test_protected_ids() {
        let contacts = Contact::seed();

        let protected: Vec<usize> = contacts
            .iter()
            .filter(|c| c.is_protected())
            .map(|c| c.id)
            .collect();

        assert_eq!(protected, vec![5, 8]);
    }
}
