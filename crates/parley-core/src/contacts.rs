//! Contact directory
//!
//! The static list of known chat counterparts shown on the home screen,
//! plus the case-insensitive name search that filters it. The mockup ships
//! a fixed directory; nothing adds or removes contacts at runtime.

use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// A known chat counterpart shown in the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable identifier used to open a conversation
    pub id: ContactId,
    /// Name shown in lists and chat headers
    pub display_name: String,
    /// Last-message preview shown under the name
    pub preview: String,
}

impl Contact {
    /// Create a new contact.
    pub fn new(
        id: impl Into<ContactId>,
        display_name: impl Into<String>,
        preview: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            preview: preview.into(),
        }
    }

    /// The glyph for the avatar circle: the uppercased first character of
    /// the display name, or `'?'` when the name is empty.
    pub fn avatar_initial(&self) -> char {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}

/// The set of known contacts, in display order.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
}

impl ContactDirectory {
    /// Create a directory over the given contacts, kept in the order given.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// The hard-coded demo directory the mockup ships with.
    pub fn demo() -> Self {
        Self::new(vec![
            Contact::new("1", "Person A", "Hey, how are you?"),
            Contact::new("2", "Person B", "Check out this photo!"),
        ])
    }

    /// Case-insensitive, unanchored substring search over display names.
    ///
    /// An empty query returns the full directory unchanged, so clearing the
    /// search box restores the list. Results always keep directory order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        if query.is_empty() {
            return self.contacts.iter().collect();
        }
        let needle = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.display_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Look up a contact by id.
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    /// Check whether a participant id is known.
    pub fn contains(&self, id: &ContactId) -> bool {
        self.get(id).is_some()
    }

    /// All contacts in directory order.
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts in the directory.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_directory() {
        let directory = ContactDirectory::demo();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.all()[0].display_name, "Person A");
        assert_eq!(directory.all()[1].display_name, "Person B");
    }

    #[test]
    fn test_search_case_insensitive() {
        let directory = ContactDirectory::demo();

        let results = directory.search("person a");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "Person A");

        let results = directory.search("PERSON");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_is_unanchored_substring() {
        let directory = ContactDirectory::demo();

        let results = directory.search("erson");
        assert_eq!(results.len(), 2);

        let results = directory.search("B");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "Person B");
    }

    #[test]
    fn test_search_empty_query_returns_all_in_order() {
        let directory = ContactDirectory::demo();

        let results = directory.search("");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].display_name, "Person A");
        assert_eq!(results[1].display_name, "Person B");
    }

    #[test]
    fn test_search_no_match() {
        let directory = ContactDirectory::demo();
        assert!(directory.search("zzz").is_empty());
    }

    #[test]
    fn test_search_preserves_directory_order() {
        let directory = ContactDirectory::new(vec![
            Contact::new("a", "Zoe", ""),
            Contact::new("b", "Anton", ""),
            Contact::new("c", "Zora", ""),
        ]);

        let results = directory.search("zo");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].display_name, "Zoe");
        assert_eq!(results[1].display_name, "Zora");
    }

    #[test]
    fn test_get_and_contains() {
        let directory = ContactDirectory::demo();

        let contact = directory.get(&ContactId::from("1")).unwrap();
        assert_eq!(contact.display_name, "Person A");

        assert!(directory.contains(&ContactId::from("2")));
        assert!(!directory.contains(&ContactId::from("99")));
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(Contact::new("1", "Person A", "").avatar_initial(), 'P');
        assert_eq!(Contact::new("2", "alice", "").avatar_initial(), 'A');
        assert_eq!(Contact::new("3", "", "").avatar_initial(), '?');
    }
}
