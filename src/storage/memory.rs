//! In-memory storage

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Storage, StorageResult};

/// Ephemeral store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(keys::AUTH_TOKEN), None);

        storage.set(keys::AUTH_TOKEN, "abc").unwrap();
        assert_eq!(storage.get(keys::AUTH_TOKEN).as_deref(), Some("abc"));

        storage.remove(keys::AUTH_TOKEN).unwrap();
        assert_eq!(storage.get(keys::AUTH_TOKEN), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::with_entries([(keys::LANGUAGE, "de")]);
        let handle = storage.clone();
        handle.set(keys::USER_NAME, "Anna").unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get(keys::USER_NAME).as_deref(), Some("Anna"));
    }
}
