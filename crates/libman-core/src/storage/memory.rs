use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use super::{Storage, StorageError, StoreKind, decode_records, encode_records};
use crate::{book::Book, borrow::Borrow, client::Client, codec::Record, list::RecordList};

/// In-memory storage implementation for testing and simulation
///
/// Keeps each store as the encoded text a file would hold, so loads and saves
/// go through the same codec as [`super::FileStorage`]. State lives behind
/// `Arc<Mutex<>>`; clones share it, which lets a test keep a handle and
/// inspect what a session wrote.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryStorageInner>>,
}

#[derive(Default)]
struct MemoryStorageInner {
    /// Encoded store contents, absent until seeded or saved
    texts: HashMap<StoreKind, String>,

    /// Completed saves per store
    saves: HashMap<StoreKind, usize>,
}

impl MemoryStorage {
    /// Create an empty `MemoryStorage`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one store with raw text, as if a file held it.
    pub fn with_text(self, kind: StoreKind, text: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.lock() {
            inner.texts.insert(kind, text.into());
        }
        self
    }

    /// Current encoded contents of a store.
    pub fn text(&self, kind: StoreKind) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.texts.get(&kind).cloned())
    }

    /// Number of saves a store has received.
    pub fn save_count(&self, kind: StoreKind) -> Result<usize, StorageError> {
        Ok(self.lock()?.saves.get(&kind).copied().unwrap_or(0))
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryStorageInner>, StorageError> {
        self.inner.lock().map_err(|_| StorageError::Poisoned)
    }

    fn read_store<T: Record>(&self, kind: StoreKind) -> Result<RecordList<T>, StorageError> {
        let inner = self.lock()?;
        Ok(inner
            .texts
            .get(&kind)
            .map(|text| decode_records(text, "memory"))
            .unwrap_or_default())
    }

    fn write_store<T: Record>(
        &self,
        kind: StoreKind,
        records: &RecordList<T>,
    ) -> Result<(), StorageError> {
        let text = encode_records(records);
        let mut inner = self.lock()?;
        inner.texts.insert(kind, text);
        *inner.saves.entry(kind).or_default() += 1;
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn load_clients(&self) -> Result<RecordList<Client>, StorageError> {
        self.read_store(StoreKind::Clients)
    }

    fn load_books(&self) -> Result<RecordList<Book>, StorageError> {
        self.read_store(StoreKind::Books)
    }

    fn load_borrows(&self) -> Result<RecordList<Borrow>, StorageError> {
        self.read_store(StoreKind::Borrows)
    }

    fn save_clients(&self, clients: &RecordList<Client>) -> Result<(), StorageError> {
        self.write_store(StoreKind::Clients, clients)
    }

    fn save_books(&self, books: &RecordList<Book>) -> Result<(), StorageError> {
        self.write_store(StoreKind::Books, books)
    }

    fn save_borrows(&self, borrows: &RecordList<Borrow>) -> Result<(), StorageError> {
        self.write_store(StoreKind::Borrows, borrows)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::library::Library;

    #[test]
    fn empty_storage_loads_empty_library() {
        let library = MemoryStorage::new().load_library().unwrap();
        assert!(library.clients().is_empty());
        assert!(library.books().is_empty());
        assert!(library.borrows().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        let mut library = Library::new();
        library.register_client(Client::new("20180001", "1234", "", "", "")).unwrap();
        storage.save(StoreKind::Clients, &library).unwrap();

        assert_eq!(
            handle.text(StoreKind::Clients).unwrap().as_deref(),
            Some("20180001 | 1234 |  |  |  |\n")
        );
        assert_eq!(handle.save_count(StoreKind::Clients).unwrap(), 1);
        assert_eq!(handle.save_count(StoreKind::Books).unwrap(), 0);
    }

    #[test]
    fn seeded_text_is_decoded() {
        let storage = MemoryStorage::new()
            .with_text(StoreKind::Books, "0000001 | T | P | A | 978 | L | N |\nbroken line\n");
        let books = storage.load_books().unwrap();
        assert_eq!(books.len(), 1);
    }
}
