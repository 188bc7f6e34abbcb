//! Storage wrapper for fault injection testing.
//!
//! Delegates to an inner backend but fails every save while switched on.
//! Loads always pass through. Used to check that a failed save becomes a
//! notice during the session and an error at exit.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use libman_core::{Book, Borrow, Client, RecordList, Storage, StorageError};

/// Path reported by injected failures.
pub const FAULTY_PATH: &str = "faulty";

/// Storage wrapper whose saves can be made to fail.
///
/// Clones share the switch and the failure counter, so a test can keep a
/// handle after moving the storage into a runtime.
#[derive(Debug, Clone)]
pub struct FaultyStorage<S: Storage> {
    inner: S,
    failing: Arc<AtomicBool>,
    injected: Arc<AtomicUsize>,
}

impl<S: Storage> FaultyStorage<S> {
    /// Wrap `inner` with saves working.
    pub fn new(inner: S) -> Self {
        Self { inner, failing: Arc::new(AtomicBool::new(false)), injected: Arc::default() }
    }

    /// Switch save failures on or off.
    pub fn fail_saves(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of saves refused so far.
    pub fn injected_failures(&self) -> usize {
        self.injected.load(Ordering::SeqCst)
    }

    /// The wrapped backend.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            self.injected.fetch_add(1, Ordering::SeqCst);
            return Err(StorageError::Io {
                path: FAULTY_PATH.to_owned(),
                message: "injected failure".to_owned(),
            });
        }
        Ok(())
    }
}

impl<S: Storage> Storage for FaultyStorage<S> {
    fn load_clients(&self) -> Result<RecordList<Client>, StorageError> {
        self.inner.load_clients()
    }

    fn load_books(&self) -> Result<RecordList<Book>, StorageError> {
        self.inner.load_books()
    }

    fn load_borrows(&self) -> Result<RecordList<Borrow>, StorageError> {
        self.inner.load_borrows()
    }

    fn save_clients(&self, clients: &RecordList<Client>) -> Result<(), StorageError> {
        self.check()?;
        self.inner.save_clients(clients)
    }

    fn save_books(&self, books: &RecordList<Book>) -> Result<(), StorageError> {
        self.check()?;
        self.inner.save_books(books)
    }

    fn save_borrows(&self, borrows: &RecordList<Borrow>) -> Result<(), StorageError> {
        self.check()?;
        self.inner.save_borrows(borrows)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use libman_core::{Library, MemoryStorage, StoreKind};

    use super::*;

    #[test]
    fn saves_fail_only_while_switched_on() {
        let storage = FaultyStorage::new(MemoryStorage::new());
        let library = Library::new();

        storage.fail_saves(true);
        assert!(storage.save_library(&library).is_err());
        assert_eq!(storage.injected_failures(), 3);
        assert_eq!(storage.inner().save_count(StoreKind::Clients).unwrap(), 0);

        storage.fail_saves(false);
        storage.save_library(&library).unwrap();
        assert_eq!(storage.inner().save_count(StoreKind::Clients).unwrap(), 1);
    }

    #[test]
    fn loads_pass_through() {
        let inner = MemoryStorage::new().with_text(StoreKind::Clients, "1 | pw | a | b | c |\n");
        let storage = FaultyStorage::new(inner);
        storage.fail_saves(true);
        assert_eq!(storage.load_clients().unwrap().len(), 1);
    }
}
