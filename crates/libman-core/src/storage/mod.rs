//! Storage abstraction for the library's three stores.
//!
//! Each store is persisted as a whole: a save rewrites every record in list
//! order, a load reads every record back. There is no incremental write.
//!
//! Loading is lenient. A store that cannot be read loads as empty and a
//! malformed line is skipped; both are logged. The trait is synchronous and
//! object safe so the session can hold a `&dyn Storage`.

mod error;
mod file;
mod memory;

use std::{
    fmt,
    path::{Path, PathBuf},
};

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;
use tracing::{debug, warn};

use crate::{
    book::Book,
    borrow::Borrow,
    client::Client,
    codec::Record,
    library::Library,
    list::RecordList,
};

/// One of the three persisted stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreKind {
    /// Registered clients
    Clients,
    /// Book catalogue
    Books,
    /// Open borrows
    Borrows,
}

impl StoreKind {
    /// Every store, in load order.
    pub const ALL: [Self; 3] = [Self::Clients, Self::Books, Self::Borrows];
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clients => "clients",
            Self::Books => "books",
            Self::Borrows => "borrows",
        })
    }
}

/// Locations of the three data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    /// Client records
    pub client: PathBuf,
    /// Book records
    pub book: PathBuf,
    /// Borrow records
    pub borrow: PathBuf,
}

impl DataFiles {
    /// Default file names `client`, `book` and `borrow` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self { client: dir.join("client"), book: dir.join("book"), borrow: dir.join("borrow") }
    }

    /// Path backing one store.
    pub fn path(&self, kind: StoreKind) -> &Path {
        match kind {
            StoreKind::Clients => &self.client,
            StoreKind::Books => &self.book,
            StoreKind::Borrows => &self.borrow,
        }
    }
}

impl Default for DataFiles {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// Persistence backend for a [`Library`].
///
/// # Invariants
///
/// - A save replaces the previous contents of that store entirely.
/// - A load returns records in the order they were saved.
pub trait Storage {
    /// Load the client store.
    fn load_clients(&self) -> Result<RecordList<Client>, StorageError>;

    /// Load the book store.
    fn load_books(&self) -> Result<RecordList<Book>, StorageError>;

    /// Load the borrow store.
    fn load_borrows(&self) -> Result<RecordList<Borrow>, StorageError>;

    /// Rewrite the client store.
    fn save_clients(&self, clients: &RecordList<Client>) -> Result<(), StorageError>;

    /// Rewrite the book store.
    fn save_books(&self, books: &RecordList<Book>) -> Result<(), StorageError>;

    /// Rewrite the borrow store.
    fn save_borrows(&self, borrows: &RecordList<Borrow>) -> Result<(), StorageError>;

    /// Load all three stores into a library.
    ///
    /// File order is kept. A client or book store that is not sorted by its
    /// key is accepted but logged, since later inserts assume sorted input.
    fn load_library(&self) -> Result<Library, StorageError> {
        let clients = self.load_clients()?;
        let books = self.load_books()?;
        let borrows = self.load_borrows()?;

        if !is_sorted_by(&clients, |c| c.student_number.as_str()) {
            warn!("client store is not sorted by student number");
        }
        if !is_sorted_by(&books, |b| b.isbn.as_str()) {
            warn!("book store is not sorted by ISBN");
        }

        debug!(
            clients = clients.len(),
            books = books.len(),
            borrows = borrows.len(),
            "library loaded"
        );
        Ok(Library::from_lists(clients, books, borrows))
    }

    /// Rewrite one store from `library`.
    fn save(&self, kind: StoreKind, library: &Library) -> Result<(), StorageError> {
        match kind {
            StoreKind::Clients => self.save_clients(library.clients()),
            StoreKind::Books => self.save_books(library.books()),
            StoreKind::Borrows => self.save_borrows(library.borrows()),
        }
    }

    /// Rewrite all three stores.
    ///
    /// Every store is attempted; the first failure is returned.
    fn save_library(&self, library: &Library) -> Result<(), StorageError> {
        let mut first_error = None;
        for kind in StoreKind::ALL {
            if let Err(error) = self.save(kind, library) {
                warn!(store = %kind, %error, "save failed");
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Whether `list` is ascending by `key`.
pub fn is_sorted_by<T, K, F>(list: &RecordList<T>, mut key: F) -> bool
where
    K: Ord + ?Sized,
    F: FnMut(&T) -> &K,
{
    let mut items = list.iter();
    let Some(mut previous) = items.next() else {
        return true;
    };
    for item in items {
        if key(previous) > key(item) {
            return false;
        }
        previous = item;
    }
    true
}

/// Parse every line of `text`, skipping blank and malformed ones.
pub(crate) fn decode_records<T: Record>(text: &str, source: &str) -> RecordList<T> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match T::decode(line) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(
                    kind = T::KIND,
                    source,
                    line = index + 1,
                    %error,
                    "skipping malformed record"
                );
                None
            },
        })
        .collect()
}

/// Encode `records` one per line, each newline-terminated.
pub(crate) fn encode_records<T: Record>(records: &RecordList<T>) -> String {
    let mut text = String::new();
    for record in records {
        text.push_str(&record.encode());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::RecordError;

    #[test]
    fn malformed_lines_are_skipped() {
        let text = "1 | pw | a | b | c |\n\ngarbage\n2 | pw | a | b | c |\n";
        let clients: RecordList<Client> = decode_records(text, "test");
        let keys: Vec<_> = clients.iter().map(|c| c.student_number.as_str()).collect();
        assert_eq!(keys, vec!["1", "2"]);
        assert!(matches!(Client::decode("garbage"), Err(RecordError::MissingTerminator { .. })));
    }

    #[test]
    fn encode_is_newline_terminated() {
        let clients: RecordList<Client> =
            std::iter::once(Client::new("1", "pw", "a", "b", "c")).collect();
        assert_eq!(encode_records(&clients), "1 | pw | a | b | c |\n");
    }

    #[test]
    fn sortedness_check() {
        let list: RecordList<&str> = ["a", "b", "b", "c"].into_iter().collect();
        assert!(is_sorted_by(&list, |s| *s));
        let list: RecordList<&str> = ["b", "a"].into_iter().collect();
        assert!(!is_sorted_by(&list, |s| *s));
        assert!(is_sorted_by(&RecordList::<&str>::new(), |s| *s));
    }

    #[test]
    fn data_files_default_names() {
        let files = DataFiles::in_dir("/data");
        assert_eq!(files.path(StoreKind::Clients), Path::new("/data/client"));
        assert_eq!(files.path(StoreKind::Books), Path::new("/data/book"));
        assert_eq!(files.path(StoreKind::Borrows), Path::new("/data/borrow"));
    }
}
