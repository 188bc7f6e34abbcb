//! Plain-text file storage.
//!
//! One file per store, one record per line. A save truncates and rewrites
//! the file; a load reads it whole. Invalid UTF-8 is replaced rather than
//! rejected so one damaged line cannot hide the rest of the store.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::{debug, warn};

use super::{DataFiles, Storage, StorageError, StoreKind, decode_records, encode_records};
use crate::{book::Book, borrow::Borrow, client::Client, codec::Record, list::RecordList};

/// Storage backed by the three data files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    files: DataFiles,
}

impl FileStorage {
    /// Store records in `files`.
    pub fn new(files: DataFiles) -> Self {
        Self { files }
    }

    /// Paths of the backing files.
    pub fn files(&self) -> &DataFiles {
        &self.files
    }

    fn read_store<T: Record>(&self, kind: StoreKind) -> RecordList<T> {
        let path = self.files.path(kind);
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), store = %kind, "no data file, starting empty");
                return RecordList::new();
            },
            Err(error) => {
                warn!(
                    path = %path.display(),
                    store = %kind,
                    %error,
                    "cannot read data file, starting empty"
                );
                return RecordList::new();
            },
        };

        let text = String::from_utf8_lossy(&bytes);
        let records = decode_records(&text, &path.display().to_string());
        debug!(path = %path.display(), store = %kind, records = records.len(), "store loaded");
        records
    }

    fn write_store<T: Record>(
        &self,
        kind: StoreKind,
        records: &RecordList<T>,
    ) -> Result<(), StorageError> {
        let path = self.files.path(kind);
        write_file(path, encode_records(records).as_bytes())
            .map_err(|e| StorageError::io(path, &e))?;
        debug!(path = %path.display(), store = %kind, records = records.len(), "store saved");
        Ok(())
    }
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents)?;
    writer.flush()
}

impl Storage for FileStorage {
    fn load_clients(&self) -> Result<RecordList<Client>, StorageError> {
        Ok(self.read_store(StoreKind::Clients))
    }

    fn load_books(&self) -> Result<RecordList<Book>, StorageError> {
        Ok(self.read_store(StoreKind::Books))
    }

    fn load_borrows(&self) -> Result<RecordList<Borrow>, StorageError> {
        Ok(self.read_store(StoreKind::Borrows))
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
