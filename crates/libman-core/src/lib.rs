//! Core record store for the library manager.
//!
//! Everything the interactive session mutates lives here: the three entity
//! types, the singly-linked [`RecordList`] that holds them, the [`Library`]
//! that enforces the domain rules on top of those lists, and the [`Storage`]
//! backends that move a library to and from pipe-delimited text files.
//!
//! # Components
//!
//! - [`codec`]: one entity per line, fields separated by `" | "`
//! - [`RecordList`]: sorted insert, head insert, linear find, filter, remove
//! - [`Library`]: clients, books and borrows with their invariants
//! - [`storage`]: [`FileStorage`] for production, [`MemoryStorage`] for tests
//! - [`Clock`]: wall-clock source used to stamp loans

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod book;
mod borrow;
mod client;
mod clock;
pub mod codec;
mod library;
mod list;
pub mod storage;

pub use book::{
    Availability, BOOK_NUMBER_WIDTH, Book, BookField, ISBN_WIDTH, NewBook, parse_book_number,
};
pub use borrow::{Borrow, LOAN_DAYS, format_date};
pub use client::{ADMIN_ID, Client, PHONE_NUMBER_WIDTH, ProfileField, STUDENT_NUMBER_WIDTH};
pub use clock::{Clock, SystemClock};
pub use codec::{Record, RecordError};
pub use library::{Library, LibraryError};
pub use list::{IntoIter, Iter, IterMut, RecordList};
pub use storage::{DataFiles, FileStorage, MemoryStorage, Storage, StorageError, StoreKind};
