//! Observable library state for invariant checking.
//!
//! Snapshots copy the keys and flags the invariants look at, so checks run
//! against a consistent view without borrowing the live library.

use libman_core::{Availability, Library};

/// Keys and flags of every record, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibrarySnapshot {
    /// Student numbers in client list order.
    pub student_numbers: Vec<String>,
    /// Books in catalogue order.
    pub books: Vec<BookSnapshot>,
    /// Borrows in list order.
    pub borrows: Vec<BorrowSnapshot>,
}

/// What the invariants need from one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSnapshot {
    /// Catalogue number as stored.
    pub number: String,
    /// ISBN as stored.
    pub isbn: String,
    /// Whether the book is marked on loan.
    pub on_loan: bool,
}

/// What the invariants need from one borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowSnapshot {
    /// Borrowing client.
    pub student_number: String,
    /// Borrowed catalogue number.
    pub book_number: String,
}

impl LibrarySnapshot {
    /// Capture the current state of `library`.
    pub fn from_library(library: &Library) -> Self {
        Self {
            student_numbers: library
                .clients()
                .iter()
                .map(|client| client.student_number.clone())
                .collect(),
            books: library
                .books()
                .iter()
                .map(|book| BookSnapshot {
                    number: book.number.clone(),
                    isbn: book.isbn.clone(),
                    on_loan: book.availability == Availability::OnLoan,
                })
                .collect(),
            borrows: library
                .borrows()
                .iter()
                .map(|borrow| BorrowSnapshot {
                    student_number: borrow.student_number.clone(),
                    book_number: borrow.book_number.clone(),
                })
                .collect(),
        }
    }
}
