//! Entity store.
//!
//! [`Library`] owns the three record lists and is the only place they are
//! mutated. Every operation either commits completely or returns a
//! [`LibraryError`] with the store untouched.
//!
//! # Invariants
//!
//! - Clients are sorted ascending by student number, with unique keys.
//! - Books are sorted ascending by ISBN, with unique keys.
//! - A book is on loan iff exactly one borrow references its number.
//! - Borrows are newest first.
//!
//! Removing a book leaves its borrows alone; they carry a copy of the title.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    book::{
        Availability, BOOK_NUMBER_WIDTH, Book, BookField, ISBN_WIDTH, NewBook, format_book_number,
        parse_book_number,
    },
    borrow::Borrow,
    client::{Client, PHONE_NUMBER_WIDTH, ProfileField, STUDENT_NUMBER_WIDTH},
    list::RecordList,
};

/// Largest catalogue number that fits in [`BOOK_NUMBER_WIDTH`] digits.
const MAX_BOOK_NUMBER: u32 = 9_999_999;

/// Domain rule violations reported by [`Library`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Student number already registered
    #[error("student number {0} is already registered")]
    DuplicateStudentNumber(String),

    /// ISBN already in the catalogue
    #[error("ISBN {0} is already registered")]
    DuplicateIsbn(String),

    /// No client with this student number
    #[error("no client with student number {0}")]
    ClientNotFound(String),

    /// No book with this catalogue number
    #[error("no book with number {0}")]
    BookNotFound(String),

    /// Book is already lent out
    #[error("book {0} is already on loan")]
    BookUnavailable(String),

    /// Book cannot be removed while lent out
    #[error("book {0} is on loan and cannot be removed")]
    BookOnLoan(String),

    /// No open borrow for this client and book
    #[error("{student_number} has not borrowed book {book_number}")]
    BorrowNotFound {
        /// Borrowing client
        student_number: String,
        /// Catalogue number
        book_number: String,
    },

    /// Client still holds books
    #[error("{student_number} still has {count} book(s) on loan")]
    OpenBorrows {
        /// Client asked to leave
        student_number: String,
        /// Open borrow count
        count: usize,
    },

    /// Every catalogue number is taken
    #[error("book numbers are exhausted")]
    BookNumbersExhausted,

    /// Field exceeds its fixed width
    #[error("{field} must be at most {max} characters")]
    FieldTooLong {
        /// Field name
        field: &'static str,
        /// Maximum length in characters
        max: usize,
    },

    /// Required field left blank
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// The in-memory clients, books and borrows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Library {
    clients: RecordList<Client>,
    books: RecordList<Book>,
    borrows: RecordList<Borrow>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a library from lists loaded elsewhere, in their given order.
    pub fn from_lists(
        clients: RecordList<Client>,
        books: RecordList<Book>,
        borrows: RecordList<Borrow>,
    ) -> Self {
        Self { clients, books, borrows }
    }

    /// Registered clients, ascending by student number.
    pub fn clients(&self) -> &RecordList<Client> {
        &self.clients
    }

    /// Catalogue, ascending by ISBN.
    pub fn books(&self) -> &RecordList<Book> {
        &self.books
    }

    /// Open borrows, newest first.
    pub fn borrows(&self) -> &RecordList<Borrow> {
        &self.borrows
    }

    /// Look up a client by student number.
    pub fn find_client(&self, student_number: &str) -> Option<&Client> {
        self.clients.find(|client| client.student_number == student_number)
    }

    /// Whether `student_number` could be registered right now.
    pub fn check_new_student_number(&self, student_number: &str) -> Result<(), LibraryError> {
        require("student number", student_number)?;
        fits("student number", student_number, STUDENT_NUMBER_WIDTH)?;
        if self.find_client(student_number).is_some() {
            return Err(LibraryError::DuplicateStudentNumber(student_number.to_owned()));
        }
        Ok(())
    }

    /// Add a client, keeping the list sorted by student number.
    pub fn register_client(&mut self, client: Client) -> Result<&Client, LibraryError> {
        self.check_new_student_number(&client.student_number)?;
        fits("phone number", &client.phone_number, PHONE_NUMBER_WIDTH)?;

        info!(student_number = %client.student_number, "client registered");
        Ok(&*self
            .clients
            .insert_sorted_by(client, |a, b| a.student_number.cmp(&b.student_number)))
    }

    /// Overwrite one profile field of an existing client.
    pub fn update_profile(
        &mut self,
        student_number: &str,
        field: ProfileField,
        value: String,
    ) -> Result<(), LibraryError> {
        if let Some(max) = field.max_len() {
            fits("phone number", &value, max)?;
        }

        let client = self
            .clients
            .find_mut(|client| client.student_number == student_number)
            .ok_or_else(|| LibraryError::ClientNotFound(student_number.to_owned()))?;
        client.set_profile(field, value);

        info!(%student_number, %field, "profile updated");
        Ok(())
    }

    /// Remove a client who holds no books.
    pub fn remove_client(&mut self, student_number: &str) -> Result<Client, LibraryError> {
        if self.find_client(student_number).is_none() {
            return Err(LibraryError::ClientNotFound(student_number.to_owned()));
        }

        let count = self.borrows_of(student_number).len();
        if count > 0 {
            return Err(LibraryError::OpenBorrows {
                student_number: student_number.to_owned(),
                count,
            });
        }

        let removed = self
            .clients
            .remove_first(|client| client.student_number == student_number)
            .ok_or_else(|| LibraryError::ClientNotFound(student_number.to_owned()))?;

        info!(%student_number, "client removed");
        Ok(removed)
    }

    /// Catalogue number the next registered book will receive.
    ///
    /// One past the largest numeric catalogue number, or `0000001` for an
    /// empty catalogue. Numbers that do not parse are ignored.
    pub fn next_book_number(&self) -> Result<String, LibraryError> {
        let max = self.books.iter().filter_map(Book::number_value).max().unwrap_or(0);
        if max >= MAX_BOOK_NUMBER {
            return Err(LibraryError::BookNumbersExhausted);
        }
        Ok(format_book_number(max + 1))
    }

    /// Add a book under the next free number, marked available.
    pub fn register_book(&mut self, new: NewBook) -> Result<&Book, LibraryError> {
        require("ISBN", &new.isbn)?;
        fits("ISBN", &new.isbn, ISBN_WIDTH)?;
        if self.books.find(|book| book.isbn == new.isbn).is_some() {
            return Err(LibraryError::DuplicateIsbn(new.isbn));
        }

        let number = self.next_book_number()?;
        debug_assert_eq!(number.len(), BOOK_NUMBER_WIDTH);

        let book = new.into_book(number);
        info!(number = %book.number, isbn = %book.isbn, "book registered");
        Ok(&*self.books.insert_sorted_by(book, |a, b| a.isbn.cmp(&b.isbn)))
    }

    /// Look up a book by catalogue number, ignoring zero padding.
    ///
    /// Text that is not a number never matches.
    pub fn find_book_by_number(&self, number: &str) -> Option<&Book> {
        let wanted = parse_book_number(number)?;
        self.books.find(|book| book.number_value() == Some(wanted))
    }

    /// Every book whose `field` equals `needle` exactly, in catalogue order.
    pub fn find_books(&self, field: BookField, needle: &str) -> RecordList<&Book> {
        debug!(%field, needle, "book search");
        self.books.filter(|book| book.field(field) == needle)
    }

    /// Books with exactly this title.
    pub fn find_books_by_name(&self, name: &str) -> RecordList<&Book> {
        self.find_books(BookField::Name, name)
    }

    /// Books by exactly this author.
    pub fn find_books_by_author(&self, author: &str) -> RecordList<&Book> {
        self.find_books(BookField::Author, author)
    }

    /// Books from exactly this publisher.
    pub fn find_books_by_publisher(&self, publisher: &str) -> RecordList<&Book> {
        self.find_books(BookField::Publisher, publisher)
    }

    /// Books with exactly this ISBN.
    pub fn find_books_by_isbn(&self, isbn: &str) -> RecordList<&Book> {
        self.find_books(BookField::Isbn, isbn)
    }

    /// Remove a book that is on the shelf.
    ///
    /// Borrows that mention the book are left as they are.
    pub fn remove_book(&mut self, number: &str) -> Result<Book, LibraryError> {
        let book = self
            .find_book_by_number(number)
            .ok_or_else(|| LibraryError::BookNotFound(number.to_owned()))?;
        if !book.availability.is_available() {
            return Err(LibraryError::BookOnLoan(book.number.clone()));
        }

        let wanted = book.number_value();
        let removed = self
            .books
            .remove_first(|book| book.number_value() == wanted)
            .ok_or_else(|| LibraryError::BookNotFound(number.to_owned()))?;

        info!(number = %removed.number, isbn = %removed.isbn, "book removed");
        Ok(removed)
    }

    /// Open borrows held by one client, newest first.
    pub fn borrows_of(&self, student_number: &str) -> RecordList<&Borrow> {
        self.borrows.filter(|borrow| borrow.student_number == student_number)
    }

    /// The open borrow of `book_number` by `student_number`, if any.
    pub fn find_borrow(&self, student_number: &str, book_number: &str) -> Option<&Borrow> {
        self.borrows.find(|borrow| {
            borrow.student_number == student_number
                && same_book_number(&borrow.book_number, book_number)
        })
    }

    /// Lend an available book to a client, stamping the loan with `now`.
    ///
    /// On any error the library is unchanged.
    pub fn lend_book(
        &mut self,
        student_number: &str,
        book_number: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<&Borrow, LibraryError> {
        let client = self
            .find_client(student_number)
            .ok_or_else(|| LibraryError::ClientNotFound(student_number.to_owned()))?;
        let book = self
            .find_book_by_number(book_number)
            .ok_or_else(|| LibraryError::BookNotFound(book_number.to_owned()))?;
        if !book.availability.is_available() {
            return Err(LibraryError::BookUnavailable(book.number.clone()));
        }

        let borrow = Borrow::new(client, book, now);
        let wanted = book.number_value();
        if let Some(book) = self.books.find_mut(|book| book.number_value() == wanted) {
            book.availability = Availability::OnLoan;
        }

        info!(
            student_number = %borrow.student_number,
            book_number = %borrow.book_number,
            due_at = borrow.due_at,
            "book lent"
        );
        Ok(&*self.borrows.push_front(borrow))
    }

    /// Close the borrow of `book_number` by `student_number`.
    ///
    /// The book goes back on the shelf if it is still catalogued. Other
    /// borrows are untouched.
    pub fn return_book(
        &mut self,
        student_number: &str,
        book_number: &str,
    ) -> Result<Borrow, LibraryError> {
        let borrow = self
            .borrows
            .remove_first(|borrow| {
                borrow.student_number == student_number
                    && same_book_number(&borrow.book_number, book_number)
            })
            .ok_or_else(|| LibraryError::BorrowNotFound {
                student_number: student_number.to_owned(),
                book_number: book_number.to_owned(),
            })?;

        let wanted = parse_book_number(&borrow.book_number);
        match self.books.find_mut(|book| wanted.is_some() && book.number_value() == wanted) {
            Some(book) => book.availability = Availability::Available,
            None => {
                warn!(book_number = %borrow.book_number, "returned book is no longer catalogued");
            },
        }

        info!(%student_number, book_number = %borrow.book_number, "book returned");
        Ok(borrow)
    }
}

/// Catalogue numbers are equal when their numeric values are, padding aside.
fn same_book_number(a: &str, b: &str) -> bool {
    match (parse_book_number(a), parse_book_number(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

fn require(field: &'static str, value: &str) -> Result<(), LibraryError> {
    if value.is_empty() {
        return Err(LibraryError::EmptyField(field));
    }
    Ok(())
}

fn fits(field: &'static str, value: &str, max: usize) -> Result<(), LibraryError> {
    if value.chars().count() > max {
        return Err(LibraryError::FieldTooLong { field, max });
    }
    Ok(())
}
