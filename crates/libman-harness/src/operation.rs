//! Operations for model-based testing.
//!
//! Operations are the library mutations a session can trigger. They are
//! generated by proptest or the fuzzer and applied to a real
//! [`Library`]; the invariants are then checked whatever the outcome.

use arbitrary::Arbitrary;
use chrono::TimeDelta;
use libman_core::{Client, Clock, Library, LibraryError, NewBook, ProfileField};
use tracing::debug;

use crate::sim_clock::FixedClock;

/// Client identifier. Kept small so operations collide on the same keys.
pub type ClientId = u8;

/// Book identifier. Kept small for the same reason.
pub type BookId = u8;

/// Distinct clients the identifiers map onto.
pub const CLIENT_POOL: u8 = 16;

/// Distinct ISBNs the identifiers map onto.
pub const BOOK_POOL: u8 = 16;

/// Operations that can be applied to a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Sign up a member.
    RegisterClient {
        /// Member to register.
        client: ClientId,
    },

    /// Withdraw a member.
    RemoveClient {
        /// Member to remove.
        client: ClientId,
    },

    /// Change a member's phone number.
    UpdatePhone {
        /// Member to edit.
        client: ClientId,
        /// Length of the new number; above 13 is refused.
        digits: u8,
    },

    /// Catalogue a book.
    RegisterBook {
        /// Book to add, by ISBN.
        book: BookId,
    },

    /// Take a book out of the catalogue.
    RemoveBook {
        /// Book to remove, by ISBN.
        book: BookId,
    },

    /// Lend a book.
    Lend {
        /// Borrowing member.
        client: ClientId,
        /// Book to lend, by ISBN.
        book: BookId,
    },

    /// Take a book back.
    Return {
        /// Returning member.
        client: ClientId,
        /// Book returned, by ISBN.
        book: BookId,
    },

    /// Let time pass between loans.
    Advance {
        /// Days to move the clock.
        days: u8,
    },
}

/// Outcome of one applied operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The library accepted the change.
    Applied,
    /// The library refused and must be unchanged.
    Refused(LibraryError),
}

impl Operation {
    /// Apply to `library`, stamping loans with `clock`.
    pub fn apply(self, library: &mut Library, clock: &FixedClock) -> Outcome {
        let result = match self {
            Self::RegisterClient { client } => {
                library.register_client(client_for(client)).map(|_| ())
            },
            Self::RemoveClient { client } => {
                library.remove_client(&student_number(client)).map(|_| ())
            },
            Self::UpdatePhone { client, digits } => library.update_profile(
                &student_number(client),
                ProfileField::PhoneNumber,
                "0".repeat(usize::from(digits % 16)),
            ),
            Self::RegisterBook { book } => library.register_book(book_for(book)).map(|_| ()),
            Self::RemoveBook { book } => {
                let number = catalogue_number(library, book);
                library.remove_book(&number).map(|_| ())
            },
            Self::Lend { client, book } => {
                let number = catalogue_number(library, book);
                library.lend_book(&student_number(client), &number, clock.now()).map(|_| ())
            },
            Self::Return { client, book } => {
                let number = catalogue_number(library, book);
                library.return_book(&student_number(client), &number).map(|_| ())
            },
            Self::Advance { days } => {
                clock.advance(TimeDelta::days(i64::from(days % 8)));
                Ok(())
            },
        };

        match result {
            Ok(()) => Outcome::Applied,
            Err(err) => {
                debug!(op = ?self, error = %err, "operation refused");
                Outcome::Refused(err)
            },
        }
    }
}

/// Student number for `id`, e.g. `20180003`.
pub fn student_number(id: ClientId) -> String {
    format!("2018{:04}", id % CLIENT_POOL)
}

/// ISBN for `id`, 13 digits.
pub fn isbn(id: BookId) -> String {
    format!("97800000{:05}", id % BOOK_POOL)
}

/// Member registered for `id`.
pub fn client_for(id: ClientId) -> Client {
    Client::new(student_number(id), "1234", format!("member {id}"), "Sangdo-dong", "01012345678")
}

/// Book catalogued for `id`.
pub fn book_for(id: BookId) -> NewBook {
    NewBook {
        name: format!("C Programming {id}"),
        publisher: "Acme".into(),
        author: "Kim".into(),
        isbn: isbn(id),
        location: "Shelf3".into(),
    }
}

/// Catalogue number of the book with `id`'s ISBN, or a number never issued.
fn catalogue_number(library: &Library, id: BookId) -> String {
    library
        .find_books_by_isbn(&isbn(id))
        .iter()
        .next()
        .map_or_else(|| "9999999".to_owned(), |book| book.number.clone())
}
