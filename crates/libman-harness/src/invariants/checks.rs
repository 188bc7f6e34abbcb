//! Standard library invariants.
//!
//! These capture what must be true of the stores after any sequence of
//! operations, not the outcome of one scenario.

use std::collections::HashSet;

use libman_core::{BOOK_NUMBER_WIDTH, parse_book_number};

use super::{Invariant, InvariantResult, LibrarySnapshot};

/// Client list is ascending by student number.
///
/// Registration inserts in order; lookups and the saved file rely on it.
pub struct ClientsSortedByStudentNumber;

impl Invariant for ClientsSortedByStudentNumber {
    fn name(&self) -> &'static str {
        "clients_sorted_by_student_number"
    }

    fn check(&self, state: &LibrarySnapshot) -> InvariantResult {
        for pair in state.student_numbers.windows(2) {
            if pair[0] > pair[1] {
                return Err(self.violation(format!("{:?} listed before {:?}", pair[0], pair[1])));
            }
        }
        Ok(())
    }
}

/// Catalogue is ascending by ISBN.
pub struct BooksSortedByIsbn;

impl Invariant for BooksSortedByIsbn {
    fn name(&self) -> &'static str {
        "books_sorted_by_isbn"
    }

    fn check(&self, state: &LibrarySnapshot) -> InvariantResult {
        for pair in state.books.windows(2) {
            if pair[0].isbn > pair[1].isbn {
                return Err(self.violation(format!(
                    "ISBN {:?} listed before {:?}",
                    pair[0].isbn, pair[1].isbn
                )));
            }
        }
        Ok(())
    }
}

/// No two clients share a student number.
pub struct UniqueStudentNumbers;

impl Invariant for UniqueStudentNumbers {
    fn name(&self) -> &'static str {
        "unique_student_numbers"
    }

    fn check(&self, state: &LibrarySnapshot) -> InvariantResult {
        let mut seen = HashSet::new();
        for student_number in &state.student_numbers {
            if !seen.insert(student_number.as_str()) {
                return Err(self.violation(format!("{student_number:?} registered twice")));
            }
        }
        Ok(())
    }
}

/// No two books share an ISBN.
pub struct UniqueIsbns;

impl Invariant for UniqueIsbns {
    fn name(&self) -> &'static str {
        "unique_isbns"
    }

    fn check(&self, state: &LibrarySnapshot) -> InvariantResult {
        let mut seen = HashSet::new();
        for book in &state.books {
            if !seen.insert(book.isbn.as_str()) {
                return Err(self.violation(format!("ISBN {:?} catalogued twice", book.isbn)));
            }
        }
        Ok(())
    }
}

/// Catalogue numbers are distinct, zero-padded and all digits.
pub struct BookNumbersWellFormed;

impl Invariant for BookNumbersWellFormed {
    fn name(&self) -> &'static str {
        "book_numbers_well_formed"
    }

    fn check(&self, state: &LibrarySnapshot) -> InvariantResult {
        let mut seen = HashSet::new();
        for book in &state.books {
            let Some(value) = parse_book_number(&book.number) else {
                return Err(self.violation(format!("{:?} is not a number", book.number)));
            };
            if book.number.len() != BOOK_NUMBER_WIDTH {
                return Err(self.violation(format!(
                    "{:?} is not {BOOK_NUMBER_WIDTH} digits",
                    book.number
                )));
            }
            if value == 0 || !seen.insert(value) {
                return Err(self.violation(format!("number {:?} reused or zero", book.number)));
            }
        }
        Ok(())
    }
}

/// A book is on loan exactly when one open borrow names it.
///
/// Also requires every borrow to name a registered client and a catalogued
/// book, since neither can be removed while a loan is open.
pub struct AvailabilityConsistency;

impl Invariant for AvailabilityConsistency {
    fn name(&self) -> &'static str {
        "availability_consistency"
    }

    fn check(&self, state: &LibrarySnapshot) -> InvariantResult {
        for book in &state.books {
            let wanted = parse_book_number(&book.number);
            let loans = state
                .borrows
                .iter()
                .filter(|borrow| parse_book_number(&borrow.book_number) == wanted)
                .count();
            match (book.on_loan, loans) {
                (false, 0) | (true, 1) => {},
                (on_loan, loans) => {
                    return Err(self.violation(format!(
                        "book {} on_loan={on_loan} with {loans} open borrow(s)",
                        book.number
                    )));
                },
            }
        }

        for borrow in &state.borrows {
            if !state.student_numbers.contains(&borrow.student_number) {
                return Err(self.violation(format!(
                    "borrow of {} by unknown client {}",
                    borrow.book_number, borrow.student_number
                )));
            }
            let wanted = parse_book_number(&borrow.book_number);
            if !state.books.iter().any(|book| parse_book_number(&book.number) == wanted) {
                return Err(self.violation(format!(
                    "borrow by {} of uncatalogued book {}",
                    borrow.student_number, borrow.book_number
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{BookSnapshot, BorrowSnapshot};

    fn book(number: &str, isbn: &str, on_loan: bool) -> BookSnapshot {
        BookSnapshot { number: number.into(), isbn: isbn.into(), on_loan }
    }

    #[test]
    fn unsorted_isbns_are_reported() {
        let state = LibrarySnapshot {
            books: vec![book("0000001", "9", false), book("0000002", "1", false)],
            ..LibrarySnapshot::default()
        };
        assert!(BooksSortedByIsbn.check(&state).is_err());
        assert!(UniqueIsbns.check(&state).is_ok());
    }

    #[test]
    fn short_book_numbers_are_reported() {
        let state =
            LibrarySnapshot { books: vec![book("12", "1", false)], ..LibrarySnapshot::default() };
        assert!(BookNumbersWellFormed.check(&state).is_err());
    }

    #[test]
    fn loan_flag_must_match_borrows() {
        let mut state = LibrarySnapshot {
            student_numbers: vec!["20180001".into()],
            books: vec![book("0000001", "1", true)],
            borrows: Vec::new(),
        };
        assert!(AvailabilityConsistency.check(&state).is_err());

        state.borrows.push(BorrowSnapshot {
            student_number: "20180001".into(),
            book_number: "0000001".into(),
        });
        assert!(AvailabilityConsistency.check(&state).is_ok());

        state.student_numbers.clear();
        assert!(AvailabilityConsistency.check(&state).is_err());
    }
}
