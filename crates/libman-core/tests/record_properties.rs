//! Property-based tests for the text record codec.

use libman_core::{Availability, Book, Borrow, Client, Record, RecordError};
use proptest::prelude::*;

/// Any text the codec keeps intact as a record's final field.
fn last_field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.|-]{0,20}".prop_filter("holds the separator", |s| !s.contains(" | "))
}

/// Any text the codec keeps intact in an earlier field.
fn field() -> impl Strategy<Value = String> {
    last_field().prop_filter("ends like a terminator", |s| !s.ends_with(" |"))
}

fn client_strategy() -> impl Strategy<Value = Client> {
    (field(), field(), field(), field(), last_field())
        .prop_map(|(sn, pw, name, address, phone)| Client::new(sn, pw, name, address, phone))
}

fn book_strategy() -> impl Strategy<Value = Book> {
    (field(), field(), field(), field(), field(), field(), any::<bool>()).prop_map(
        |(number, name, publisher, author, isbn, location, available)| Book {
            number,
            isbn,
            availability: if available { Availability::Available } else { Availability::OnLoan },
            name,
            publisher,
            author,
            location,
        },
    )
}

fn borrow_strategy() -> impl Strategy<Value = Borrow> {
    (field(), field(), field(), any::<i64>(), any::<i64>()).prop_map(
        |(student_number, book_name, book_number, loaned_at, due_at)| Borrow {
            student_number,
            book_name,
            book_number,
            loaned_at,
            due_at,
        },
    )
}

proptest! {
    #[test]
    fn prop_client_round_trips(client in client_strategy()) {
        prop_assert_eq!(Client::decode(&client.encode()).unwrap(), client);
    }

    #[test]
    fn prop_book_round_trips(book in book_strategy()) {
        prop_assert_eq!(Book::decode(&book.encode()).unwrap(), book);
    }

    #[test]
    fn prop_borrow_round_trips(borrow in borrow_strategy()) {
        prop_assert_eq!(Borrow::decode(&borrow.encode()).unwrap(), borrow);
    }

    /// Dropping the trailing delimiter always fails to decode.
    #[test]
    fn prop_unterminated_lines_are_rejected(client in client_strategy()) {
        let line = client.encode();
        let cut = line.strip_suffix(" |").unwrap();
        // A phone number ending in " |" still leaves a terminated line
        prop_assume!(!cut.ends_with(" |"));
        prop_assert!(
            matches!(Client::decode(cut), Err(RecordError::MissingTerminator { .. })),
            "{:?} decoded without its terminator", cut
        );
    }

    /// Decoding never panics on arbitrary text.
    #[test]
    fn prop_decode_total(line in ".{0,120}") {
        let _ = Client::decode(&line);
        let _ = Book::decode(&line);
        let _ = Borrow::decode(&line);
    }
}
