//! Property-based tests for the entity store.
//!
//! Random operation sequences are applied to a [`Library`] and every
//! invariant is checked after each step, whether the operation was
//! accepted or refused.

use libman_core::{Availability, Library, parse_book_number};
use libman_harness::{FixedClock, InvariantRegistry, LibrarySnapshot, Operation, Outcome};
use proptest::prelude::*;

fn op_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0u8..8).prop_map(|client| Operation::RegisterClient { client }),
        1 => (0u8..8).prop_map(|client| Operation::RemoveClient { client }),
        1 => (0u8..8, 0u8..16)
            .prop_map(|(client, digits)| Operation::UpdatePhone { client, digits }),
        3 => (0u8..8).prop_map(|book| Operation::RegisterBook { book }),
        1 => (0u8..8).prop_map(|book| Operation::RemoveBook { book }),
        4 => (0u8..8, 0u8..8).prop_map(|(client, book)| Operation::Lend { client, book }),
        3 => (0u8..8, 0u8..8).prop_map(|(client, book)| Operation::Return { client, book }),
        1 => (0u8..8).prop_map(|days| Operation::Advance { days }),
    ]
}

proptest! {
    /// Every invariant holds after every operation.
    #[test]
    fn prop_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let clock = FixedClock::default();
        let mut library = Library::new();
        let invariants = InvariantRegistry::standard();

        for op in ops {
            op.apply(&mut library, &clock);
            let snapshot = LibrarySnapshot::from_library(&library);
            prop_assert!(
                invariants.check_all(&snapshot).is_ok(),
                "Invariant violated after {:?}: {:?}", op, invariants.check_all(&snapshot)
            );
        }
    }

    /// A refused operation leaves the library exactly as it was.
    #[test]
    fn prop_refusals_change_nothing(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let clock = FixedClock::default();
        let mut library = Library::new();

        for op in ops {
            let before = library.clone();
            if let Outcome::Refused(err) = op.apply(&mut library, &clock) {
                prop_assert_eq!(
                    &library, &before, "{:?} refused with {} but changed state", op, err
                );
            }
        }
    }

    /// Catalogue numbers grow one past the largest ever seen.
    #[test]
    fn prop_next_book_number_is_max_plus_one(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let clock = FixedClock::default();
        let mut library = Library::new();
        for op in ops {
            op.apply(&mut library, &clock);
        }

        let max = library.books().iter().filter_map(|book| parse_book_number(&book.number)).max();
        let next = library.next_book_number().unwrap();
        prop_assert_eq!(parse_book_number(&next), Some(max.unwrap_or(0) + 1));
        prop_assert_eq!(next.len(), 7);
    }

    /// Lending flips exactly one book and adds exactly one borrow.
    #[test]
    fn prop_lend_changes_one_book(
        ops in prop::collection::vec(op_strategy(), 0..40),
        client in 0u8..8,
        book in 0u8..8,
    ) {
        let clock = FixedClock::default();
        let mut library = Library::new();
        for op in ops {
            op.apply(&mut library, &clock);
        }

        let on_loan = |library: &Library| {
            library.books().iter().filter(|b| b.availability == Availability::OnLoan).count()
        };
        let loans_before = on_loan(&library);
        let borrows_before = library.borrows().len();

        match (Operation::Lend { client, book }).apply(&mut library, &clock) {
            Outcome::Applied => {
                prop_assert_eq!(on_loan(&library), loans_before + 1);
                prop_assert_eq!(library.borrows().len(), borrows_before + 1);
            },
            Outcome::Refused(_) => {
                prop_assert_eq!(on_loan(&library), loans_before);
                prop_assert_eq!(library.borrows().len(), borrows_before);
            },
        }
    }
}
