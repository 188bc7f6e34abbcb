//! Fuzz target for entity store operations
//!
//! # Strategy
//!
//! Arbitrary sequences of register, remove, lend, return and clock moves
//! against one library.
//!
//! # Invariants
//!
//! - Every standard invariant holds after every operation
//! - A refused operation leaves the library unchanged

#![no_main]

use libfuzzer_sys::fuzz_target;
use libman_core::Library;
use libman_harness::{FixedClock, InvariantRegistry, LibrarySnapshot, Operation, Outcome};

fuzz_target!(|ops: Vec<Operation>| {
    let clock = FixedClock::default();
    let mut library = Library::new();
    let invariants = InvariantRegistry::standard();

    for op in ops.into_iter().take(256) {
        let before = library.clone();
        if let Outcome::Refused(_) = op.apply(&mut library, &clock) {
            assert_eq!(library, before, "{op:?} was refused but changed the library");
        }
        invariants.assert_all(&LibrarySnapshot::from_library(&library), &format!("after {op:?}"));
    }
});
