//! Deterministic test harness for the library manager.
//!
//! Test doubles that stand in for the terminal, the wall clock and a failing
//! disk, so the production [`libman_app::Runtime`] can be driven end to end
//! from a script.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks properties that must hold after any
//! sequence of operations: key order, key uniqueness and the agreement
//! between book availability and open borrows. Use
//! [`InvariantRegistry::standard()`] for the full set.
//!
//! # Model-Based Testing
//!
//! [`Operation`] is a small, arbitrary-derivable vocabulary of library
//! mutations for fuzzing and property tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod faulty_storage;
pub mod fixtures;
pub mod invariants;
pub mod operation;
pub mod scripted_driver;
pub mod sim_clock;

pub use faulty_storage::FaultyStorage;
pub use invariants::{
    AvailabilityConsistency, BookNumbersWellFormed, BookSnapshot, BooksSortedByIsbn,
    BorrowSnapshot, ClientsSortedByStudentNumber, Invariant, InvariantRegistry, InvariantResult,
    LibrarySnapshot, UniqueIsbns, UniqueStudentNumbers, Violation,
};
pub use operation::{BookId, ClientId, Operation, Outcome};
pub use scripted_driver::ScriptedDriver;
pub use sim_clock::FixedClock;
