//! Consistency rules for a library at rest.
//!
//! A refused loan, a duplicate sign-up or a reload from disk must all leave
//! the clients, books and borrows agreeing with each other. The rules here
//! say what "agreeing" means; property tests and fuzz targets run them after
//! every step.
//!
//! Rules read a [`LibrarySnapshot`] rather than the [`libman_core::Library`]
//! itself, so a test can also hand-build a broken state and check that the
//! rule notices.
//!
//! ```
//! use libman_core::Library;
//! use libman_harness::{InvariantRegistry, LibrarySnapshot};
//!
//! let snapshot = LibrarySnapshot::from_library(&Library::new());
//! assert!(InvariantRegistry::standard().check_all(&snapshot).is_ok());
//! ```

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{
    AvailabilityConsistency, BookNumbersWellFormed, BooksSortedByIsbn,
    ClientsSortedByStudentNumber, UniqueIsbns, UniqueStudentNumbers,
};
pub use snapshot::{BookSnapshot, BorrowSnapshot, LibrarySnapshot};

/// Outcome of one rule.
pub type InvariantResult = Result<(), Violation>;

/// A broken rule and the record that broke it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Rule name, e.g. `unique_isbns`.
    pub invariant: &'static str,
    /// The offending key or record.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// One consistency rule over the three stores.
pub trait Invariant {
    /// Stable snake_case name, used in failure output.
    fn name(&self) -> &'static str;

    /// Inspect `state`; report the first offending record.
    fn check(&self, state: &LibrarySnapshot) -> InvariantResult;

    /// Violation of this rule carrying `message`.
    fn violation(&self, message: String) -> Violation {
        Violation { invariant: self.name(), message }
    }
}

/// The set of rules a library is held to.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// No rules at all.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Sort order and key uniqueness for clients and books, well-formed
    /// catalogue numbers, and loans matching book availability.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(ClientsSortedByStudentNumber);
        registry.add(BooksSortedByIsbn);
        registry.add(UniqueStudentNumbers);
        registry.add(UniqueIsbns);
        registry.add(BookNumbersWellFormed);
        registry.add(AvailabilityConsistency);
        registry
    }

    /// Hold the library to one more rule.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Run every rule; collect one violation per broken rule, in rule order.
    pub fn check_all(&self, state: &LibrarySnapshot) -> Result<(), Vec<Violation>> {
        let mut broken = Vec::new();
        for rule in &self.invariants {
            if let Err(violation) = rule.check(state) {
                broken.push(violation);
            }
        }
        if broken.is_empty() { Ok(()) } else { Err(broken) }
    }

    /// Fail the calling test if any rule is broken.
    ///
    /// `context` names the step, e.g. `"after session"` or `"op 12"`.
    #[allow(clippy::panic)]
    pub fn assert_all(&self, state: &LibrarySnapshot, context: &str) {
        if let Err(broken) = self.check_all(state) {
            let listed: Vec<_> = broken.iter().map(ToString::to_string).collect();
            panic!("library inconsistent {context}:\n  {}", listed.join("\n  "));
        }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
