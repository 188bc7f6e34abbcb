//! Fuzz target for record line decoding
//!
//! # Strategy
//!
//! - Raw lines: arbitrary text fed to every entity decoder
//! - Whole stores: arbitrary multi-line text loaded through storage
//!
//! # Invariants
//!
//! - Decoding NEVER panics
//! - A decoded record re-encodes to a line that decodes to the same record
//! - Loading a store never fails, whatever the text

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use libman_core::{Book, Borrow, Client, MemoryStorage, Record, Storage, StoreKind};

#[derive(Debug, Arbitrary)]
enum Input {
    Line(String),
    Store { kind: u8, text: String },
}

fn check<T: Record + PartialEq + std::fmt::Debug>(line: &str) {
    if let Ok(record) = T::decode(line) {
        let again = T::decode(&record.encode()).expect("re-encoded record must decode");
        assert_eq!(again, record);
    }
}

fuzz_target!(|input: Input| {
    match input {
        Input::Line(line) => {
            check::<Client>(&line);
            check::<Book>(&line);
            check::<Borrow>(&line);
        }
        Input::Store { kind, text } => {
            let kind = StoreKind::ALL[usize::from(kind) % StoreKind::ALL.len()];
            let storage = MemoryStorage::new().with_text(kind, text);
            storage.load_library().expect("loading never fails");
        }
    }
});
