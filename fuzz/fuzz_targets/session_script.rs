//! Fuzz target for the session loop
//!
//! # Strategy
//!
//! Arbitrary keystroke scripts, biased towards menu digits and known keys,
//! run through the production runtime with a scripted driver.
//!
//! # Invariants
//!
//! - The session always ends without an error (input runs out at worst)
//! - The library satisfies every standard invariant at the end

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use libman_harness::{InvariantRegistry, LibrarySnapshot, fixtures::runtime};

#[derive(Debug, Arbitrary)]
enum Key {
    Digit(u8),
    Yes,
    No,
    Admin,
    Password,
    StudentNumber(u8),
    BookNumber(u8),
    Isbn(u8),
    Text(String),
}

impl Key {
    fn line(&self) -> String {
        match self {
            Self::Digit(n) => (n % 10).to_string(),
            Self::Yes => "Y".into(),
            Self::No => "N".into(),
            Self::Admin => "admin".into(),
            Self::Password => "1234".into(),
            Self::StudentNumber(n) => format!("2018{:04}", n % 8),
            Self::BookNumber(n) => format!("{:07}", n % 8),
            Self::Isbn(n) => format!("978000000{:04}", n % 8),
            Self::Text(text) => text.lines().next().unwrap_or_default().to_owned(),
        }
    }
}

fuzz_target!(|keys: Vec<Key>| {
    let script: Vec<String> = keys.iter().take(512).map(Key::line).collect();
    let mut runtime = runtime(script).expect("empty storage loads");
    runtime.run().expect("scripted session ends cleanly");

    InvariantRegistry::standard()
        .assert_all(&LibrarySnapshot::from_library(runtime.library()), "after session");
});
