//! Ready-made records and input scripts.

use libman_app::{AppError, Runtime};
use libman_core::{Client, Library, MemoryStorage, NewBook, Storage};

use crate::{scripted_driver::ScriptedDriver, sim_clock::FixedClock};

/// Runtime over scripted input, in-memory storage and a fixed clock.
pub type ScriptedRuntime<S = MemoryStorage> = Runtime<ScriptedDriver, S, FixedClock>;

/// Member `20180001` with password `1234`.
pub fn sample_client() -> Client {
    Client::new("20180001", "1234", "Hong Gildong", "Sangdo-dong, Dongjak-gu, Seoul", "01012345678")
}

/// The `C Programming` book, ISBN `9780000000000`.
pub fn sample_book() -> NewBook {
    NewBook {
        name: "C Programming".into(),
        publisher: "Acme".into(),
        author: "Kim".into(),
        isbn: "9780000000000".into(),
        location: "Shelf3".into(),
    }
}

/// Library holding [`sample_client`] and [`sample_book`].
///
/// # Errors
///
/// Fails only if the samples stop being valid records.
pub fn sample_library() -> Result<Library, libman_core::LibraryError> {
    let mut library = Library::new();
    library.register_client(sample_client())?;
    library.register_book(sample_book())?;
    Ok(library)
}

/// Init-screen keystrokes that sign `client` up.
pub fn sign_up(client: &Client) -> Vec<String> {
    vec![
        "1".into(),
        client.student_number.clone(),
        client.password.clone(),
        client.name.clone(),
        client.address.clone(),
        client.phone_number.clone(),
    ]
}

/// Init-screen keystrokes that sign in as `id`.
pub fn sign_in(id: &str, password: &str) -> Vec<String> {
    vec!["2".into(), id.into(), password.into()]
}

/// Admin-menu keystrokes that register `book` and confirm.
pub fn register_book(book: &NewBook) -> Vec<String> {
    vec![
        "1".into(),
        book.name.clone(),
        book.publisher.clone(),
        book.author.clone(),
        book.isbn.clone(),
        book.location.clone(),
        "Y".into(),
    ]
}

/// Bulk-load script: `members` sign-ups, then `books` registrations by the
/// administrator, then exit.
///
/// Members are `2018NNNN` with password `1234`; book `i` has ISBN `i * i`
/// zero-padded to 13 digits.
pub fn bulk_load(members: u32, books: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for i in 0..members {
        lines.extend(sign_up(&Client::new(
            format!("2018{i:04}"),
            "1234",
            "Hong Gildong",
            "Sangdo-dong",
            "01012345678",
        )));
    }
    lines.extend(sign_in("admin", "1234"));
    for i in 0..books {
        lines.extend(register_book(&NewBook {
            name: format!("C Programming {i}"),
            publisher: "Hongreung".into(),
            author: "Kim".into(),
            isbn: format!("{:013}", u64::from(i) * u64::from(i)),
            location: "Central library, 3rd floor".into(),
        }));
    }
    lines.push("8".into());
    lines
}

/// Runtime over `lines` and `storage`, clock at its default.
///
/// # Errors
///
/// Fails if `storage` cannot be loaded.
pub fn runtime_with<S, I, L>(storage: S, lines: I) -> Result<ScriptedRuntime<S>, AppError>
where
    S: Storage,
    I: IntoIterator<Item = L>,
    L: Into<String>,
{
    Runtime::new(ScriptedDriver::new(lines), storage, FixedClock::default())
}

/// Runtime over `lines` and empty in-memory storage.
///
/// # Errors
///
/// Never in practice; empty storage always loads.
pub fn runtime<I, L>(lines: I) -> Result<ScriptedRuntime, AppError>
where
    I: IntoIterator<Item = L>,
    L: Into<String>,
{
    runtime_with(MemoryStorage::new(), lines)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bulk_load_shape() {
        let lines = bulk_load(2, 3);
        assert_eq!(lines.len(), 2 * 6 + 3 + 3 * 7 + 1);
        assert_eq!(lines.last().map(String::as_str), Some("8"));
        assert!(lines.contains(&"0000000000004".to_owned()));
    }

    #[test]
    fn sample_library_is_valid() {
        let library = sample_library().unwrap();
        assert_eq!(library.books().iter().next().unwrap().number, "0000001");
    }
}
