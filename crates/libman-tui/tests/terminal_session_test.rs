//! The terminal driver wired to file storage, as the binary runs it.

use std::{fs, io::Cursor};

use libman_core::{DataFiles, FileStorage, SystemClock};
use libman_tui::{Runtime, TerminalDriver};
use tempfile::tempdir;

#[test]
fn test_piped_session_writes_data_files() {
    let dir = tempdir().unwrap();
    let files = DataFiles::in_dir(dir.path());
    let input = "1\n20180001\n1234\nHong Gildong\nSeoul\n01012345678\n\
                 2\nadmin\n1234\n\
                 1\nC Programming\nAcme\nKim\n9780000000000\nShelf3\nY\n\
                 8\n";

    let driver = TerminalDriver::new(Cursor::new(input), Vec::new());
    let mut runtime = Runtime::new(driver, FileStorage::new(files.clone()), SystemClock).unwrap();
    runtime.run().unwrap();

    insta::assert_snapshot!(fs::read_to_string(&files.client).unwrap().trim_end(), @r"
    20180001 | 1234 | Hong Gildong | Seoul | 01012345678 |
    admin | 1234 | admin |  |  |
    ");
    insta::assert_snapshot!(
        fs::read_to_string(&files.book).unwrap().trim_end(),
        @"0000001 | C Programming | Acme | Kim | 9780000000000 | Shelf3 | Y |"
    );
    assert_eq!(fs::read_to_string(&files.borrow).unwrap(), "");
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = tempdir().unwrap();
    let driver = TerminalDriver::new(Cursor::new("2\n"), Vec::new());
    let mut runtime =
        Runtime::new(driver, FileStorage::new(DataFiles::in_dir(dir.path())), SystemClock).unwrap();

    runtime.run().unwrap();
    assert!(!runtime.session().is_running());
}

#[test]
fn test_stray_byte_is_an_unknown_key() {
    let dir = tempdir().unwrap();
    let input = Cursor::new(vec![0xff, b'\n', b'3', b'\n']);
    let driver = TerminalDriver::new(input, Vec::new());
    let mut runtime =
        Runtime::new(driver, FileStorage::new(DataFiles::in_dir(dir.path())), SystemClock).unwrap();

    runtime.run().unwrap();
    let out = String::from_utf8_lossy(runtime.driver().output()).into_owned();
    assert!(out.contains("Unknown menu item"), "{out}");
    assert!(!runtime.session().is_running());
}
