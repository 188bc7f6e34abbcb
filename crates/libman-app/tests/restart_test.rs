//! Restart tests: a session saves to disk, a second session picks it up.

use libman_core::{Availability, DataFiles, FileStorage};
use libman_harness::fixtures::{
    bulk_load, register_book, runtime_with, sample_book, sample_client, sign_in, sign_up,
};
use tempfile::tempdir;

#[test]
fn test_second_session_sees_first_sessions_data() {
    let dir = tempdir().unwrap();
    let files = DataFiles::in_dir(dir.path());

    {
        let mut lines = sign_up(&sample_client());
        lines.extend(sign_in("admin", "1234"));
        lines.extend(register_book(&sample_book()));
        lines.extend(["3", "20180001", "0000001", "Y", "8"].map(String::from));

        let mut runtime = runtime_with(FileStorage::new(files.clone()), lines).unwrap();
        runtime.run().unwrap();
    }

    let mut lines = sign_in("20180001", "1234");
    lines.extend(["2", "6"].map(String::from));
    let mut runtime = runtime_with(FileStorage::new(files), lines).unwrap();

    let library = runtime.library();
    assert_eq!(library.clients().len(), 2);
    assert_eq!(library.find_book_by_number("0000001").unwrap().availability, Availability::OnLoan);

    runtime.run().unwrap();
    let driver = runtime.driver();
    assert!(driver.printed("My borrows:"));
    assert!(
        driver.printed("[0000001] C Programming borrowed by 20180001 on 2018-11-05, due 2018-12-05")
    );
}

#[test]
fn test_bulk_load() {
    let dir = tempdir().unwrap();
    let files = DataFiles::in_dir(dir.path());

    let mut runtime = runtime_with(FileStorage::new(files.clone()), bulk_load(100, 100)).unwrap();
    runtime.run().unwrap();
    assert_eq!(runtime.driver().remaining_input(), 0);

    let runtime = runtime_with(FileStorage::new(files), Vec::<String>::new()).unwrap();
    let library = runtime.library();
    // 100 members plus the administrator record
    assert_eq!(library.clients().len(), 101);
    assert_eq!(library.books().len(), 100);
    assert_eq!(library.next_book_number().unwrap(), "0000101");

    let isbns: Vec<_> = library.books().iter().map(|b| b.isbn.as_str()).collect();
    assert!(isbns.windows(2).all(|w| w[0] < w[1]));
}
