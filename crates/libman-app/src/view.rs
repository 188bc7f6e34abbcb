//! Text formatting for entities shown on screen.

use chrono::FixedOffset;
use libman_core::{Availability, Book, Borrow, Client, format_date};

/// One catalogue line.
pub fn book_line(book: &Book) -> String {
    let state = match book.availability {
        Availability::Available => "available",
        Availability::OnLoan => "on loan",
    };
    format!(
        "[{}] {} / {} / {} / ISBN {} / {} / {state}",
        book.number, book.name, book.author, book.publisher, book.isbn, book.location
    )
}

/// Catalogue lines, or a placeholder when there is nothing to show.
pub fn book_lines<'a, I>(books: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Book>,
{
    let lines: Vec<String> = books.into_iter().map(book_line).collect();
    if lines.is_empty() { vec!["(no books)".to_owned()] } else { lines }
}

/// One loan line with dates in `offset`.
pub fn borrow_line(borrow: &Borrow, offset: &FixedOffset) -> String {
    format!(
        "[{}] {} borrowed by {} on {}, due {}",
        borrow.book_number,
        borrow.book_name,
        borrow.student_number,
        format_date(borrow.loaned_at, offset),
        format_date(borrow.due_at, offset)
    )
}

/// Loan lines, or a placeholder when there is nothing to show.
pub fn borrow_lines<'a, I>(borrows: I, offset: &FixedOffset) -> Vec<String>
where
    I: IntoIterator<Item = &'a Borrow>,
{
    let lines: Vec<String> = borrows.into_iter().map(|b| borrow_line(b, offset)).collect();
    if lines.is_empty() { vec!["(no books on loan)".to_owned()] } else { lines }
}

/// One member line. The password is never shown.
pub fn client_line(client: &Client) -> String {
    format!(
        "{} / {} / {} / {}",
        client.student_number, client.name, client.address, client.phone_number
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use libman_core::NewBook;

    use super::*;

    #[test]
    fn book_line_shows_state() {
        let book = NewBook {
            name: "C Programming".into(),
            publisher: "Acme".into(),
            author: "Kim".into(),
            isbn: "9780000000000".into(),
            location: "Shelf3".into(),
        }
        .into_book("0000001".into());
        assert_eq!(
            book_line(&book),
            "[0000001] C Programming / Kim / Acme / ISBN 9780000000000 / Shelf3 / available"
        );
    }

    #[test]
    fn empty_lists_get_placeholder() {
        assert_eq!(book_lines(std::iter::empty()), vec!["(no books)"]);
    }

    #[test]
    fn borrow_line_formats_dates() {
        let borrow = Borrow {
            student_number: "20180001".into(),
            book_name: "C".into(),
            book_number: "0000001".into(),
            loaned_at: 1_541_376_000,
            due_at: 1_543_968_000,
        };
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            borrow_line(&borrow, &utc),
            "[0000001] C borrowed by 20180001 on 2018-11-05, due 2018-12-05"
        );
    }

    #[test]
    fn client_line_hides_password() {
        let client = Client::new("20180001", "secret", "Hong", "Seoul", "010");
        assert!(!client_line(&client).contains("secret"));
    }
}
