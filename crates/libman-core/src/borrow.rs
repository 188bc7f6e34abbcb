//! Open loans.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, FixedOffset, TimeDelta};

use crate::{
    book::Book,
    client::Client,
    codec::{self, Record, RecordError},
};

/// Standard loan period in days.
pub const LOAN_DAYS: i64 = 30;

/// An open loan of one book to one client.
///
/// The book name is copied at creation so the record still reads sensibly
/// after the book is removed from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borrow {
    /// Borrowing client
    pub student_number: String,
    /// Title at the time of the loan
    pub book_name: String,
    /// Catalogue number of the borrowed book
    pub book_number: String,
    /// Loan time, epoch seconds
    pub loaned_at: i64,
    /// Due time, epoch seconds
    pub due_at: i64,
}

impl Borrow {
    /// Open a loan of `book` to `client` starting at `loaned_at`.
    pub fn new(client: &Client, book: &Book, loaned_at: DateTime<FixedOffset>) -> Self {
        Self {
            student_number: client.student_number.clone(),
            book_name: book.name.clone(),
            book_number: book.number.clone(),
            loaned_at: loaned_at.timestamp(),
            due_at: Self::due_date(loaned_at).timestamp(),
        }
    }

    /// Due date for a loan starting at `loaned_at`.
    ///
    /// [`LOAN_DAYS`] after the loan, plus one extra day when
    /// `(weekday + 30) % 7 == 0` with the weekday counted from Sunday. That
    /// condition only holds for loans made on a Friday, whatever the month.
    pub fn due_date(loaned_at: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let weekday = i64::from(loaned_at.weekday().num_days_from_sunday());
        let days = if (weekday + LOAN_DAYS) % 7 == 0 { LOAN_DAYS + 1 } else { LOAN_DAYS };
        loaned_at + TimeDelta::days(days)
    }
}

impl Record for Borrow {
    const KIND: &'static str = "borrow";
    const FIELD_COUNT: usize = 5;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.student_number.as_str()),
            Cow::Borrowed(self.book_name.as_str()),
            Cow::Borrowed(self.book_number.as_str()),
            Cow::Owned(self.loaned_at.to_string()),
            Cow::Owned(self.due_at.to_string()),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        let [student_number, book_name, book_number, loaned_at, due_at] = fields else {
            return Err(RecordError::FieldCount {
                kind: Self::KIND,
                expected: Self::FIELD_COUNT,
                found: fields.len(),
            });
        };

        Ok(Self {
            student_number: (*student_number).to_owned(),
            book_name: (*book_name).to_owned(),
            book_number: (*book_number).to_owned(),
            loaned_at: codec::parse_timestamp(loaned_at)?,
            due_at: codec::parse_timestamp(due_at)?,
        })
    }
}

/// Render epoch seconds as a calendar date in `offset`.
///
/// Out-of-range timestamps render as the raw number.
pub fn format_date(secs: i64, offset: &FixedOffset) -> String {
    DateTime::from_timestamp(secs, 0).map_or_else(
        || secs.to_string(),
        |utc| utc.with_timezone(offset).format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Weekday};

    use super::*;
    use crate::book::NewBook;

    fn at(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
        let utc = FixedOffset::east_opt(0).unwrap();
        utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn due_date_is_thirty_days_out() {
        // 2018-11-05 is a Monday
        let loan = at(2018, 11, 5);
        assert_eq!(Borrow::due_date(loan) - loan, TimeDelta::days(30));
    }

    #[test]
    fn friday_loans_get_an_extra_day() {
        // The weekday rule ignores month boundaries entirely; only Fridays qualify
        let friday = at(2018, 11, 2);
        assert_eq!(friday.weekday(), Weekday::Fri);
        assert_eq!(Borrow::due_date(friday) - friday, TimeDelta::days(31));

        for offset in 1..7 {
            let other = friday + TimeDelta::days(offset);
            assert_eq!(Borrow::due_date(other) - other, TimeDelta::days(30), "{}", other.weekday());
        }
    }

    #[test]
    fn new_copies_book_name_and_number() {
        let client = Client::new("20180001", "1234", "Hong", "Seoul", "010");
        let book = NewBook { name: "C Programming".into(), ..NewBook::default() }
            .into_book("0000001".into());

        let borrow = Borrow::new(&client, &book, at(2018, 11, 5));
        assert_eq!(borrow.student_number, "20180001");
        assert_eq!(borrow.book_name, "C Programming");
        assert_eq!(borrow.book_number, "0000001");
        assert_eq!(borrow.due_at - borrow.loaned_at, 30 * 86_400);
    }

    #[test]
    fn encodes_epoch_seconds() {
        let borrow = Borrow {
            student_number: "20180001".into(),
            book_name: "C".into(),
            book_number: "0000001".into(),
            loaned_at: 100,
            due_at: 200,
        };
        assert_eq!(borrow.encode(), "20180001 | C | 0000001 | 100 | 200 |");
        assert_eq!(Borrow::decode(&borrow.encode()), Ok(borrow));
    }

    #[test]
    fn formats_dates_in_offset() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        // 2018-11-04T20:00:00Z is already the 5th in Seoul
        assert_eq!(format_date(1_541_361_600, &kst), "2018-11-05");
    }
}
