//! Catalogue entries.

use std::{borrow::Cow, fmt};

use crate::codec::{Record, RecordError};

/// Book numbers are zero-padded to this many digits.
pub const BOOK_NUMBER_WIDTH: usize = 7;

/// Maximum length of an ISBN, in characters.
pub const ISBN_WIDTH: usize = 13;

/// Whether a book is on the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Availability {
    /// No open borrow references the book (`Y`)
    #[default]
    Available,
    /// Exactly one open borrow references the book (`N`)
    OnLoan,
}

impl Availability {
    /// On-disk flag character.
    pub fn as_char(self) -> char {
        match self {
            Self::Available => 'Y',
            Self::OnLoan => 'N',
        }
    }

    /// Parse the on-disk flag.
    pub fn from_flag(flag: &str) -> Result<Self, RecordError> {
        match flag {
            "Y" => Ok(Self::Available),
            "N" => Ok(Self::OnLoan),
            other => Err(RecordError::InvalidAvailability(other.to_owned())),
        }
    }

    /// Whether the book can be lent.
    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A catalogue entry.
///
/// `number` is assigned by the library on registration and never reused
/// while a larger number exists. `isbn` is the unique key the catalogue is
/// sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Seven-digit, zero-padded catalogue number
    pub number: String,
    /// Unique key, at most [`ISBN_WIDTH`] characters
    pub isbn: String,
    /// Shelf state
    pub availability: Availability,
    /// Title
    pub name: String,
    /// Publisher
    pub publisher: String,
    /// Author
    pub author: String,
    /// Shelf location
    pub location: String,
}

impl Book {
    /// Numeric value of the catalogue number, if it parses.
    pub fn number_value(&self) -> Option<u32> {
        parse_book_number(&self.number)
    }

    /// Value of one searchable field.
    pub fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Name => &self.name,
            BookField::Publisher => &self.publisher,
            BookField::Author => &self.author,
            BookField::Isbn => &self.isbn,
        }
    }
}

impl Record for Book {
    const KIND: &'static str = "book";
    const FIELD_COUNT: usize = 7;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.number.as_str()),
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.publisher.as_str()),
            Cow::Borrowed(self.author.as_str()),
            Cow::Borrowed(self.isbn.as_str()),
            Cow::Borrowed(self.location.as_str()),
            Cow::Owned(self.availability.to_string()),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        let [number, name, publisher, author, isbn, location, availability] = fields else {
            return Err(RecordError::FieldCount {
                kind: Self::KIND,
                expected: Self::FIELD_COUNT,
                found: fields.len(),
            });
        };

        Ok(Self {
            number: (*number).to_owned(),
            isbn: (*isbn).to_owned(),
            availability: Availability::from_flag(availability)?,
            name: (*name).to_owned(),
            publisher: (*publisher).to_owned(),
            author: (*author).to_owned(),
            location: (*location).to_owned(),
        })
    }
}

/// Details supplied by the administrator when registering a book.
///
/// The library fills in the number and availability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewBook {
    /// Title
    pub name: String,
    /// Publisher
    pub publisher: String,
    /// Author
    pub author: String,
    /// Unique key
    pub isbn: String,
    /// Shelf location
    pub location: String,
}

impl NewBook {
    /// Attach a catalogue number, producing an available book.
    pub fn into_book(self, number: String) -> Book {
        Book {
            number,
            isbn: self.isbn,
            availability: Availability::Available,
            name: self.name,
            publisher: self.publisher,
            author: self.author,
            location: self.location,
        }
    }
}

/// Book fields the catalogue can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    /// Title
    Name,
    /// Publisher
    Publisher,
    /// Author
    Author,
    /// ISBN
    Isbn,
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Publisher => "publisher",
            Self::Author => "author",
            Self::Isbn => "ISBN",
        })
    }
}

/// Parse a catalogue number, ignoring zero padding.
///
/// `"0000001"` and `"1"` both parse to 1. Text that is not a plain run of
/// ASCII digits parses to `None`.
pub fn parse_book_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Zero-pad a catalogue number to [`BOOK_NUMBER_WIDTH`] digits.
pub(crate) fn format_book_number(value: u32) -> String {
    format!("{value:0width$}", width = BOOK_NUMBER_WIDTH)
}
