//! Pipe-delimited text record codec.
//!
//! Each entity is stored as one line: its fields in a fixed order, joined by
//! [`FIELD_SEPARATOR`], followed by [`RECORD_TERMINATOR`].
//!
//! ```text
//! 20180001 | 1234 | Hong | Seoul | 010-1234-5678 |
//! ```
//!
//! There is no escaping, and a line splits at the first separator each time.
//! Two kinds of value therefore do not survive a round trip:
//!
//! - any field containing `" | "`;
//! - a field other than the last that ends in `" |"`. Its own `" |"` plus the
//!   separator's leading space read as a separator, so `["x |", "y"]` encodes
//!   to `x | | y |` and comes back as `["x", "| y"]`.
//!
//! A lone `|` anywhere else is fine. Callers keep both patterns out of free
//! text.

use std::borrow::Cow;

use thiserror::Error;

/// Separator between two fields of a record line.
pub const FIELD_SEPARATOR: &str = " | ";

/// Suffix closing every record line.
pub const RECORD_TERMINATOR: &str = " |";

/// Errors produced while decoding a record line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Line does not end with the record terminator
    #[error("{kind} record is missing the trailing \" |\"")]
    MissingTerminator {
        /// Entity kind being decoded
        kind: &'static str,
    },

    /// Line has the wrong number of fields
    #[error("{kind} record has {found} fields, expected {expected}")]
    FieldCount {
        /// Entity kind being decoded
        kind: &'static str,
        /// Field count for this entity kind
        expected: usize,
        /// Field count found on the line
        found: usize,
    },

    /// Availability is neither `Y` nor `N`
    #[error("invalid availability flag {0:?}")]
    InvalidAvailability(String),

    /// Timestamp is not an integer number of seconds
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
}

/// An entity that maps to exactly one record line.
pub trait Record: Sized {
    /// Entity name used in errors and logs.
    const KIND: &'static str;

    /// Number of fields on a line.
    const FIELD_COUNT: usize;

    /// Field values in on-disk order.
    fn fields(&self) -> Vec<Cow<'_, str>>;

    /// Rebuild the entity from exactly [`Self::FIELD_COUNT`] field values.
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError>;

    /// Serialize to one line, without a newline.
    fn encode(&self) -> String {
        let mut line = self.fields().join(FIELD_SEPARATOR);
        line.push_str(RECORD_TERMINATOR);
        line
    }

    /// Parse one line produced by [`Record::encode`].
    ///
    /// A trailing `\r` or `\n` is ignored.
    fn decode(line: &str) -> Result<Self, RecordError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let body = line
            .strip_suffix(RECORD_TERMINATOR)
            .ok_or(RecordError::MissingTerminator { kind: Self::KIND })?;

        let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();
        if fields.len() != Self::FIELD_COUNT {
            return Err(RecordError::FieldCount {
                kind: Self::KIND,
                expected: Self::FIELD_COUNT,
                found: fields.len(),
            });
        }

        Self::from_fields(&fields)
    }
}

/// Parse an epoch-seconds field.
pub(crate) fn parse_timestamp(field: &str) -> Result<i64, RecordError> {
    field.parse().map_err(|_| RecordError::InvalidTimestamp(field.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair(String, String);

    impl Record for Pair {
        const KIND: &'static str = "pair";
        const FIELD_COUNT: usize = 2;

        fn fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(self.0.as_str()), Cow::Borrowed(self.1.as_str())]
        }

        fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
            Ok(Self(fields[0].to_owned(), fields[1].to_owned()))
        }
    }

    #[test]
    fn encode_joins_with_trailing_delimiter() {
        let pair = Pair("a".into(), "b c".into());
        assert_eq!(pair.encode(), "a | b c |");
    }

    #[test]
    fn decode_ignores_line_ending() {
        assert_eq!(Pair::decode("a | b |\r\n"), Ok(Pair("a".into(), "b".into())));
    }

    #[test]
    fn decode_requires_terminator() {
        assert_eq!(Pair::decode("a | b"), Err(RecordError::MissingTerminator { kind: "pair" }));
    }

    #[test]
    fn decode_checks_field_count() {
        assert_eq!(
            Pair::decode("a | b | c |"),
            Err(RecordError::FieldCount { kind: "pair", expected: 2, found: 3 })
        );
    }

    #[test]
    fn empty_fields_survive() {
        let pair = Pair(String::new(), String::new());
        assert_eq!(Pair::decode(&pair.encode()), Ok(pair));
    }

    #[test]
    fn inner_field_ending_in_terminator_splits_early() {
        let pair = Pair("x |".into(), "y".into());
        assert_eq!(pair.encode(), "x | | y |");
        assert_eq!(Pair::decode(&pair.encode()), Ok(Pair("x".into(), "| y".into())));

        let last = Pair("x".into(), "y |".into());
        assert_eq!(Pair::decode(&last.encode()), Ok(last));
    }

    #[test]
    fn timestamps_must_be_integers() {
        assert_eq!(parse_timestamp("-5"), Ok(-5));
        assert_eq!(parse_timestamp("1.5"), Err(RecordError::InvalidTimestamp("1.5".into())));
    }
}
