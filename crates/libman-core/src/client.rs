//! Library members.

use std::{borrow::Cow, fmt};

use crate::codec::{Record, RecordError};

/// Reserved identifier that signs in without a password check.
pub const ADMIN_ID: &str = "admin";

/// Maximum length of a student number, in characters.
pub const STUDENT_NUMBER_WIDTH: usize = 8;

/// Maximum length of a phone number, in characters.
pub const PHONE_NUMBER_WIDTH: usize = 13;

/// A registered member, keyed by student number.
///
/// The password is kept as plain text; it is compared verbatim at sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Unique key, at most [`STUDENT_NUMBER_WIDTH`] characters
    pub student_number: String,
    /// Plain-text password
    pub password: String,
    /// Display name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Contact number, at most [`PHONE_NUMBER_WIDTH`] characters
    pub phone_number: String,
}

impl Client {
    /// Build a client from its five fields.
    pub fn new(
        student_number: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            student_number: student_number.into(),
            password: password.into(),
            name: name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
        }
    }

    /// The record created the first time the administrator signs in.
    pub fn admin(password: impl Into<String>) -> Self {
        Self::new(ADMIN_ID, password, ADMIN_ID, "", "")
    }

    /// Whether this is the administrator record.
    pub fn is_admin(&self) -> bool {
        self.student_number == ADMIN_ID
    }

    /// Current value of one editable field.
    pub fn profile(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Password => &self.password,
            ProfileField::Name => &self.name,
            ProfileField::Address => &self.address,
            ProfileField::PhoneNumber => &self.phone_number,
        }
    }

    /// Overwrite one editable field.
    pub fn set_profile(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Password => self.password = value,
            ProfileField::Name => self.name = value,
            ProfileField::Address => self.address = value,
            ProfileField::PhoneNumber => self.phone_number = value,
        }
    }
}

impl Record for Client {
    const KIND: &'static str = "client";
    const FIELD_COUNT: usize = 5;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.student_number.as_str()),
            Cow::Borrowed(self.password.as_str()),
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.address.as_str()),
            Cow::Borrowed(self.phone_number.as_str()),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        match fields {
            [student_number, password, name, address, phone_number] => {
                Ok(Self::new(*student_number, *password, *name, *address, *phone_number))
            },
            _ => Err(RecordError::FieldCount {
                kind: Self::KIND,
                expected: Self::FIELD_COUNT,
                found: fields.len(),
            }),
        }
    }
}

/// Client fields a member may edit from the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// Sign-in password
    Password,
    /// Display name
    Name,
    /// Postal address
    Address,
    /// Contact number
    PhoneNumber,
}

impl ProfileField {
    /// Every editable field, in menu order.
    pub const ALL: [Self; 4] = [Self::Password, Self::Name, Self::Address, Self::PhoneNumber];

    /// Maximum length of the field, if it is bounded.
    pub fn max_len(self) -> Option<usize> {
        match self {
            Self::PhoneNumber => Some(PHONE_NUMBER_WIDTH),
            Self::Password | Self::Name | Self::Address => None,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Password => "password",
            Self::Name => "name",
            Self::Address => "address",
            Self::PhoneNumber => "phone number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_fields_in_order() {
        let client = Client::new("20180001", "1234", "Hong", "Seoul", "010-1234-5678");
        assert_eq!(client.encode(), "20180001 | 1234 | Hong | Seoul | 010-1234-5678 |");
        assert_eq!(Client::decode(&client.encode()), Ok(client));
    }

    #[test]
    fn admin_record_is_recognised() {
        let admin = Client::admin("secret");
        assert!(admin.is_admin());
        assert_eq!(admin.password, "secret");
        assert!(!Client::new("1", "", "", "", "").is_admin());
    }

    #[test]
    fn set_profile_touches_one_field() {
        let mut client = Client::new("1", "pw", "name", "addr", "010");
        client.set_profile(ProfileField::Address, "Busan".into());
        assert_eq!(client.address, "Busan");
        assert_eq!(client.profile(ProfileField::Name), "name");
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert!(matches!(
            Client::decode("1 | 2 | 3 |"),
            Err(RecordError::FieldCount { kind: "client", expected: 5, found: 3 })
        ));
    }
}
