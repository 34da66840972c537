//! The [`Contact`] record and the field set used to create or replace one.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, FieldError, Result};

/// Store-assigned contact identifier.
pub type ContactId = i64;

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:           ContactId,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  pub birthday:     NaiveDate,
}

/// Every user-supplied field of a contact.
///
/// Used for both create and update: an update replaces all of these at once,
/// there is no partial-field form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactFields {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  pub birthday:     NaiveDate,
}

/// Birthday years that fit the four-digit `YYYY-MM-DD` column format.
pub const BIRTHDAY_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

impl ContactFields {
  /// Reject fields that decoded but cannot be stored as `YYYY-MM-DD`.
  ///
  /// Text fields are taken as given; only the birthday year is bounded.
  pub fn validate(&self) -> Result<()> {
    if BIRTHDAY_YEARS.contains(&self.birthday.year()) {
      Ok(())
    } else {
      Err(Error::Validation(vec![FieldError::new(
        "birthday",
        "year must be between 0 and 9999",
      )]))
    }
  }

  /// Attach a store-assigned id.
  pub fn with_id(self, id: ContactId) -> Contact {
    Contact {
      id,
      first_name: self.first_name,
      last_name: self.last_name,
      email: self.email,
      phone_number: self.phone_number,
      birthday: self.birthday,
    }
  }
}

impl From<Contact> for ContactFields {
  fn from(c: Contact) -> Self {
    ContactFields {
      first_name:   c.first_name,
      last_name:    c.last_name,
      email:        c.email,
      phone_number: c.phone_number,
      birthday:     c.birthday,
    }
  }
}
