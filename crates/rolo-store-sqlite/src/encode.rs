//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Birthdays are stored as `YYYY-MM-DD` strings so SQLite's date functions
//! can read them directly.

use chrono::NaiveDate;
use rolo_core::contact::Contact;

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Case folding ────────────────────────────────────────────────────────────

/// Lower-case `s` over the full Unicode range.
///
/// Backs the [`crate::schema::FOLD_FN`] SQL function; search needles go
/// through the same function so both sides fold identically.
pub fn fold_case(s: &str) -> String { s.to_lowercase() }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub phone_number: String,
  pub birthday:     String,
}

impl RawContact {
  /// Read a row selected with [`crate::schema::CONTACT_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawContact {
      id:           row.get(0)?,
      first_name:   row.get(1)?,
      last_name:    row.get(2)?,
      email:        row.get(3)?,
      phone_number: row.get(4)?,
      birthday:     row.get(5)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:           self.id,
      first_name:   self.first_name,
      last_name:    self.last_name,
      email:        self.email,
      phone_number: self.phone_number,
      birthday:     decode_date(&self.birthday)?,
    })
  }
}
