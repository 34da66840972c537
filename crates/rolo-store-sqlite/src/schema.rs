//! SQL schema for the Rolo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids of deleted contacts from being handed out again.
CREATE TABLE IF NOT EXISTS contacts (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name    TEXT NOT NULL,
    last_name     TEXT NOT NULL,
    email         TEXT NOT NULL,
    phone_number  TEXT NOT NULL,
    birthday      TEXT NOT NULL    -- ISO 8601 calendar date, YYYY-MM-DD
);

CREATE INDEX IF NOT EXISTS contacts_first_name_idx ON contacts(first_name);
CREATE INDEX IF NOT EXISTS contacts_last_name_idx  ON contacts(last_name);
CREATE INDEX IF NOT EXISTS contacts_email_idx      ON contacts(email);

PRAGMA user_version = 1;
";

/// Column list shared by every query that reads whole contacts.
///
/// Order must match [`crate::encode::RawContact::from_row`].
pub const CONTACT_COLUMNS: &str =
  "id, first_name, last_name, email, phone_number, birthday";

/// Name of the Unicode-aware lower-casing function registered on every
/// connection; SQLite's own `lower()` and `LIKE` fold ASCII only.
pub const FOLD_FN: &str = "rolo_fold";
