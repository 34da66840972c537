//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, functions::FunctionFlags};

use rolo_core::{
  birthday::BirthdayWindow,
  contact::{Contact, ContactFields, ContactId},
  store::{ContactStore, Page},
};

use crate::{
  encode::{encode_date, fold_case, RawContact},
  schema::{CONTACT_COLUMNS, FOLD_FN, SCHEMA},
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// operation borrows the connection for exactly one closure on its
/// background thread, so nothing is held across requests.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    tracing::debug!(path = %path.as_ref().display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.create_scalar_function(
          FOLD_FN,
          1,
          FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
          |ctx| Ok(fold_case(&ctx.get::<String>(0)?)),
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT` returning whole contacts and decode every row.
  async fn query_contacts(
    &self,
    sql: String,
    params: Vec<rusqlite::types::Value>,
  ) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  /// Run a statement that yields at most one contact row.
  async fn query_one(
    &self,
    sql: String,
    params: Vec<rusqlite::types::Value>,
  ) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params_from_iter(params), RawContact::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }
}

/// Bind values for the five user-supplied columns, in schema order.
fn field_values(fields: ContactFields) -> Vec<rusqlite::types::Value> {
  use rusqlite::types::Value;
  vec![
    Value::Text(fields.first_name),
    Value::Text(fields.last_name),
    Value::Text(fields.email),
    Value::Text(fields.phone_number),
    Value::Text(encode_date(fields.birthday)),
  ]
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  async fn list(&self, page: Page) -> Result<Vec<Contact>> {
    let sql = format!(
      "SELECT {CONTACT_COLUMNS} FROM contacts
       ORDER BY id
       LIMIT ?1 OFFSET ?2"
    );
    self
      .query_contacts(sql, vec![i64::from(page.limit).into(), i64::from(page.skip).into()])
      .await
  }

  async fn get(&self, id: ContactId) -> Result<Option<Contact>> {
    let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1");
    self.query_one(sql, vec![id.into()]).await
  }

  async fn create(&self, fields: ContactFields) -> Result<Contact> {
    let params = field_values(fields.clone());

    let id: ContactId = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (first_name, last_name, email, phone_number, birthday)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params_from_iter(params),
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(fields.with_id(id))
  }

  async fn update(&self, id: ContactId, fields: ContactFields) -> Result<Option<Contact>> {
    let mut params = field_values(fields);
    params.push(id.into());

    let sql = format!(
      "UPDATE contacts
       SET first_name = ?1, last_name = ?2, email = ?3, phone_number = ?4, birthday = ?5
       WHERE id = ?6
       RETURNING {CONTACT_COLUMNS}"
    );
    self.query_one(sql, params).await
  }

  async fn delete(&self, id: ContactId) -> Result<Option<Contact>> {
    let sql = format!("DELETE FROM contacts WHERE id = ?1 RETURNING {CONTACT_COLUMNS}");
    self.query_one(sql, vec![id.into()]).await
  }

  async fn search(&self, text: &str, page: Page) -> Result<Vec<Contact>> {
    // instr() matches the needle literally; an empty needle matches every row.
    let sql = format!(
      "SELECT {CONTACT_COLUMNS} FROM contacts
       WHERE instr({FOLD_FN}(first_name), ?1) > 0
          OR instr({FOLD_FN}(last_name),  ?1) > 0
          OR instr({FOLD_FN}(email),      ?1) > 0
       ORDER BY id
       LIMIT ?2 OFFSET ?3"
    );
    let params: Vec<rusqlite::types::Value> = vec![
      fold_case(text).into(),
      i64::from(page.limit).into(),
      i64::from(page.skip).into(),
    ];
    self.query_contacts(sql, params).await
  }

  async fn upcoming_birthdays(&self, window: &BirthdayWindow) -> Result<Vec<Contact>> {
    let range = if window.wraps() {
      "(md >= ?1 OR md <= ?2)"
    } else {
      "md BETWEEN ?1 AND ?2"
    };

    // The last five characters are MM-DD for any year width or sign.
    // Rows past the new year sort after the ones before it.
    let sql = format!(
      "SELECT {CONTACT_COLUMNS} FROM (
         SELECT *, substr(birthday, -5) AS md FROM contacts
       )
       WHERE {range}
       ORDER BY md < ?1, md, id"
    );
    let params: Vec<rusqlite::types::Value> =
      vec![window.start().to_owned().into(), window.end().to_owned().into()];
    self.query_contacts(sql, params).await
  }
}
