//! The `ContactStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use serde::Deserialize;

use crate::{
  birthday::BirthdayWindow,
  contact::{Contact, ContactFields, ContactId},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Offset/limit pagination for [`ContactStore::list`] and
/// [`ContactStore::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
  /// Number of contacts to skip, in id order.
  #[serde(default)]
  pub skip:  u32,
  /// Maximum number of contacts to return.
  #[serde(default = "Page::default_limit")]
  pub limit: u32,
}

impl Page {
  pub const DEFAULT_LIMIT: u32 = 10;

  pub fn new(skip: u32, limit: u32) -> Self { Self { skip, limit } }

  fn default_limit() -> u32 { Self::DEFAULT_LIMIT }

  /// Cap `limit` at `max`.
  pub fn clamped(self, max: u32) -> Self {
    Self { skip: self.skip, limit: self.limit.min(max) }
  }
}

impl Default for Page {
  fn default() -> Self { Self::new(0, Self::DEFAULT_LIMIT) }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a contact store backend.
///
/// Each method is one single-row or single-query round trip. Absence of the
/// addressed contact is reported as `Ok(None)`, leaving the caller to decide
/// how to surface it.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Contacts in ascending id order, paginated by `page`.
  fn list(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Persist a new contact and return it with its assigned id.
  fn create(
    &self,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Replace every field of contact `id`. Returns `None` if not found.
  fn update(
    &self,
    id: ContactId,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove contact `id`, returning it as it was just before removal.
  /// Returns `None` if not found.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Contacts whose first name, last name, or email contains `text`,
  /// ignoring case. Same ordering and pagination as [`Self::list`].
  fn search<'a>(
    &'a self,
    text: &'a str,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;

  /// Contacts whose birthday falls inside `window`, soonest first.
  fn upcoming_birthdays<'a>(
    &'a self,
    window: &'a BirthdayWindow,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;
}
