//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Optional `skip` (default 0), `limit` (default 10) |
//! | `POST`   | `/contacts` | Body: [`ContactFields`]; returns the stored contact |
//! | `GET`    | `/contacts/search` | `?q=` required (`body=` also accepted); `skip`, `limit` |
//! | `GET`    | `/contacts/birthdays` | Birthdays in the configured window from today |
//! | `GET`    | `/contacts/:id` | 404 if not found |
//! | `PUT`    | `/contacts/:id` | Body: [`ContactFields`]; replaces every field |
//! | `DELETE` | `/contacts/:id` | Returns the removed contact |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
};
use chrono::{Local, NaiveDate};
use rolo_core::{
  FieldError,
  birthday::BirthdayWindow,
  contact::{Contact, ContactFields, ContactId},
  store::{ContactStore, Page},
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

fn today() -> NaiveDate { Local::now().date_naive() }

// ─── Extractor plumbing ──────────────────────────────────────────────────────

fn page_from(
  state: &AppState<impl ContactStore>,
  query: Result<Query<Page>, QueryRejection>,
) -> Result<Page, ApiError> {
  let Query(page) = query.map_err(|r| ApiError::BadRequest(r.body_text()))?;
  Ok(page.clamped(state.config.max_page_size))
}

fn id_from(path: Result<Path<ContactId>, PathRejection>) -> Result<ContactId, ApiError> {
  path
    .map(|Path(id)| id)
    .map_err(|r| ApiError::BadRequest(r.body_text()))
}

/// Decode a contact body and check its birthday fits the stored format.
fn fields_from(body: Result<Json<ContactFields>, JsonRejection>) -> Result<ContactFields, ApiError> {
  let Json(fields) =
    body.map_err(|r| ApiError::Validation(vec![FieldError::new("body", r.body_text())]))?;
  fields.validate()?;
  Ok(fields)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts[?skip=<n>][&limit=<n>]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  query: Result<Query<Page>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let page = page_from(&state, query)?;
  let contacts = state.store.list(page).await.map_err(ApiError::store)?;
  tracing::debug!(skip = page.skip, limit = page.limit, count = contacts.len(), "listed contacts");
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  path: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = id_from(path)?;
  let contact = state
    .store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::contact_not_found(id))?;
  Ok(Json(contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts` — returns the stored [`Contact`] with its new id.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<ContactFields>, JsonRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let fields = fields_from(body)?;
  let contact = state.store.create(fields).await.map_err(ApiError::store)?;
  tracing::info!(id = contact.id, "created contact");
  Ok(Json(contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — every field in the body replaces the stored one.
pub async fn update_one<S>(
  State(state): State<AppState<S>>,
  path: Result<Path<ContactId>, PathRejection>,
  body: Result<Json<ContactFields>, JsonRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = id_from(path)?;
  let fields = fields_from(body)?;
  let contact = state
    .store
    .update(id, fields)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::contact_not_found(id))?;
  tracing::info!(id, "updated contact");
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id` — returns the contact as it was before removal.
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  path: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = id_from(path)?;
  let contact = state
    .store
    .delete(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::contact_not_found(id))?;
  tracing::info!(id, "deleted contact");
  Ok(Json(contact))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  /// Substring to look for in first name, last name, and email.
  #[serde(alias = "body")]
  pub q:     String,
  #[serde(default)]
  pub skip:  u32,
  pub limit: Option<u32>,
}

/// `GET /contacts/search?q=<text>[&skip=<n>][&limit=<n>]`
pub async fn search<S>(
  State(state): State<AppState<S>>,
  query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Query(params) = query.map_err(|r| ApiError::BadRequest(r.body_text()))?;
  let page = Page::new(params.skip, params.limit.unwrap_or(Page::DEFAULT_LIMIT))
    .clamped(state.config.max_page_size);

  let contacts = state
    .store
    .search(&params.q, page)
    .await
    .map_err(ApiError::store)?;
  tracing::debug!(q = %params.q, count = contacts.len(), "searched contacts");
  Ok(Json(contacts))
}

// ─── Birthdays ────────────────────────────────────────────────────────────────

/// `GET /contacts/birthdays` — contacts whose birthday falls between today and
/// `birthday_window_days` from now, soonest first.
pub async fn birthdays<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let window = BirthdayWindow::starting(today(), state.config.birthday_window_days);
  let contacts = state
    .store
    .upcoming_birthdays(&window)
    .await
    .map_err(ApiError::store)?;
  tracing::debug!(
    start = window.start(),
    end = window.end(),
    count = contacts.len(),
    "looked up upcoming birthdays"
  );
  Ok(Json(contacts))
}
