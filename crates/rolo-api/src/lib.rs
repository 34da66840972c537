//! JSON REST API for the Rolo contact book.
//!
//! Exposes an axum [`Router`] backed by any [`rolo_core::store::ContactStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, rolo_api::router(state)).await?;
//! ```

pub mod contacts;
pub mod error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use rolo_core::{birthday::DEFAULT_WINDOW_DAYS, store::ContactStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `ROLO_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  /// SQLite database file; a leading `~/` is expanded by the binary.
  pub database_path:        PathBuf,
  /// Days after today covered by `GET /contacts/birthdays`.
  pub birthday_window_days: u32,
  /// Upper bound applied to every `limit` query parameter.
  pub max_page_size:        u32,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "127.0.0.1".to_string(),
      port:                 8000,
      database_path:        PathBuf::from("~/.local/share/rolo/contacts.db"),
      birthday_window_days: DEFAULT_WINDOW_DAYS,
      max_page_size:        100,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ContactStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The trailing-slash forms `/contacts/` and `/contacts/birthdays/` are served
/// by the same handlers as their bare counterparts.
pub fn router<S>(state: AppState<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/contacts",            get(contacts::list::<S>).post(contacts::create::<S>))
    .route("/contacts/",           get(contacts::list::<S>).post(contacts::create::<S>))
    .route("/contacts/search",     get(contacts::search::<S>))
    .route("/contacts/birthdays",  get(contacts::birthdays::<S>))
    .route("/contacts/birthdays/", get(contacts::birthdays::<S>))
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
