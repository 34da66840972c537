//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rolo_core::FieldError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// The request body decoded but one or more fields were rejected, or it
  /// did not decode at all (reported against the `body` field).
  #[error("validation failed: {} field(s)", .0.len())]
  Validation(Vec<FieldError>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn contact_not_found(id: i64) -> Self {
    ApiError::NotFound(format!("contact {id} not found"))
  }

  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    ApiError::Store(Box::new(e))
  }
}

impl From<rolo_core::Error> for ApiError {
  fn from(e: rolo_core::Error) -> Self {
    match e {
      rolo_core::Error::Validation(fields) => ApiError::Validation(fields),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Validation(fields) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": "invalid contact", "fields": fields })),
      )
        .into_response(),
      ApiError::Store(e) => {
        // Storage details stay in the log; clients get an opaque message.
        tracing::error!(error = %e, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": "internal server error" })),
        )
          .into_response()
      }
    }
  }
}
