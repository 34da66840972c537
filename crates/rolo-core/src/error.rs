//! Error types for `rolo-core`.

use serde::Serialize;
use thiserror::Error;

/// A single rejected field in a contact body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   String,
  pub message: String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self { field: field.into(), message: message.into() }
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid contact: {} field(s) rejected", .0.len())]
  Validation(Vec<FieldError>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
