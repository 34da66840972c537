//! Core types and trait definitions for the Rolo contact book.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store and API crates depend on it; it depends on nothing proprietary.

pub mod birthday;
pub mod contact;
pub mod error;
pub mod store;

pub use error::{Error, FieldError, Result};
