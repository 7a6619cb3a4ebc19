//! Error types for input collection.
//!
//! `FieldError` is always recoverable: the collector prints it and asks again.
//! `PromptError` ends the session.

use rust_decimal::Decimal;
use std::io;
use thiserror::Error;

/// A single field value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("'{input}' is not a valid number")]
    NotANumber { input: String },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("Distance must be between {min} and {max} kilometers")]
    DistanceOutOfRange { min: Decimal, max: Decimal },
}

/// Failure that ends input collection.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed while waiting for '{prompt}'")]
    InputClosed { prompt: String },

    #[error("collected record is invalid: {0}")]
    InvalidRecord(#[from] FieldError),
}
