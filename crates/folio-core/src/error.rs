//! Error types for folio-core.

use thiserror::Error;

use crate::contact::FieldErrors;

/// Errors produced while submitting the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// One or more fields failed validation; nothing was sent.
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    /// The sink could not deliver the message.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// A theme name that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct ParseThemeError(pub String);
