// Domain Errors
// Conditions the model can surface instead of degrading silently

use thiserror::Error;

use crate::entities::PersonId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Only raised under `RatePolicy::Strict`; the default policy zeroes the amount instead
    #[error("Unsupported currency: {code}")]
    UnsupportedCurrency { code: String },

    #[error("Family has no members to describe")]
    EmptyFamily,

    #[error("Person not found: {id}")]
    PersonNotFound { id: PersonId },

    #[error("Invalid age: {age} (must be non-negative)")]
    InvalidAge { age: i32 },
}

impl DomainError {
    pub fn unsupported_currency<T: AsRef<str>>(code: T) -> Self {
        Self::UnsupportedCurrency {
            code: code.as_ref().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
