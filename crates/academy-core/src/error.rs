//! Error Types for the Academy Core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AcademyError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcademyError {
    #[error("Invalid hour selection: {0:?}")]
    InvalidHours(String),

    #[error("Invalid installment count: {0} (expected 1-6)")]
    InvalidInstallments(u8),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),
}

impl AcademyError {
    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidHours(_) => "Please choose between 0 and 120 hours.".into(),
            Self::InvalidInstallments(_) => "Please choose a payment option.".into(),
            Self::MissingField(field) => format!("Please fill in your {}.", field.replace('_', " ")),
            Self::InvalidEmail(_) => "Please enter a valid email address.".into(),
        }
    }

    /// Stable machine-readable code for API responses
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidHours(_) => "INVALID_HOURS",
            Self::InvalidInstallments(_) => "INVALID_INSTALLMENTS",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidEmail(_) => "INVALID_EMAIL",
        }
    }
}
