//! Error types for the Paisa library.
//!
//! The derived-metrics engine itself is total and never errors; these
//! variants cover date/month construction and record parsing, the only
//! places where invalid input cannot degrade to a neutral value.

use thiserror::Error;

/// A specialized Result type for Paisa operations.
pub type PaisaResult<T> = Result<T, PaisaError>;

/// The main error type for Paisa operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaisaError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A month-year key could not be parsed.
    #[error("Invalid month-year: {value} - expected \"MMM YYYY\"")]
    InvalidMonthYear {
        /// The unparseable value.
        value: String,
    },
}

impl PaisaError {
    /// Creates an `InvalidDate` error with the given message.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        PaisaError::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an `InvalidMonthYear` error for the given value.
    pub fn invalid_month_year(value: impl Into<String>) -> Self {
        PaisaError::InvalidMonthYear {
            value: value.into(),
        }
    }
}
