use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid tax withholding rate: {rate}")]
    InvalidTaxRate {
        rate: Rate,
    },

    #[error("invalid transaction on {date}: {message}")]
    InvalidTransaction {
        date: NaiveDate,
        message: String,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("as-of date {as_of} is before the last transaction on {last_transaction}")]
    InvalidAsOfDate {
        as_of: NaiveDate,
        last_transaction: NaiveDate,
    },

    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange {
        from: NaiveDate,
        to: NaiveDate,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl LedgerError {
    /// whether the error stems from caller-supplied input
    /// rather than decimal range or output encoding
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            LedgerError::CalculationError { .. } | LedgerError::Serialization { .. }
        )
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
