// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for recording and reading expenses.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected user input. Nothing is written when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Date {0} is in the future")]
    FutureDate(NaiveDate),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Amount {0} exceeds the largest accepted amount {1}")]
    AmountTooLarge(Decimal, Decimal),

    #[error("Description must not be empty")]
    EmptyDescription,
}

/// Failure to read or write the expense file.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt record in {} at line {line}: {reason}", .path.display())]
    Corrupt {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Total for '{0}' is too large to compute")]
    TotalOverflow(String),
}

impl ExpenseError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ExpenseError::Validation(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, ExpenseError::Storage(_))
    }
}
