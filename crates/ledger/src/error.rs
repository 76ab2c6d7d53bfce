//! The module contains the errors the ledger can return.
//!
//! The ledger performs no validation of its own, so the only failures are
//! the ones reported by the database:
//!
//! - [`Database`] any failure reported by the database driver.
//! - [`NoRows`] a procedure expected to return a row returned none.
//!
//!  [`Database`]: LedgerError::Database
//!  [`NoRows`]: LedgerError::NoRows
use sea_orm::DbErr;
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("procedure \"{0}\" returned no rows")]
    NoRows(&'static str),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoRows(a), Self::NoRows(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
