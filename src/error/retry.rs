//! Retry classification for application errors.

use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient errors)
    Retry,
    /// Failed permanently (bad request or data issue)
    Fail,
}

impl Error {
    /// Classifies an error as transient or permanent for retry purposes
    ///
    /// Only connection-level database errors are worth retrying; everything
    /// else, constraint violations included, reproduces on every attempt.
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // The pool was exhausted or the connection dropped; a later
                // attempt may find the database reachable again
                DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query, execution, type conversion and record-not-found
                // errors point at bugs or bad data, not at the connection
                _ => ErrorRetryStrategy::Fail,
            },

            // The environment does not change between attempts
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Malformed codes and exhausted allocation budgets
            Self::CodeError(_) => ErrorRetryStrategy::Fail,

            // State machine and authorization violations
            Self::TransferError(_) => ErrorRetryStrategy::Fail,

            // Unparseable input stays unparseable
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // Bugs in the registrar itself
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
