//! Error types for the registrar backend.
//!
//! This module provides a unified error handling system with specialized error types for
//! different domains (configuration, registration codes, transfer workflow). All errors use
//! `thiserror` for ergonomic error definitions with automatic `Display` and `Error` trait
//! implementations, and each error can be classified for retry handling via
//! [`retry::ErrorRetryStrategy`].

pub mod code;
pub mod config;
pub mod retry;
pub mod transfer;

use thiserror::Error;

use crate::error::{code::CodeError, config::ConfigError, transfer::TransferError};

/// Main error type for the registrar backend.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Registration code errors (malformed codes, exhausted allocation attempts)
/// - Transfer errors (invalid status transitions, authorization, missing prerequisites)
/// - External library errors (database)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Registration code error (malformed code, allocation failure).
    #[error(transparent)]
    CodeError(#[from] CodeError),
    /// Transfer workflow error (status transitions, authorization, prerequisites).
    #[error(transparent)]
    TransferError(#[from] TransferError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the registrar's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error
    /// that needs to be reported as a GitHub issue.
    #[error("Internal error with the registrar's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
