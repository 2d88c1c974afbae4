//! # Error Handling
//!
//! Centralized error type for the `repo-locator` library, built with
//! `thiserror`.
//!
//! Very little in this crate can actually fail: name parsing is total by
//! contract (every input string produces a best-effort `ParsedName`), and a
//! lookup that resolves to nothing is reported as `None`, never as an error.
//! The failure modes that remain are:
//!
//! - Compiling a malformed filter pattern (`InvalidPattern`, `Regex`). These
//!   are raised at compile time so a compiled matcher can be reused without
//!   per-match error handling.
//! - Materializing a provider from a `ProviderSource` (`Initialization`).
//!   The first failure is cached and replayed to later callers.

use thiserror::Error;

/// Main error type for repo-locator operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A filter pattern could not be compiled into a matcher.
    ///
    /// Raised for malformed glob syntax, such as a bare `!` with no
    /// sub-pattern after it.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Provider materialization failed.
    ///
    /// Carries the message of the underlying source failure; replayed
    /// verbatim on every subsequent access to the same provider.
    #[error("Provider initialization error: {message}")]
    Initialization { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
