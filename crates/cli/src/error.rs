// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the hqrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] hubq_core::Error),

    #[error("invalid filter: {0}")]
    Syntax(#[from] hubq_core::SyntaxError),

    #[error("incomplete filter: {0}")]
    Incomplete(hubq_core::SyntaxError),

    #[error("no issues given\n  hint: pass a JSON file with --input, or pipe one to stdin")]
    NoInput,

    #[error("invalid timestamp '{value}': {reason}\n  hint: use RFC 3339, e.g. 2014-06-01T12:00:00Z")]
    InvalidTimestamp { value: String, reason: String },

    #[error("config error in {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error. Incomplete filters exit with 2 so
    /// scripts can tell them from invalid ones.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Incomplete(_) => 2,
            _ => 1,
        }
    }
}

/// A specialized Result type for hqrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
