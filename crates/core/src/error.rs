// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hubq-core operations.
//!
//! Lexing is total and has no error type. Evaluation is total as well. The
//! only failure the filter language reports is a [`SyntaxError`], which the
//! parser either embeds in the tree or returns as the `Err` side of
//! [`parse`](crate::parse).

use serde::Serialize;
use thiserror::Error;

use crate::token::Token;

/// A syntax error found while parsing filter text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} at position {position}")]
pub struct SyntaxError {
    /// Human-readable description, naming the offending token.
    pub message: String,
    /// Zero-based character offset of the offending token.
    pub position: usize,
    /// The token the parser stopped at, if any.
    pub token: Option<Token>,
    /// True when the input ended before the expression was complete.
    ///
    /// Incomplete input is valid as a prefix, which matters to callers
    /// re-parsing on every keystroke.
    pub incomplete: bool,
}

impl SyntaxError {
    pub(crate) fn at(token: &Token, message: impl Into<String>) -> Self {
        SyntaxError {
            message: message.into(),
            position: token.position,
            token: Some(token.clone()),
            incomplete: false,
        }
    }

    pub(crate) fn unexpected_end(token: &Token, message: impl Into<String>) -> Self {
        SyntaxError {
            incomplete: true,
            ..SyntaxError::at(token, message)
        }
    }
}

/// All possible errors that can occur in hubq-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("unknown qualifier: '{name}'\n  hint: run 'hubq keywords' to list qualifier names")]
    UnknownQualifier { name: String },

    #[error("cannot use '{alias}' as an alias\n  hint: it is already a built-in qualifier name or an operator word")]
    ReservedAlias { alias: String },
}

/// A specialized Result type for hubq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
