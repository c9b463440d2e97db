// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical tokens of the filter language.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// End of input. Always the last token.
    Eof,
    /// `(`
    LBracket,
    /// `)`
    RBracket,
    /// Free text: keywords, qualifier content, quoted spans.
    Symbol,
    /// Digits with an optional decimal part.
    Number,
    /// `not`, `!`, `~`, or a leading `-`.
    Not,
    /// `and`, `&`, `&&`.
    And,
    /// `or`, `|`, `||`.
    Or,
    /// A `:` that does not follow a qualifier name.
    Colon,
    /// `"`
    Quote,
    /// `..`
    DotDot,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// A qualifier name followed by `:`; the value holds the name only.
    Qualifier,
    /// `*`
    Star,
    /// `YYYY-MM-DD` shaped text.
    Date,
    /// `;` separating alternative qualifier contents.
    Semicolon,
    /// `,` separating sort keys.
    Comma,
}

impl TokenType {
    /// Returns the upper-case name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Eof => "EOF",
            TokenType::LBracket => "LBRACKET",
            TokenType::RBracket => "RBRACKET",
            TokenType::Symbol => "SYMBOL",
            TokenType::Number => "NUMBER",
            TokenType::Not => "NOT",
            TokenType::And => "AND",
            TokenType::Or => "OR",
            TokenType::Colon => "COLON",
            TokenType::Quote => "QUOTE",
            TokenType::DotDot => "DOTDOT",
            TokenType::Lt => "LT",
            TokenType::Lte => "LTE",
            TokenType::Gt => "GT",
            TokenType::Gte => "GTE",
            TokenType::Qualifier => "QUALIFIER",
            TokenType::Star => "STAR",
            TokenType::Date => "DATE",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Comma => "COMMA",
        }
    }

    /// Returns true for the comparison operators `<`, `<=`, `>`, `>=`.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenType::Lt | TokenType::Lte | TokenType::Gt | TokenType::Gte
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its source position.
///
/// Equality and hashing consider `(kind, value)` only. Two tokens lexed at
/// different offsets compare equal when they have the same shape.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
    /// Zero-based character offset of the token's first character.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenType::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.value),
        }
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
