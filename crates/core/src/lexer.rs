// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer for filter text.
//!
//! Lexing is total: every input produces a token stream ending in
//! [`TokenType::Eof`]. Characters that fit no other rule are coalesced into
//! [`TokenType::Symbol`] tokens and left for the parser to judge.

use crate::token::{Token, TokenType};

/// Characters that end a word and start a token of their own.
const DELIMITERS: &[char] = &['(', ')', '"', '<', '>', ':', ';', ',', '*', '&', '|'];

/// Converts filter text into tokens.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    /// Added to every reported position, for text lexed out of a larger input.
    offset: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer::with_offset(input, 0)
    }

    /// Creates a lexer whose token positions start at `offset`.
    pub fn with_offset(input: &str, offset: usize) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            offset,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn token(&self, kind: TokenType, value: impl Into<String>, start: usize) -> Token {
        Token::new(kind, value, start + self.offset)
    }

    /// Consumes the whole input and returns its tokens, `Eof` last.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            match self.current_char() {
                None => {
                    tokens.push(self.token(TokenType::Eof, "", self.input.len()));
                    break;
                }
                Some('"') => self.read_quoted(&mut tokens),
                Some(ch) => {
                    let token = self.next_token(ch);
                    tokens.push(token);
                }
            }
        }

        tracing::trace!(count = tokens.len(), "lexed filter text");
        tokens
    }

    fn next_token(&mut self, ch: char) -> Token {
        let start = self.position;

        let single = match ch {
            '(' => Some(TokenType::LBracket),
            ')' => Some(TokenType::RBracket),
            ':' => Some(TokenType::Colon),
            ';' => Some(TokenType::Semicolon),
            ',' => Some(TokenType::Comma),
            '*' => Some(TokenType::Star),
            '!' | '~' | '-' => Some(TokenType::Not),
            _ => None,
        };
        if let Some(kind) = single {
            self.advance();
            return self.token(kind, ch, start);
        }

        match ch {
            '<' | '>' => {
                self.advance();
                let or_equal = self.current_char() == Some('=');
                if or_equal {
                    self.advance();
                }
                let kind = match (ch, or_equal) {
                    ('<', false) => TokenType::Lt,
                    ('<', true) => TokenType::Lte,
                    (_, false) => TokenType::Gt,
                    (_, true) => TokenType::Gte,
                };
                let value: String = self.input[start..self.position].iter().collect();
                self.token(kind, value, start)
            }
            '&' | '|' => {
                self.advance();
                if self.current_char() == Some(ch) {
                    self.advance();
                }
                let kind = if ch == '&' {
                    TokenType::And
                } else {
                    TokenType::Or
                };
                let value: String = self.input[start..self.position].iter().collect();
                self.token(kind, value, start)
            }
            '.' if self.peek_char(1) == Some('.') => {
                self.advance();
                self.advance();
                self.token(TokenType::DotDot, "..", start)
            }
            _ => self.read_word(),
        }
    }

    /// Reads a run of word characters and classifies it.
    fn read_word(&mut self) -> Token {
        let start = self.position;
        let mut word = String::new();

        while let Some(ch) = self.current_char() {
            let ends_word = ch.is_whitespace()
                || DELIMITERS.contains(&ch)
                || (ch == '.' && self.peek_char(1) == Some('.'));
            if ends_word {
                break;
            }
            word.push(ch);
            self.advance();
        }

        if is_qualifier_name(&word) && self.consume_qualifier_colon() {
            return self.token(TokenType::Qualifier, word, start);
        }

        let kind = match word.to_ascii_lowercase().as_str() {
            "and" => TokenType::And,
            "or" => TokenType::Or,
            "not" => TokenType::Not,
            _ if is_date_shaped(&word) => TokenType::Date,
            _ if is_number_shaped(&word) => TokenType::Number,
            _ => TokenType::Symbol,
        };
        self.token(kind, word, start)
    }

    /// Consumes optional whitespace and a `:` after a qualifier name.
    ///
    /// Leaves the position untouched when no colon follows.
    fn consume_qualifier_colon(&mut self) -> bool {
        let mut lookahead = self.position;
        while self.input.get(lookahead).is_some_and(|c| c.is_whitespace()) {
            lookahead += 1;
        }
        if self.input.get(lookahead) == Some(&':') {
            self.position = lookahead + 1;
            true
        } else {
            false
        }
    }

    /// Reads a quoted span: `Quote`, the verbatim text as a `Symbol`, and the
    /// closing `Quote` when present.
    fn read_quoted(&mut self, tokens: &mut Vec<Token>) {
        tokens.push(self.token(TokenType::Quote, "\"", self.position));
        self.advance();

        let content_start = self.position;
        let mut content = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '"' {
                break;
            }
            content.push(ch);
            self.advance();
        }

        if !content.is_empty() {
            tokens.push(self.token(TokenType::Symbol, content, content_start));
        }

        if self.current_char() == Some('"') {
            tokens.push(self.token(TokenType::Quote, "\"", self.position));
            self.advance();
        }
    }
}

/// Lexes filter text into tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).tokenize()
}

/// `[A-Za-z]+(-[A-Za-z]+)*`
pub(crate) fn is_qualifier_name(word: &str) -> bool {
    !word.is_empty()
        && word
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphabetic()))
}

/// `\d{4}-\d{1,2}-\d{1,2}`
fn is_date_shaped(word: &str) -> bool {
    let parts: Vec<&str> = word.split('-').collect();
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
    };
    parts.len() == 3 && digits(parts[0], 4, 4) && digits(parts[1], 1, 2) && digits(parts[2], 1, 2)
}

/// Digits with an optional single decimal part.
fn is_number_shaped(word: &str) -> bool {
    let mut parts = word.splitn(2, '.');
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    match (parts.next(), parts.next()) {
        (Some(whole), None) => all_digits(whole),
        (Some(whole), Some(fraction)) => all_digits(whole) && all_digits(fraction),
        _ => false,
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
