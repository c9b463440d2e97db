// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser for filter text.
//!
//! Precedence, loosest first:
//!
//! ```text
//! disjunction := conjunction ("or" conjunction)*
//! conjunction := negation (["and"] negation)*
//! negation    := "not" negation | primary
//! primary     := qualifier | "(" disjunction ")" | text | comparison | range
//! ```
//!
//! Parsing stops at the first error. [`Parser::parse`] folds the error into
//! an [`Expr::Invalid`] node; [`parse`] and [`parse_with`] return it.

use chrono::NaiveDate;

use crate::error::SyntaxError;
use crate::expr::{CompareOp, Content, Expr, Operand, Qualifier, SortKey};
use crate::lexer::{tokenize, Lexer};
use crate::qualifier::{QualifierKind, Registry};
use crate::token::{Token, TokenType};

type ParseResult<T> = std::result::Result<T, SyntaxError>;

/// Deepest nesting of negations and brackets a filter may use.
pub const MAX_DEPTH: usize = 256;

/// How far filter text is from being a complete filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// A prefix of a valid filter, such as `label:` or `(a or`. The error
    /// points where more input is expected.
    Incomplete(SyntaxError),
    Invalid(SyntaxError),
}

/// Parses filter text with the built-in qualifier names.
pub fn parse(text: &str) -> std::result::Result<Expr, SyntaxError> {
    parse_with(text, &Registry::default())
}

/// Parses filter text, resolving qualifier names through `registry`.
pub fn parse_with(text: &str, registry: &Registry) -> std::result::Result<Expr, SyntaxError> {
    match Parser::new(tokenize(text), registry).parse() {
        Expr::Invalid(err) => Err(err),
        expr => Ok(expr),
    }
}

/// Classifies filter text for as-you-type validation.
pub fn check(text: &str) -> Validity {
    check_with(text, &Registry::default())
}

pub fn check_with(text: &str, registry: &Registry) -> Validity {
    match parse_with(text, registry) {
        Ok(_) => Validity::Valid,
        Err(err) if err.incomplete => Validity::Incomplete(err),
        Err(err) => Validity::Invalid(err),
    }
}

/// Builds an expression tree from tokens.
pub struct Parser<'r> {
    tokens: Vec<Token>,
    index: usize,
    eof: Token,
    depth: usize,
    registry: &'r Registry,
}

impl<'r> Parser<'r> {
    /// Creates a parser over `tokens`. A trailing `Eof` is assumed when
    /// missing.
    pub fn new(tokens: Vec<Token>, registry: &'r Registry) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.is(TokenType::Eof) => last.clone(),
            Some(last) => Token::new(
                TokenType::Eof,
                "",
                last.position + last.value.chars().count(),
            ),
            None => Token::new(TokenType::Eof, "", 0),
        };
        Parser {
            tokens,
            index: 0,
            eof,
            depth: 0,
            registry,
        }
    }

    /// Parses the whole token stream. Never fails: a syntax error becomes
    /// the single [`Expr::Invalid`] node of the result.
    pub fn parse(mut self) -> Expr {
        match self.parse_filter() {
            Ok(expr) => {
                tracing::trace!(qualifiers = expr.qualifiers().len(), "parsed filter");
                expr
            }
            Err(err) => {
                tracing::debug!(position = err.position, "filter syntax error: {}", err.message);
                Expr::Invalid(err)
            }
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.eof)
    }

    fn peek(&self, ahead: usize) -> &Token {
        self.tokens.get(self.index + ahead).unwrap_or(&self.eof)
    }

    fn at(&self, kind: TokenType) -> bool {
        self.current().is(kind)
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !token.is(TokenType::Eof) {
            self.index += 1;
        }
        token
    }

    /// Enters one nesting level at `token`, failing past [`MAX_DEPTH`].
    fn descend(&mut self, token: &Token) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::at(token, "filter nests too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    /// Fails with an incomplete-input error when the input has run out.
    fn expect_more(&self, message: impl Into<String>) -> ParseResult<()> {
        if self.at(TokenType::Eof) {
            Err(SyntaxError::unexpected_end(self.current(), message))
        } else {
            Ok(())
        }
    }

    fn parse_filter(&mut self) -> ParseResult<Expr> {
        if self.at(TokenType::Eof) {
            return Ok(Expr::Empty);
        }

        let expr = self.parse_disjunction()?;

        let token = self.current();
        match token.kind {
            TokenType::Eof => Ok(expr),
            TokenType::RBracket => Err(SyntaxError::at(token, "unmatched ')'")),
            _ => Err(SyntaxError::at(token, format!("unexpected {token}"))),
        }
    }

    fn parse_disjunction(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_conjunction()?;

        while self.at(TokenType::Or) {
            let op = self.advance();
            self.expect_more(format!("expected an expression after {op}"))?;
            let right = self.parse_conjunction()?;
            left = Expr::Disjunction(Box::new(left), Box::new(right));
        }

        Ok(left)
    }

    fn parse_conjunction(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_negation()?;

        loop {
            match self.current().kind {
                TokenType::Or | TokenType::RBracket | TokenType::Eof => break,
                TokenType::And => {
                    let op = self.advance();
                    self.expect_more(format!("expected an expression after {op}"))?;
                }
                _ => {}
            }
            let right = self.parse_negation()?;
            left = Expr::Conjunction(Box::new(left), Box::new(right));
        }

        Ok(left)
    }

    fn parse_negation(&mut self) -> ParseResult<Expr> {
        if self.at(TokenType::Not) {
            let op = self.advance();
            self.descend(&op)?;
            self.expect_more(format!("expected an expression after {op}"))?;
            let inner = self.parse_negation()?;
            self.depth -= 1;
            return Ok(Expr::Negation(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.current().clone();
        match token.kind {
            TokenType::LBracket => self.parse_group(),
            TokenType::Qualifier => self.parse_qualifier(),
            TokenType::Symbol => {
                self.advance();
                Ok(Expr::keyword(token.value))
            }
            TokenType::Number | TokenType::Date => {
                if self.peek(1).is(TokenType::DotDot) {
                    let range = self.parse_range()?;
                    Ok(Expr::qualifier(self.implicit_kind(&range), range))
                } else {
                    self.advance();
                    Ok(Expr::keyword(token.value))
                }
            }
            TokenType::Quote => {
                let (open, text) = self.parse_quoted()?;
                if text.is_empty() {
                    return Err(SyntaxError::at(&open, "empty quoted text"));
                }
                Ok(Expr::keyword(text))
            }
            TokenType::Lt | TokenType::Lte | TokenType::Gt | TokenType::Gte => {
                let comparison = self.parse_comparison()?;
                Ok(Expr::qualifier(self.implicit_kind(&comparison), comparison))
            }
            TokenType::Eof => Err(SyntaxError::unexpected_end(
                &token,
                "expected an expression",
            )),
            TokenType::RBracket => Err(SyntaxError::at(&token, "unmatched ')'")),
            _ => Err(SyntaxError::at(&token, format!("unexpected {token}"))),
        }
    }

    fn parse_group(&mut self) -> ParseResult<Expr> {
        let open = self.advance();
        self.descend(&open)?;
        if self.at(TokenType::Eof) {
            return Err(SyntaxError::unexpected_end(&open, "unmatched '('"));
        }
        if self.at(TokenType::RBracket) {
            return Err(SyntaxError::at(self.current(), "empty parentheses"));
        }

        let inner = self.parse_disjunction()?;

        match self.current().kind {
            TokenType::RBracket => {
                self.advance();
                self.depth -= 1;
                Ok(inner)
            }
            TokenType::Eof => Err(SyntaxError::unexpected_end(&open, "unmatched '('")),
            _ => {
                let token = self.current();
                Err(SyntaxError::at(token, format!("expected ')' but found {token}")))
            }
        }
    }

    /// Bare comparisons and ranges apply to the registry's implicit fields.
    fn implicit_kind(&self, content: &Content) -> QualifierKind {
        let operand = match content {
            Content::Compare(_, operand) | Content::Range(operand, _) => operand,
            _ => return QualifierKind::Keyword,
        };
        match operand {
            Operand::Number(_) => self.registry.implicit_number().clone(),
            Operand::Date(_) => self.registry.implicit_date().clone(),
        }
    }

    /// `name:content`, or `name:a;b;c` as a disjunction of qualifiers.
    fn parse_qualifier(&mut self) -> ParseResult<Expr> {
        let name = self.advance();
        let kind = self.registry.resolve(&name.value);

        if kind == QualifierKind::Sort {
            let keys = self.parse_sort_keys()?;
            return Ok(Expr::qualifier(kind, Content::Sort(keys)));
        }

        let content = self.parse_content(&kind, &name)?;
        let mut expr = Expr::qualifier(kind.clone(), content);

        while self.at(TokenType::Semicolon) {
            self.advance();
            let content = self.parse_content(&kind, &name)?;
            let alternative = Expr::qualifier(kind.clone(), content);
            expr = Expr::Disjunction(Box::new(expr), Box::new(alternative));
        }

        Ok(expr)
    }

    fn parse_content(&mut self, kind: &QualifierKind, name: &Token) -> ParseResult<Content> {
        let token = self.current().clone();
        match token.kind {
            TokenType::Star => {
                self.advance();
                Ok(Content::Any)
            }
            TokenType::Lt | TokenType::Lte | TokenType::Gt | TokenType::Gte => {
                self.parse_comparison()
            }
            TokenType::Number | TokenType::Date if self.peek(1).is(TokenType::DotDot) => {
                self.parse_range()
            }
            TokenType::Number | TokenType::Date if kind.takes_ordinals() => {
                match self.parse_operand()? {
                    Operand::Number(n) => Ok(Content::Number(n)),
                    Operand::Date(d) => Ok(Content::Date(d)),
                }
            }
            TokenType::Symbol | TokenType::Number | TokenType::Date => {
                self.advance();
                Ok(Content::Text(token.value))
            }
            TokenType::Quote => {
                let (open, text) = self.parse_quoted()?;
                Ok(self.reparse_quoted(kind, name, &text, open.position + 1))
            }
            TokenType::Eof => Err(SyntaxError::unexpected_end(
                &token,
                format!("expected a value after '{}:'", name.value),
            )),
            _ => Err(SyntaxError::at(
                &token,
                format!("expected a value after '{}:' but found {token}", name.value),
            )),
        }
    }

    /// Parses quoted content of number and date qualifiers as content
    /// (`created:" > 2014-5-1 "`), keeping it as text when that fails.
    fn reparse_quoted(
        &self,
        kind: &QualifierKind,
        name: &Token,
        text: &str,
        position: usize,
    ) -> Content {
        if !kind.takes_ordinals() || text.trim().is_empty() {
            return Content::Text(text.to_string());
        }

        let tokens = Lexer::with_offset(text, position).tokenize();
        let mut inner = Parser::new(tokens, self.registry);
        match inner.parse_content(kind, name) {
            Ok(content) if inner.at(TokenType::Eof) => content,
            _ => Content::Text(text.to_string()),
        }
    }

    /// Reads `"text"`, returning the opening quote and the verbatim text.
    fn parse_quoted(&mut self) -> ParseResult<(Token, String)> {
        let open = self.advance();
        let text = if self.at(TokenType::Symbol) {
            self.advance().value
        } else {
            String::new()
        };
        if !self.at(TokenType::Quote) {
            return Err(SyntaxError::unexpected_end(&open, "unterminated quote"));
        }
        self.advance();
        Ok((open, text))
    }

    fn parse_comparison(&mut self) -> ParseResult<Content> {
        let op_token = self.advance();
        let op = CompareOp::from_token(op_token.kind).ok_or_else(|| {
            SyntaxError::at(&op_token, format!("expected a comparison but found {op_token}"))
        })?;
        let operand = self.parse_operand()?;
        Ok(Content::Compare(op, operand))
    }

    /// `start..end` or `start..*`.
    fn parse_range(&mut self) -> ParseResult<Content> {
        let start = self.parse_operand()?;
        self.advance();

        if self.at(TokenType::Star) {
            self.advance();
            return Ok(Content::Range(start, None));
        }

        let end_token = self.current().clone();
        let end = self.parse_operand()?;
        if !start.same_kind(&end) {
            return Err(SyntaxError::at(
                &end_token,
                "range ends must both be numbers or both be dates",
            ));
        }
        Ok(Content::Range(start, Some(end)))
    }

    fn parse_operand(&mut self) -> ParseResult<Operand> {
        let token = self.current().clone();
        match token.kind {
            TokenType::Number => {
                self.advance();
                parse_number(&token).map(Operand::Number)
            }
            TokenType::Date => {
                self.advance();
                parse_date(&token).map(Operand::Date)
            }
            TokenType::Eof => Err(SyntaxError::unexpected_end(
                &token,
                "expected a number or date",
            )),
            _ => Err(SyntaxError::at(
                &token,
                format!("expected a number or date but found {token}"),
            )),
        }
    }

    /// Comma-separated keys, each optionally negated: `!updated,comments`.
    fn parse_sort_keys(&mut self) -> ParseResult<Vec<SortKey>> {
        let mut keys = Vec::new();

        loop {
            let inverted = self.at(TokenType::Not);
            if inverted {
                self.advance();
            }

            let token = self.current().clone();
            match token.kind {
                TokenType::Symbol => {
                    self.advance();
                    keys.push(SortKey::new(token.value.to_lowercase(), inverted));
                }
                TokenType::Eof => {
                    return Err(SyntaxError::unexpected_end(&token, "expected a sort key"));
                }
                _ => {
                    return Err(SyntaxError::at(
                        &token,
                        format!("expected a sort key but found {token}"),
                    ));
                }
            }

            if !self.at(TokenType::Comma) {
                break;
            }
            self.advance();
        }

        Ok(keys)
    }
}

fn parse_number(token: &Token) -> ParseResult<i64> {
    if token.value.contains('.') {
        return Err(SyntaxError::at(
            token,
            format!("expected a whole number but found {token}"),
        ));
    }
    token
        .value
        .parse()
        .map_err(|_| SyntaxError::at(token, format!("number {token} is too large")))
}

fn parse_date(token: &Token) -> ParseResult<NaiveDate> {
    let mut parts = token.value.splitn(3, '-').map(str::parse::<u32>);
    let date = match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(year)), Some(Ok(month)), Some(Ok(day))) => i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, day)),
        _ => None,
    };
    date.ok_or_else(|| SyntaxError::at(token, format!("invalid date {token}")))
}

impl Qualifier {
    /// Parses a single qualifier such as `label:bug`.
    ///
    /// Fails unless the text is exactly one qualifier.
    pub fn parse(text: &str) -> std::result::Result<Qualifier, SyntaxError> {
        let expr = parse(text)?;
        match expr {
            Expr::Qualifier(q) => Ok(q),
            _ => Err(SyntaxError {
                message: format!("expected a single qualifier but found '{text}'"),
                position: 0,
                token: None,
                incomplete: false,
            }),
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
