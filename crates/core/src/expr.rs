// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expression tree of the filter language.
//!
//! Trees are immutable once the parser builds them. Children are owned by
//! their parent; there is no sharing. The [`Display`](fmt::Display)
//! implementation writes canonical filter text that parses back to an equal
//! tree.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::SyntaxError;
use crate::qualifier::QualifierKind;
use crate::token::TokenType;

/// Ordering operators usable in qualifier content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    /// Maps a comparison token kind to its operator.
    pub fn from_token(kind: TokenType) -> Option<CompareOp> {
        match kind {
            TokenType::Lt => Some(CompareOp::Lt),
            TokenType::Lte => Some(CompareOp::Le),
            TokenType::Gt => Some(CompareOp::Gt),
            TokenType::Gte => Some(CompareOp::Ge),
            _ => None,
        }
    }

    /// Returns true when `actual <op> threshold` holds.
    pub fn holds<T: PartialOrd>(&self, actual: T, threshold: T) -> bool {
        match self {
            CompareOp::Lt => actual < threshold,
            CompareOp::Le => actual <= threshold,
            CompareOp::Gt => actual > threshold,
            CompareOp::Ge => actual >= threshold,
        }
    }
}

/// A value that can be compared or bound a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Number(i64),
    Date(NaiveDate),
}

impl Operand {
    /// Returns true when both operands are numbers or both are dates.
    pub fn same_kind(&self, other: &Operand) -> bool {
        matches!(
            (self, other),
            (Operand::Number(_), Operand::Number(_)) | (Operand::Date(_), Operand::Date(_))
        )
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// One key of a `sort:` qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SortKey {
    /// Lower-cased key: `comments`, `repo`, `updated`, `date`, `id`, or a
    /// label group.
    pub key: String,
    /// Reverses the order for this key (`!key`).
    pub inverted: bool,
}

impl SortKey {
    pub fn new(key: impl Into<String>, inverted: bool) -> Self {
        SortKey {
            key: key.into(),
            inverted,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            f.write_str("!")?;
        }
        f.write_str(&self.key)
    }
}

/// The value part of a qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    Text(String),
    /// `*`: the attribute is present.
    Any,
    Number(i64),
    Date(NaiveDate),
    Compare(CompareOp, Operand),
    /// Inclusive range. A `None` end is open (`*`).
    Range(Operand, Option<Operand>),
    Sort(Vec<SortKey>),
}

impl Content {
    pub fn text(value: impl Into<String>) -> Self {
        Content::Text(value.into())
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => write_text(f, text),
            Content::Any => f.write_str("*"),
            Content::Number(n) => write!(f, "{n}"),
            Content::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Content::Compare(op, operand) => write!(f, "{}{operand}", op.as_str()),
            Content::Range(start, Some(end)) => write!(f, "{start}..{end}"),
            Content::Range(start, None) => write!(f, "{start}..*"),
            Content::Sort(keys) => {
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key}")?;
                }
                Ok(())
            }
        }
    }
}

/// A `name:content` predicate. Bare text is a [`QualifierKind::Keyword`]
/// qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Qualifier {
    pub kind: QualifierKind,
    pub content: Content,
}

impl Qualifier {
    pub fn new(kind: QualifierKind, content: Content) -> Self {
        Qualifier { kind, content }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.content) {
            (QualifierKind::Keyword, Content::Text(text)) => write_text(f, text),
            // Unquoted, text such as `3.5` would lex as a number and fail.
            (kind, Content::Text(text)) if kind.takes_ordinals() => {
                write!(f, "{kind}:\"{text}\"")
            }
            (kind, content) => write!(f, "{kind}:{content}"),
        }
    }
}

/// A parsed filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Matches everything. Produced by empty input.
    Empty,
    Qualifier(Qualifier),
    Conjunction(Box<Expr>, Box<Expr>),
    Disjunction(Box<Expr>, Box<Expr>),
    Negation(Box<Expr>),
    /// Unparseable input. Matches nothing.
    Invalid(SyntaxError),
}

impl Expr {
    pub fn qualifier(kind: QualifierKind, content: Content) -> Expr {
        Expr::Qualifier(Qualifier::new(kind, content))
    }

    pub fn keyword(text: impl Into<String>) -> Expr {
        Expr::qualifier(QualifierKind::Keyword, Content::Text(text.into()))
    }

    pub fn and(self, other: Expr) -> Expr {
        match (self, other) {
            (Expr::Empty, other) => other,
            (this, Expr::Empty) => this,
            (this, other) => Expr::Conjunction(Box::new(this), Box::new(other)),
        }
    }

    pub fn or(self, other: Expr) -> Expr {
        match (self, other) {
            (Expr::Empty, other) => other,
            (this, Expr::Empty) => this,
            (this, other) => Expr::Disjunction(Box::new(this), Box::new(other)),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Expr {
        Expr::Negation(Box::new(self))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Expr::Empty)
    }

    /// Returns the first syntax error in the tree, if any.
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            Expr::Invalid(err) => Some(err),
            Expr::Conjunction(l, r) | Expr::Disjunction(l, r) => {
                l.syntax_error().or_else(|| r.syntax_error())
            }
            Expr::Negation(inner) => inner.syntax_error(),
            Expr::Empty | Expr::Qualifier(_) => None,
        }
    }

    /// Collects every qualifier in the tree, left to right.
    pub fn qualifiers(&self) -> Vec<&Qualifier> {
        let mut found = Vec::new();
        self.collect_qualifiers(&mut found);
        found
    }

    fn collect_qualifiers<'a>(&'a self, found: &mut Vec<&'a Qualifier>) {
        match self {
            Expr::Qualifier(q) => found.push(q),
            Expr::Conjunction(l, r) | Expr::Disjunction(l, r) => {
                l.collect_qualifiers(found);
                r.collect_qualifiers(found);
            }
            Expr::Negation(inner) => inner.collect_qualifiers(found),
            Expr::Empty | Expr::Invalid(_) => {}
        }
    }

    /// Distinct qualifier kinds in the tree, in order of first appearance.
    pub fn kinds(&self) -> Vec<&QualifierKind> {
        let mut kinds: Vec<&QualifierKind> = Vec::new();
        for q in self.qualifiers() {
            if !kinds.contains(&&q.kind) {
                kinds.push(&q.kind);
            }
        }
        kinds
    }

    pub fn contains_kind(&self, kind: &QualifierKind) -> bool {
        self.qualifiers().iter().any(|q| &q.kind == kind)
    }

    /// Keeps the qualifiers `keep` accepts.
    ///
    /// A removed qualifier becomes [`Expr::Empty`]; operators left with an
    /// empty operand collapse to the other operand.
    pub fn retain<F>(self, keep: &F) -> Expr
    where
        F: Fn(&Qualifier) -> bool,
    {
        match self {
            Expr::Qualifier(q) if !keep(&q) => Expr::Empty,
            Expr::Conjunction(l, r) => l.retain(keep).and(r.retain(keep)),
            Expr::Disjunction(l, r) => l.retain(keep).or(r.retain(keep)),
            Expr::Negation(inner) => match inner.retain(keep) {
                Expr::Empty => Expr::Empty,
                inner => inner.not(),
            },
            other => other,
        }
    }

    /// Writes a child, parenthesized when its operator binds looser than the
    /// position requires.
    fn write_operand(&self, f: &mut fmt::Formatter<'_>, bracket: bool) -> fmt::Result {
        if bracket {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Empty | Expr::Invalid(_) => Ok(()),
            Expr::Qualifier(q) => write!(f, "{q}"),
            Expr::Conjunction(l, r) => {
                l.write_operand(f, matches!(**l, Expr::Disjunction(..)))?;
                f.write_str(" ")?;
                r.write_operand(f, matches!(**r, Expr::Disjunction(..) | Expr::Conjunction(..)))
            }
            Expr::Disjunction(l, r) => {
                l.write_operand(f, false)?;
                f.write_str(" or ")?;
                r.write_operand(f, matches!(**r, Expr::Disjunction(..)))
            }
            Expr::Negation(inner) => {
                f.write_str("-")?;
                inner.write_operand(
                    f,
                    matches!(**inner, Expr::Disjunction(..) | Expr::Conjunction(..)),
                )
            }
        }
    }
}

/// Writes text, quoted when it would not lex back to the same text.
fn write_text(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if needs_quotes(text) {
        write!(f, "\"{text}\"")
    } else {
        f.write_str(text)
    }
}

fn needs_quotes(text: &str) -> bool {
    const BREAKS: &[char] = &['(', ')', '"', '<', '>', ':', ';', ',', '*', '&', '|'];
    const PREFIXES: &[char] = &['!', '~', '-'];
    text.is_empty()
        || text.contains("..")
        || text.starts_with(PREFIXES)
        || text.chars().any(|c| c.is_whitespace() || BREAKS.contains(&c))
        || matches!(text.to_ascii_lowercase().as_str(), "and" | "or" | "not")
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;
