// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Qualifier vocabulary of the filter language.
//!
//! The set of qualifier kinds is closed. Embedding applications may add
//! aliases through [`Registry::with_alias`], but every alias resolves to one
//! of the built-in kinds.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::lexer;

/// Canonical qualifier names, in the order they are listed to users.
pub const BUILTIN_NAMES: &[&str] = &[
    "keyword",
    "title",
    "description",
    "author",
    "assignee",
    "involves",
    "milestone",
    "label",
    "state",
    "type",
    "has",
    "no",
    "is",
    "id",
    "comments",
    "created",
    "updated",
    "due",
    "repo",
    "in",
    "sort",
];

/// Aliases every registry starts with.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("m", "milestone"),
    ("as", "assignee"),
    ("au", "author"),
    ("s", "state"),
    ("creator", "author"),
    ("user", "involves"),
    ("status", "state"),
    ("body", "description"),
    ("desc", "description"),
    ("labels", "label"),
    ("milestones", "milestone"),
];

/// Words offered for completion that are qualifier contents, not names.
const CONTENT_KEYWORDS: &[&str] = &[
    "open",
    "closed",
    "issue",
    "pr",
    "pullrequest",
    "merged",
    "unmerged",
    "read",
    "unread",
];

/// The attribute a qualifier tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualifierKind {
    /// Bare text, matched against title and description.
    Keyword,
    Title,
    Description,
    Author,
    Assignee,
    /// Author or assignee.
    Involves,
    Milestone,
    Label,
    State,
    Type,
    Has,
    No,
    Is,
    Id,
    Comments,
    Created,
    /// Hours since the last update.
    Updated,
    /// Due date of the issue's milestone.
    Due,
    Repo,
    /// Restricts keyword matching to the title or the body.
    In,
    /// Orders results; carries sort keys.
    Sort,
    /// A name the registry does not know. Never matches.
    Unknown(String),
}

/// The kind of value a qualifier expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShape {
    Text,
    /// Membership in a set of strings (labels).
    Set,
    Number,
    Date,
    /// Configures the search instead of testing an issue.
    Meta,
}

impl QualifierKind {
    /// Looks up a canonical (non-alias) name. Expects lower case.
    fn canonical(name: &str) -> Option<QualifierKind> {
        let kind = match name {
            "keyword" => QualifierKind::Keyword,
            "title" => QualifierKind::Title,
            "description" => QualifierKind::Description,
            "author" => QualifierKind::Author,
            "assignee" => QualifierKind::Assignee,
            "involves" => QualifierKind::Involves,
            "milestone" => QualifierKind::Milestone,
            "label" => QualifierKind::Label,
            "state" => QualifierKind::State,
            "type" => QualifierKind::Type,
            "has" => QualifierKind::Has,
            "no" => QualifierKind::No,
            "is" => QualifierKind::Is,
            "id" => QualifierKind::Id,
            "comments" => QualifierKind::Comments,
            "created" => QualifierKind::Created,
            "updated" => QualifierKind::Updated,
            "due" => QualifierKind::Due,
            "repo" => QualifierKind::Repo,
            "in" => QualifierKind::In,
            "sort" => QualifierKind::Sort,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the canonical name, or the name as written for unknown kinds.
    pub fn name(&self) -> &str {
        match self {
            QualifierKind::Keyword => "keyword",
            QualifierKind::Title => "title",
            QualifierKind::Description => "description",
            QualifierKind::Author => "author",
            QualifierKind::Assignee => "assignee",
            QualifierKind::Involves => "involves",
            QualifierKind::Milestone => "milestone",
            QualifierKind::Label => "label",
            QualifierKind::State => "state",
            QualifierKind::Type => "type",
            QualifierKind::Has => "has",
            QualifierKind::No => "no",
            QualifierKind::Is => "is",
            QualifierKind::Id => "id",
            QualifierKind::Comments => "comments",
            QualifierKind::Created => "created",
            QualifierKind::Updated => "updated",
            QualifierKind::Due => "due",
            QualifierKind::Repo => "repo",
            QualifierKind::In => "in",
            QualifierKind::Sort => "sort",
            QualifierKind::Unknown(name) => name,
        }
    }

    pub fn shape(&self) -> ValueShape {
        match self {
            QualifierKind::Label => ValueShape::Set,
            QualifierKind::Id | QualifierKind::Comments | QualifierKind::Updated => {
                ValueShape::Number
            }
            QualifierKind::Created | QualifierKind::Due => ValueShape::Date,
            QualifierKind::In | QualifierKind::Sort => ValueShape::Meta,
            _ => ValueShape::Text,
        }
    }

    /// Returns true for qualifiers that configure the search (`in:`, `sort:`).
    pub fn is_meta(&self) -> bool {
        self.shape() == ValueShape::Meta
    }

    /// Returns true when numbers and dates written as content stay numeric.
    pub fn takes_ordinals(&self) -> bool {
        matches!(self.shape(), ValueShape::Number | ValueShape::Date)
    }
}

impl fmt::Display for QualifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps qualifier names and aliases to kinds.
///
/// Supplied to the parser by the embedding application. Names resolve
/// case-insensitively; names the registry does not know resolve to
/// [`QualifierKind::Unknown`] rather than failing.
#[derive(Debug, Clone)]
pub struct Registry {
    aliases: BTreeMap<String, QualifierKind>,
    implicit_number: QualifierKind,
    implicit_date: QualifierKind,
}

impl Default for Registry {
    fn default() -> Self {
        let aliases = BUILTIN_ALIASES
            .iter()
            .filter_map(|(alias, target)| {
                QualifierKind::canonical(target).map(|kind| (alias.to_string(), kind))
            })
            .collect();
        Registry {
            aliases,
            implicit_number: QualifierKind::Comments,
            implicit_date: QualifierKind::Due,
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a qualifier name or alias.
    pub fn resolve(&self, name: &str) -> QualifierKind {
        let name = name.trim().to_lowercase();
        QualifierKind::canonical(&name)
            .or_else(|| self.aliases.get(&name).cloned())
            .unwrap_or(QualifierKind::Unknown(name))
    }

    /// Adds an alias for an existing qualifier name or alias.
    ///
    /// # Errors
    ///
    /// Fails when the alias shadows a built-in name or an operator word, is
    /// not lexable as a qualifier name, or when the target is unknown.
    pub fn with_alias(mut self, alias: &str, target: &str) -> Result<Self> {
        let alias = alias.trim().to_lowercase();
        let reserved = QualifierKind::canonical(&alias).is_some()
            || matches!(alias.as_str(), "and" | "or" | "not")
            || !lexer::is_qualifier_name(&alias);
        if reserved {
            return Err(Error::ReservedAlias { alias });
        }

        let kind = match self.resolve(target) {
            QualifierKind::Unknown(name) => return Err(Error::UnknownQualifier { name }),
            kind => kind,
        };

        tracing::debug!(alias = %alias, target = %kind, "registered qualifier alias");
        self.aliases.insert(alias, kind);
        Ok(self)
    }

    /// Iterates over aliases in name order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &QualifierKind)> {
        self.aliases.iter().map(|(alias, kind)| (alias.as_str(), kind))
    }

    /// The field a bare numeric comparison or range applies to.
    pub fn implicit_number(&self) -> &QualifierKind {
        &self.implicit_number
    }

    /// The field a bare date comparison or range applies to.
    pub fn implicit_date(&self) -> &QualifierKind {
        &self.implicit_date
    }

    /// Words a filter input field may offer for completion.
    ///
    /// Canonical names (except `keyword`), aliases longer than two
    /// characters, and the fixed words accepted by `is:`, `state:` and
    /// `type:`. Sorted, without duplicates.
    pub fn completion_keywords(&self) -> Vec<String> {
        let mut words: Vec<String> = BUILTIN_NAMES
            .iter()
            .filter(|name| **name != "keyword")
            .map(|name| name.to_string())
            .chain(
                self.aliases
                    .keys()
                    .filter(|alias| alias.len() > 2)
                    .cloned(),
            )
            .chain(CONTENT_KEYWORDS.iter().map(|word| word.to_string()))
            .collect();
        words.sort();
        words.dedup();
        words
    }
}

#[cfg(test)]
#[path = "qualifier_tests.rs"]
mod tests;
