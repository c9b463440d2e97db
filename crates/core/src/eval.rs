// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filter expressions against issues.
//!
//! Evaluation is total and side-effect free. Text comparisons ignore case.
//! Content of the wrong type for a qualifier (a date given to `comments:`,
//! a comparison given to `label:`) never matches.

use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

use crate::expr::{Content, Expr, Operand, Qualifier, SortKey};
use crate::issue::Queryable;
use crate::label;
use crate::qualifier::QualifierKind;

/// Which issue text bare keywords search, set by `in:`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordScope {
    #[default]
    All,
    Title,
    Body,
    /// Set by an unrecognized `in:` value; keywords never match.
    Nowhere,
}

impl KeywordScope {
    /// Reads an `in:` value. Unrecognized values search nothing.
    pub fn from_text(text: &str) -> KeywordScope {
        match text.to_lowercase().as_str() {
            "title" => KeywordScope::Title,
            "body" | "description" | "desc" => KeywordScope::Body,
            _ => KeywordScope::Nowhere,
        }
    }

    /// The scope set by the last `in:` qualifier of a tree.
    pub fn of(expr: &Expr) -> KeywordScope {
        expr.qualifiers()
            .iter()
            .filter(|q| q.kind == QualifierKind::In)
            .filter_map(|q| match &q.content {
                Content::Text(text) => Some(KeywordScope::from_text(text)),
                _ => None,
            })
            .last()
            .unwrap_or_default()
    }
}

/// Inputs to evaluation that do not come from the issue.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext {
    /// Reference time for `updated:` hour counts.
    pub now: DateTime<Utc>,
    pub scope: KeywordScope,
}

impl EvalContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        EvalContext {
            now,
            scope: KeywordScope::All,
        }
    }

    pub fn with_scope(self, scope: KeywordScope) -> Self {
        EvalContext { scope, ..self }
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        EvalContext::new(Utc::now())
    }
}

/// Evaluates `expr` against `issue` at the current time, honoring any
/// `in:` qualifier in the tree.
pub fn evaluate<Q: Queryable + ?Sized>(expr: &Expr, issue: &Q) -> bool {
    let ctx = EvalContext::default().with_scope(KeywordScope::of(expr));
    expr.matches(issue, &ctx)
}

impl Expr {
    /// Returns true when `issue` satisfies this expression.
    pub fn matches<Q: Queryable + ?Sized>(&self, issue: &Q, ctx: &EvalContext) -> bool {
        match self {
            Expr::Empty => true,
            Expr::Invalid(_) => false,
            Expr::Qualifier(q) => q.matches(issue, ctx),
            Expr::Conjunction(l, r) => l.matches(issue, ctx) && r.matches(issue, ctx),
            Expr::Disjunction(l, r) => l.matches(issue, ctx) || r.matches(issue, ctx),
            Expr::Negation(inner) => !inner.matches(issue, ctx),
        }
    }
}

impl Qualifier {
    pub fn matches<Q: Queryable + ?Sized>(&self, issue: &Q, ctx: &EvalContext) -> bool {
        let content = &self.content;
        match &self.kind {
            QualifierKind::Keyword => match ctx.scope {
                KeywordScope::All => {
                    contains(content, issue.title()) || contains(content, issue.description())
                }
                KeywordScope::Title => contains(content, issue.title()),
                KeywordScope::Body => contains(content, issue.description()),
                KeywordScope::Nowhere => false,
            },
            QualifierKind::Title => contains(content, issue.title()),
            QualifierKind::Description => contains(content, issue.description()),
            QualifierKind::Author => contains(content, issue.creator()),
            QualifierKind::Assignee => equals(content, issue.assignee()),
            QualifierKind::Involves => {
                contains(content, issue.creator()) || equals(content, issue.assignee())
            }
            QualifierKind::Milestone => equals(content, issue.milestone()),
            QualifierKind::Repo => equals(content, Some(issue.repo())),
            QualifierKind::Label => match content {
                Content::Any => !issue.labels().is_empty(),
                Content::Text(query) => issue.labels().iter().any(|l| label::matches(l, query)),
                _ => false,
            },
            QualifierKind::State => match content {
                Content::Any => true,
                Content::Text(state) => match state.to_lowercase().as_str() {
                    "open" => issue.is_open(),
                    "closed" => !issue.is_open(),
                    _ => false,
                },
                _ => false,
            },
            QualifierKind::Type => match content {
                Content::Any => true,
                Content::Text(kind) => match kind.to_lowercase().as_str() {
                    "issue" => !issue.is_pull_request(),
                    "pr" | "pullrequest" => issue.is_pull_request(),
                    _ => false,
                },
                _ => false,
            },
            QualifierKind::Has => has(content, issue).unwrap_or(false),
            QualifierKind::No => has(content, issue).is_some_and(|present| !present),
            QualifierKind::Is => is(content, issue),
            QualifierKind::Id => number(content, issue.number()),
            QualifierKind::Comments => number(content, issue.comment_count()),
            QualifierKind::Created => date(content, Some(issue.created_at().date_naive())),
            QualifierKind::Due => date(content, issue.milestone_due()),
            QualifierKind::Updated => updated(content, issue.updated_at(), ctx.now),
            QualifierKind::In | QualifierKind::Sort => true,
            QualifierKind::Unknown(_) => false,
        }
    }
}

fn contains(content: &Content, field: &str) -> bool {
    match content {
        Content::Any => !field.is_empty(),
        Content::Text(text) => field.to_lowercase().contains(&text.to_lowercase()),
        _ => false,
    }
}

fn equals(content: &Content, field: Option<&str>) -> bool {
    let field = field.unwrap_or_default();
    match content {
        Content::Any => !field.is_empty(),
        Content::Text(text) => field.to_lowercase() == text.to_lowercase(),
        _ => false,
    }
}

/// Presence of the attribute `has:`/`no:` names; `None` for unknown names.
fn has<Q: Queryable + ?Sized>(content: &Content, issue: &Q) -> Option<bool> {
    let Content::Text(what) = content else {
        return None;
    };
    match what.to_lowercase().as_str() {
        "label" | "labels" => Some(!issue.labels().is_empty()),
        "milestone" | "milestones" => Some(issue.milestone().is_some_and(|m| !m.is_empty())),
        "assignee" | "assignees" => Some(issue.assignee().is_some_and(|a| !a.is_empty())),
        _ => None,
    }
}

fn is<Q: Queryable + ?Sized>(content: &Content, issue: &Q) -> bool {
    let Content::Text(what) = content else {
        return false;
    };
    match what.to_lowercase().as_str() {
        "open" => issue.is_open(),
        "closed" => !issue.is_open(),
        "pr" | "pullrequest" => issue.is_pull_request(),
        "issue" => !issue.is_pull_request(),
        "merged" => issue.is_pull_request() && issue.is_merged(),
        "unmerged" => issue.is_pull_request() && !issue.is_merged(),
        "read" => issue.is_read(),
        "unread" => !issue.is_read(),
        _ => false,
    }
}

fn number(content: &Content, value: i64) -> bool {
    match content {
        Content::Any => true,
        Content::Number(n) => value == *n,
        Content::Compare(op, Operand::Number(n)) => op.holds(value, *n),
        Content::Range(Operand::Number(start), end) => {
            value >= *start
                && match end {
                    None => true,
                    Some(Operand::Number(end)) => value <= *end,
                    Some(Operand::Date(_)) => false,
                }
        }
        _ => false,
    }
}

fn date(content: &Content, value: Option<NaiveDate>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match content {
        Content::Any => true,
        Content::Date(d) => value == *d,
        Content::Compare(op, Operand::Date(d)) => op.holds(value, *d),
        Content::Range(Operand::Date(start), end) => {
            value >= *start
                && match end {
                    None => true,
                    Some(Operand::Date(end)) => value <= *end,
                    Some(Operand::Number(_)) => false,
                }
        }
        _ => false,
    }
}

/// `updated:N` counts whole hours since the last update and holds when
/// fewer than `N` have passed. Comparisons and ranges apply to the same
/// count; dates compare against the update's calendar day.
fn updated(content: &Content, updated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let hours = now.signed_duration_since(updated_at).num_hours();
    match content {
        Content::Number(n) => hours < *n,
        Content::Compare(_, Operand::Number(_)) | Content::Range(Operand::Number(_), _) => {
            number(content, hours)
        }
        _ => date(content, Some(updated_at.date_naive())),
    }
}

/// A parsed filter with its meta qualifiers applied.
///
/// `in:` and `sort:` are lifted out of the tree into a keyword scope and
/// sort keys. What remains is evaluated per issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    expr: Expr,
    scope: KeywordScope,
    sort: Vec<SortKey>,
}

impl Filter {
    pub fn new(expr: Expr) -> Self {
        let scope = KeywordScope::of(&expr);
        let sort = expr
            .qualifiers()
            .iter()
            .filter_map(|q| match &q.content {
                Content::Sort(keys) if q.kind == QualifierKind::Sort => Some(keys.clone()),
                _ => None,
            })
            .flatten()
            .collect();
        let expr = expr.retain(&|q: &Qualifier| !q.kind.is_meta());
        Filter { expr, scope, sort }
    }

    /// Restricts the filter to `repo` unless it already names a repository.
    pub fn with_default_repo(mut self, repo: &str) -> Self {
        if !repo.is_empty() && !self.expr.contains_kind(&QualifierKind::Repo) {
            let restriction = Expr::qualifier(QualifierKind::Repo, Content::text(repo));
            self.expr = std::mem::replace(&mut self.expr, Expr::Empty).and(restriction);
        }
        self
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn scope(&self) -> KeywordScope {
        self.scope
    }

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort
    }

    pub fn matches<Q: Queryable + ?Sized>(&self, issue: &Q, now: DateTime<Utc>) -> bool {
        let ctx = EvalContext::new(now).with_scope(self.scope);
        self.expr.matches(issue, &ctx)
    }

    /// Orders two issues by the sort keys, first key first.
    pub fn compare<Q: Queryable + ?Sized>(&self, a: &Q, b: &Q) -> Ordering {
        for key in &self.sort {
            let ordering = match key.key.as_str() {
                "comments" => a.comment_count().cmp(&b.comment_count()),
                "repo" => a.repo().to_lowercase().cmp(&b.repo().to_lowercase()),
                "updated" | "date" => a.updated_at().cmp(&b.updated_at()),
                "id" => a.number().cmp(&b.number()),
                group => {
                    let ordering = compare_label_group(group, key.inverted, a, b);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                    continue;
                }
            };
            let ordering = if key.inverted {
                ordering.reverse()
            } else {
                ordering
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Keeps the matching issues, stably sorted by the sort keys.
    pub fn apply<'a, Q: Queryable>(&self, issues: &'a [Q], now: DateTime<Utc>) -> Vec<&'a Q> {
        let mut matched: Vec<&Q> = issues.iter().filter(|i| self.matches(*i, now)).collect();
        if !self.sort.is_empty() {
            matched.sort_by(|a, b| self.compare(*a, *b));
        }
        tracing::debug!(
            total = issues.len(),
            matched = matched.len(),
            "applied filter"
        );
        matched
    }
}

/// Orders issues by their labels in `group` (a trailing `.` is ignored).
///
/// Issues without such labels always sort last. Otherwise fewer labels sort
/// first, then label names compare pairwise in sorted order; `inverted`
/// reverses both comparisons but not the placement of unlabeled issues.
fn compare_label_group<Q: Queryable + ?Sized>(
    group: &str,
    inverted: bool,
    a: &Q,
    b: &Q,
) -> Ordering {
    let group = group.strip_suffix('.').unwrap_or(group);
    let labels_of = |issue: &Q| {
        let mut labels: Vec<String> = issue
            .labels()
            .iter()
            .filter(|l| label::group(l).is_some_and(|g| g.eq_ignore_ascii_case(group)))
            .map(|l| l.to_lowercase())
            .collect();
        labels.sort();
        labels
    };
    let (a_labels, b_labels) = (labels_of(a), labels_of(b));

    match (a_labels.is_empty(), b_labels.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let ordering = a_labels
        .len()
        .cmp(&b_labels.len())
        .then_with(|| a_labels.cmp(&b_labels));
    if inverted {
        ordering.reverse()
    } else {
        ordering
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
