// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view of an issue, as seen by the evaluator.
//!
//! The evaluator never touches an application's issue model directly. It
//! reads attributes through [`Queryable`], which [`Issue`] implements for
//! callers that have no model of their own.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute accessors the filter language can query.
pub trait Queryable {
    fn number(&self) -> i64;
    /// Repository id, `owner/name`.
    fn repo(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    /// Login of the issue's author.
    fn creator(&self) -> &str;
    fn assignee(&self) -> Option<&str>;
    /// Title of the issue's milestone.
    fn milestone(&self) -> Option<&str>;
    fn milestone_due(&self) -> Option<NaiveDate>;
    fn labels(&self) -> &[String];
    fn is_open(&self) -> bool;
    fn is_pull_request(&self) -> bool;
    /// Only meaningful for pull requests.
    fn is_merged(&self) -> bool {
        false
    }
    /// Whether the user has seen the latest activity.
    fn is_read(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn comment_count(&self) -> i64;
}

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    Open,
    Closed,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
            State::Closed => "closed",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A plain issue record.
///
/// Deserializes from JSON objects where only `number` and `title` are
/// required; everything else defaults to empty, open, unread, and the Unix
/// epoch for timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: i64,
    #[serde(default)]
    pub repo: String,
    pub title: String,
    #[serde(default, alias = "body")]
    pub description: String,
    #[serde(default, alias = "author")]
    pub creator: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub milestone: Option<String>,
    #[serde(default)]
    pub milestone_due: Option<NaiveDate>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub state: State,
    #[serde(default)]
    pub pull_request: bool,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: i64,
}

impl Issue {
    /// Creates an open issue with the given number and title.
    pub fn new(number: i64, title: impl Into<String>) -> Self {
        Issue {
            number,
            repo: String::new(),
            title: title.into(),
            description: String::new(),
            creator: String::new(),
            assignee: None,
            milestone: None,
            milestone_due: None,
            labels: Vec::new(),
            state: State::Open,
            pull_request: false,
            merged: false,
            read: false,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            comments: 0,
        }
    }
}

impl Queryable for Issue {
    fn number(&self) -> i64 {
        self.number
    }

    fn repo(&self) -> &str {
        &self.repo
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn creator(&self) -> &str {
        &self.creator
    }

    fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    fn milestone(&self) -> Option<&str> {
        self.milestone.as_deref()
    }

    fn milestone_due(&self) -> Option<NaiveDate> {
        self.milestone_due
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn is_open(&self) -> bool {
        self.state == State::Open
    }

    fn is_pull_request(&self) -> bool {
        self.pull_request
    }

    fn is_merged(&self) -> bool {
        self.pull_request && self.merged
    }

    fn is_read(&self) -> bool {
        self.read
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn comment_count(&self) -> i64 {
        self.comments
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
