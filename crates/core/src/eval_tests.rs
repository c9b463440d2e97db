// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::{Issue, State};
use crate::parser::parse;
use chrono::{Duration, TimeZone};
use yare::parameterized;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 6, 10, 12, 0, 0).unwrap()
}

fn sample() -> Issue {
    Issue {
        repo: "owner/app".into(),
        description: "Window closes when the list is empty".into(),
        creator: "alice".into(),
        assignee: Some("bob".into()),
        milestone: Some("v1.0".into()),
        milestone_due: NaiveDate::from_ymd_opt(2014, 7, 1),
        labels: vec!["type.bug".into(), "priority-high".into(), "ui".into()],
        created_at: Utc.with_ymd_and_hms(2014, 5, 1, 9, 30, 0).unwrap(),
        updated_at: now() - Duration::hours(5),
        comments: 4,
        ..Issue::new(42, "Crash on startup")
    }
}

fn matches(filter: &str, issue: &Issue) -> bool {
    let expr = parse(filter).unwrap();
    let ctx = EvalContext::new(now()).with_scope(KeywordScope::of(&expr));
    expr.matches(issue, &ctx)
}

// ─────────────────────────────────────────────────────────────────────────────
// Qualifier matchers
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    keyword_title = { "crash", true },
    keyword_body = { "window", true },
    keyword_missing = { "freeze", false },
    title = { "title:startup", true },
    description = { "body:EMPTY", true },
    author = { "author:ali", true },
    creator_alias = { "creator:alice", true },
    assignee = { "assignee:Bob", true },
    assignee_partial = { "assignee:bo", false },
    involves_author = { "involves:alice", true },
    involves_assignee = { "user:bob", true },
    involves_other = { "involves:carol", false },
    milestone = { "milestone:v1.0", true },
    milestone_other = { "m:v2", false },
    repo = { "repo:OWNER/app", true },
    repo_other = { "repo:owner/lib", false },
    label_full = { "label:type.bug", true },
    label_name = { "label:bug", true },
    label_group = { "label:priority-", true },
    label_plain = { "label:ui", true },
    label_missing = { "label:docs", false },
    state_open = { "state:open", true },
    state_closed = { "status:closed", false },
    type_issue = { "type:issue", true },
    type_pr = { "type:pr", false },
    has_label = { "has:label", true },
    has_milestone = { "has:milestone", true },
    no_assignee = { "no:assignee", false },
    has_unknown = { "has:votes", false },
    no_unknown = { "no:votes", false },
    is_open = { "is:open", true },
    is_issue = { "is:issue", true },
    is_unread = { "is:unread", true },
    is_merged = { "is:merged", false },
    is_unknown = { "is:starred", false },
    id = { "id:42", true },
    id_range = { "id:40..*", true },
    unknown = { "priority:high", false },
    in_alone = { "in:title", true },
    sort_alone = { "sort:comments", true },
)]
fn qualifier_matching(filter: &str, expected: bool) {
    assert_eq!(matches(filter, &sample()), expected, "{filter}");
}

#[test]
fn assignee_star_requires_assignee() {
    let mut issue = sample();
    assert!(matches("assignee:*", &issue));
    issue.assignee = None;
    assert!(!matches("assignee:*", &issue));
    issue.assignee = Some(String::new());
    assert!(!matches("assignee:*", &issue));
}

#[parameterized(
    below = { 2, false },
    start = { 3, true },
    inside = { 4, true },
    end = { 5, true },
    above = { 6, false },
)]
fn comment_range_is_inclusive(count: i64, expected: bool) {
    let issue = Issue {
        comments: count,
        ..sample()
    };
    assert_eq!(matches("comments:3..5", &issue), expected);
}

#[parameterized(
    lt = { "comments:<4", false },
    le = { "comments:<=4", true },
    gt = { "comments:>3", true },
    ge = { "comments:>=5", false },
    bare = { "> 3", true },
)]
fn comment_comparisons(filter: &str, expected: bool) {
    assert_eq!(matches(filter, &sample()), expected);
}

#[parameterized(
    same_day = { "created:2014-05-01", true },
    other_day = { "created:2014-05-02", false },
    after = { "created:>2014-04-30", true },
    before_or_on = { "created:<=2014-05-01", true },
    open_range = { "created:2014-05-01..*", true },
    closed_range = { "created:2014-04-01..2014-04-30", false },
    due = { "due:<2014-08-01", true },
    bare_due = { "< 2014-07-01", false },
)]
fn date_matching(filter: &str, expected: bool) {
    assert_eq!(matches(filter, &sample()), expected);
}

#[test]
fn due_without_milestone_date_never_matches() {
    let issue = Issue {
        milestone_due: None,
        ..sample()
    };
    assert!(!matches("due:>2000-01-01", &issue));
    assert!(!matches("due:*", &issue));
}

#[parameterized(
    within = { "updated:24", true },
    strict = { "updated:5", false },
    older = { "updated:>4", true },
    range = { "updated:1..5", true },
    date = { "updated:2014-06-10", true },
)]
fn updated_counts_hours(filter: &str, expected: bool) {
    assert_eq!(matches(filter, &sample()), expected);
}

#[parameterized(
    date_for_number = { "comments:2014-01-01" },
    text_for_number = { "id:abc" },
    number_for_date = { "created:5" },
    compare_for_text = { "milestone:>3" },
)]
fn type_mismatch_is_false(filter: &str) {
    assert!(!matches(filter, &sample()));
}

#[test]
fn merged_pull_request() {
    let issue = Issue {
        pull_request: true,
        merged: true,
        state: State::Closed,
        ..sample()
    };
    assert!(matches("is:pr is:merged is:closed type:pullrequest", &issue));
    assert!(!matches("is:unmerged", &issue));
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_filter_matches_everything() {
    assert!(matches("", &sample()));
    assert!(matches("", &Issue::new(1, "")));
}

#[test]
fn invalid_tree_matches_nothing() {
    let expr = parse("(a and b").unwrap_or_else(Expr::Invalid);
    assert!(!expr.matches(&sample(), &EvalContext::new(now())));
}

#[parameterized(
    conjunction = { "crash label:bug", true },
    conjunction_false = { "crash label:docs", false },
    disjunction = { "label:docs or label:ui", true },
    negation = { "-label:docs", true },
    double_negation = { "not not crash", true },
    alternatives = { "label:docs;ui", true },
    grouped = { "-(label:docs or is:closed) crash", true },
)]
fn operators(filter: &str, expected: bool) {
    assert_eq!(matches(filter, &sample()), expected);
}

#[test]
fn in_title_restricts_keywords() {
    assert!(matches("window", &sample()));
    assert!(!matches("window in:title", &sample()));
    assert!(matches("window in:body", &sample()));
    assert!(matches("crash in:title", &sample()));
}

#[parameterized(
    unknown_scope = { "crash in:comments" },
    unknown_scope_body_word = { "window in:everywhere" },
)]
fn unrecognized_in_scope_matches_no_keywords(filter: &str) {
    assert!(!matches(filter, &sample()));
}

#[test]
fn unrecognized_in_scope_keeps_other_qualifiers() {
    assert!(matches("in:comments is:open", &sample()));
}

#[test]
fn evaluate_uses_current_time() {
    let issue = Issue {
        updated_at: Utc::now() - Duration::hours(1),
        ..sample()
    };
    assert!(evaluate(&parse("updated:2 crash").unwrap(), &issue));
    assert!(!evaluate(&parse("in:body crash").unwrap(), &issue));
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter
// ─────────────────────────────────────────────────────────────────────────────

fn issues() -> Vec<Issue> {
    vec![
        Issue {
            comments: 1,
            labels: vec!["type.feature".into()],
            ..Issue::new(1, "one")
        },
        Issue {
            comments: 3,
            repo: "owner/lib".into(),
            ..Issue::new(2, "two")
        },
        Issue {
            comments: 3,
            labels: vec!["type.bug".into()],
            ..Issue::new(3, "three")
        },
        Issue {
            comments: 0,
            state: State::Closed,
            ..Issue::new(4, "four")
        },
    ]
}

fn numbers(matched: &[&Issue]) -> Vec<i64> {
    matched.iter().map(|i| i.number).collect()
}

#[test]
fn filter_lifts_meta_qualifiers() {
    let filter = Filter::new(parse("sort:!comments in:title o").unwrap());
    assert_eq!(filter.expr(), &parse("o").unwrap());
    assert_eq!(filter.scope(), KeywordScope::Title);
    assert_eq!(filter.sort_keys(), &[SortKey::new("comments", true)]);
}

#[test]
fn apply_sorts_stably() {
    let issues = issues();
    let filter = Filter::new(parse("sort:!comments").unwrap());
    assert_eq!(numbers(&filter.apply(&issues, now())), vec![2, 3, 1, 4]);
}

#[test]
fn apply_without_sort_keeps_order() {
    let issues = issues();
    let filter = Filter::new(parse("is:open").unwrap());
    assert_eq!(numbers(&filter.apply(&issues, now())), vec![1, 2, 3]);
}

#[test]
fn secondary_sort_key_breaks_ties() {
    let issues = issues();
    let filter = Filter::new(parse("sort:comments,!id").unwrap());
    assert_eq!(numbers(&filter.apply(&issues, now())), vec![4, 1, 3, 2]);
}

#[test]
fn label_group_sort() {
    let issues = issues();
    let filter = Filter::new(parse("sort:type").unwrap());
    assert_eq!(numbers(&filter.apply(&issues, now())), vec![3, 1, 2, 4]);
}

#[parameterized(
    inverted_keeps_unlabeled_last = { "sort:!type", &[1, 3, 2, 4] },
    trailing_dot = { "sort:type.", &[3, 1, 2, 4] },
    inverted_trailing_dot = { "sort:!type.", &[1, 3, 2, 4] },
)]
fn label_group_sort_variants(filter: &str, expected: &[i64]) {
    let issues = issues();
    let filter = Filter::new(parse(filter).unwrap());
    assert_eq!(numbers(&filter.apply(&issues, now())), expected);
}

#[test]
fn label_group_sort_counts_labels_before_names() {
    let issues = vec![
        Issue {
            labels: vec!["prio.a".into(), "prio.b".into()],
            ..Issue::new(1, "two labels")
        },
        Issue::new(2, "unlabeled"),
        Issue {
            labels: vec!["prio.z".into()],
            ..Issue::new(3, "one label")
        },
    ];
    let sorted = Filter::new(parse("sort:prio").unwrap()).apply(&issues, now());
    assert_eq!(numbers(&sorted), vec![3, 1, 2]);
    let inverted = Filter::new(parse("sort:!prio").unwrap()).apply(&issues, now());
    assert_eq!(numbers(&inverted), vec![1, 3, 2]);
}

#[test]
fn default_repo_is_injected() {
    let mut issues = issues();
    for issue in issues.iter_mut().filter(|i| i.repo.is_empty()) {
        issue.repo = "owner/app".into();
    }
    let filter = Filter::new(parse("").unwrap()).with_default_repo("owner/app");
    assert_eq!(numbers(&filter.apply(&issues, now())), vec![1, 3, 4]);
}

#[test]
fn explicit_repo_overrides_default() {
    let issues = issues();
    let filter = Filter::new(parse("repo:owner/lib").unwrap()).with_default_repo("owner/app");
    assert_eq!(numbers(&filter.apply(&issues, now())), vec![2]);
}

#[test]
fn compare_orders_by_id() {
    let filter = Filter::new(parse("sort:id").unwrap());
    let issues = issues();
    assert_eq!(filter.compare(&issues[0], &issues[1]), Ordering::Less);
    assert_eq!(filter.compare(&issues[1], &issues[1]), Ordering::Equal);
}

// ─────────────────────────────────────────────────────────────────────────────
// Concurrency
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn trees_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expr>();
    assert_send_sync::<Filter>();
    assert_send_sync::<crate::qualifier::Registry>();

    let expr = std::sync::Arc::new(parse("crash label:bug -is:closed").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expr = std::sync::Arc::clone(&expr);
            std::thread::spawn(move || expr.matches(&sample(), &EvalContext::new(now())))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
