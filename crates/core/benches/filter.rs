// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for filter parsing and evaluation.

#![allow(clippy::expect_used)]

use chrono::{Duration, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hubq_core::{parse, tokenize, EvalContext, Filter, Issue};

const INPUTS: [(&str, &str); 4] = [
    ("keyword", "crash"),
    ("qualifiers", "milestone:v1 assignee:bob -is:closed"),
    ("ranges", "comments:3..5 created:>2014-01-01 updated:24"),
    (
        "nested",
        "(label:bug;ui or type:pr) -(author:alice or no:milestone) sort:!updated",
    ),
];

fn filter_lexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_lexing");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new("tokenize", name), input, |b, i| {
            b.iter(|| tokenize(i))
        });
    }
    group.finish();
}

fn filter_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_parsing");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new("parse", name), input, |b, i| {
            b.iter(|| parse(i))
        });
    }
    group.finish();
}

fn filter_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_evaluation");
    let now = Utc::now();
    let ctx = EvalContext::new(now);

    let recent = create_issue(1, now - Duration::hours(1));
    let old = create_issue(2, now - Duration::weeks(4));

    for (name, input) in INPUTS {
        let expr = parse(input).expect("valid filter");
        group.bench_function(format!("matches_recent_{name}"), |b| {
            b.iter(|| expr.matches(&recent, &ctx))
        });
        group.bench_function(format!("matches_old_{name}"), |b| {
            b.iter(|| expr.matches(&old, &ctx))
        });
    }

    let issues: Vec<Issue> = (0..500)
        .map(|n| create_issue(n, now - Duration::hours(n)))
        .collect();
    let filter = Filter::new(parse("is:open sort:!comments,id").expect("valid filter"));
    group.bench_function("apply_500", |b| b.iter(|| filter.apply(&issues, now)));

    group.finish();
}

fn create_issue(number: i64, updated_at: chrono::DateTime<Utc>) -> Issue {
    Issue {
        assignee: Some("bob".to_string()),
        milestone: Some("v1".to_string()),
        labels: vec!["type.bug".to_string(), "ui".to_string()],
        created_at: updated_at - Duration::days(3),
        updated_at,
        comments: number % 7,
        ..Issue::new(number, "Crash on startup")
    }
}

criterion_group!(benches, filter_lexing, filter_parsing, filter_evaluation);
criterion_main!(benches);
