// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn keywords(registry: &Registry) -> Vec<String> {
    let mut out = Vec::new();
    run_impl(&mut out, registry, false).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn lists_names_and_values_sorted() {
    let words = keywords(&Registry::default());
    assert!(words.contains(&"label".to_string()));
    assert!(words.contains(&"unread".to_string()));
    assert!(!words.contains(&"keyword".to_string()));
    assert!(!words.contains(&"as".to_string()));
    let mut sorted = words.clone();
    sorted.sort();
    assert_eq!(words, sorted);
}

#[test]
fn includes_configured_aliases() {
    let registry = Registry::default().with_alias("who", "assignee").unwrap();
    assert!(keywords(&registry).contains(&"who".to_string()));
}

#[test]
fn aliases_lists_each_alias_with_target() {
    let registry = Registry::default().with_alias("who", "assignee").unwrap();
    let mut out = Vec::new();
    run_impl(&mut out, &registry, true).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("as           assignee\n"), "{text}");
    assert!(text.contains("who          assignee\n"), "{text}");
    assert!(text.contains("m            milestone\n"), "{text}");
}
