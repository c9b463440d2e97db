// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[test]
fn commands_lists_every_subcommand() {
    let text = strip_ansi(&commands());
    for name in ["tokens", "parse", "check", "filter", "keywords"] {
        assert!(text.contains(&format!("  {name}")), "missing {name}");
    }
}

#[test]
fn template_keeps_placeholders() {
    let text = strip_ansi(&template());
    assert!(text.contains("{usage}"));
    assert!(text.contains("{options}"));
    assert!(text.contains("Options:"));
}

#[test]
fn syntax_mentions_operators() {
    let text = strip_ansi(&syntax());
    assert!(text.contains("Filter syntax:"));
    assert!(text.contains("not (a or b)"));
}
