// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label names and label groups.
//!
//! A label's group is the text before its first `.` or `-`, so `type.bug`
//! and `type-bug` both belong to group `type`. Labels without a separator
//! (or with one in leading position) have no group.

/// Splits a label into its group and name.
pub fn split(label: &str) -> (Option<&str>, &str) {
    match label.find(['.', '-']) {
        Some(at) if at > 0 => (Some(&label[..at]), &label[at + 1..]),
        _ => (None, label),
    }
}

/// Returns the group of a label, if it has one.
pub fn group(label: &str) -> Option<&str> {
    split(label).0
}

/// Returns true when `label` satisfies a `label:` query.
///
/// Case-insensitive. A query matches the full label name, the name within
/// the label's group (`bug` matches `type.bug`), or, when it ends in a
/// separator, every label of that group (`type.` matches `type.bug`).
pub fn matches(label: &str, query: &str) -> bool {
    let label = label.to_lowercase();
    let query = query.to_lowercase();

    if label == query {
        return true;
    }

    if let Some(prefix) = query.strip_suffix(['.', '-']) {
        return !prefix.is_empty() && group(&label) == Some(prefix);
    }

    match split(&label) {
        (Some(_), name) => name == query,
        (None, _) => false,
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
