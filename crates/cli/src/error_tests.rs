// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    no_input = { Error::NoInput, "--input" },
    timestamp = {
        Error::InvalidTimestamp { value: "yesterday".into(), reason: "bad".into() },
        "yesterday"
    },
    config = {
        Error::Config { path: ".hubq.toml".into(), reason: "bad alias".into() },
        ".hubq.toml"
    },
    reserved_alias = {
        Error::Core(hubq_core::Error::ReservedAlias { alias: "label".into() }),
        "label"
    },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected), "{err}");
}

#[test]
fn syntax_errors_convert() {
    let err: Error = hubq_core::parse("a)").unwrap_err().into();
    assert_eq!(err.to_string(), "invalid filter: unmatched ')' at position 1");
}

#[test]
fn json_errors_convert() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(err.to_string().starts_with("json error:"));
}

#[test]
fn incomplete_filters_exit_with_two() {
    let err = Error::Incomplete(hubq_core::parse("label:").unwrap_err());
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().starts_with("incomplete filter:"));
    assert_eq!(Error::NoInput.exit_code(), 1);
}
