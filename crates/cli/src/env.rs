// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. Their names live in [`vars`].

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    pub const HUBQ_LOG: &str = "HUBQ_LOG";
    pub const HUBQ_CONFIG: &str = "HUBQ_CONFIG";
    pub const NO_COLOR: &str = "NO_COLOR";
    pub const COLOR: &str = "COLOR";
}

/// Log filter directives used when `HUBQ_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the value of `HUBQ_LOG`, or the default filter.
pub fn log_filter() -> String {
    std::env::var(vars::HUBQ_LOG).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// Returns the value of `HUBQ_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::HUBQ_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
