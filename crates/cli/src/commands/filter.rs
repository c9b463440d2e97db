// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{IsTerminal, Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use hubq_core::{parse_with, Filter, Issue, Registry};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::emit;

/// Options for one `filter` invocation.
pub struct FilterOptions<'a> {
    pub output: OutputFormat,
    pub now: Option<&'a str>,
    pub repo: Option<&'a str>,
}

pub fn run(
    filter: &str,
    input: Option<&Path>,
    options: &FilterOptions<'_>,
    registry: &Registry,
) -> Result<()> {
    let json = read_input(input)?;
    run_impl(&mut std::io::stdout().lock(), filter, &json, options, registry)
}

pub(crate) fn run_impl<W: Write>(
    out: &mut W,
    filter: &str,
    json: &str,
    options: &FilterOptions<'_>,
    registry: &Registry,
) -> Result<()> {
    let now = parse_now(options.now)?;
    let expr = parse_with(filter, registry)?;
    let mut query = Filter::new(expr);
    if let Some(repo) = options.repo {
        query = query.with_default_repo(repo);
    }

    let issues: Vec<Issue> = serde_json::from_str(json)?;
    let matched = query.apply(&issues, now);

    match options.output {
        OutputFormat::Text => {
            for issue in matched {
                emit(out, format!("#{} {}", issue.number, issue.title))?;
            }
            Ok(())
        }
        OutputFormat::Json => emit(out, serde_json::to_string_pretty(&matched)?),
        OutputFormat::Id => {
            for issue in matched {
                emit(out, issue.number)?;
            }
            Ok(())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        return Ok(std::fs::read_to_string(path)?);
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(Error::NoInput);
    }
    let mut json = String::new();
    stdin.lock().read_to_string(&mut json)?;
    Ok(json)
}

fn parse_now(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        None => Ok(Utc::now()),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|e| Error::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
