// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hubq_core::{parse_with, Registry};

use crate::cli::TreeFormat;
use crate::error::Result;

use super::emit;

pub fn run(filter: &str, format: TreeFormat, registry: &Registry) -> Result<()> {
    run_impl(&mut std::io::stdout().lock(), filter, format, registry)
}

pub(crate) fn run_impl<W: Write>(
    out: &mut W,
    filter: &str,
    format: TreeFormat,
    registry: &Registry,
) -> Result<()> {
    let expr = parse_with(filter, registry)?;
    match format {
        TreeFormat::Text => emit(out, &expr),
        TreeFormat::Json => emit(out, serde_json::to_string_pretty(&expr)?),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
