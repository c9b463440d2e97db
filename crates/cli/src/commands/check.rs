// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hubq_core::{check_with, Registry, SyntaxError, Validity};

use crate::colors;
use crate::error::{Error, Result};

use super::emit;

pub fn run(filter: &str, registry: &Registry) -> Result<()> {
    let color = colors::should_colorize();
    run_impl(&mut std::io::stdout().lock(), filter, registry, color)
}

/// Prints `valid`, or the filter with a caret under the offending position
/// and fails with the syntax error.
pub(crate) fn run_impl<W: Write>(
    out: &mut W,
    filter: &str,
    registry: &Registry,
    color: bool,
) -> Result<()> {
    match check_with(filter, registry) {
        Validity::Valid => emit(out, "valid"),
        Validity::Incomplete(err) => {
            write_caret(out, filter, &err, color)?;
            Err(Error::Incomplete(err))
        }
        Validity::Invalid(err) => {
            write_caret(out, filter, &err, color)?;
            Err(Error::Syntax(err))
        }
    }
}

fn write_caret<W: Write>(out: &mut W, filter: &str, err: &SyntaxError, color: bool) -> Result<()> {
    emit(out, filter)?;
    let caret = colors::apply(color, colors::error, "^");
    emit(out, format!("{}{caret}", " ".repeat(err.position)))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
