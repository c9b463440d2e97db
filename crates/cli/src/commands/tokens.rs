// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hubq_core::{tokenize, TokenType};

use crate::colors;
use crate::error::Result;

use super::emit;

pub fn run(filter: &str) -> Result<()> {
    let color = colors::should_colorize();
    run_impl(&mut std::io::stdout().lock(), filter, color)
}

/// One token per line: position, type, and value.
pub(crate) fn run_impl<W: Write>(out: &mut W, filter: &str, color: bool) -> Result<()> {
    for token in tokenize(filter) {
        let position = colors::apply(color, colors::context, &format!("{:>4}", token.position));
        let line = match token.kind {
            TokenType::Eof => format!("{position}  {}", token.kind),
            _ => format!("{position}  {:<10} {}", token.kind.as_str(), token.value),
        };
        emit(out, line)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
