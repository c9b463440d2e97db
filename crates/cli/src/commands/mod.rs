// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod filter;
pub mod keywords;
pub mod parse;
pub mod tokens;

use std::io::Write;

use crate::error::Result;

/// Writes `text` followed by a newline, the way every command emits output.
fn emit<W: Write>(out: &mut W, text: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{text}")?;
    Ok(())
}
