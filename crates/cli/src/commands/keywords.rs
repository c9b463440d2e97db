// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hubq_core::Registry;

use crate::error::Result;

use super::emit;

pub fn run(registry: &Registry, aliases: bool) -> Result<()> {
    run_impl(&mut std::io::stdout().lock(), registry, aliases)
}

/// Completion words, or with `aliases` every alias and its qualifier.
pub(crate) fn run_impl<W: Write>(out: &mut W, registry: &Registry, aliases: bool) -> Result<()> {
    if aliases {
        for (alias, kind) in registry.aliases() {
            emit(out, format!("{alias:<12} {kind}"))?;
        }
        return Ok(());
    }
    for word in registry.completion_keywords() {
        emit(out, word)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "keywords_tests.rs"]
mod tests;
