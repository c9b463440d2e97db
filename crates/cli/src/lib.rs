// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hqrs - the library behind the `hubq` command.
//!
//! Wraps [`hubq_core`] with a command line: inspecting filters (`tokens`,
//! `parse`, `check`), applying them to JSON issue lists (`filter`), and
//! listing completion words (`keywords`). Qualifier aliases and a default
//! repository come from [`Config`].

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod help;

pub use cli::{Cli, Command, OutputFormat, TreeFormat};
pub use config::Config;
pub use error::{Error, Result};

use commands::filter::FilterOptions;

/// Runs one parsed invocation.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let registry = config.registry()?;

    match cli.command {
        Command::Tokens { filter } => commands::tokens::run(&filter),
        Command::Parse { filter, output } => commands::parse::run(&filter, output, &registry),
        Command::Check { filter } => commands::check::run(&filter, &registry),
        Command::Filter {
            filter,
            input,
            output,
            now,
            repo,
        } => {
            let options = FilterOptions {
                output,
                now: now.as_deref(),
                repo: repo.as_deref().or(config.default_repo.as_deref()),
            };
            commands::filter::run(&filter, input.as_deref(), &options, &registry)
        }
        Command::Keywords { aliases } => commands::keywords::run(&registry, aliases),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
