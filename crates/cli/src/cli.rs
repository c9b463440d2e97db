// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for `parse`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// Canonical filter text
    #[default]
    Text,
    /// Expression tree as JSON
    Json,
}

/// Output format for `filter`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "hubq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Parse, check, and apply GitHub-style issue filters")]
#[command(
    long_about = "Parse, check, and apply GitHub-style issue filters.\n\n\
    Filters combine keywords and qualifiers such as label:bug or comments:>3 \
    with and, or, and not."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Read configuration from <path> instead of searching for .hubq.toml
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the tokens of a filter
    #[command(after_help = colors::examples("\
Examples:
  hubq tokens \"label:bug or -is:open\"     One token per line with its position"))]
    Tokens {
        /// Filter text
        filter: String,
    },

    /// Print the canonical form or tree of a filter
    #[command(after_help = colors::examples("\
Examples:
  hubq parse \"m:v1 AND as:bob\"            Prints milestone:v1 assignee:bob
  hubq parse \"a or b c\" -o json           Prints the expression tree"))]
    Parse {
        /// Filter text
        filter: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = TreeFormat::Text)]
        output: TreeFormat,
    },

    /// Check a filter for syntax errors
    #[command(after_help = colors::examples("\
Examples:
  hubq check \"label:bug\"                  Valid
  hubq check \"(label:bug\"                 Incomplete, exits 2
  hubq check \"label:bug)\"                 Error with position, exits 1"))]
    Check {
        /// Filter text
        filter: String,
    },

    /// Filter a JSON list of issues
    #[command(after_help = help::syntax())]
    Filter {
        /// Filter text (empty matches every issue)
        filter: String,

        /// JSON file holding an array of issues (default: stdin)
        #[arg(long, short, value_name = "file")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Reference time for updated: (RFC 3339, default: now)
        #[arg(long, value_name = "time")]
        now: Option<String>,

        /// Restrict to this repository unless the filter names one
        #[arg(long, value_name = "owner/name")]
        repo: Option<String>,
    },

    /// List qualifier names and values for completion
    #[command(after_help = colors::examples("\
Examples:
  hubq keywords                         Completion words, one per line
  hubq keywords --aliases               Aliases and the qualifiers they name"))]
    Keywords {
        /// List qualifier aliases with their targets instead
        #[arg(long)]
        aliases: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
