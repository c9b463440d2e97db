// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use clap::CommandFactory;

#[test]
fn definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parse_defaults_to_text() {
    let cli = Cli::try_parse_from(["hubq", "parse", "label:bug"]).unwrap();
    match cli.command {
        Command::Parse { filter, output } => {
            assert_eq!(filter, "label:bug");
            assert_eq!(output, TreeFormat::Text);
        }
        _ => panic!("expected parse"),
    }
}

#[test]
fn filter_options() {
    let cli = Cli::try_parse_from([
        "hubq",
        "filter",
        "is:open",
        "-i",
        "issues.json",
        "-o",
        "ids",
        "--repo",
        "owner/app",
        "--config",
        "x.toml",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    match cli.command {
        Command::Filter {
            input,
            output,
            repo,
            now,
            ..
        } => {
            assert_eq!(input, Some(PathBuf::from("issues.json")));
            assert_eq!(output, OutputFormat::Id);
            assert_eq!(repo.as_deref(), Some("owner/app"));
            assert_eq!(now, None);
        }
        _ => panic!("expected filter"),
    }
}

#[test]
fn filter_accepts_empty_filter() {
    let cli = Cli::try_parse_from(["hubq", "filter", ""]).unwrap();
    assert!(matches!(cli.command, Command::Filter { filter, .. } if filter.is_empty()));
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["hubq", "parse", "a", "-o", "yaml"]).is_err());
}

#[test]
fn keywords_aliases_flag() {
    let cli = Cli::try_parse_from(["hubq", "keywords", "--aliases"]).unwrap();
    assert!(matches!(cli.command, Command::Keywords { aliases: true }));
    let cli = Cli::try_parse_from(["hubq", "keywords"]).unwrap();
    assert!(matches!(cli.command, Command::Keywords { aliases: false }));
}
