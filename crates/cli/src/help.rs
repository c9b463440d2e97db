// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let literal = fg(colors::codes::LITERAL);
    let context = fg(colors::codes::CONTEXT);
    let error = fg(colors::codes::ERROR);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
        .invalid(error)
        .error(error)
}

/// Main help template with the command list before the options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::maybe(colors::header, "Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let lit = |name: &str| colors::maybe(colors::literal, name);
    format!(
        "\
{header_inspect}
  {tokens}      Print the tokens of a filter
  {parse}       Print the canonical form or tree of a filter
  {check}       Check a filter for syntax errors

{header_apply}
  {filter}      Filter a JSON list of issues
  {keywords}    List qualifier names for completion
",
        header_inspect = colors::maybe(colors::header, "Inspecting filters:"),
        header_apply = colors::maybe(colors::header, "Applying filters:"),
        tokens = lit("tokens"),
        parse = lit("parse"),
        check = lit("check"),
        filter = lit("filter"),
        keywords = lit("keywords"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Examples:
  hubq parse \"milestone:v1 -is:closed\"     Show the canonical filter
  hubq check \"label:\"                      Report an incomplete filter
  hubq filter \"label:bug sort:!updated\" -i issues.json
                                          Filter and sort issues",
    )
}

/// Filter syntax summary shown after the help of commands that take a filter.
pub fn syntax() -> String {
    colors::examples(
        "\
Filter syntax:
  crash \"out of memory\"                    Keywords, matched in title and body
  label:bug;ui  milestone:v1  author:ali   Qualifiers (name:value, ';' for either)
  comments:3..5  created:>2014-01-01       Ranges and comparisons
  a b  a and b  a or b  -a  not (a or b)   Operators
  in:title  sort:!updated,comments         Keyword scope and result order",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
