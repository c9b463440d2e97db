// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and command output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes shared by help and output.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and positions: medium grey
    pub const CONTEXT: u8 = 245;
    /// Error markers: soft red
    pub const ERROR: u8 = 167;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, filter text) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, positions) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply error color to text.
pub fn error(text: &str) -> String {
    paint(codes::ERROR, text)
}

/// Colors text only when [`should_colorize`] allows it.
pub fn maybe(color: fn(&str) -> String, text: &str) -> String {
    apply(should_colorize(), color, text)
}

/// Colors text when `enabled`.
pub fn apply(enabled: bool, color: fn(&str) -> String, text: &str) -> String {
    if enabled {
        color(text)
    } else {
        text.to_string()
    }
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. In `command    description` lines the
/// command is literal. Unmatched lines pass through.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 256);

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(indent);
            result.push_str(&literal(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
            continue;
        }

        result.push_str(line);
    }

    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let mut space_start = None;
    for (i, c) in line.char_indices() {
        match (c, space_start) {
            (' ', None) => space_start = Some(i),
            (' ', Some(_)) => {}
            (_, Some(start)) if i - start >= 2 && start > 0 => return Some(start),
            _ => space_start = None,
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
