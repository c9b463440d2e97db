// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration lives in `.hubq.toml`, found by searching upward from the
//! working directory, or in `hubq/config.toml` under the platform config
//! directory. `--config` and `HUBQ_CONFIG` name a file explicitly.
//!
//! ```toml
//! default_repo = "owner/app"
//!
//! [aliases]
//! who = "assignee"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use hubq_core::Registry;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = ".hubq.toml";
const USER_CONFIG_DIR: &str = "hubq";
const USER_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Repository a filter is restricted to when it names none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_repo: Option<String>,
    /// Extra qualifier aliases, alias to qualifier name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.display().to_string(),
            reason: format!("failed to read config: {e}"),
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Loads the explicit file if given, else the discovered one, else
    /// defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit.map(Path::to_path_buf).or_else(env::config_path);
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(&path);
        }

        let cwd = std::env::current_dir()?;
        match find_config(&cwd) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Config::default()),
        }
    }

    /// Builds the qualifier registry: built-in names plus configured aliases.
    pub fn registry(&self) -> Result<Registry> {
        let mut registry = Registry::default();
        for (alias, target) in &self.aliases {
            registry = registry.with_alias(alias, target)?;
        }
        Ok(registry)
    }
}

/// Searches `start` and its ancestors for `.hubq.toml`, then the user config
/// directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            break;
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
