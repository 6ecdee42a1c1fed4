// git-cm - The commit type menu for interactive commit wizards.
// Copyright (C) 2025 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Configuration for git-cm.

use std::{fs, io, path::PathBuf, process::Command};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tracing::LogResult as _;

/// An error that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path of the configuration file cannot be built.
    #[error("Failed to get the configuration file path")]
    ConfigFileError(#[from] ConfigFileError),
    /// The configuration file cannot be read.
    #[error("Failed to read {CONFIG_FILE_NAME}")]
    ReadError(#[from] io::Error),
    /// The configuration file cannot be parsed.
    #[error("Invalid configuration in {CONFIG_FILE_NAME}")]
    InvalidConfig(#[from] toml::de::Error),
}

/// An error that can occur when building the config file path.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The Git repo root cannot be resolved.
    #[error("Failed to get the Git repo root")]
    RepoRootError(#[from] RepoRootError),
}

/// An error that can occur when getting the Git repo root.
#[derive(Debug, Error)]
pub enum RepoRootError {
    /// Git cannot be run.
    #[error("Failed to run the git command")]
    CannotRunGit(#[from] io::Error),
    /// Git has returned an error.
    #[error("{0}")]
    GitError(String),
    /// The output of Git is not valid UTF-8.
    #[error("The output of the git command is not proper UTF-8")]
    EncodingError(#[from] std::string::FromUtf8Error),
}

/// The git-cm configuration.
///
/// The whole configuration is the commit type menu itself: an ordered list of
/// [`CommitType`] entries under a single `types` key. The order of the entries
/// is the order of the menu in the selection prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The commit type menu, in display order.
    pub types: Vec<CommitType>,
}

/// One selectable entry in the commit type menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommitType {
    /// The commit type keyword, unique within the menu.
    pub value: String,
    /// The label shown in the selection prompt.
    pub name: String,
}

/// A structural problem in the commit type menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuProblem {
    /// The menu contains no entries.
    #[error("The menu defines no commit types")]
    EmptyMenu,
    /// An entry has an empty value.
    #[error("The value of entry {position} is empty")]
    EmptyValue {
        /// The position of the entry in the menu, starting from 1.
        position: usize,
    },
    /// An entry has an empty name.
    #[error("The name of entry {position} is empty")]
    EmptyName {
        /// The position of the entry in the menu, starting from 1.
        position: usize,
    },
    /// Several entries share the same value.
    #[error("The value \"{value}\" is used by multiple entries")]
    DuplicateValue {
        /// The duplicated value.
        value: String,
    },
}

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "git-cm.toml";

/// The built-in commit type menu.
const BUILTIN_TYPES: &[(&str, &str)] = &[
    ("working 💪", "💪   working:     working..."),
    ("feature ✨", "✨   feature:     add new feature or function"),
    ("bugfix 🐛", "🐛   bugfix:      fix bug"),
    ("refactor ⚒️", "⚒️    refactor:    refactor code"),
    ("document 📚", "📚   document:    modify document"),
    ("test 🏁", "🏁   test:        add test unit or temporary test"),
    ("format 💅", "💅   format:      format code"),
    ("docker 🐳", "🐳   docker:      docker related"),
    ("remove ➖", "➖   remove:      remove third part dependency"),
    ("add ➕", "➕   add:         add third part dependency"),
    ("CI 👷", "👷   CI:          CI/CD related"),
    ("optimize 🐎", "🐎   optimize:    optimize code"),
    ("revert ⏪", "⏪   revert:      revert commit"),
];

impl Default for Config {
    fn default() -> Self {
        Self {
            types: BUILTIN_TYPES
                .iter()
                .map(|&(value, name)| CommitType {
                    value: String::from(value),
                    name: String::from(name),
                })
                .collect(),
        }
    }
}

impl Config {
    /// Loads the configuration from the repo or fallbacks to the default.
    pub fn load() -> Result<Self, LoadError> {
        let config_file = config_file()?;

        match fs::read_to_string(&config_file) {
            Ok(config) => {
                tracing::debug!(?config_file, "loading the commit type menu");
                Ok(Self::from_toml(&config).log_err()?)
            }

            Err(error) => match error.kind() {
                io::ErrorKind::NotFound => {
                    tracing::debug!(
                        "no configuration file, using the built-in menu"
                    );
                    Ok(Self::default())
                }
                _ => Err(LoadError::ReadError(error)).log_err(),
            },
        }
    }

    /// Builds the configuration from its TOML representation.
    pub fn from_toml(toml: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml)
    }

    /// Builds the TOML representation of the configuration.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Diagnoses structural problems in the commit type menu.
    ///
    /// Loading does not validate the menu. This function backs `git cm check`
    /// and reports the problems in menu order.
    pub fn check(&self) -> Vec<MenuProblem> {
        let mut problems = Vec::new();

        if self.types.is_empty() {
            problems.push(MenuProblem::EmptyMenu);
        }

        for (position, commit_type) in (1..).zip(&self.types) {
            if commit_type.value.is_empty() {
                problems.push(MenuProblem::EmptyValue { position });
            }

            if commit_type.name.is_empty() {
                problems.push(MenuProblem::EmptyName { position });
            }
        }

        let mut occurrences: IndexMap<&str, usize> = IndexMap::new();
        for commit_type in &self.types {
            *occurrences.entry(commit_type.value.as_str()).or_insert(0) += 1;
        }

        for (value, count) in occurrences {
            if count > 1 {
                problems.push(MenuProblem::DuplicateValue {
                    value: value.to_owned(),
                });
            }
        }

        problems
    }
}

/// Returns the path of the configuration file.
pub fn config_file() -> Result<PathBuf, ConfigFileError> {
    Ok(repo_root()?.join(CONFIG_FILE_NAME))
}

/// Returns the path of the Git repo root.
fn repo_root() -> Result<PathBuf, RepoRootError> {
    let git_rev_parse = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()?;

    if git_rev_parse.status.success() {
        let repo_root = String::from_utf8(git_rev_parse.stdout)?;
        Ok(PathBuf::from(repo_root.trim()))
    } else {
        let git_error = String::from_utf8(git_rev_parse.stderr)?;
        Err(RepoRootError::GitError(git_error.trim().to_owned()))
    }
}
