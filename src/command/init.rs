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

//! The `init` subcommand.

use std::fs;

use clap::Parser;
use eyre::{bail, Result};
use inquire::Select;
use thiserror::Error;

use crate::{
    config::{config_file, Config},
    hint, success,
};

use super::helpers::ensure_in_git_worktree;

/// The init command.
#[derive(Debug, Parser)]
pub struct Init {
    /// Use the built-in commit type menu.
    #[arg(long, short = 'd')]
    default: bool,
    /// Force the init process.
    #[arg(long, short = 'f')]
    force: bool,
}

/// Usage errors of `git cm init`.
#[derive(Debug, Error)]
pub enum InitError {
    /// A configuration already exists.
    #[error("There is already a git-cm.toml in the current repository")]
    ExistingConfig,
}

/// How to seed the commit type menu.
#[derive(Debug, Default)]
enum Seed {
    /// Start from the built-in types.
    #[default]
    BuiltinTypes,
    /// Start from an empty menu.
    EmptyMenu,
}

impl super::Command for Init {
    fn run(&self) -> Result<()> {
        ensure_in_git_worktree()?;

        let config_file = config_file()?;

        if !self.force && config_file.exists() {
            bail!(InitError::ExistingConfig);
        }

        let seed = if self.default {
            Seed::default()
        } else {
            Seed::run_wizard()?
        };

        fs::write(config_file, seed.into_config().to_toml()?)?;

        success!("A git-cm.toml has been created!");
        hint!("You can now edit it to adjust the menu.");

        Ok(())
    }
}

impl Seed {
    /// Runs the wizard to choose how to seed the menu.
    fn run_wizard() -> Result<Self> {
        let options = vec![
            "Start from the built-in types",
            "Start from an empty menu",
        ];

        let choice =
            Select::new("How should the commit type menu start?", options)
                .with_starting_cursor(0)
                .prompt()?;

        let choice = match choice {
            "Start from an empty menu" => Self::EmptyMenu,
            _ => Self::BuiltinTypes,
        };

        Ok(choice)
    }

    /// Builds the initial configuration for the seed.
    fn into_config(self) -> Config {
        match self {
            Self::BuiltinTypes => Config::default(),
            Self::EmptyMenu => Config { types: vec![] },
        }
    }
}
