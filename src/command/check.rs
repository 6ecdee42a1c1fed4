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

//! The `check` subcommand.

use clap::Parser;
use eyre::{bail, Result};
use thiserror::Error;

use crate::{config::Config, error, success};

use super::helpers::ensure_in_git_worktree;

/// The check command.
#[derive(Debug, Parser)]
pub struct Check;

/// Usage errors of `git cm check`.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The menu has structural problems.
    #[error("The commit type menu is invalid")]
    InvalidMenu,
}

impl super::Command for Check {
    fn run(&self) -> Result<()> {
        ensure_in_git_worktree()?;

        let config = Config::load()?;
        let problems = config.check();

        if problems.is_empty() {
            success!("The commit type menu is valid.");
            Ok(())
        } else {
            for problem in &problems {
                error!("{problem}");
            }

            bail!(CheckError::InvalidMenu);
        }
    }
}
