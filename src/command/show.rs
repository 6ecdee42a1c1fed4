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

//! The `show` subcommand.

use clap::Parser;
use eyre::Result;

use crate::config::Config;

use super::helpers::ensure_in_git_worktree;

/// The show command.
#[derive(Debug, Parser)]
pub struct Show {
    /// Print the type values instead of the menu labels.
    #[arg(long)]
    values: bool,
}

impl super::Command for Show {
    fn run(&self) -> Result<()> {
        ensure_in_git_worktree()?;

        let config = Config::load()?;

        for commit_type in &config.types {
            if self.values {
                println!("{}", commit_type.value);
            } else {
                println!("{}", commit_type.name);
            }
        }

        Ok(())
    }
}
