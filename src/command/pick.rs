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

//! The `pick` subcommand.

use std::fmt;

use clap::Parser;
use eyre::Result;
use inquire::Select;

use crate::config::{CommitType, Config};

use super::helpers::ensure_in_git_worktree;

/// The size of a page in the terminal.
const PAGE_SIZE: usize = 15;

/// The pick command.
#[derive(Debug, Parser)]
pub struct Pick;

/// A menu entry as displayed in the selection prompt.
#[derive(Debug)]
struct MenuEntry {
    /// The underlying commit type.
    commit_type: CommitType,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.commit_type.name)
    }
}

impl super::Command for Pick {
    fn run(&self) -> Result<()> {
        ensure_in_git_worktree()?;

        let config = Config::load()?;
        let choice = ask_type(&config)?;

        println!("{choice}");

        Ok(())
    }
}

/// Asks the user which type of commit they want.
///
/// The prompt shows the `name` labels, like the commit wizards consuming the
/// menu do. The returned string is the `value` of the selected entry.
fn ask_type(config: &Config) -> Result<String> {
    let choice = Select::new("Commit type", menu_entries(config))
        .with_page_size(PAGE_SIZE)
        .with_formatter(&|choice| choice.value.commit_type.value.clone())
        .prompt()?;

    Ok(choice.commit_type.value)
}

/// Builds the menu entries from the configuration.
fn menu_entries(config: &Config) -> Vec<MenuEntry> {
    config
        .types
        .iter()
        .cloned()
        .map(|commit_type| MenuEntry { commit_type })
        .collect()
}
