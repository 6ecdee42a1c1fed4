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

//! Helpers for the git-cm commands.

use std::{io, process::Command};

use thiserror::Error;

/// Errors that can occur when not inside a Git worktree.
#[derive(Debug, Error)]
pub enum NotInGitWorktree {
    /// Git cannot be run.
    #[error("Failed to run the git command")]
    CannotRunGit(#[from] io::Error),
    /// The command is not run from inside a Git repository.
    #[error("Not in a Git repository")]
    NotInRepo,
    /// The command is not run from inside a Git worktree.
    #[error("Not inside a Git worktree")]
    NotInWorktree,
}

/// Ensures the command is run from a Git worktree.
pub fn ensure_in_git_worktree() -> Result<(), NotInGitWorktree> {
    let is_inside_work_tree = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()?;

    if !is_inside_work_tree.status.success() {
        return Err(NotInGitWorktree::NotInRepo);
    }

    if is_inside_work_tree.stdout == b"true\n" {
        Ok(())
    } else {
        Err(NotInGitWorktree::NotInWorktree)
    }
}
