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

//! The git-cm commands.

mod check;
mod helpers;
mod init;
mod pick;
mod show;

use clap::Parser;
use eyre::Result;

use self::{
    check::{Check, CheckError},
    init::{Init, InitError},
    pick::Pick,
    show::Show,
};
use crate::{error, hint};

/// The commit type menu for interactive commit wizards.
#[derive(Debug, Parser)]
#[command(author, version = env!("VERSION_WITH_GIT"))]
pub enum GitCm {
    /// Initialises the commit type menu.
    Init(Init),
    /// Prints the commit type menu.
    Show(Show),
    /// Asks for a commit type and prints its value.
    Pick(Pick),
    /// Checks the commit type menu for structural problems.
    Check(Check),
}

trait Command {
    /// Runs the command.
    fn run(&self) -> Result<()>;
}

impl GitCm {
    /// Runs git-cm.
    pub fn run() -> Result<()> {
        crate::tracing::init();

        let result = match Self::parse() {
            Self::Init(init) => init.run(),
            Self::Show(show) => show.run(),
            Self::Pick(pick) => pick.run(),
            Self::Check(check) => check.run(),
        };

        match result {
            Err(e) => handle_errors(e),
            Ok(()) => Ok(()),
        }
    }
}

fn handle_errors(e: color_eyre::Report) -> Result<()> {
    if let Some(e) = e.downcast_ref::<InitError>() {
        match e {
            InitError::ExistingConfig => {
                error!("{e}");
                hint!("You can force the command by running `git cm init -f`.");
            }
        }
        std::process::exit(exitcode::CANTCREAT);
    } else if let Some(e) = e.downcast_ref::<CheckError>() {
        match e {
            CheckError::InvalidMenu => {
                error!("{e}");
                hint!("You can edit git-cm.toml to fix the problems above.");
            }
        }
        std::process::exit(exitcode::CONFIG);
    } else {
        Err(e)
    }
}
