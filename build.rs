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

//! Build script for git-cm.
//!
//! Defines the `VERSION_WITH_GIT` environment variable used at compile time.

use std::{io, process::Command};

fn main() {
    define_version_with_git();
}

/// Defines a variable containing the version with the Git revision.
///
/// `VERSION_WITH_GIT` contains at least the cargo version, even when Git is
/// not available. When Git is available and the worktree is not checked out at
/// a tag matching *exactly* the cargo version prefixed by `v`, the current Git
/// revision and dirty state are added to the version as a tag.
///
/// For instance:
///
/// * Cargo version 1.0.0 on tag v1.0.0, clean state => `1.0.0`
/// * Cargo version 1.0.0 on tag v1.0.0, dirty state =>
///   `1.0.0+abcd1234-modified`
/// * Cargo version 1.1.0-dev on any commit, clean state => `1.1.0-dev+abcd1234`
fn define_version_with_git() {
    let cargo_version = env!("CARGO_PKG_VERSION");
    let version = version_with_git(cargo_version)
        .unwrap_or_else(|_| String::from(cargo_version));

    println!("cargo:rustc-env=VERSION_WITH_GIT={version}");
}

fn version_with_git(cargo_version: &str) -> io::Result<String> {
    if git_describe()? == format!("v{cargo_version}") {
        return Ok(String::from(cargo_version));
    }

    let revision = git_revision()?;
    if revision.is_empty() {
        return Ok(String::from(cargo_version));
    }

    if git_is_dirty()? {
        Ok(format!("{cargo_version}+{revision}-modified"))
    } else {
        Ok(format!("{cargo_version}+{revision}"))
    }
}

fn git_describe() -> io::Result<String> {
    git(&["describe", "--always", "--dirty=-modified"])
}

fn git_revision() -> io::Result<String> {
    git(&["rev-parse", "--short", "HEAD"])
}

fn git_is_dirty() -> io::Result<bool> {
    Ok(!git(&["status", "--porcelain"])?.is_empty())
}

fn git(args: &[&str]) -> io::Result<String> {
    let output = Command::new("git").args(args).output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
