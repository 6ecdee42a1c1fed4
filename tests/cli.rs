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

// NOTE: rexpect is only compatible with Unix-like systems, so let’s just not
// compile the CLI tests on Windows.
#![cfg(not(target_os = "windows"))]
#![allow(clippy::pedantic, clippy::restriction)]
//! Command-line interface integration tests for git-cm.

use std::{fs, process::Command};

use assert_cmd::cargo::cargo_bin;
use assert_fs::{prelude::*, TempDir};
use eyre::Result;
use indoc::indoc;
use predicates::prelude::*;
use rexpect::{process::wait::WaitStatus, session::spawn_command};

const TIMEOUT: Option<u64> = Some(5_000);

////////////////////////////////////////////////////////////////////////////////
//                                  Helpers                                   //
////////////////////////////////////////////////////////////////////////////////

fn setup_temp_dir() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    let git_init = Command::new("git")
        .arg("init")
        .current_dir(&temp_dir)
        .output()?;
    assert!(git_init.status.success(), "failed to init a Git repo");

    Ok(temp_dir)
}

fn git_cm(temp_dir: &TempDir) -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("git-cm")?;
    cmd.current_dir(temp_dir.path());
    Ok(cmd)
}

fn git_cm_interactive(temp_dir: &TempDir, args: &[&str]) -> Command {
    let mut cmd = Command::new(cargo_bin("git-cm"));
    cmd.current_dir(temp_dir.path()).args(args);
    cmd
}

fn install_config(temp_dir: &TempDir, config: &str) -> Result<()> {
    temp_dir.child("git-cm.toml").write_str(config)?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                    Init                                    //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_init_creates_a_config_with_the_builtin_menu() -> Result<()> {
    let temp_dir = setup_temp_dir()?;

    git_cm(&temp_dir)?
        .args(["init", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A git-cm.toml has been created!"));

    let config = fs::read_to_string(temp_dir.child("git-cm.toml").path())?;
    assert!(config.contains("[[types]]"));
    assert!(config.contains(r#"value = "working 💪""#));
    assert!(config.contains(r#"value = "revert ⏪""#));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite_an_existing_config() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    install_config(&temp_dir, "types = []\n")?;

    git_cm(&temp_dir)?
        .args(["init", "-d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "already a git-cm.toml in the current repository",
        ))
        .stderr(predicate::str::contains("`git cm init -f`"));

    Ok(())
}

#[test]
fn test_init_force_overwrites_an_existing_config() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    install_config(&temp_dir, "types = []\n")?;

    git_cm(&temp_dir)?
        .args(["init", "-d", "-f"])
        .assert()
        .success();

    let config = fs::read_to_string(temp_dir.child("git-cm.toml").path())?;
    assert!(config.contains(r#"value = "bugfix 🐛""#));

    Ok(())
}

#[test]
fn test_init_fails_outside_a_git_repo() -> Result<()> {
    let temp_dir = TempDir::new()?;

    git_cm(&temp_dir)?
        .args(["init", "-d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in a Git repository"));

    Ok(())
}

#[test]
fn test_init_wizard_asks_how_to_seed_the_menu() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    let cmd = git_cm_interactive(&temp_dir, &["init"]);

    let mut process = spawn_command(cmd, TIMEOUT)?;

    process.exp_string("How should the commit type menu start?")?;
    process.exp_string("Start from the built-in types")?;
    process.exp_string("Start from an empty menu")?;
    process.send_line("")?;
    process.exp_string("A git-cm.toml has been created!")?;
    process.exp_eof()?;

    let config = fs::read_to_string(temp_dir.child("git-cm.toml").path())?;
    assert!(config.contains(r#"value = "working 💪""#));

    Ok(())
}

#[test]
fn test_init_wizard_can_seed_an_empty_menu() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    let cmd = git_cm_interactive(&temp_dir, &["init"]);

    let mut process = spawn_command(cmd, TIMEOUT)?;

    process.exp_string("How should the commit type menu start?")?;
    process.send_line("empty")?;
    process.exp_string("A git-cm.toml has been created!")?;
    process.exp_eof()?;

    let config = fs::read_to_string(temp_dir.child("git-cm.toml").path())?;
    assert_eq!(config, "types = []\n");

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                    Show                                    //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_show_prints_the_builtin_menu_without_a_config() -> Result<()> {
    let temp_dir = setup_temp_dir()?;

    git_cm(&temp_dir)?
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("💪   working:     working..."))
        .stdout(predicate::str::contains("🐛   bugfix:      fix bug"))
        .stdout(predicate::str::contains("⏪   revert:      revert commit"));

    Ok(())
}

#[test]
fn test_show_values_prints_the_type_values() -> Result<()> {
    let temp_dir = setup_temp_dir()?;

    git_cm(&temp_dir)?
        .args(["show", "--values"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("working 💪"))
        .stdout(predicate::str::contains("CI 👷"));

    Ok(())
}

#[test]
fn test_show_prints_the_menu_from_the_config() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    install_config(
        &temp_dir,
        indoc! {r#"
            [[types]]
            value = "feat"
            name = "feat: a new feature"
        "#},
    )?;

    git_cm(&temp_dir)?
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::diff("feat: a new feature\n"));

    Ok(())
}

#[test]
fn test_show_fails_on_an_invalid_config() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    install_config(&temp_dir, "types = 42\n")?;

    git_cm(&temp_dir)?
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid configuration in git-cm.toml",
        ));

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                    Pick                                    //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_pick_prints_the_selected_type_value() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    let cmd = git_cm_interactive(&temp_dir, &["pick"]);

    let mut process = spawn_command(cmd, TIMEOUT)?;

    // Asks for the commit type with the built-in menu.
    process.exp_string("Commit type")?;
    process.exp_string("💪   working:     working...")?;
    process.send_line("bugfix")?;

    // Prints the value of the selected entry.
    process.exp_string("bugfix 🐛")?;
    process.exp_eof()?;

    assert!(
        matches!(process.process.wait()?, WaitStatus::Exited(_, 0)),
        "the process should exit with a success"
    );

    Ok(())
}

#[test]
fn test_pick_uses_the_menu_from_the_config() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    install_config(
        &temp_dir,
        indoc! {r#"
            [[types]]
            value = "feat"
            name = "feat: a new feature"

            [[types]]
            value = "bugfix"
            name = "fix: a bug fix"
        "#},
    )?;

    let cmd = git_cm_interactive(&temp_dir, &["pick"]);
    let mut process = spawn_command(cmd, TIMEOUT)?;

    process.exp_string("Commit type")?;
    process.exp_string("feat: a new feature")?;
    process.send_line("bug fix")?;
    process.exp_string("bugfix")?;
    process.exp_eof()?;

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                   Check                                    //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_check_accepts_the_builtin_menu() -> Result<()> {
    let temp_dir = setup_temp_dir()?;

    git_cm(&temp_dir)?
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("The commit type menu is valid."));

    Ok(())
}

#[test]
fn test_check_reports_duplicate_values() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    install_config(
        &temp_dir,
        indoc! {r#"
            [[types]]
            value = "feature ✨"
            name = "✨   feature:     add new feature or function"

            [[types]]
            value = "feature ✨"
            name = "✨   feature:     again"
        "#},
    )?;

    git_cm(&temp_dir)?
        .arg("check")
        .assert()
        .failure()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains(
            "the value \"feature ✨\" is used by multiple entries",
        ))
        .stderr(predicate::str::contains("the commit type menu is invalid"));

    Ok(())
}

#[test]
fn test_check_reports_an_empty_menu() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    install_config(&temp_dir, "types = []\n")?;

    git_cm(&temp_dir)?
        .arg("check")
        .assert()
        .failure()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("the menu defines no commit types"));

    Ok(())
}

#[test]
fn test_check_reports_empty_fields() -> Result<()> {
    let temp_dir = setup_temp_dir()?;
    install_config(
        &temp_dir,
        indoc! {r#"
            [[types]]
            value = ""
            name = "🐛   bugfix:      fix bug"

            [[types]]
            value = "format 💅"
            name = ""
        "#},
    )?;

    git_cm(&temp_dir)?
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("the value of entry 1 is empty"))
        .stderr(predicate::str::contains("the name of entry 2 is empty"));

    Ok(())
}
