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

//! Cargo xtasks for git-cm.

use std::{env, process};

use colored::Colorize;
use xshell::{cmd, Shell};

struct Context {
    pub sh: Shell,
    pub checks: usize,
    pub errors: usize,
}

impl Context {
    pub fn new() -> Self {
        Self {
            sh: Shell::new().unwrap(),
            checks: 0,
            errors: 0,
        }
    }
}

fn main() {
    let mut args = env::args();
    let _ = args.next();

    if let Some(command) = args.next().as_deref() {
        match command {
            "check" => check(args.next().as_deref()),
            _ => usage(),
        }
    } else {
        usage();
    }
}

fn usage() {
    let name = env::args().next().unwrap();
    eprintln!("usage: {name} <check>");
    process::exit(1);
}

////////////////////////////////////////////////////////////////////////////////
//                                  Commands                                  //
////////////////////////////////////////////////////////////////////////////////

fn check(subcommand: Option<&str>) {
    let mut ctx = Context::new();

    if let Some(check) = subcommand {
        match check {
            "format" => check_format(&mut ctx),
            "build" => build(&mut ctx),
            "test" => test(&mut ctx),
            "all" => {
                check_format(&mut ctx);
                build(&mut ctx);
                test(&mut ctx);
            }
            _ => check_usage(),
        }
    } else {
        check_usage();
    }

    check_result(&ctx);
}

fn check_usage() {
    let name = env::args().next().unwrap();
    eprintln!("usage: {name} check <format|build|test|all>");
    process::exit(1);
}

//////////////////////////////////// Checks ////////////////////////////////////

fn check_format(ctx: &mut Context) {
    action!(
        ctx,
        "Checking the Rust code is formatted",
        "cargo fmt --check",
    );
}

fn build(ctx: &mut Context) {
    action!(
        ctx,
        "Building all packages",
        "cargo build --workspace --all-targets",
    );

    action!(
        ctx,
        "Checking for clippy warnings in all packages",
        "cargo clippy --workspace --all-targets -- -D warnings",
    );
}

fn test(ctx: &mut Context) {
    action!(
        ctx,
        "Building the tests for all packages",
        "cargo test --workspace --no-run",
    );

    action!(
        ctx,
        "Running the tests for all packages",
        "cargo test --workspace",
    );
}

////////////////////////////////////////////////////////////////////////////////
//                                  Helpers                                   //
////////////////////////////////////////////////////////////////////////////////

#[macro_export]
macro_rules! action {
    ($ctx:ident, $name:literal, $command:literal $(,)?) => {{
        let result = {
            let _step = Step::new($name);
            cmd!($ctx.sh, $command).run()
        };

        $ctx.checks += 1;
        let message = if result.is_ok() {
            "✅ PASSED".bold().green()
        } else {
            $ctx.errors += 1;
            "❌ FAILED".bold().red()
        };

        println!("{message}\n");
    }};
}

struct Step;

impl Step {
    pub fn new(name: &'static str) -> Self {
        let message = if env::var_os("GITHUB_ACTIONS").is_some() {
            format!("::group::{name}")
        } else {
            format!("==> {name}...").bold().to_string()
        };

        println!("{message}");

        Self
    }
}

impl Drop for Step {
    fn drop(&mut self) {
        if env::var_os("GITHUB_ACTIONS").is_some() {
            println!("::endgroup::");
        }
    }
}

fn check_result(ctx: &Context) {
    let Context { checks, errors, .. } = ctx;

    let s = if *checks == 1 { "" } else { "s" };
    let be = |n| if n == 1 { "has" } else { "have" };

    if *errors == 0 {
        let be = be(*checks);
        let message = format!("✅ {checks}/{checks} check{s} {be} passed!")
            .bold()
            .green();
        println!("{message}");
    } else {
        let be = be(*errors);
        let message = format!("❌ {errors}/{checks} check{s} {be} failed!")
            .bold()
            .red();
        eprintln!("{message}");
        process::exit(1);
    }
}
