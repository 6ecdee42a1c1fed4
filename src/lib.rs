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

//! The commit type menu for interactive commit wizards.
//!
//! git-cm owns the `types` table used by commitizen-style commit wizards: an
//! ordered menu of commit types, each pairing a short `value` with the `name`
//! shown in the selection prompt. The menu lives in a `git-cm.toml` at the
//! root of the repository and falls back to a built-in table when the file
//! does not exist.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![warn(rust_2018_idioms)]
#![warn(clippy::redundant_pub_crate)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::use_self)]

pub mod command;
pub mod config;
pub mod helpers;
pub mod tracing;

pub use command::GitCm;
