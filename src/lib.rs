//! # Projects - DIY project tracker
//!
//! A menu-driven command-line utility for recording DIY projects together
//! with their materials, steps and categories in a local SQLite database.
//!
//! The code is split into three layers: the interactive shell
//! ([`libs::shell`]), the service ([`libs::service`]) and the data access
//! layer ([`db`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use projects::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
