//! Command-line front end for `mvnver-core`.
//!
//! Parses arguments, loads query defaults and the input document, and
//! renders command results as JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod request;

pub use cli::{Cli, Command};
pub use commands::{execute, run, run_and_report};
pub use config::Settings;
pub use error::{CliError, Result};
pub use request::VersionDocument;
