#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Extracts normalized registration records from registry-specific WHOIS
//! responses.
//!
//! The core is synchronous: [`parse`] picks a ruleset from the domain's
//! suffix, checks the text for the registry's "not found" wording and then
//! applies the ruleset's field patterns. [`providers::whois`] wraps the
//! network lookup around it.

use std::process::ExitCode;

use anyhow::Result;

pub mod dates;
pub mod error;
pub mod extract;
pub mod providers;
pub mod record;
pub mod ruleset;

mod app;
mod cli;
mod results;
mod spinner;
mod user_config;

pub use error::{Error, RulesetError};
pub use extract::{extract, parse, parse_with};
pub use record::{Field, WhoisRecord};
pub use ruleset::{select_ruleset, Catalog, Ruleset};

/// Runs the command-line application.
///
/// # Errors
///
/// Returns an error if the saved response cannot be read, the user config
/// cannot be stored, or printing the results in JSON format fails.
/// Per-domain lookup failures are reported in the output and turn into a
/// failing exit code instead.
pub async fn run() -> Result<ExitCode> {
  let app = app::App::new();
  let all_ok = app.run().await?;
  Ok(if all_ok {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  })
}
