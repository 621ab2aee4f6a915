//! tg-cli library
//!
//! Operator actions behind the `tg` binary, exported for tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub mod error;
pub mod operations;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use operations::{InspectReport, add_user, inspect_token, issue_tokens, token_settings};
