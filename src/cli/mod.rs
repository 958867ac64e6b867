//! CLI module
//!
//! Command-line interface for harvesting fungible asset balances.
//!
//! The binary runs a single operation: fetch every page of balances for one
//! asset type, print a summary, and export the records to a JSON file.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{Runner, EXIT_FAILURE, EXIT_INTERRUPTED, EXIT_SUCCESS};
