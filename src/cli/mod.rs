//! CLI module for kerrscalar.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.
//! `run_cli` is the entry point for parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::{check_params, run_cli, show_params};
pub use output::{print_base, print_help, print_load_error, print_report, print_version};

#[cfg(test)]
mod tests;
