//! CLI command handlers.

use std::path::Path;
use std::process::ExitCode;

use crate::arrays::TextArrayLoader;
use crate::config::YamlParameterStore;
use crate::params::SimulationParameters;
use crate::validation::Severity;

use super::output::{print_base, print_help, print_load_error, print_report, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Check {
            params_path,
            strict,
        } => check_params(&params_path, strict),
        Command::Show { params_path } => show_params(&params_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Load a parameter file and report every warning and failure.
///
/// Exits non-zero if a hard check fails, or with `strict` if anything
/// warns.
#[must_use]
pub fn check_params(path: &Path, strict: bool) -> ExitCode {
    println!("Checking: {}\n", path.display());

    let store = match YamlParameterStore::from_file(path) {
        Ok(s) => s,
        Err(e) => {
            print_load_error(&e);
            return ExitCode::from(1);
        }
    };

    let (base, _bundle, report) = match SimulationParameters::assemble(&store, &TextArrayLoader) {
        Ok(parts) => parts,
        Err(e) => {
            print_load_error(&e);
            return ExitCode::from(1);
        }
    };

    report.log();
    print_base(&base);
    println!();
    print_report(&report);

    let limit = if strict { Severity::Pass } else { Severity::Warning };
    if report.worst_severity() > limit {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Print the resolved parameters as YAML.
#[must_use]
pub fn show_params(path: &Path) -> ExitCode {
    let yaml = SimulationParameters::load(path).and_then(|p| p.to_yaml());
    match yaml {
        Ok(yaml) => {
            print!("{yaml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_load_error(&e);
            ExitCode::from(1)
        }
    }
}
