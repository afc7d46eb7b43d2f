//! CLI module tests.

use super::args::{Args, Command};
use super::commands::{check_params, run_cli, show_params};
use super::output::{print_base, print_help, print_load_error, print_report, print_version};
use crate::config::DerivedContext;
use crate::error::ParamError;
use crate::params::ParameterBundle;
use crate::validation::ParameterValidator;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn demo_params() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("params.yaml")
}

/// Writes a parameter file next to copies of the demo arrays.
fn scratch_params(extra: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    for name in [
        "flatspace_initial_f_eta7e-2.txt",
        "flatspace_initial_r_eta7e-2.txt",
    ] {
        std::fs::copy(demos.join(name), dir.path().join(name)).unwrap();
    }
    let path = dir.path().join("params.yaml");
    std::fs::write(&path, format!("L: 64.0\nN_full: 64\n{extra}")).unwrap();
    (dir, path)
}

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["kerrscalar"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_flags() {
    for flag in ["-h", "--help", "help"] {
        let args = Args::parse_from(["kerrscalar", flag]);
        assert_eq!(args.command, Command::Help);
    }
}

#[test]
fn test_parse_version_flags() {
    for flag in ["-V", "--version", "version"] {
        let args = Args::parse_from(["kerrscalar", flag]);
        assert_eq!(args.command, Command::Version);
    }
}

#[test]
fn test_parse_unknown_command() {
    let args = Args::parse_from(["kerrscalar", "evolve"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_check_command() {
    let args = Args::parse_from(["kerrscalar", "check", "params.yaml"]);
    assert_eq!(
        args.command,
        Command::Check {
            params_path: PathBuf::from("params.yaml"),
            strict: false,
        }
    );
}

#[test]
fn test_parse_check_strict() {
    let args = Args::parse_from(["kerrscalar", "check", "params.yaml", "--strict"]);
    assert_eq!(
        args.command,
        Command::Check {
            params_path: PathBuf::from("params.yaml"),
            strict: true,
        }
    );
}

#[test]
fn test_parse_check_missing_path() {
    let args = Args::parse_from(["kerrscalar", "check"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_show_command() {
    let args = Args::parse_from(["kerrscalar", "show", "run/params.yaml"]);
    assert_eq!(
        args.command,
        Command::Show {
            params_path: PathBuf::from("run/params.yaml"),
        }
    );
}

#[test]
fn test_parse_show_missing_path() {
    let args = Args::parse_from(["kerrscalar", "show"]);
    assert_eq!(args.command, Command::Help);
}

// ============================================================================
// Output formatting tests
// ============================================================================

#[test]
fn test_print_version() {
    print_version();
}

#[test]
fn test_print_help() {
    print_help();
}

#[test]
fn test_print_base_and_report() {
    let base = DerivedContext::new(64.0, [64, 64, 64], 0.25).unwrap();
    let mut bundle = ParameterBundle::defaults(&base);
    bundle.potential.scalar_mass = 5.0;
    bundle.kerr.spin = 2.0;

    let report = ParameterValidator::new(&base).validate(&bundle);
    print_base(&base);
    print_report(&report);
}

#[test]
fn test_print_load_error() {
    print_load_error(&ParamError::malformed("f.txt", "missing element count"));
    print_load_error(&ParamError::config("bad"));
}

// ============================================================================
// Command tests
// ============================================================================

#[test]
fn test_run_cli_help_and_version() {
    let exit = run_cli(Args {
        command: Command::Help,
    });
    assert_eq!(exit, ExitCode::SUCCESS);

    let exit = run_cli(Args {
        command: Command::Version,
    });
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_check_demo_params() {
    assert_eq!(check_params(&demo_params(), false), ExitCode::SUCCESS);
    assert_eq!(check_params(&demo_params(), true), ExitCode::SUCCESS);
}

#[test]
fn test_show_demo_params() {
    let exit = run_cli(Args {
        command: Command::Show {
            params_path: demo_params(),
        },
    });
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_check_missing_file() {
    let exit = check_params(Path::new("/nonexistent/params.yaml"), false);
    assert_ne!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_show_missing_file() {
    assert_ne!(show_params(Path::new("/nonexistent/params.yaml")), ExitCode::SUCCESS);
}

#[test]
fn test_check_warning_passes_unless_strict() {
    let (_dir, path) = scratch_params("scalar_mass: 5.0\n");
    assert_eq!(check_params(&path, false), ExitCode::SUCCESS);
    assert_ne!(check_params(&path, true), ExitCode::SUCCESS);
}

#[test]
fn test_check_hard_failure() {
    let (_dir, path) = scratch_params("kerr_mass: 0.5\nkerr_spin: 1.0\n");
    assert_ne!(check_params(&path, false), ExitCode::SUCCESS);
    assert_ne!(show_params(&path), ExitCode::SUCCESS);
}

#[test]
fn test_check_missing_array_file() {
    let (_dir, path) = scratch_params("initial_r_file: missing_r.txt\n");
    let exit = run_cli(Args {
        command: Command::Check {
            params_path: path,
            strict: false,
        },
    });
    assert_ne!(exit, ExitCode::SUCCESS);
}
