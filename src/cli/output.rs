//! CLI output formatting.

use crate::config::DerivedContext;
use crate::error::ParamError;
use crate::validation::ValidationReport;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Print version information.
pub fn print_version() {
    println!("kerrscalar {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"kerrscalar - Scalar field on Kerr: parameter loader and checker

USAGE:
    kerrscalar <COMMAND> [OPTIONS]

COMMANDS:
    check <params.yaml>         Load and validate a parameter file
        --strict                Fail on warnings as well as hard checks

    show <params.yaml>          Print the resolved parameters as YAML

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    kerrscalar check demos/params.yaml
    kerrscalar check demos/params.yaml --strict
    kerrscalar show demos/params.yaml

ENVIRONMENT:
    RUST_LOG                    Log filter (default: kerrscalar=info)
"
    );
}

/// Print the derived grid constants.
pub fn print_base(base: &DerivedContext) {
    println!("Base configuration:");
    println!("  L:             {}", base.domain_size);
    println!(
        "  N:             {} x {} x {}",
        base.grid_size_per_direction[0] + 1,
        base.grid_size_per_direction[1] + 1,
        base.grid_size_per_direction[2] + 1
    );
    println!("  coarsest dx:   {}", base.coarsest_dx);
    println!("  dt_multiplier: {}", base.dt_multiplier);
    println!(
        "  center:        [{}, {}, {}]",
        base.center.x, base.center.y, base.center.z
    );
}

/// Print a validation report.
pub fn print_report(report: &ValidationReport) {
    let status = if report.is_ok() { "PASSED" } else { "FAILED" };
    let sym = if report.is_ok() { "✓" } else { "✗" };

    println!("{RULE}");
    println!("{sym} Parameter check {status}");
    println!("{RULE}\n");

    println!("  Checks:   {}", report.checks_run());
    println!("  Warnings: {}", report.warnings().len());
    println!("  Failures: {}", report.failures().len());

    if !report.warnings().is_empty() {
        println!("\nWarnings:");
        for w in report.warnings() {
            println!("  ! {w}");
        }
    }

    if !report.failures().is_empty() {
        println!("\nFailures:");
        for (i, e) in report.failures().iter().enumerate() {
            println!("  {}. {e}", i + 1);
        }
    }
}

/// Print an error that stopped loading before validation ran.
pub fn print_load_error(err: &ParamError) {
    eprintln!("✗ Error: {err}");
    if err.is_array_file_error() {
        eprintln!("  Set initial_f_file / initial_r_file in the parameter file to point at the sample arrays.");
    }
}
