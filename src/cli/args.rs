//! CLI argument parsing.
//!
//! Parsing accepts any iterator of strings, so it can be tested without
//! touching the process environment.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load and validate a parameter file
    Check {
        /// Path to the parameter file.
        params_path: PathBuf,
        /// Treat warnings as failures.
        strict: bool,
    },
    /// Print the resolved parameters
    Show {
        /// Path to the parameter file.
        params_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "check" => Self::parse_check_command(args),
            "show" => Self::parse_show_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_check_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'check' command requires a parameter file path");
            return Command::Help;
        }

        let strict = args[3..].iter().any(|a| a == "--strict");

        Command::Check {
            params_path: PathBuf::from(&args[2]),
            strict,
        }
    }

    fn parse_show_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'show' command requires a parameter file path");
            return Command::Help;
        }

        Command::Show {
            params_path: PathBuf::from(&args[2]),
        }
    }
}
