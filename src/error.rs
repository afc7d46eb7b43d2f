//! Error types for kerrscalar.
//!
//! Every fallible operation returns `Result<T, ParamError>` instead of
//! panicking. Soft problems are not errors: they are reported as
//! [`ParameterWarning`](crate::validation::ParameterWarning) values.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kerrscalar operations.
pub type ParamResult<T> = Result<T, ParamError>;

/// Unified error type for parameter loading and validation.
///
/// # Design
///
/// Variants fall into three groups:
/// 1. Array file errors, which abort loading immediately
/// 2. Hard validation checks, which abort after the report is complete
/// 3. Configuration and I/O plumbing errors
#[derive(Debug, Error)]
pub enum ParamError {
    // ===== Array File Errors =====
    /// Array file could not be opened for reading.
    #[error("array file not found: {}", .path.display())]
    FileNotFound {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Array file does not follow the `<count> <values...>` layout.
    #[error("malformed array file {}: {reason}", .path.display())]
    MalformedArrayFile {
        /// Path of the offending file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    // ===== Hard Checks =====
    /// The paired (r, f) sample arrays differ in length.
    #[error("Parameter: initial_f has {f_len} samples but initial_r has {r_len} : paired samples must align")]
    ArrayLengthMismatch {
        /// Number of `initial_f` samples.
        f_len: usize,
        /// Number of `initial_r` samples.
        r_len: usize,
    },

    /// A physically required constraint is violated.
    #[error("Parameter: {name} = {value} : {constraint}")]
    ParameterOutOfRange {
        /// Parameter key (e.g. `kerr_spin`).
        name: String,
        /// Offending value.
        value: f64,
        /// The violated constraint, human readable.
        constraint: String,
    },

    /// NaN or infinity in a resolved parameter.
    #[error("Parameter: {name} = {value} : must be finite")]
    NonFiniteValue {
        /// Parameter key, with an index for vectors and arrays.
        name: String,
        /// The non-finite value itself.
        value: f64,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Declarative range validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParamError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a malformed-array error for `path`.
    #[must_use]
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedArrayFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an out-of-range error for a hard check.
    #[must_use]
    pub fn out_of_range(name: impl Into<String>, value: f64, constraint: impl Into<String>) -> Self {
        Self::ParameterOutOfRange {
            name: name.into(),
            value,
            constraint: constraint.into(),
        }
    }

    /// Check if this error came from a hard validation check.
    #[must_use]
    pub const fn is_hard_check(&self) -> bool {
        matches!(
            self,
            Self::ArrayLengthMismatch { .. }
                | Self::ParameterOutOfRange { .. }
                | Self::NonFiniteValue { .. }
        )
    }

    /// Check if this error came from reading an array file.
    #[must_use]
    pub const fn is_array_file_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::MalformedArrayFile { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_check_detection() {
        let mismatch = ParamError::ArrayLengthMismatch { f_len: 10, r_len: 8 };
        assert!(mismatch.is_hard_check());

        let range = ParamError::out_of_range("kerr_spin", 1.0, "must satisfy |a| <= M = 0.5");
        assert!(range.is_hard_check());

        let non_finite = ParamError::NonFiniteValue {
            name: "scalar_mass".to_string(),
            value: f64::NAN,
        };
        assert!(non_finite.is_hard_check());

        let config = ParamError::config("invalid");
        assert!(!config.is_hard_check());
    }

    #[test]
    fn test_array_file_error_detection() {
        let missing = ParamError::FileNotFound {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(missing.is_array_file_error());
        assert!(!missing.is_hard_check());

        let malformed = ParamError::malformed("f.txt", "missing element count");
        assert!(malformed.is_array_file_error());
        assert!(!ParamError::config("x").is_array_file_error());
    }

    #[test]
    fn test_error_display_out_of_range() {
        let err = ParamError::out_of_range("kerr_spin", 1.0, "must satisfy |a| <= M = 0.5");
        let msg = err.to_string();
        assert!(msg.contains("kerr_spin = 1"));
        assert!(msg.contains("|a| <= M = 0.5"));
    }

    #[test]
    fn test_error_display_mismatch() {
        let err = ParamError::ArrayLengthMismatch { f_len: 10, r_len: 8 };
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains('8'));
        assert!(msg.contains("initial_r"));
    }

    #[test]
    fn test_error_display_file_errors() {
        let err = ParamError::FileNotFound {
            path: PathBuf::from("data/f.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("data/f.txt"));

        let err = ParamError::malformed("data/r.txt", "expected 5 values, found 3");
        let msg = err.to_string();
        assert!(msg.contains("data/r.txt"));
        assert!(msg.contains("expected 5 values"));
    }

    #[test]
    fn test_error_config() {
        let err = ParamError::config("grid size N1 must be >= 1");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("N1"));
    }

    #[test]
    fn test_error_from_io() {
        let err: ParamError = std::io::Error::other("disk on fire").into();
        assert!(matches!(err, ParamError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ParamError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
