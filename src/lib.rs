//! # kerrscalar
//!
//! Parameter loading for a scalar field evolving on a Kerr black-hole
//! background.
//!
//! - Flat key/value parameter files with per-key defaults
//! - Base grid constants derived once (coarse spacing, domain extent)
//! - Paired (r, f) initial-data samples read from flat array files
//! - Graduated validation: warnings continue, hard checks stop the run
//!
//! ## Example
//!
//! ```rust
//! use kerrscalar::prelude::*;
//! use std::path::Path;
//!
//! let store = YamlParameterStore::from_yaml("L: 64\nkerr_spin: 0.3\nkerr_mass: 0.5\n").unwrap();
//! let arrays = |_: &Path| -> ParamResult<Vec<f64>> { Ok(vec![0.0, 1.0]) };
//!
//! let params = SimulationParameters::from_store(&store, &arrays).unwrap();
//! assert!(params.warnings.is_empty());
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::suboptimal_flops,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod arrays;
pub mod cli;
pub mod config;
pub mod error;
pub mod params;
pub mod validation;
pub mod vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::arrays::{ArrayLoader, TextArrayLoader};
    pub use crate::config::{DerivedContext, ParameterStore, YamlParameterStore};
    pub use crate::error::{ParamError, ParamResult};
    pub use crate::params::{InitialDataTable, ParameterBundle, SimulationParameters};
    pub use crate::validation::{ParameterValidator, ParameterWarning, Severity, ValidationReport};
    pub use crate::vector::Vec3;
}

/// Re-export for public API
pub use error::{ParamError, ParamResult};
