//! Problem parameters for a scalar field on a Kerr background.
//!
//! [`ParameterBundle::resolve`] reads every field from a [`ParameterStore`]
//! with its default, and loads the paired initial-data arrays through an
//! injected [`ArrayLoader`]. [`SimulationParameters`] runs the whole
//! pipeline: base configuration, bundle, then validation.
//!
//! | key | default |
//! |---|---|
//! | `G_Newton` | 0.0 |
//! | `scalar_amplitude` | 0.1 |
//! | `scalar_width` | 1.0 |
//! | `scalar_mass` | 0.1 |
//! | `kerr_mass` | 1.0 |
//! | `kerr_spin` | 0.0 |
//! | `kerr_center` | base `center` |
//! | `lambda` | 1.0 |
//! | `eta`, `initial_eta` | 0.07 |
//! | `initial_f_file` | `flatspace_initial_f_eta7e-2.txt` |
//! | `initial_r_file` | `flatspace_initial_r_eta7e-2.txt` |

pub mod table;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::arrays::{ArrayLoader, TextArrayLoader};
use crate::config::{DerivedContext, ParameterStore, YamlParameterStore};
use crate::error::{ParamError, ParamResult};
use crate::validation::{ParameterValidator, ParameterWarning, ValidationReport};
use crate::vector::Vec3;

pub use table::InitialDataTable;

/// Default self-coupling eta, shared by the potential and the initial data.
pub const DEFAULT_ETA: f64 = 0.07;
/// Default location of the initial field samples.
pub const DEFAULT_INITIAL_F_FILE: &str = "flatspace_initial_f_eta7e-2.txt";
/// Default location of the initial radius samples.
pub const DEFAULT_INITIAL_R_FILE: &str = "flatspace_initial_r_eta7e-2.txt";

/// Initial scalar field data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialDataParams {
    /// Profile center; always the base configuration center.
    pub center: Vec3,
    /// Field amplitude.
    pub amplitude: f64,
    /// Profile width.
    pub width: f64,
    /// Self-coupling used to build the initial profile.
    pub eta: f64,
    /// Field samples, paired index-for-index with `initial_r`.
    pub initial_f: Vec<f64>,
    /// Radius samples.
    pub initial_r: Vec<f64>,
}

/// Scalar potential.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialParams {
    /// Scalar field mass.
    pub scalar_mass: f64,
    /// Quartic coupling.
    pub lambda: f64,
    /// Symmetry-breaking scale.
    pub eta: f64,
}

/// Kerr black hole background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerrParams {
    /// Mass `M`.
    pub mass: f64,
    /// Spin parameter `a`.
    pub spin: f64,
    /// Black hole position.
    pub center: Vec3,
}

/// Where the initial-data arrays are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArraySources {
    /// Field samples file.
    pub initial_f_file: PathBuf,
    /// Radius samples file.
    pub initial_r_file: PathBuf,
}

impl Default for ArraySources {
    fn default() -> Self {
        Self {
            initial_f_file: PathBuf::from(DEFAULT_INITIAL_F_FILE),
            initial_r_file: PathBuf::from(DEFAULT_INITIAL_R_FILE),
        }
    }
}

impl ArraySources {
    /// Resolve both paths from the store.
    #[must_use]
    pub fn from_store<S: ParameterStore>(store: &S) -> Self {
        Self {
            initial_f_file: store.load_path("initial_f_file", DEFAULT_INITIAL_F_FILE),
            initial_r_file: store.load_path("initial_r_file", DEFAULT_INITIAL_R_FILE),
        }
    }
}

/// Resolved problem parameters. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBundle {
    /// Newton's constant; 0 neglects backreaction.
    #[serde(rename = "G_Newton")]
    pub g_newton: f64,
    /// Initial scalar field data.
    pub initial: InitialDataParams,
    /// Scalar potential.
    pub potential: PotentialParams,
    /// Kerr background.
    pub kerr: KerrParams,
    /// Array file locations.
    pub sources: ArraySources,
}

impl ParameterBundle {
    /// Bundle with every field at its default and empty sample arrays.
    #[must_use]
    pub fn defaults(base: &DerivedContext) -> Self {
        Self {
            g_newton: 0.0,
            initial: InitialDataParams {
                center: base.center,
                amplitude: 0.1,
                width: 1.0,
                eta: DEFAULT_ETA,
                initial_f: Vec::new(),
                initial_r: Vec::new(),
            },
            potential: PotentialParams {
                scalar_mass: 0.1,
                lambda: 1.0,
                eta: DEFAULT_ETA,
            },
            kerr: KerrParams {
                mass: 1.0,
                spin: 0.0,
                center: base.center,
            },
            sources: ArraySources::default(),
        }
    }

    /// Resolve every parameter from the store and load both sample arrays.
    ///
    /// Sample arrays of different lengths are not rejected here; the
    /// validator reports them with the other hard checks.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `MalformedArrayFile` if either array
    /// cannot be loaded.
    pub fn resolve<S, L>(store: &S, base: &DerivedContext, loader: &L) -> ParamResult<Self>
    where
        S: ParameterStore,
        L: ArrayLoader,
    {
        let d = Self::defaults(base);

        let sources = ArraySources::from_store(store);
        let file_f = load_samples(loader, &sources.initial_f_file, "initial_f_file")?;
        let file_r = load_samples(loader, &sources.initial_r_file, "initial_r_file")?;

        Ok(Self {
            g_newton: store.load("G_Newton", d.g_newton),
            initial: InitialDataParams {
                center: base.center,
                amplitude: store.load("scalar_amplitude", d.initial.amplitude),
                width: store.load("scalar_width", d.initial.width),
                eta: store.load("initial_eta", d.initial.eta),
                initial_f: store.load("initial_f", file_f),
                initial_r: store.load("initial_r", file_r),
            },
            potential: PotentialParams {
                scalar_mass: store.load("scalar_mass", d.potential.scalar_mass),
                lambda: store.load("lambda", d.potential.lambda),
                eta: store.load("eta", d.potential.eta),
            },
            kerr: KerrParams {
                mass: store.load("kerr_mass", d.kerr.mass),
                spin: store.load("kerr_spin", d.kerr.spin),
                center: store.load("kerr_center", d.kerr.center),
            },
            sources,
        })
    }
}

fn load_samples<L: ArrayLoader>(loader: &L, path: &Path, key: &str) -> ParamResult<Vec<f64>> {
    loader.load_array(path).map_err(|e| {
        error!(parameter = key, path = %path.display(), "failed to load initial data: {e}");
        e
    })
}

/// Fully resolved and validated simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Base configuration constants.
    pub base: DerivedContext,
    /// Problem parameters.
    pub bundle: ParameterBundle,
    /// Soft problems found during validation.
    pub warnings: Vec<ParameterWarning>,
}

impl SimulationParameters {
    /// Load and validate a parameter file, reading arrays from disk.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The parameter file cannot be read or parsed
    /// - The base configuration is invalid
    /// - An array file is missing or malformed
    /// - A hard check fails
    pub fn load<P: AsRef<Path>>(path: P) -> ParamResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading simulation parameters");
        let store = YamlParameterStore::from_file(path)?;
        Self::from_store(&store, &TextArrayLoader)
    }

    /// Resolve and validate parameters from any store and array loader.
    ///
    /// Warnings and failures are logged; the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error met while resolving, or the first failed
    /// hard check.
    pub fn from_store<S, L>(store: &S, loader: &L) -> ParamResult<Self>
    where
        S: ParameterStore,
        L: ArrayLoader,
    {
        let (base, bundle, report) = Self::assemble(store, loader)?;
        report.log();
        let warnings = report.into_result()?;

        Ok(Self {
            base,
            bundle,
            warnings,
        })
    }

    /// Resolve base and bundle and run validation without failing on it.
    ///
    /// # Errors
    ///
    /// Returns error only if resolution itself fails.
    pub fn assemble<S, L>(
        store: &S,
        loader: &L,
    ) -> ParamResult<(DerivedContext, ParameterBundle, ValidationReport)>
    where
        S: ParameterStore,
        L: ArrayLoader,
    {
        let base = DerivedContext::from_store(store)?;
        let bundle = ParameterBundle::resolve(store, &base, loader)?;
        let report = ParameterValidator::new(&base).validate(&bundle);
        Ok((base, bundle, report))
    }

    /// Initial-data lookup table built from the paired samples.
    ///
    /// # Errors
    ///
    /// Returns error if the table is empty or the radii are not sorted.
    pub fn initial_table(&self) -> ParamResult<InitialDataTable> {
        InitialDataTable::new(
            self.bundle.initial.initial_r.clone(),
            self.bundle.initial.initial_f.clone(),
        )
    }

    /// Serialize the resolved parameters as YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> ParamResult<String> {
        serde_yaml::to_string(self).map_err(ParamError::from)
    }
}
