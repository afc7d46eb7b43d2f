//! Base simulation configuration and the constants derived from it.
//!
//! The problem-specific checks need the coarse-level grid spacing, the
//! time-step multiplier and the domain extent. They are resolved here
//! once, before any problem parameter is read.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ParameterStore;
use crate::error::{ParamError, ParamResult};
use crate::vector::{Vec3, SPACE_DIM};

/// Default domain size `L`.
pub const DEFAULT_DOMAIN_SIZE: f64 = 1.0;
/// Default coarse grid size per axis.
pub const DEFAULT_GRID_SIZE: usize = 64;
/// Default Courant factor `dt = dt_multiplier * dx`.
pub const DEFAULT_DT_MULTIPLIER: f64 = 0.25;

/// Read-only constants derived from the base configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DerivedContext {
    /// Domain size `L` along the longest axis.
    #[validate(range(exclusive_min = 0.0))]
    pub domain_size: f64,
    /// Index of the last coarse cell along each axis (`N - 1`).
    pub grid_size_per_direction: [usize; SPACE_DIM],
    /// Time-step multiplier.
    #[validate(range(exclusive_min = 0.0))]
    pub dt_multiplier: f64,
    /// Grid spacing on the coarsest level, `L / max(N)`.
    #[validate(range(exclusive_min = 0.0))]
    pub coarsest_dx: f64,
    /// Simulation center.
    pub center: Vec3,
}

impl DerivedContext {
    /// Derive the constants from domain size, coarse cells per axis and
    /// time-step multiplier. The center is placed mid-domain.
    ///
    /// # Errors
    ///
    /// Returns error if any axis has zero cells or a range constraint fails.
    pub fn new(
        domain_size: f64,
        cells: [usize; SPACE_DIM],
        dt_multiplier: f64,
    ) -> ParamResult<Self> {
        for (dir, &n) in cells.iter().enumerate() {
            if n == 0 {
                return Err(ParamError::config(format!(
                    "grid size N{} must be >= 1",
                    dir + 1
                )));
            }
        }

        let max_cells = cells.iter().copied().max().unwrap_or(1);
        let coarsest_dx = domain_size / max_cells as f64;
        let center = Vec3::new(
            0.5 * cells[0] as f64 * coarsest_dx,
            0.5 * cells[1] as f64 * coarsest_dx,
            0.5 * cells[2] as f64 * coarsest_dx,
        );

        let context = Self {
            domain_size,
            grid_size_per_direction: cells.map(|n| n - 1),
            dt_multiplier,
            coarsest_dx,
            center,
        };
        context.validate()?;
        Ok(context)
    }

    /// Resolve the base configuration from a parameter store.
    ///
    /// Keys: `L`, `N_full`, `N1`/`N2`/`N3` (each defaulting to `N_full`),
    /// `dt_multiplier`, and `center` (defaulting to mid-domain).
    ///
    /// # Errors
    ///
    /// Returns error if the resolved values violate a constraint.
    pub fn from_store<S: ParameterStore>(store: &S) -> ParamResult<Self> {
        let domain_size = store.load("L", DEFAULT_DOMAIN_SIZE);
        let n_full = store.load("N_full", DEFAULT_GRID_SIZE);
        let cells = [
            store.load("N1", n_full),
            store.load("N2", n_full),
            store.load("N3", n_full),
        ];
        let dt_multiplier = store.load("dt_multiplier", DEFAULT_DT_MULTIPLIER);

        let mut context = Self::new(domain_size, cells, dt_multiplier)?;
        context.center = store.load("center", context.center);
        Ok(context)
    }

    /// Upper bound of the domain along `dir`, `(ivN + 1) * dx`.
    #[must_use]
    pub fn domain_extent(&self, dir: usize) -> f64 {
        self.grid_size_per_direction
            .get(dir)
            .map_or(0.0, |&top| (top + 1) as f64 * self.coarsest_dx)
    }
}
