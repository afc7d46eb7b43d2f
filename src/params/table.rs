//! Paired (r, f) initial-data samples as a radial lookup table.

use crate::error::{ParamError, ParamResult};

/// Radial profile sampled at increasing radii.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialDataTable {
    radii: Vec<f64>,
    values: Vec<f64>,
}

impl InitialDataTable {
    /// Build a table from radii and the field values sampled at them.
    ///
    /// # Errors
    ///
    /// Returns `ArrayLengthMismatch` if the arrays differ in length, and
    /// `Config` if the table is empty or the radii decrease anywhere.
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN radii must be rejected
    pub fn new(radii: Vec<f64>, values: Vec<f64>) -> ParamResult<Self> {
        if radii.len() != values.len() {
            return Err(ParamError::ArrayLengthMismatch {
                f_len: values.len(),
                r_len: radii.len(),
            });
        }
        if radii.is_empty() {
            return Err(ParamError::config("initial data table has no samples"));
        }
        if let Some(i) = radii.windows(2).position(|w| !(w[0] <= w[1])) {
            return Err(ParamError::config(format!(
                "initial_r must be non-decreasing, but initial_r[{}] = {} > initial_r[{}] = {}",
                i,
                radii[i],
                i + 1,
                radii[i + 1]
            )));
        }

        Ok(Self { radii, values })
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    /// Always false; construction rejects empty tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Sample radii.
    #[must_use]
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Field values at [`Self::radii`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Field value at radius `r`.
    ///
    /// Linear between neighbouring samples; clamped to the first and last
    /// sample outside the tabulated range.
    #[must_use]
    pub fn value_at(&self, r: f64) -> f64 {
        if r.is_nan() {
            return f64::NAN;
        }
        let last = self.radii.len() - 1;
        if r <= self.radii[0] {
            return self.values[0];
        }
        if r >= self.radii[last] {
            return self.values[last];
        }

        // radii[hi - 1] < r < radii[hi]
        let hi = self.radii.partition_point(|&x| x <= r);
        let lo = hi - 1;
        let span = self.radii[hi] - self.radii[lo];
        if span <= 0.0 {
            return self.values[hi];
        }
        let t = (r - self.radii[lo]) / span;
        self.values[lo] + t * (self.values[hi] - self.values[lo])
    }
}
