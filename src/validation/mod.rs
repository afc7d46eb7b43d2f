//! Parameter validation with graduated severity.
//!
//! Each check inspects one resolved parameter against the derived grid
//! constants and produces a [`CheckOutcome`]:
//! - **Pass**: constraint holds
//! - **Warning**: heuristic concern (resolution, domain fit, centering);
//!   surfaced to the operator, the run continues
//! - **Fatal**: physical invariant violated; configuration must not proceed
//!
//! Outcomes are collected into a [`ValidationReport`] so that every
//! problem is reported together, in evaluation order, before anything
//! aborts.
//!
//! # Checks
//!
//! 1. `scalar_mass < 0.2 / dx / dt_multiplier` (warning)
//! 2. `scalar_width < 0.5 * L` (warning)
//! 3. `kerr_mass >= 0` (warning)
//! 4. `|kerr_spin| <= kerr_mass` (fatal)
//! 5. `0 <= kerr_center[d] <= (ivN[d] + 1) * dx` per axis (warning)
//! 6. `len(initial_f) == len(initial_r)` (fatal)
//! 7. every parameter and sample finite (fatal)

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, warn};

use crate::config::DerivedContext;
use crate::error::{ParamError, ParamResult};
use crate::params::ParameterBundle;
use crate::vector::Vec3;

/// Severity of a single check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Constraint holds.
    Pass,
    /// Soft concern: log and continue.
    Warning,
    /// Hard failure: stop configuration.
    Fatal,
}

/// Non-fatal parameter problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterWarning {
    /// Parameter key, with an index for vector components.
    pub name: String,
    /// Offending value.
    pub value: f64,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for ParameterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter: {} = {} : {}", self.name, self.value, self.message)
    }
}

/// Result of one check.
#[derive(Debug)]
pub enum CheckOutcome {
    /// Constraint holds.
    Pass,
    /// Soft concern.
    Warning(ParameterWarning),
    /// Hard failure.
    Fatal(ParamError),
}

impl CheckOutcome {
    /// Severity of this outcome.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Pass => Severity::Pass,
            Self::Warning(_) => Severity::Warning,
            Self::Fatal(_) => Severity::Fatal,
        }
    }
}

/// Warning unless `ok` holds.
#[must_use]
pub fn warn_parameter(
    name: impl Into<String>,
    value: f64,
    ok: bool,
    message: impl Into<String>,
) -> CheckOutcome {
    if ok {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Warning(ParameterWarning {
            name: name.into(),
            value,
            message: message.into(),
        })
    }
}

/// Fatal unless `ok` holds.
#[must_use]
pub fn check_parameter(
    name: impl Into<String>,
    value: f64,
    ok: bool,
    constraint: impl Into<String>,
) -> CheckOutcome {
    if ok {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fatal(ParamError::out_of_range(name, value, constraint))
    }
}

/// Aggregated outcomes of a validation pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    checks_run: usize,
    warnings: Vec<ParameterWarning>,
    failures: Vec<ParamError>,
}

impl ValidationReport {
    /// Empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome.
    pub fn record(&mut self, outcome: CheckOutcome) {
        self.checks_run += 1;
        match outcome {
            CheckOutcome::Pass => {}
            CheckOutcome::Warning(w) => self.warnings.push(w),
            CheckOutcome::Fatal(e) => self.failures.push(e),
        }
    }

    /// Number of checks evaluated.
    #[must_use]
    pub const fn checks_run(&self) -> usize {
        self.checks_run
    }

    /// True if no check failed hard. Warnings do not count.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Warnings in evaluation order.
    #[must_use]
    pub fn warnings(&self) -> &[ParameterWarning] {
        &self.warnings
    }

    /// Hard failures in evaluation order.
    #[must_use]
    pub fn failures(&self) -> &[ParamError] {
        &self.failures
    }

    /// Worst severity recorded.
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        if !self.failures.is_empty() {
            Severity::Fatal
        } else if !self.warnings.is_empty() {
            Severity::Warning
        } else {
            Severity::Pass
        }
    }

    /// Emit every warning and failure through `tracing`.
    pub fn log(&self) {
        for w in &self.warnings {
            warn!(parameter = %w.name, value = w.value, "{w}");
        }
        for e in &self.failures {
            error!("{e}");
        }
    }

    /// Convert into the warnings, or the first hard failure.
    ///
    /// # Errors
    ///
    /// Returns the first failure in evaluation order if any check failed.
    pub fn into_result(self) -> ParamResult<Vec<ParameterWarning>> {
        match self.failures.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(self.warnings),
        }
    }
}

/// Cross-checks a resolved bundle against the derived grid constants.
///
/// # Example
///
/// ```rust
/// use kerrscalar::config::DerivedContext;
/// use kerrscalar::params::ParameterBundle;
/// use kerrscalar::validation::ParameterValidator;
///
/// let base = DerivedContext::new(64.0, [64, 64, 64], 0.25).unwrap();
/// let mut bundle = ParameterBundle::defaults(&base);
/// bundle.kerr.spin = 0.3;
/// bundle.kerr.mass = 0.5;
///
/// let report = ParameterValidator::new(&base).validate(&bundle);
/// assert!(report.is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParameterValidator<'a> {
    base: &'a DerivedContext,
}

impl<'a> ParameterValidator<'a> {
    /// Create a validator for the given base configuration.
    #[must_use]
    pub const fn new(base: &'a DerivedContext) -> Self {
        Self { base }
    }

    /// Run every check in order.
    #[must_use]
    pub fn validate(&self, bundle: &ParameterBundle) -> ValidationReport {
        let mut report = ValidationReport::new();
        let base = self.base;

        // Check 1: oscillations resolved on the coarsest level
        let mass_limit = 0.2 / base.coarsest_dx / base.dt_multiplier;
        report.record(warn_parameter(
            "scalar_mass",
            bundle.potential.scalar_mass,
            bundle.potential.scalar_mass < mass_limit,
            "oscillations of scalar field do not appear to be resolved on coarsest level",
        ));

        // Check 2: initial profile fits in the domain
        report.record(warn_parameter(
            "scalar_width",
            bundle.initial.width,
            bundle.initial.width < 0.5 * base.domain_size,
            "is greater than half the domain size",
        ));

        // Check 3
        report.record(warn_parameter(
            "kerr_mass",
            bundle.kerr.mass,
            bundle.kerr.mass >= 0.0,
            "should be >= 0.0",
        ));

        // Check 4: extremality bound
        report.record(check_parameter(
            "kerr_spin",
            bundle.kerr.spin,
            bundle.kerr.spin.abs() <= bundle.kerr.mass,
            format!("must satisfy |a| <= M = {}", bundle.kerr.mass),
        ));

        // Check 5: black hole inside the computational domain
        for (dir, coord) in bundle.kerr.center.to_array().into_iter().enumerate() {
            report.record(warn_parameter(
                format!("kerr_center[{dir}]"),
                coord,
                (0.0..=base.domain_extent(dir)).contains(&coord),
                "should be within the computational domain",
            ));
        }

        // Check 6: paired samples align
        report.record(check_array_alignment(bundle));

        // Check 7: finiteness
        for outcome in check_finite(bundle) {
            report.record(outcome);
        }

        report
    }
}

fn check_array_alignment(bundle: &ParameterBundle) -> CheckOutcome {
    let f_len = bundle.initial.initial_f.len();
    let r_len = bundle.initial.initial_r.len();
    if f_len == r_len {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fatal(ParamError::ArrayLengthMismatch { f_len, r_len })
    }
}

fn finite_scalar(name: &str, value: f64) -> CheckOutcome {
    if value.is_finite() {
        CheckOutcome::Pass
    } else {
        CheckOutcome::Fatal(ParamError::NonFiniteValue {
            name: name.to_string(),
            value,
        })
    }
}

fn finite_vector(name: &str, v: Vec3) -> CheckOutcome {
    match v.to_array().into_iter().enumerate().find(|(_, c)| !c.is_finite()) {
        Some((dir, value)) => CheckOutcome::Fatal(ParamError::NonFiniteValue {
            name: format!("{name}[{dir}]"),
            value,
        }),
        None => CheckOutcome::Pass,
    }
}

fn finite_samples(name: &str, samples: &[f64]) -> CheckOutcome {
    match samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        Some((i, &value)) => CheckOutcome::Fatal(ParamError::NonFiniteValue {
            name: format!("{name}[{i}]"),
            value,
        }),
        None => CheckOutcome::Pass,
    }
}

fn check_finite(bundle: &ParameterBundle) -> Vec<CheckOutcome> {
    vec![
        finite_scalar("G_Newton", bundle.g_newton),
        finite_scalar("scalar_amplitude", bundle.initial.amplitude),
        finite_scalar("scalar_width", bundle.initial.width),
        finite_scalar("initial_eta", bundle.initial.eta),
        finite_vector("center", bundle.initial.center),
        finite_samples("initial_f", &bundle.initial.initial_f),
        finite_samples("initial_r", &bundle.initial.initial_r),
        finite_scalar("scalar_mass", bundle.potential.scalar_mass),
        finite_scalar("lambda", bundle.potential.lambda),
        finite_scalar("eta", bundle.potential.eta),
        finite_scalar("kerr_mass", bundle.kerr.mass),
        finite_scalar("kerr_spin", bundle.kerr.spin),
        finite_vector("kerr_center", bundle.kerr.center),
    ]
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> DerivedContext {
        DerivedContext::new(64.0, [64, 64, 64], 0.25).unwrap()
    }

    proptest! {
        /// The extremality check only depends on |spin|.
        #[test]
        fn prop_extremality_symmetric_in_spin(
            spin in 0.0f64..10.0,
            mass in 0.0f64..10.0,
        ) {
            let base = base();
            let mut b = ParameterBundle::defaults(&base);
            b.kerr.mass = mass;

            b.kerr.spin = spin;
            let pos = ParameterValidator::new(&base).validate(&b).is_ok();
            b.kerr.spin = -spin;
            let neg = ParameterValidator::new(&base).validate(&b).is_ok();

            prop_assert_eq!(pos, neg);
            prop_assert_eq!(pos, spin <= mass);
        }

        /// Centers inside the domain never warn; centers outside warn on
        /// exactly the offending axis.
        #[test]
        fn prop_center_bounds(
            inside in 0.0f64..=64.0,
            outside in 64.001f64..1000.0,
            dir in 0usize..3,
        ) {
            let base = base();
            let mut b = ParameterBundle::defaults(&base);

            let mut coords = [inside; 3];
            b.kerr.center = Vec3::from(coords);
            prop_assert!(ParameterValidator::new(&base).validate(&b).warnings().is_empty());

            coords[dir] = outside;
            b.kerr.center = Vec3::from(coords);
            let report = ParameterValidator::new(&base).validate(&b);
            prop_assert_eq!(report.warnings().len(), 1);
            prop_assert_eq!(&report.warnings()[0].name, &format!("kerr_center[{dir}]"));
        }
    }
}
