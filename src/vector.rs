//! Three-component vectors for spatial parameters.
//!
//! Parameter files write vectors as 3-element sequences (`[x, y, z]`), so
//! the serde representation goes through `[f64; 3]`. A sequence of any
//! other length fails to deserialize.

use serde::{Deserialize, Serialize};

/// Number of spatial dimensions.
pub const SPACE_DIM: usize = 3;

/// 3D vector for centers and other spatial parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector with every component set to `v`.
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Components in axis order.
    #[must_use]
    pub const fn to_array(self) -> [f64; SPACE_DIM] {
        [self.x, self.y, self.z]
    }

    /// Component along `dir`, or `None` past the last axis.
    #[must_use]
    pub const fn component(&self, dir: usize) -> Option<f64> {
        match dir {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Check if all components are finite.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // is_finite not const
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; SPACE_DIM]> for Vec3 {
    fn from([x, y, z]: [f64; SPACE_DIM]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f64; SPACE_DIM] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}
