//! Tunables for the support-polygon pipeline.
//!
//! `HullCfg` carries the values a caller may legitimately change per robot or
//! per experiment. Numeric guards that are not tunables stay as crate constants.

use serde::{Deserialize, Serialize};

use crate::error::HullError;

/// Collinearity guard for the monotone-chain turn test.
pub(crate) const TURN_EPS: f64 = 1e-12;

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullCfg {
    /// Plane-fitting inlier distance. Currently inert: projection always targets
    /// the ground plane. Kept so callers configuring it keep compiling.
    pub ransac_distance_threshold: f64,
    /// Inward shrink applied to each hull edge (same length unit as the points).
    pub boundary_margin: f64,
    /// How far outside an edge line the origin may sit before the hull is
    /// rejected with `OriginOutsideHull`.
    pub origin_tolerance: f64,
    /// Projected points closer than this are merged before the hull is built.
    pub dedup_eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            ransac_distance_threshold: 0.001,
            boundary_margin: 0.01,
            origin_tolerance: 1e-9,
            dedup_eps: 1e-12,
        }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_margin(self, boundary_margin: f64) -> Self {
        Self {
            boundary_margin,
            ..self
        }
    }

    /// Reject negative or non-finite tunables.
    pub fn validate(&self) -> Result<(), HullError> {
        let fields = [
            ("ransac_distance_threshold", self.ransac_distance_threshold),
            ("boundary_margin", self.boundary_margin),
            ("origin_tolerance", self.origin_tolerance),
            ("dedup_eps", self.dedup_eps),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(HullError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}
