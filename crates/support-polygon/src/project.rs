//! Planar projection of contact points.
//!
//! The pipeline always projects onto the ground plane `z = 0`; `Plane` is kept
//! general so the projection stays an honest orthogonal projection.

use nalgebra::{vector, Vector2, Vector3};

/// Plane `n·p + d = 0` (normal need not be unit length).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub offset: f64,
}

impl Plane {
    /// Horizontal plane through the origin: normal (0,0,1), offset 0.
    pub const GROUND: Plane = Plane {
        normal: vector![0.0, 0.0, 1.0],
        offset: 0.0,
    };

    #[inline]
    pub fn new(normal: Vector3<f64>, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Signed distance of `p` to the plane (positive on the normal side).
    /// Returns NaN for a zero normal.
    #[inline]
    pub fn signed_distance(&self, p: &Vector3<f64>) -> f64 {
        (self.normal.dot(p) + self.offset) / self.normal.norm()
    }

    /// Orthogonal projection `p - ((n·p + d)/|n|²) n`.
    #[inline]
    pub fn project(&self, p: &Vector3<f64>) -> Vector3<f64> {
        let nn = self.normal.norm_squared();
        if nn <= 0.0 {
            return *p;
        }
        p - self.normal * ((self.normal.dot(p) + self.offset) / nn)
    }
}

/// Project every point onto `plane`; the input is left untouched.
///
/// `_ransac_distance_threshold` is reserved for fitting the plane from the
/// points themselves and is ignored today.
pub fn project_to_plane(
    points: &[Vector3<f64>],
    plane: &Plane,
    _ransac_distance_threshold: f64,
) -> Vec<Vector3<f64>> {
    points.iter().map(|p| plane.project(p)).collect()
}

/// Ground-plane projection expressed directly in 2D: `(x, y, z) ↦ (x, y)`.
pub fn project_to_ground(points: &[Vector3<f64>]) -> Vec<Vector2<f64>> {
    points.iter().map(|p| p.xy()).collect()
}
