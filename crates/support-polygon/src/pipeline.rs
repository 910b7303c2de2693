//! Top-level computation: contact points → constraint system.
//!
//! Stages run strictly forward (project → hull → constraints). Nothing is
//! cached; the `_into` variant only writes the caller's output buffer.

use nalgebra::Vector3;

use crate::cfg::HullCfg;
use crate::error::HullError;
use crate::geom2::{constraints_from_hull, convex_hull, ConstraintSystem};
use crate::project::{project_to_ground, project_to_plane, Plane};

/// Compute the support-polygon constraints `A·(x,y) ≤ b` for `points`.
///
/// Points are expected in a frame whose origin lies inside the support
/// polygon (typically CoM-relative contact positions).
pub fn support_constraints(
    points: &[Vector3<f64>],
    cfg: &HullCfg,
) -> Result<ConstraintSystem, HullError> {
    cfg.validate()?;
    if let Some(index) = points
        .iter()
        .position(|p| !p.iter().all(|v| v.is_finite()))
    {
        return Err(HullError::NonFinitePoint { index });
    }

    let projected = project_to_plane(points, &Plane::GROUND, cfg.ransac_distance_threshold);
    let planar = project_to_ground(&projected);

    let hull = convex_hull(&planar, cfg).inspect_err(|e| {
        tracing::debug!(points = points.len(), error = %e, "support hull degenerate");
    })?;
    hull.single_loop().inspect_err(|e| {
        tracing::warn!(loops = hull.loops.len(), error = %e, "support hull rejected");
    })?;
    let sys = constraints_from_hull(&hull, cfg).inspect_err(|e| {
        tracing::warn!(error = %e, "support constraints rejected");
    })?;

    tracing::debug!(
        points = points.len(),
        vertices = hull.points.len(),
        rows = sys.len(),
        margin = cfg.boundary_margin,
        "support constraints"
    );
    Ok(sys)
}

/// Like `support_constraints`, writing into a caller-owned system.
///
/// On failure `out` is cleared to the empty system; no partial rows survive.
pub fn support_constraints_into(
    points: &[Vector3<f64>],
    cfg: &HullCfg,
    out: &mut ConstraintSystem,
) -> Result<(), HullError> {
    match support_constraints(points, cfg) {
        Ok(sys) => {
            *out = sys;
            Ok(())
        }
        Err(e) => {
            out.clear();
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{vector, Vector2};

    fn unit_square() -> Vec<Vector3<f64>> {
        vec![
            vector![1.0, 1.0, 0.0],
            vector![1.0, -1.0, 0.0],
            vector![-1.0, -1.0, 0.0],
            vector![-1.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn square_accepts_origin_rejects_far_corner() {
        let sys = support_constraints(&unit_square(), &HullCfg::default()).unwrap();
        assert_eq!(sys.len(), 4);
        assert!(sys.contains_eps(Vector2::zeros(), 0.0));
        assert!(!sys.contains_eps(vector![2.0, 2.0], 0.0));
    }

    #[test]
    fn heights_do_not_change_result() {
        let flat = support_constraints(&unit_square(), &HullCfg::default()).unwrap();
        let lifted: Vec<_> = unit_square()
            .into_iter()
            .enumerate()
            .map(|(i, p)| vector![p.x, p.y, 0.1 * i as f64 - 0.2])
            .collect();
        let sys = support_constraints(&lifted, &HullCfg::default()).unwrap();
        assert_eq!(sys, flat);
    }

    #[test]
    fn collinear_input_is_degenerate_and_clears_output() {
        let line = [
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![2.0, 0.0, 0.0],
        ];
        let mut out = support_constraints(&unit_square(), &HullCfg::default()).unwrap();
        let err = support_constraints_into(&line, &HullCfg::default(), &mut out).unwrap_err();
        assert!(matches!(err, HullError::DegenerateInput { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn empty_input_is_degenerate() {
        assert_eq!(
            support_constraints(&[], &HullCfg::default()),
            Err(HullError::DegenerateInput { usable: 0 })
        );
    }

    #[test]
    fn non_finite_point_is_reported_by_index() {
        let mut pts = unit_square();
        pts[2].y = f64::NAN;
        assert_eq!(
            support_constraints(&pts, &HullCfg::default()),
            Err(HullError::NonFinitePoint { index: 2 })
        );
    }

    #[test]
    fn invalid_config_fails_before_geometry() {
        let cfg = HullCfg::default().with_margin(-1.0);
        assert!(matches!(
            support_constraints(&unit_square(), &cfg),
            Err(HullError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn into_overwrites_previous_result() {
        let mut out = ConstraintSystem::empty();
        support_constraints_into(&unit_square(), &HullCfg::default(), &mut out).unwrap();
        assert_eq!(out.len(), 4);
        let tri = [
            vector![1.0, 0.0, 0.0],
            vector![-1.0, 1.0, 0.0],
            vector![-1.0, -1.0, 0.0],
        ];
        support_constraints_into(&tri, &HullCfg::default(), &mut out).unwrap();
        assert_eq!(out.len(), 3);
    }
}
