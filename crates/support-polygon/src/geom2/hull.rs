//! Convex hull of projected contact points.
//!
//! Andrew's monotone chain, O(n log n). The result keeps only the hull
//! vertices (collinear boundary points are dropped) in counterclockwise order,
//! plus the loop structure the constraint stage walks.

use nalgebra::Vector2;

use crate::cfg::{HullCfg, TURN_EPS};
use crate::error::HullError;

/// Hull vertices and the boundary loops indexing into them.
///
/// Loops produced by `convex_hull` are always a single CCW cycle; the
/// `loops` field stays general so hulls from other sources can be checked
/// against the one-loop policy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupportHull {
    pub points: Vec<Vector2<f64>>,
    pub loops: Vec<Vec<usize>>,
}

impl SupportHull {
    /// The only loop, or `MultiplePolygons` when there are zero or several.
    pub fn single_loop(&self) -> Result<&[usize], HullError> {
        match self.loops.as_slice() {
            [only] => Ok(only.as_slice()),
            _ => Err(HullError::MultiplePolygons {
                loops: self.loops.len(),
            }),
        }
    }

    /// Vertex coordinates of one loop, in traversal order.
    pub fn vertices_of(&self, lp: &[usize]) -> Vec<Vector2<f64>> {
        lp.iter().map(|&i| self.points[i]).collect()
    }

    /// Number of boundary edges summed over all loops.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.loops.iter().map(Vec::len).sum()
    }

    /// Signed area summed over loops (positive for CCW).
    pub fn area(&self) -> f64 {
        let mut a = 0.0;
        for lp in &self.loops {
            for k in 0..lp.len() {
                let p = self.points[lp[k]];
                let q = self.points[lp[(k + 1) % lp.len()]];
                a += p.x * q.y - q.x * p.y;
            }
        }
        0.5 * a
    }
}

/// Convex hull of `points` as a single CCW loop.
///
/// Errors with `DegenerateInput` when fewer than three vertices survive
/// deduplication and collinearity removal (empty, coincident or collinear input).
pub fn convex_hull(points: &[Vector2<f64>], cfg: &HullCfg) -> Result<SupportHull, HullError> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() <= cfg.dedup_eps);
    if pts.len() < 3 {
        return Err(HullError::DegenerateInput { usable: pts.len() });
    }

    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= TURN_EPS
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= TURN_EPS
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);

    // All-collinear input folds back onto its two extreme points.
    if hull.len() < 3 {
        return Err(HullError::DegenerateInput { usable: hull.len() });
    }
    let n = hull.len();
    Ok(SupportHull {
        points: hull,
        loops: vec![(0..n).collect()],
    })
}

/// z-component of `(b − a) × (c − a)`; positive for a left turn.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
