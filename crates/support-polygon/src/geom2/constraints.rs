//! Hull edges → linear inequality system `A·(x,y) ≤ b`.
//!
//! One row per hull edge, in traversal order. Rows are not normalized and not
//! merged; downstream QP consumers get the raw `(a, b)` edge normals.
//!
//! Orientation
//! - Rows follow the origin-sign rule: for edge line `a·x + b·y + c = 0`, use
//!   `(a, b | −c)` when `c ≤ 0` and `(−a, −b | c)` when `c > 0`. This places the
//!   origin (the CoM in the usual frame) on the feasible side.
//! - The rule is only correct when the origin is inside the hull. Since hull
//!   loops are CCW, `c` is the origin's offset from the edge along the inward
//!   normal, so that precondition is checked per edge instead of assumed.
//!
//! Margin
//! - `|c| ≤ boundary_margin`: the edge passes (almost) through the origin;
//!   the row's bound is pinned to 0.
//! - otherwise the bound shrinks by `boundary_margin`.

use nalgebra::{DMatrix, DVector, Vector2};

use super::hull::SupportHull;
use super::types::{Hs2, LineCoeffs};
use crate::cfg::HullCfg;
use crate::error::HullError;

/// Half-plane system `A·x ≤ b` with `A` of shape (E × 2).
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintSystem {
    pub a: DMatrix<f64>,
    pub b: DVector<f64>,
}

impl Default for ConstraintSystem {
    fn default() -> Self {
        Self::empty()
    }
}

impl ConstraintSystem {
    /// Zero rows, two columns.
    pub fn empty() -> Self {
        Self {
            a: DMatrix::zeros(0, 2),
            b: DVector::zeros(0),
        }
    }

    pub fn from_rows(rows: &[Hs2]) -> Self {
        let a = DMatrix::from_fn(rows.len(), 2, |i, j| rows[i].n[j]);
        let b = DVector::from_iterator(rows.len(), rows.iter().map(|h| h.c));
        Self { a, b }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.b.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    /// Reset to the empty system, as after a failed computation.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    #[inline]
    pub fn row(&self, i: usize) -> Hs2 {
        Hs2::new(Vector2::new(self.a[(i, 0)], self.a[(i, 1)]), self.b[i])
    }

    pub fn rows(&self) -> impl Iterator<Item = Hs2> + '_ {
        (0..self.len()).map(move |i| self.row(i))
    }

    /// Membership with slack: `A·p ≤ b + eps` for every row.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.rows().all(|h| h.satisfies_eps(p, eps))
    }

    /// Smallest signed Euclidean distance from `p` to a constraint line;
    /// positive when `p` is strictly feasible. None for an empty system or a
    /// row with a zero normal.
    pub fn stability_margin(&self, p: Vector2<f64>) -> Option<f64> {
        let mut best: Option<f64> = None;
        for h in self.rows() {
            let d = h.signed_distance(p)?;
            best = Some(best.map_or(d, |m| m.min(d)));
        }
        best
    }
}

/// Build the margin-shrunk constraint system for every edge of every loop.
///
/// Loop-count policy is the caller's concern (see `SupportHull::single_loop`);
/// this walks whatever loops are present. Loops must be CCW.
pub fn constraints_from_hull(
    hull: &SupportHull,
    cfg: &HullCfg,
) -> Result<ConstraintSystem, HullError> {
    let mut rows = Vec::with_capacity(hull.edge_count());
    for lp in &hull.loops {
        for j in 0..lp.len() {
            let k = (j + 1) % lp.len();
            let line = LineCoeffs::through(hull.points[lp[j]], hull.points[lp[k]]);
            rows.push(edge_row(line, rows.len(), cfg)?);
        }
    }
    Ok(ConstraintSystem::from_rows(&rows))
}

fn edge_row(line: LineCoeffs, edge: usize, cfg: &HullCfg) -> Result<Hs2, HullError> {
    if line.c < -cfg.origin_tolerance {
        return Err(HullError::OriginOutsideHull {
            edge,
            offset: line.c,
        });
    }
    // For c > 0 this is exactly the sign rule. For c within tolerance of zero
    // the sign rule would point the row into the hull; the CCW normal does not.
    let n = -line.normal();
    let bound = if line.c.abs() <= cfg.boundary_margin {
        0.0
    } else {
        line.c - cfg.boundary_margin
    };
    Ok(Hs2::new(n, bound))
}
