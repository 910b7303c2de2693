//! Basic 2D types shared by the hull and constraint stages.
//!
//! - `Hs2`: closed half-plane `n·x <= c`, one row of the constraint system.
//! - `LineCoeffs`: implicit line `a·x + b·y + c = 0` through two hull vertices.

use nalgebra::Vector2;

/// Closed half‑plane `n · x <= c` (no normalization).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    #[inline]
    pub fn new(n: Vector2<f64>, c: f64) -> Self {
        Self { n, c }
    }
    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }
    /// `c - n·p`: non-negative inside, in units of `|n|`.
    #[inline]
    pub fn slack(&self, p: Vector2<f64>) -> f64 {
        self.c - self.n.dot(&p)
    }
    /// Euclidean distance from `p` to the boundary line, positive inside.
    /// None for a zero normal.
    #[inline]
    pub fn signed_distance(&self, p: Vector2<f64>) -> Option<f64> {
        let norm = self.n.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return None;
        }
        Some(self.slack(p) / norm)
    }
}

/// Implicit line `a·x + b·y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineCoeffs {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineCoeffs {
    /// Line through `p0 → p1`: `a = y0 − y1`, `b = x1 − x0`, `c = −b·y0 − a·x0`.
    ///
    /// `(a, b)` is the edge direction rotated +90°, so for a CCW loop it points
    /// into the polygon and `c` is the (unnormalized) offset of the origin.
    #[inline]
    pub fn through(p0: Vector2<f64>, p1: Vector2<f64>) -> Self {
        let a = p0.y - p1.y;
        let b = p1.x - p0.x;
        let c = -b * p0.y - a * p0.x;
        Self { a, b, c }
    }
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn line_passes_through_both_endpoints() {
        let p0 = vector![1.0, -1.0];
        let p1 = vector![1.0, 1.0];
        let l = LineCoeffs::through(p0, p1);
        assert_eq!((l.a, l.b, l.c), (-2.0, 0.0, 2.0));
        assert!(l.eval(p0).abs() < 1e-12);
        assert!(l.eval(p1).abs() < 1e-12);
        // CCW edge on x = 1: normal points toward the origin side
        assert!(l.eval(Vector2::zeros()) > 0.0);
    }

    #[test]
    fn signed_distance_uses_euclidean_scale() {
        let h = Hs2::new(vector![3.0, 4.0], 10.0);
        assert!((h.slack(Vector2::zeros()) - 10.0).abs() < 1e-12);
        assert!((h.signed_distance(Vector2::zeros()).unwrap() - 2.0).abs() < 1e-12);
        assert!(Hs2::new(Vector2::zeros(), 1.0).signed_distance(Vector2::zeros()).is_none());
    }
}
