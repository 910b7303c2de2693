//! 2D geometry for the support polygon.
//!
//! - `types`: half-plane `Hs2` and implicit edge line `LineCoeffs`.
//! - `hull`: monotone-chain convex hull producing a `SupportHull` (CCW loops).
//! - `constraints`: hull edges → margin-shrunk `ConstraintSystem` (`A·x ≤ b`).

pub mod constraints;
pub mod hull;
mod types;

pub use constraints::{constraints_from_hull, ConstraintSystem};
pub use hull::{convex_hull, SupportHull};
pub use types::{Hs2, LineCoeffs};
