//! Support-polygon constraints for static balance.
//!
//! Pipeline (synchronous, one call per control cycle):
//! contact points (3D, CoM-relative) → ground-plane projection → 2D convex hull
//! → half-plane system `A·(x,y) ≤ b` shrunk by a boundary margin.
//!
//! Conventions
//! - Points are `nalgebra` vectors in double precision; lengths in meters.
//! - Hull loops are counterclockwise; constraint rows keep the hull edge order.
//! - Every stage is a pure function over its inputs. No buffers are retained
//!   between calls, so concurrent control loops need no coordination.

pub mod cfg;
pub mod error;
pub mod geom2;
pub mod pipeline;
pub mod project;
pub mod sample;
pub mod support;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::HullCfg;
pub use error::HullError;
pub use geom2::{
    constraints_from_hull, convex_hull, ConstraintSystem, Hs2, LineCoeffs, SupportHull,
};
pub use pipeline::{support_constraints, support_constraints_into};
pub use project::{project_to_ground, project_to_plane, Plane};
pub use support::{
    coman_support_points, support_polygon_points, KinematicState, StaticPoses,
    COMAN_FOOT_CONTACT_LINKS,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{ConstraintSystem, Hs2, LineCoeffs, SupportHull};
    pub use crate::sample::{draw_contact_points, foot_rectangles, ContactCfg, ReplayToken};
    pub use crate::{support_constraints, HullCfg, HullError, KinematicState, Plane};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
