//! Error taxonomy for one support-polygon computation.
//!
//! Every variant is terminal for the current call only; callers retry on the
//! next control cycle with fresh contact points.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum HullError {
    /// Fewer than three distinct, non-collinear points after projection.
    #[error("degenerate input: {usable} usable hull vertices (need at least 3)")]
    DegenerateInput { usable: usize },

    /// The hull reported a loop count other than one.
    #[error("expected exactly one hull polygon, found {loops}")]
    MultiplePolygons { loops: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    /// The reference origin (usually the CoM) lies outside the hull, so the
    /// derived rows would face the wrong way.
    #[error("origin lies outside hull edge {edge} (signed offset {offset:e})")]
    OriginOutsideHull { edge: usize, offset: f64 },

    #[error("unknown contact link `{name}`")]
    UnknownLink { name: String },

    #[error("invalid config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}
