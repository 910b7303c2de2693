//! Support-point supplier: foot contact positions relative to the CoM.
//!
//! The robot model itself lives elsewhere; it is reached through the
//! `KinematicState` trait, which reports link poses and the CoM in a common
//! root frame (the waist on coman).

use std::collections::HashMap;

use nalgebra::{Isometry3, Translation3, Vector3};

use crate::error::HullError;

/// Foot-corner contact links on coman, left foot first.
pub const COMAN_FOOT_CONTACT_LINKS: [&str; 8] = [
    "l_foot_lower_left_link",
    "l_foot_lower_right_link",
    "l_foot_upper_left_link",
    "l_foot_upper_right_link",
    "r_foot_lower_left_link",
    "r_foot_lower_right_link",
    "r_foot_upper_left_link",
    "r_foot_upper_right_link",
];

/// Read-only view of a robot state in its root frame.
pub trait KinematicState {
    /// Pose of `link` relative to the root frame, if the link exists.
    fn link_pose(&self, link: &str) -> Option<Isometry3<f64>>;
    /// Center of mass in the root frame.
    fn com_position(&self) -> Vector3<f64>;
}

/// Append the CoM-relative position of each link in `links` to `out`.
///
/// The CoM frame is the root frame translated to the CoM (no rotation), so
/// each point is `com_T_root * root_T_link` applied to the link origin.
/// On `UnknownLink` nothing is appended.
pub fn support_polygon_points<R, S>(
    robot: &R,
    links: &[S],
    out: &mut Vec<Vector3<f64>>,
) -> Result<(), HullError>
where
    R: KinematicState + ?Sized,
    S: AsRef<str>,
{
    let com = robot.com_position();
    let com_inv = Translation3::from(com).inverse();
    let mut pts = Vec::with_capacity(links.len());
    for name in links {
        let name = name.as_ref();
        let pose = robot
            .link_pose(name)
            .ok_or_else(|| HullError::UnknownLink {
                name: name.to_string(),
            })?;
        let rel: Isometry3<f64> = com_inv * pose;
        pts.push(rel.translation.vector);
    }
    out.extend(pts);
    Ok(())
}

/// The eight coman foot corners relative to the CoM.
pub fn coman_support_points<R: KinematicState + ?Sized>(
    robot: &R,
) -> Result<Vec<Vector3<f64>>, HullError> {
    let mut out = Vec::with_capacity(COMAN_FOOT_CONTACT_LINKS.len());
    support_polygon_points(robot, &COMAN_FOOT_CONTACT_LINKS, &mut out)?;
    Ok(out)
}

/// Map-backed robot state (fixed link poses and CoM).
#[derive(Clone, Debug, Default)]
pub struct StaticPoses {
    pub links: HashMap<String, Isometry3<f64>>,
    pub com: Vector3<f64>,
}

impl StaticPoses {
    pub fn new(com: Vector3<f64>) -> Self {
        Self {
            links: HashMap::new(),
            com,
        }
    }

    pub fn with_link(mut self, name: impl Into<String>, pose: Isometry3<f64>) -> Self {
        self.links.insert(name.into(), pose);
        self
    }
}

impl KinematicState for StaticPoses {
    fn link_pose(&self, link: &str) -> Option<Isometry3<f64>> {
        self.links.get(link).copied()
    }
    fn com_position(&self) -> Vector3<f64> {
        self.com
    }
}
