//! Reproducible contact-point sets for tests, benches and demos.
//!
//! Model
//! - `n` contacts on equally spaced angles with bounded angular, radial and
//!   height jitter. Radii stay positive and the angular gaps stay below π, so
//!   the origin is strictly inside the projected hull.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::{vector, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random contact-cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct ContactCfg {
    /// Number of contacts (at least 3).
    pub count: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped so every
    /// angular gap stays below π.
    pub angle_jitter_frac: f64,
    /// Radii = `radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base distance from the origin (meters).
    pub radius: f64,
    /// Heights drawn uniformly from `[-height_jitter, height_jitter]`.
    pub height_jitter: f64,
}

impl Default for ContactCfg {
    fn default() -> Self {
        Self {
            count: 8,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            radius: 0.15,
            height_jitter: 0.005,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a jittered ring of contact points around the origin.
pub fn draw_contact_points(cfg: ContactCfg, tok: ReplayToken) -> Vec<Vector3<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.max(3);
    // Largest gap is Δ(1 + 2·aj); keep it below π.
    let aj_max = ((n as f64 / 2.0 - 1.0) / 2.0 - 0.01).min(0.49);
    let aj = cfg.angle_jitter_frac.clamp(0.0, aj_max);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.radius.max(1e-6);
    let hj = cfg.height_jitter.max(0.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            let z = (rng.gen::<f64>() * 2.0 - 1.0) * hj;
            vector![th.cos() * r, th.sin() * r, z]
        })
        .collect()
}

/// Two rectangular feet, four corners each, in double support.
///
/// Feet are centered at `y = ±stance/2`, each `2·half_width` wide (y) and
/// `2·half_length` long (x). Corner order follows `COMAN_FOOT_CONTACT_LINKS`.
pub fn foot_rectangles(half_width: f64, half_length: f64, stance: f64) -> Vec<Vector3<f64>> {
    let mut pts = Vec::with_capacity(8);
    for side in [1.0, -1.0] {
        let cy = side * stance * 0.5;
        // lower-left, lower-right, upper-left, upper-right
        for (dx, dy) in [(-1.0, 1.0), (-1.0, -1.0), (1.0, 1.0), (1.0, -1.0)] {
            pts.push(vector![dx * half_length, cy + dy * half_width, 0.0]);
        }
    }
    pts
}
