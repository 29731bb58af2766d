//! Ray picking against points, for dragging and tearing with the mouse.

use crate::float::{Float, DEGENERATE_EPSILON};
use crate::vec::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<F: Float> {
    pub origin: Vec3<F>,
    pub direction: Vec3<F>,
}

/// Nearest point hit by a ray. `t` is measured in units of the ray direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit<F: Float> {
    pub id: usize,
    pub t: F,
}

impl<F: Float> Ray<F> {
    pub fn new(origin: Vec3<F>, direction: Vec3<F>) -> Self {
        Ray { origin, direction }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: F) -> Vec3<F> {
        self.origin + self.direction.scale(t)
    }

    /// Entry distance into the box of half-size `half` around `center`, or
    /// `None` if the ray misses it or the box lies behind the origin.
    /// A ray starting inside the box hits at `t = 0`.
    pub fn hit_box(&self, center: Vec3<F>, half: Vec3<F>) -> Option<F> {
        let min = center - half;
        let max = center + half;
        let mut t_near = F::zero();
        let mut t_far = F::infinity();

        let axes = [
            (self.origin.x, self.direction.x, min.x, max.x),
            (self.origin.y, self.direction.y, min.y, max.y),
            (self.origin.z, self.direction.z, min.z, max.z),
        ];
        for (o, d, lo, hi) in axes {
            if d.is_near_zero(F::from_f32(DEGENERATE_EPSILON)) {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let t0 = (lo - o) / d;
            let t1 = (hi - o) / d;
            t_near = t_near.max(t0.min(t1));
            t_far = t_far.min(t0.max(t1));
            if t_near > t_far {
                return None;
            }
        }
        Some(t_near)
    }
}
