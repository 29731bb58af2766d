//! External collision bodies and penetration queries.
//!
//! Collision is a read-only query: a body reports how far a point must move
//! to leave it, and the caller decides whether to apply that correction to
//! the point, to the body, or to neither.

use crate::float::{Float, DEGENERATE_EPSILON};
use crate::vec::Vec3;

/// Anything a point can penetrate.
pub trait Body<F: Float> {
    /// Displacement that moves `point` onto the surface of the body, or `None`
    /// if the point is outside.
    fn penetration(&self, point: Vec3<F>) -> Option<Vec3<F>>;
}

/// Built-in body shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Collider<F: Float> {
    Sphere {
        center: Vec3<F>,
        radius: F,
    },
    /// Axis-aligned ellipsoid, the usual bounding volume of a player entity.
    Ellipsoid {
        center: Vec3<F>,
        radii: Vec3<F>,
    },
    Aabb {
        min: Vec3<F>,
        max: Vec3<F>,
    },
}

impl<F: Float> Collider<F> {
    pub fn sphere(center: Vec3<F>, radius: F) -> Self {
        Collider::Sphere { center, radius }
    }

    pub fn ellipsoid(center: Vec3<F>, radii: Vec3<F>) -> Self {
        Collider::Ellipsoid { center, radii }
    }

    pub fn aabb(min: Vec3<F>, max: Vec3<F>) -> Self {
        Collider::Aabb { min, max }
    }

    pub fn center(&self) -> Vec3<F> {
        match *self {
            Collider::Sphere { center, .. } | Collider::Ellipsoid { center, .. } => center,
            Collider::Aabb { min, max } => (min + max).scale(F::half()),
        }
    }

    /// The same shape moved by `offset`.
    pub fn translated(&self, offset: Vec3<F>) -> Self {
        match *self {
            Collider::Sphere { center, radius } => {
                Collider::Sphere { center: center + offset, radius }
            }
            Collider::Ellipsoid { center, radii } => {
                Collider::Ellipsoid { center: center + offset, radii }
            }
            Collider::Aabb { min, max } => {
                Collider::Aabb { min: min + offset, max: max + offset }
            }
        }
    }
}

fn up<F: Float>() -> Vec3<F> {
    Vec3::new(F::zero(), F::one(), F::zero())
}

impl<F: Float> Body<F> for Collider<F> {
    fn penetration(&self, point: Vec3<F>) -> Option<Vec3<F>> {
        let eps = F::from_f32(DEGENERATE_EPSILON);
        match *self {
            Collider::Sphere { center, radius } => {
                let delta = point - center;
                let dist = delta.length();
                if dist >= radius {
                    return None;
                }
                // A point at the exact centre is pushed straight up.
                let normal = if dist.is_near_zero(eps) {
                    up()
                } else {
                    delta.scale(F::one() / dist)
                };
                Some(normal.scale(radius - dist))
            }
            Collider::Ellipsoid { center, radii } => {
                if radii.x <= F::zero() || radii.y <= F::zero() || radii.z <= F::zero() {
                    return None;
                }
                // Work in the space where the ellipsoid is the unit sphere,
                // project radially onto the surface, then map back.
                let local = (point - center).component_div(radii);
                let len = local.length();
                if len >= F::one() {
                    return None;
                }
                let dir = if len.is_near_zero(eps) { up() } else { local.scale(F::one() / len) };
                let surface = center + dir.component_mul(radii);
                Some(surface - point)
            }
            Collider::Aabb { min, max } => {
                let inside = point.x > min.x && point.x < max.x
                    && point.y > min.y && point.y < max.y
                    && point.z > min.z && point.z < max.z;
                if !inside {
                    return None;
                }
                // Exit through the nearest face.
                let candidates = [
                    Vec3::new(min.x - point.x, F::zero(), F::zero()),
                    Vec3::new(max.x - point.x, F::zero(), F::zero()),
                    Vec3::new(F::zero(), min.y - point.y, F::zero()),
                    Vec3::new(F::zero(), max.y - point.y, F::zero()),
                    Vec3::new(F::zero(), F::zero(), min.z - point.z),
                    Vec3::new(F::zero(), F::zero(), max.z - point.z),
                ];
                let mut best = candidates[0];
                for c in candidates.iter().skip(1) {
                    if c.length_sq() < best.length_sq() {
                        best = *c;
                    }
                }
                Some(best)
            }
        }
    }
}

impl<F: Float, B: Body<F> + ?Sized> Body<F> for &B {
    fn penetration(&self, point: Vec3<F>) -> Option<Vec3<F>> {
        (**self).penetration(point)
    }
}
