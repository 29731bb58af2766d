//! 3D vector type used for positions, forces and corrections.

use crate::float::{Float, DEGENERATE_EPSILON};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 3D vector for point positions, accelerations and collision corrections.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    /// Vector with all components set to the same value.
    pub fn splat(value: F) -> Self { Vec3 { x: value, y: value, z: value } }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    /// Component-wise multiplication.
    pub fn component_mul(self, other: Self) -> Self {
        Vec3 { x: self.x * other.x, y: self.y * other.y, z: self.z * other.z }
    }

    /// Component-wise division. Callers guarantee non-zero divisors.
    pub fn component_div(self, other: Self) -> Self {
        Vec3 { x: self.x / other.x, y: self.y / other.y, z: self.z / other.z }
    }

    /// Per-axis clamp into `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Vec3 {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
            z: self.z.clamp(min.z, max.z),
        }
    }

    /// Unit vector, or zero if the length is near zero.
    pub fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(DEGENERATE_EPSILON)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> AddAssign for Vec3<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> SubAssign for Vec3<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { self.scale(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn length_of_pythagorean_triple() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert_abs_diff_eq!(v.length(), 7.0, epsilon = 1e-6);
    }

    #[test]
    fn cross_of_basis() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        assert_eq!(i.cross(j), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn clamp_is_per_axis() {
        let v = Vec3::new(-2.0f32, 0.5, 9.0);
        let c = v.clamp(Vec3::splat(0.0), Vec3::splat(1.0));
        assert_eq!(c, Vec3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(Vec3::<f32>::zero().normalize_or_zero(), Vec3::zero());
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Vec3::new(0.0f64, 0.0, 0.0).lerp(Vec3::new(10.0, 4.0, -2.0), 0.5);
        assert_eq!(mid, Vec3::new(5.0, 2.0, -1.0));
    }
}
