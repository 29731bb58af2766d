//! Constraint relaxation: box containment, link length, pin fixation.
//!
//! Each pass runs once per frame, in that order. A single link pass does not
//! converge, so chains and cloth show a little stretch under load; that
//! elasticity is part of how the simulation looks.

use crate::error::{Result, VerletError};
use crate::float::{Float, DEGENERATE_EPSILON};
use crate::link::{LinkConstraint, LinkSet};
use crate::pin::{Pin, PinSet};
use crate::vec::Vec3;

/// Axis-aligned containment box, supplied per step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxBounds<F: Float> {
    pub min: Vec3<F>,
    pub max: Vec3<F>,
}

impl<F: Float> BoxBounds<F> {
    pub fn new(min: Vec3<F>, max: Vec3<F>) -> Self {
        BoxBounds { min, max }
    }

    /// Cube of half-width `half_extent` centred on the origin.
    pub fn centered(half_extent: F) -> Self {
        BoxBounds { min: Vec3::splat(-half_extent), max: Vec3::splat(half_extent) }
    }

    /// `InvalidBounds` if any axis has `min > max` or a bound is not finite.
    pub fn validate(&self) -> Result<()> {
        let ordered = self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.z <= self.max.z;
        if ordered && self.min.is_finite() && self.max.is_finite() {
            Ok(())
        } else {
            Err(VerletError::InvalidBounds)
        }
    }

    pub fn contains(&self, p: Vec3<F>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Clamp every position into the box, per axis.
    pub fn solve(&self, positions: &mut [Vec3<F>]) {
        for p in positions.iter_mut() {
            *p = p.clamp(self.min, self.max);
        }
    }
}

impl<F: Float> LinkConstraint<F> {
    /// Move both endpoints by half the length error, along the link.
    pub fn solve(&self, positions: &mut [Vec3<F>]) {
        let (a, b) = (self.link.a(), self.link.b());
        let delta = positions[b] - positions[a];
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(DEGENERATE_EPSILON)) {
            return; // coincident endpoints, no direction to push along
        }

        let correction = delta.scale((dist - self.rest_length) / dist * F::half());
        positions[a] += correction;
        positions[b] -= correction;
    }
}

impl<F: Float> Pin<F> {
    pub fn solve(&self, positions: &mut [Vec3<F>]) {
        positions[self.index] = self.target;
    }
}

/// One relaxation pass over every link, in storage order.
pub fn link_pass<F: Float>(links: &LinkSet<F>, positions: &mut [Vec3<F>]) {
    for c in links.iter() {
        c.solve(positions);
    }
}

/// Snap every pinned point onto its target.
pub fn pin_pass<F: Float>(pins: &PinSet<F>, positions: &mut [Vec3<F>]) {
    for pin in pins.iter() {
        pin.solve(positions);
    }
}
