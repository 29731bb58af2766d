//! Ropes: a run of points linked in sequence.

use crate::error::{Result, VerletError};
use crate::float::Float;
use crate::link::Link;
use crate::vec::Vec3;
use crate::verlet::Verlet;

/// Handle to a rope built inside a [`Verlet`] engine.
///
/// A rope of `n` segments owns the `n + 1` consecutive point ids starting at
/// [`first`](Self::first).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rope {
    first: usize,
    len: usize,
}

impl Rope {
    /// Lay `segments + 1` evenly spaced points from `start` to `end` and link
    /// neighbours. Fails without creating anything if the engine lacks room.
    pub fn build<F: Float>(
        verlet: &mut Verlet<F>,
        start: Vec3<F>,
        end: Vec3<F>,
        segments: usize,
    ) -> Result<Self> {
        let segments = segments.max(1);
        let capacity = verlet.capacity();
        let needed = segments
            .checked_add(1)
            .filter(|&n| verlet.len().checked_add(n).is_some_and(|t| t <= capacity))
            .ok_or(VerletError::CapacityExceeded { capacity })?;

        let first = verlet.len();
        for i in 0..=segments {
            let t = F::from_usize(i) / F::from_usize(segments);
            verlet.create_point(start.lerp(end, t))?;
        }
        for i in 0..segments {
            verlet.create_link(first + i, first + i + 1)?;
        }

        log::debug!("built rope of {} segments at point {}", segments, first);
        Ok(Rope { first, len: needed })
    }

    pub fn first(&self) -> usize { self.first }
    pub fn last(&self) -> usize { self.first + self.len - 1 }
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn segment_count(&self) -> usize { self.len - 1 }

    /// Engine id of the `i`-th point along the rope.
    pub fn point(&self, i: usize) -> Option<usize> {
        (i < self.len).then(|| self.first + i)
    }

    pub fn pin_start<F: Float>(&self, verlet: &mut Verlet<F>) -> Result<()> {
        verlet.create_pin(self.first)
    }

    pub fn pin_end<F: Float>(&self, verlet: &mut Verlet<F>) -> Result<()> {
        verlet.create_pin(self.last())
    }

    /// Tear the rope at segment `segment` (between points `segment` and
    /// `segment + 1`). Returns whether the segment was still intact.
    pub fn cut<F: Float>(&self, verlet: &mut Verlet<F>, segment: usize) -> bool {
        if segment >= self.segment_count() {
            return false;
        }
        let a = self.first + segment;
        verlet.remove(Link::new(a, a + 1))
    }

    /// Current length along the rope, summed over intact segments.
    pub fn stretched_length<F: Float>(&self, verlet: &Verlet<F>) -> F {
        let positions = verlet.positions();
        let mut total = F::zero();
        for i in self.first..self.last() {
            if verlet.has_link(i, i + 1) {
                total = total + positions[i].distance(positions[i + 1]);
            }
        }
        total
    }
}
