//! Fixed-capacity point storage with parallel position arrays.

use crate::error::{Result, VerletError};
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Default upper bound on simultaneous points in one engine.
pub const MAX_POINTS: usize = 300_000;

/// Arena of Verlet points.
///
/// Points live in three parallel arrays indexed by a dense id assigned at
/// creation. Ids are never reused or compacted; the store only grows, up to
/// the capacity fixed at construction.
#[derive(Clone, Debug)]
pub struct PointStore<F: Float> {
    pos: AllocVec<Vec3<F>>,
    prev_pos: AllocVec<Vec3<F>>,
    acc: AllocVec<Vec3<F>>,
    capacity: usize,
}

impl<F: Float> PointStore<F> {
    /// Create an empty store. Arrays are reserved lazily as points are added,
    /// so a large capacity costs nothing until it is used.
    pub fn new(capacity: usize) -> Self {
        PointStore {
            pos: AllocVec::new(),
            prev_pos: AllocVec::new(),
            acc: AllocVec::new(),
            capacity,
        }
    }

    /// Append a point at rest: previous position equals `position`.
    pub fn push(&mut self, position: Vec3<F>) -> Result<usize> {
        if self.is_full() {
            return Err(VerletError::CapacityExceeded { capacity: self.capacity });
        }
        let id = self.pos.len();
        self.pos.push(position);
        self.prev_pos.push(position);
        self.acc.push(Vec3::zero());
        Ok(id)
    }

    pub fn len(&self) -> usize { self.pos.len() }
    pub fn is_empty(&self) -> bool { self.pos.is_empty() }
    pub fn capacity(&self) -> usize { self.capacity }
    pub fn is_full(&self) -> bool { self.pos.len() >= self.capacity }

    /// Fail with `InvalidIndex` unless `id` names an existing point.
    pub fn check(&self, id: usize) -> Result<()> {
        if id < self.pos.len() {
            Ok(())
        } else {
            Err(VerletError::InvalidIndex { index: id, count: self.pos.len() })
        }
    }

    pub fn position(&self, id: usize) -> Result<Vec3<F>> {
        self.check(id)?;
        Ok(self.pos[id])
    }

    pub fn prev_position(&self, id: usize) -> Result<Vec3<F>> {
        self.check(id)?;
        Ok(self.prev_pos[id])
    }

    pub fn acceleration(&self, id: usize) -> Result<Vec3<F>> {
        self.check(id)?;
        Ok(self.acc[id])
    }

    /// Overwrite the current position only.
    pub fn set_position(&mut self, id: usize, position: Vec3<F>) -> Result<()> {
        self.check(id)?;
        self.pos[id] = position;
        Ok(())
    }

    /// Add `accel` to every point's accumulated acceleration.
    pub fn accumulate(&mut self, accel: Vec3<F>) {
        for a in self.acc.iter_mut() {
            *a += accel;
        }
    }

    /// Position-Verlet update for every point, consuming the accumulated acceleration.
    pub fn integrate(&mut self, dt: F) {
        let dt_sq = dt * dt;
        for ((pos, prev), acc) in self
            .pos
            .iter_mut()
            .zip(self.prev_pos.iter_mut())
            .zip(self.acc.iter_mut())
        {
            let next = *pos + (*pos - *prev) + acc.scale(dt_sq);
            *prev = *pos;
            *pos = next;
            *acc = Vec3::zero();
        }
    }

    pub fn positions(&self) -> &[Vec3<F>] {
        &self.pos
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Vec3<F>] {
        &mut self.pos
    }

    /// Drop every point, keeping the capacity.
    pub fn clear(&mut self) {
        self.pos.clear();
        self.prev_pos.clear();
        self.acc.clear();
    }
}
