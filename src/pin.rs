//! Pin anchors: points forced to a fixed target every step.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use hashbrown::HashMap;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pin<F: Float> {
    pub index: usize,
    pub target: Vec3<F>,
}

/// At most one pin per point. Pinning an already pinned point replaces its
/// target and keeps its place in the pass order.
#[derive(Clone, Debug)]
pub struct PinSet<F: Float> {
    pins: AllocVec<Pin<F>>,
    slots: HashMap<usize, usize>,
}

impl<F: Float> PinSet<F> {
    pub fn new() -> Self {
        PinSet { pins: AllocVec::new(), slots: HashMap::new() }
    }

    /// Pin `index` to `target`. Returns true if the point was already pinned.
    pub fn pin(&mut self, index: usize, target: Vec3<F>) -> bool {
        match self.slots.get(&index) {
            Some(&slot) => {
                self.pins[slot].target = target;
                true
            }
            None => {
                self.slots.insert(index, self.pins.len());
                self.pins.push(Pin { index, target });
                false
            }
        }
    }

    pub fn target(&self, index: usize) -> Option<Vec3<F>> {
        self.slots.get(&index).map(|&slot| self.pins[slot].target)
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    pub fn as_slice(&self) -> &[Pin<F>] {
        &self.pins
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pin<F>> {
        self.pins.iter()
    }

    pub fn len(&self) -> usize { self.pins.len() }
    pub fn is_empty(&self) -> bool { self.pins.is_empty() }

    pub fn clear(&mut self) {
        self.pins.clear();
        self.slots.clear();
    }
}

impl<F: Float> Default for PinSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repin_overwrites_target() {
        let mut pins: PinSet<f32> = PinSet::new();
        assert!(!pins.pin(3, Vec3::zero()));
        assert!(pins.pin(3, Vec3::splat(2.0)));
        assert_eq!(pins.len(), 1);
        assert_eq!(pins.target(3), Some(Vec3::splat(2.0)));
        assert_eq!(pins.target(4), None);
    }
}
