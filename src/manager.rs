//! Per-frame driver for every engine in a scene.

use crate::collider::Body;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::ray::{Ray, RayHit};
use crate::vec::Vec3;
use crate::verlet::Verlet;
use alloc::vec::Vec as AllocVec;

/// Owns the scene's engines and ticks them with shared gravity and bounds.
pub struct VerletManager<F: Float> {
    config: SolverConfig<F>,
    verlets: AllocVec<Verlet<F>>,
}

impl<F: Float> VerletManager<F> {
    /// Create an empty manager with the given configuration.
    pub fn new(config: SolverConfig<F>) -> Self {
        VerletManager { config, verlets: AllocVec::new() }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    /// Get the configuration mutably. Changes apply from the next tick.
    pub fn config_mut(&mut self) -> &mut SolverConfig<F> {
        &mut self.config
    }

    /// An empty engine built from the manager's configuration.
    pub fn create(&self) -> Verlet<F> {
        Verlet::with_config(&self.config)
    }

    /// Take ownership of `verlet`, returning its index.
    pub fn add(&mut self, verlet: Verlet<F>) -> usize {
        let index = self.verlets.len();
        log::debug!(
            "manager: registered engine {} ({} points, {} links)",
            index,
            verlet.len(),
            verlet.link_count()
        );
        self.verlets.push(verlet);
        index
    }

    /// Engine registered at `index`.
    pub fn get(&self, index: usize) -> Option<&Verlet<F>> {
        self.verlets.get(index)
    }

    /// Engine registered at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Verlet<F>> {
        self.verlets.get_mut(index)
    }

    /// Iterate over engines in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Verlet<F>> {
        self.verlets.iter()
    }

    /// Number of registered engines.
    pub fn len(&self) -> usize { self.verlets.len() }
    pub fn is_empty(&self) -> bool { self.verlets.is_empty() }

    /// Apply gravity to every engine and step it with the configured bounds.
    ///
    /// Bounds are checked once up front, so either every engine advances or
    /// none does.
    pub fn tick<O: StepObserver>(&mut self, dt: F, observer: &mut O) -> Result<()> {
        let bounds = self.config.bounds;
        if let Some(bounds) = &bounds {
            bounds.validate()?;
        }
        for verlet in self.verlets.iter_mut() {
            verlet.apply_force(self.config.gravity);
            verlet.step(dt, bounds.as_ref(), &mut *observer)?;
        }
        Ok(())
    }

    /// Sum of the per-engine corrections for `body`.
    pub fn collide<B: Body<F> + ?Sized>(&self, body: &B) -> Vec3<F> {
        self.verlets
            .iter()
            .fold(Vec3::zero(), |acc, verlet| acc + verlet.collide(body))
    }

    /// Nearest ray hit across all engines, with the engine index.
    pub fn ray_trace(&self, ray: &Ray<F>) -> Option<(usize, RayHit<F>)> {
        let mut best: Option<(usize, RayHit<F>)> = None;
        for (index, verlet) in self.verlets.iter().enumerate() {
            if let Some(hit) = verlet.ray_trace(ray) {
                if best.map_or(true, |(_, b)| hit.t < b.t) {
                    best = Some((index, hit));
                }
            }
        }
        best
    }

    /// Drop every engine (scene reset).
    pub fn clear(&mut self) {
        self.verlets.clear();
    }
}

impl<F: Float> Default for VerletManager<F> {
    fn default() -> Self {
        Self::new(SolverConfig::new())
    }
}
