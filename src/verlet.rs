//! The Verlet engine: points, links and pins advanced one frame at a time.

use crate::collider::Body;
use crate::config::SolverConfig;
use crate::constraint::{self, BoxBounds};
use crate::error::{Result, VerletError};
use crate::float::Float;
use crate::link::{Link, LinkConstraint, LinkSet};
use crate::observer::StepObserver;
use crate::pin::{Pin, PinSet};
use crate::ray::{Ray, RayHit};
use crate::store::{PointStore, MAX_POINTS};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A fixed-capacity population of unit-mass points joined by links and pins.
///
/// Every frame the caller applies forces, then calls [`step`](Self::step),
/// which integrates all points and runs the box, link and pin passes once
/// each, in that order. Pins always win: after a step a pinned point sits
/// exactly on its target. Links are relaxed once per frame, not iterated to
/// convergence, so loaded links stretch slightly.
#[derive(Clone, Debug)]
pub struct Verlet<F: Float> {
    points: PointStore<F>,
    links: LinkSet<F>,
    pins: PinSet<F>,
    ray_trace_size: Vec3<F>,
}

impl<F: Float> Verlet<F> {
    /// Engine holding at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self::with_config(&SolverConfig::new().with_capacity(capacity))
    }

    pub fn with_config(config: &SolverConfig<F>) -> Self {
        log::debug!("verlet engine created (capacity {})", config.capacity);
        Verlet {
            points: PointStore::new(config.capacity),
            links: LinkSet::new(),
            pins: PinSet::new(),
            ray_trace_size: config.ray_trace_size,
        }
    }

    // ---- Point store ----

    /// Append a point at rest at `position`, returning its id.
    pub fn create_point(&mut self, position: Vec3<F>) -> Result<usize> {
        self.points.push(position).map_err(|err| {
            log::warn!("point creation rejected: {}", err);
            err
        })
    }

    /// Current position of `id`, or `InvalidIndex`.
    pub fn point(&self, id: usize) -> Result<Vec3<F>> {
        self.points.position(id)
    }

    /// Alias of [`point`](Self::point).
    pub fn position(&self, id: usize) -> Result<Vec3<F>> {
        self.points.position(id)
    }

    /// Position of `id` before the last integration.
    pub fn prev_position(&self, id: usize) -> Result<Vec3<F>> {
        self.points.prev_position(id)
    }

    /// Overwrite the current position only. The previous position is kept,
    /// so the move shows up as velocity on the next integration.
    pub fn set_pos(&mut self, id: usize, position: Vec3<F>) -> Result<()> {
        self.points.set_position(id, position)
    }

    /// Add a mass-normalised force to every point for the next integration.
    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.points.accumulate(force);
    }

    /// Positions ordered by id, for rendering.
    pub fn positions(&self) -> &[Vec3<F>] {
        self.points.positions()
    }

    /// Number of points created so far.
    pub fn size(&self) -> usize { self.points.len() }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn capacity(&self) -> usize { self.points.capacity() }

    // ---- Constraint set ----

    /// Pin `id` to where it is now.
    pub fn create_pin(&mut self, id: usize) -> Result<()> {
        let target = self.points.position(id)?;
        self.pins.pin(id, target);
        Ok(())
    }

    /// Pin `id` to `target`. Re-pinning a point replaces its target.
    pub fn create_pin_at(&mut self, id: usize, target: Vec3<F>) -> Result<()> {
        self.points.check(id)?;
        self.pins.pin(id, target);
        Ok(())
    }

    /// Link two existing points, with the current distance as rest length.
    ///
    /// Linking an already linked pair keeps the original rest length.
    pub fn create_link(&mut self, a: usize, b: usize) -> Result<Link> {
        let pa = self.points.position(a)?;
        let pb = self.points.position(b)?;
        if a == b {
            return Err(VerletError::SelfLink { index: a });
        }
        let link = Link::new(a, b);
        self.links.insert(link, pa.distance(pb));
        Ok(link)
    }

    /// Every link with its rest length, in relaxation order.
    pub fn links(&self) -> &[LinkConstraint<F>] {
        self.links.as_slice()
    }

    /// Number of intact links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Whether `a` and `b` are linked, in either order.
    pub fn has_link(&self, a: usize, b: usize) -> bool {
        self.links.contains(Link::new(a, b))
    }

    /// Rest length captured when the link was created.
    pub fn rest_length(&self, a: usize, b: usize) -> Option<F> {
        self.links.rest_length(Link::new(a, b))
    }

    /// Links touching `id`, in ascending order.
    pub fn incident_links(&self, id: usize) -> AllocVec<Link> {
        self.links.incident(id)
    }

    /// Every pin, in the order the pin pass applies them.
    pub fn pins(&self) -> &[Pin<F>] {
        self.pins.as_slice()
    }

    /// Target `id` is pinned to, if any.
    pub fn pin_target(&self, id: usize) -> Option<Vec3<F>> {
        self.pins.target(id)
    }

    /// Whether `id` has a pin.
    pub fn is_pinned(&self, id: usize) -> bool {
        self.pins.is_pinned(id)
    }

    // ---- Tearing ----

    /// Remove the link between `a` and `b`, if any.
    pub fn remove_link(&mut self, a: usize, b: usize) -> bool {
        self.remove(Link::new(a, b))
    }

    /// Remove a specific link value, if present.
    pub fn remove(&mut self, link: Link) -> bool {
        let removed = self.links.remove(link);
        if removed {
            log::debug!("tore link {}-{}", link.a(), link.b());
        }
        removed
    }

    /// Sever every link touching `id`. Returns how many were removed.
    pub fn remove_links_at(&mut self, id: usize) -> usize {
        let removed = self.links.remove_incident(id);
        if removed > 0 {
            log::debug!("tore {} links at point {}", removed, id);
        }
        removed
    }

    // ---- Integration and relaxation ----

    /// Integrate every point, then re-seat pins on their targets.
    ///
    /// Position-Verlet update that clears accumulated forces. Pinned points
    /// are integrated like any other and then put back, so a following link
    /// pass pulls against the anchor rather than against wherever the force
    /// carried it.
    pub fn verlet(&mut self, dt: F) {
        self.points.integrate(dt);
        constraint::pin_pass(&self.pins, self.points.positions_mut());
    }

    /// Clamp every point into `bounds`.
    pub fn box_constraint(&mut self, bounds: &BoxBounds<F>) {
        bounds.solve(self.points.positions_mut());
    }

    /// One relaxation pass over every link.
    pub fn link_constraint(&mut self) {
        constraint::link_pass(&self.links, self.points.positions_mut());
    }

    /// Snap every pinned point to its target.
    pub fn pin_constraint(&mut self) {
        constraint::pin_pass(&self.pins, self.points.positions_mut());
    }

    /// Advance one frame: integrate, then box, link and pin passes.
    ///
    /// `bounds` is validated before anything moves, so a rejected step leaves
    /// the engine untouched. `dt` is not clamped.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        bounds: Option<&BoxBounds<F>>,
        observer: &mut O,
    ) -> Result<()> {
        if let Some(bounds) = bounds {
            if let Err(err) = bounds.validate() {
                log::warn!("step rejected: {}", err);
                return Err(err);
            }
        }
        log::trace!("step dt={} points={} links={}", dt, self.points.len(), self.links.len());

        self.verlet(dt);
        observer.on_integrate(self.points.len());

        if let Some(bounds) = bounds {
            self.box_constraint(bounds);
            observer.on_box_pass();
        }

        self.link_constraint();
        observer.on_link_pass(self.links.len());

        self.pin_constraint();
        observer.on_pin_pass(self.pins.len());

        observer.on_step_complete();
        Ok(())
    }

    // ---- Queries ----

    /// Correction the external `body` should apply to stop overlapping the
    /// deepest-penetrating point. Zero if no point is inside the body.
    pub fn collide<B: Body<F> + ?Sized>(&self, body: &B) -> Vec3<F> {
        let mut deepest = Vec3::zero();
        let mut depth_sq = F::zero();
        for &p in self.points.positions() {
            if let Some(correction) = body.penetration(p) {
                let d = correction.length_sq();
                if d > depth_sq {
                    depth_sq = d;
                    deepest = correction;
                }
            }
        }
        -deepest
    }

    /// Correction that would move point `id` out of `body` (zero if outside).
    pub fn collide_point<B: Body<F> + ?Sized>(&self, id: usize, body: &B) -> Result<Vec3<F>> {
        let p = self.points.position(id)?;
        Ok(body.penetration(p).unwrap_or_else(Vec3::zero))
    }

    /// Nearest point whose pick box the ray passes through.
    pub fn ray_trace(&self, ray: &Ray<F>) -> Option<RayHit<F>> {
        let half = self.ray_trace_size.scale(F::half());
        let mut best: Option<RayHit<F>> = None;
        for (id, &p) in self.points.positions().iter().enumerate() {
            if let Some(t) = ray.hit_box(p, half) {
                if best.map_or(true, |hit| t < hit.t) {
                    best = Some(RayHit { id, t });
                }
            }
        }
        best
    }

    pub fn ray_trace_size(&self) -> Vec3<F> {
        self.ray_trace_size
    }

    /// Drop all points, links and pins, keeping the capacity.
    pub fn clear(&mut self) {
        self.points.clear();
        self.links.clear();
        self.pins.clear();
    }
}

impl<F: Float> Default for Verlet<F> {
    fn default() -> Self {
        Self::new(MAX_POINTS)
    }
}
