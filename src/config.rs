//! Configuration for engines and the per-frame manager.

use crate::constraint::BoxBounds;
use crate::float::Float;
use crate::store::MAX_POINTS;
use crate::vec::Vec3;

/// Engine and manager configuration.
///
/// # Builder Pattern
/// ```
/// use tether::config::SolverConfig;
/// use tether::constraint::BoxBounds;
/// use tether::vec::Vec3;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_capacity(10_000)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_bounds(BoxBounds::centered(50.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Maximum number of points per engine. Default: [`MAX_POINTS`].
    pub capacity: usize,
    /// Acceleration the manager applies to every point each tick.
    /// Default: `(0, -9.81, 0)`.
    pub gravity: Vec3<F>,
    /// Containment box used by the manager's tick. Default: none.
    pub bounds: Option<BoxBounds<F>>,
    /// Full size of the pick box centred on each point. Default: `(0.4, 0.4, 0.4)`.
    pub ray_trace_size: Vec3<F>,
}

impl<F: Float> SolverConfig<F> {
    /// Create a configuration with the defaults listed on each field.
    pub fn new() -> Self {
        SolverConfig {
            capacity: MAX_POINTS,
            gravity: Vec3::new(F::zero(), F::from_f32(-9.81), F::zero()),
            bounds: None,
            ray_trace_size: Vec3::splat(F::from_f32(0.4)),
        }
    }

    /// Set the point capacity of each engine.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the containment box used by each tick.
    pub fn with_bounds(mut self, bounds: BoxBounds<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Tick without a containment box.
    pub fn without_bounds(mut self) -> Self {
        self.bounds = None;
        self
    }

    /// Set the full size of the pick box around each point.
    pub fn with_ray_trace_size(mut self, size: Vec3<F>) -> Self {
        self.ray_trace_size = size;
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
