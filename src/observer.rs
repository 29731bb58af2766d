//! Step observer trait for monitoring simulation progress.

/// Hooks called during [`Verlet::step`](crate::verlet::Verlet::step), in pass
/// order. All methods default to no-ops.
pub trait StepObserver {
    /// After every point has been integrated.
    fn on_integrate(&mut self, _points: usize) {}

    /// After the box pass (skipped when the step has no bounds).
    fn on_box_pass(&mut self) {}

    /// After the link pass.
    fn on_link_pass(&mut self, _links: usize) {}

    /// After the pin pass.
    fn on_pin_pass(&mut self, _pins: usize) {}

    fn on_step_complete(&mut self) {}
}

/// Observer that does nothing.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that reports each pass through `log::trace!`.
#[derive(Default)]
pub struct LogStepObserver {
    steps: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed steps seen so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl StepObserver for LogStepObserver {
    fn on_integrate(&mut self, points: usize) {
        log::trace!("step {}: integrated {} points", self.steps, points);
    }

    fn on_box_pass(&mut self) {
        log::trace!("step {}: box pass", self.steps);
    }

    fn on_link_pass(&mut self, links: usize) {
        log::trace!("step {}: relaxed {} links", self.steps, links);
    }

    fn on_pin_pass(&mut self, pins: usize) {
        log::trace!("step {}: applied {} pins", self.steps, pins);
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
