//! Generic demo runner.
//!
//! The runner mediates the run lifecycle for any [`ComplexityDemo`]:
//! arming runs through the guard, stepping, and collecting the frame
//! sequence. Both frontends and the integration tests drive demos
//! through this interface, so they see identical state sequences.

use crate::demos::{ComplexityDemo, DemoFrame, StepOutcome};
use crate::engine::StepPacer;
use crate::error::LabResult;

/// Runner owning one demo.
#[derive(Debug)]
pub struct DemoRunner<D: ComplexityDemo> {
    demo: D,
}

impl<D: ComplexityDemo> DemoRunner<D> {
    /// Create a runner for the given demo.
    #[must_use]
    pub fn new(demo: D) -> Self {
        Self { demo }
    }

    /// Get a reference to the demo.
    #[must_use]
    pub fn demo(&self) -> &D {
        &self.demo
    }

    /// Get a mutable reference to the demo.
    pub fn demo_mut(&mut self) -> &mut D {
        &mut self.demo
    }

    /// Arm a new run.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::LabError::AlreadyRunning`] from the demo.
    pub fn begin(&mut self) -> LabResult<()> {
        self.demo.begin()
    }

    /// Advance a running demo by one step.
    pub fn step(&mut self) -> StepOutcome {
        self.demo.step()
    }

    /// Whether a run is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.demo.is_running()
    }

    /// Reset the demo to its idle frame.
    pub fn reset(&mut self) {
        self.demo.reset();
    }

    /// Pacer for the demo's current class and size.
    #[must_use]
    pub fn pacer(&self) -> StepPacer {
        StepPacer::new(self.demo.class(), self.demo.size())
    }

    /// Run the demo to completion, collecting every frame.
    ///
    /// The first frame is the state right after `begin`, then one frame
    /// per step, ending with the final frame after the run released its
    /// guard. Timed delays are the frontends' concern; tests consume the
    /// sequence directly.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::LabError::AlreadyRunning`] from the demo.
    pub fn run_to_completion(&mut self) -> LabResult<Vec<DemoFrame>> {
        self.begin()?;
        let mut frames = vec![self.demo.frame()];
        while self.demo.is_running() {
            self.demo.step();
            frames.push(self.demo.frame());
        }
        Ok(frames)
    }
}
