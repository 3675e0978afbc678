//! O(1) demo: random array access.
//!
//! The array is drawn as a strip of n slots. Running the demo probes one
//! random slot, flashes the access arrow for a single step delay, then
//! clears it. The operation count is 1 no matter how large n grows —
//! that is the whole lesson.

use crate::demos::{BarFrame, ComplexityDemo, DemoFrame, SlotState, StepOutcome};
use crate::engine::{ComplexityClass, DemoRng, RunGuard};
use crate::error::{LabError, LabResult};
use serde::{Deserialize, Serialize};

/// Random array access demo state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantAccessDemo {
    /// Array length.
    n: usize,
    /// Slot currently flashed by the access arrow.
    probe: Option<usize>,
    /// Work units performed (0 or 1).
    ops: u64,
    /// Single-run guard.
    guard: RunGuard,
    /// RNG for the probe index.
    rng: DemoRng,
}

impl ConstantAccessDemo {
    /// Create a new demo with array length `n`.
    #[must_use]
    pub fn new(n: usize, seed: u64) -> Self {
        Self {
            n,
            probe: None,
            ops: 0,
            guard: RunGuard::new(),
            rng: DemoRng::with_stream(seed, ComplexityClass::Constant as u64),
        }
    }

    /// Slot currently flashed, if the run is active.
    #[must_use]
    pub const fn probe(&self) -> Option<usize> {
        self.probe
    }
}

impl ComplexityDemo for ConstantAccessDemo {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn class(&self) -> ComplexityClass {
        ComplexityClass::Constant
    }

    fn size(&self) -> usize {
        self.n
    }

    fn set_size(&mut self, n: usize) {
        self.n = n;
        self.reset();
    }

    fn ops_done(&self) -> u64 {
        self.ops
    }

    fn begin(&mut self) -> LabResult<()> {
        if !self.guard.try_begin() {
            return Err(LabError::AlreadyRunning { demo: self.name() });
        }
        self.probe = Some(self.rng.gen_index(self.n));
        self.ops = 1;
        Ok(())
    }

    fn step(&mut self) -> StepOutcome {
        if !self.guard.is_running() {
            return StepOutcome::Finished;
        }
        // One delay, then the arrow clears and the run is over.
        self.probe = None;
        self.guard.finish();
        StepOutcome::Finished
    }

    fn is_running(&self) -> bool {
        self.guard.is_running()
    }

    fn reset(&mut self) {
        self.probe = None;
        self.ops = 0;
        self.guard.finish();
    }

    fn frame(&self) -> DemoFrame {
        let mut frame = BarFrame::idle(self.n);
        if let Some(i) = self.probe {
            if i < frame.slots.len() {
                frame.slots[i] = SlotState::Probe;
            }
        }
        DemoFrame::Bars(frame)
    }

    fn stat_line(&self) -> String {
        if self.ops == 0 {
            "0".to_string()
        } else {
            "1 (instant access)".to_string()
        }
    }
}
