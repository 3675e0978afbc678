//! O(n) demo: left-to-right scan.
//!
//! n bars of equal height; the cursor visits each one in order, one work
//! unit per bar. The step delay shrinks as n grows so a full scan takes
//! about one second regardless of size.

use crate::demos::{BarFrame, ComplexityDemo, DemoFrame, SlotState, StepOutcome};
use crate::engine::{ComplexityClass, RunGuard};
use crate::error::{LabError, LabResult};
use serde::{Deserialize, Serialize};

/// Linear scan demo state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearScanDemo {
    /// Number of bars.
    n: usize,
    /// Bar currently highlighted.
    cursor: Option<usize>,
    /// Work units performed.
    ops: u64,
    /// Single-run guard.
    guard: RunGuard,
}

impl LinearScanDemo {
    /// Create a new demo with `n` bars.
    ///
    /// The seed is accepted for interface uniformity; the scan itself
    /// is deterministic.
    #[must_use]
    pub fn new(n: usize, _seed: u64) -> Self {
        Self {
            n,
            cursor: None,
            ops: 0,
            guard: RunGuard::new(),
        }
    }

    /// Bar currently highlighted, if the run is active.
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}

impl ComplexityDemo for LinearScanDemo {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn class(&self) -> ComplexityClass {
        ComplexityClass::Linear
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
        if self.n == 0 {
            // Nothing to scan; the run ends immediately.
            self.guard.finish();
            self.ops = 0;
            return Ok(());
        }
        self.cursor = Some(0);
        self.ops = 1;
        Ok(())
    }

    fn step(&mut self) -> StepOutcome {
        if !self.guard.is_running() {
            return StepOutcome::Finished;
        }
        match self.cursor {
            Some(i) if i + 1 < self.n => {
                self.cursor = Some(i + 1);
                self.ops += 1;
                StepOutcome::Advanced
            }
            _ => {
                // Past the last bar: clear the highlight.
                self.cursor = None;
                self.guard.finish();
                StepOutcome::Finished
            }
        }
    }

    fn is_running(&self) -> bool {
        self.guard.is_running()
    }

    fn reset(&mut self) {
        self.cursor = None;
        self.ops = 0;
        self.guard.finish();
    }

    fn frame(&self) -> DemoFrame {
        let mut frame = BarFrame::idle(self.n);
        if let Some(i) = self.cursor {
            if i < frame.slots.len() {
                frame.slots[i] = SlotState::Probe;
            }
        }
        DemoFrame::Bars(frame)
    }
}
