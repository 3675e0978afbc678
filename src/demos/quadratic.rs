//! O(n²) demo: grid fill.
//!
//! An n×n grid is filled cell by cell in row-major order, one work unit
//! per cell. The ops counter races toward n² while the grid fills, which
//! makes the quadratic blow-up visible: doubling the slider quadruples
//! the run.

use crate::demos::{ComplexityDemo, DemoFrame, GridFrame, SlotState, StepOutcome};
use crate::engine::{ComplexityClass, RunGuard};
use crate::error::{LabError, LabResult};
use serde::{Deserialize, Serialize};

/// Grid fill demo state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticGridDemo {
    /// Grid side length.
    n: usize,
    /// Cell currently highlighted (row, col).
    cursor: Option<(usize, usize)>,
    /// Whether the last run filled the whole grid.
    filled: bool,
    /// Work units performed.
    ops: u64,
    /// Single-run guard.
    guard: RunGuard,
}

impl QuadraticGridDemo {
    /// Create a new demo with an n×n grid.
    #[must_use]
    pub fn new(n: usize, _seed: u64) -> Self {
        Self {
            n,
            cursor: None,
            filled: false,
            ops: 0,
            guard: RunGuard::new(),
        }
    }

    /// Cell currently highlighted, if the run is active.
    #[must_use]
    pub const fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }
}

impl ComplexityDemo for QuadraticGridDemo {
    fn name(&self) -> &'static str {
        "quadratic"
    }

    fn class(&self) -> ComplexityClass {
        ComplexityClass::Quadratic
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
        self.filled = false;
        if self.n == 0 {
            self.guard.finish();
            self.ops = 0;
            return Ok(());
        }
        self.cursor = Some((0, 0));
        self.ops = 1;
        Ok(())
    }

    fn step(&mut self) -> StepOutcome {
        if !self.guard.is_running() {
            return StepOutcome::Finished;
        }
        match self.cursor {
            Some((row, col)) => {
                let next = if col + 1 < self.n {
                    Some((row, col + 1))
                } else if row + 1 < self.n {
                    Some((row + 1, 0))
                } else {
                    None
                };
                match next {
                    Some(cell) => {
                        self.cursor = Some(cell);
                        self.ops += 1;
                        StepOutcome::Advanced
                    }
                    None => {
                        // Final cell done: show the grid fully filled.
                        self.cursor = None;
                        self.filled = true;
                        self.guard.finish();
                        StepOutcome::Finished
                    }
                }
            }
            None => {
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
        self.filled = false;
        self.ops = 0;
        self.guard.finish();
    }

    fn frame(&self) -> DemoFrame {
        let mut frame = GridFrame::idle(self.n);
        if self.filled {
            frame.cells.fill(SlotState::Visited);
        } else if let Some((row, col)) = self.cursor {
            let cursor_idx = row * self.n + col;
            for (idx, cell) in frame.cells.iter_mut().enumerate() {
                if idx < cursor_idx {
                    *cell = SlotState::Visited;
                } else if idx == cursor_idx {
                    *cell = SlotState::Probe;
                }
            }
        }
        DemoFrame::Grid(frame)
    }

    fn stat_line(&self) -> String {
        format!("{} / {}", self.ops, self.total_ops())
    }
}
