//! The four complexity demos.
//!
//! Each demo steps through the work units of a toy algorithm and exposes a
//! renderer-independent frame after every step. The frontends never reach
//! into demo internals; they draw frames and read the stat line.
//!
//! 1. [`constant`] — O(1) random array access
//! 2. [`linear`] — O(n) left-to-right scan
//! 3. [`quadratic`] — O(n²) grid fill
//! 4. [`logarithmic`] — O(log n) binary search with dimming

pub mod constant;
pub mod linear;
pub mod logarithmic;
pub mod quadratic;

pub use constant::ConstantAccessDemo;
pub use linear::LinearScanDemo;
pub use logarithmic::BinarySearchDemo;
pub use quadratic::QuadraticGridDemo;

use crate::engine::ComplexityClass;
use crate::error::LabResult;
use serde::{Deserialize, Serialize};

/// Visual state of a single slot, bar, or grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    /// Not yet touched by the algorithm.
    Idle,
    /// Inside the active search window.
    Window,
    /// The cell currently being examined.
    Probe,
    /// The search target, located.
    Found,
    /// Work already done here.
    Visited,
    /// Eliminated from consideration.
    Dimmed,
}

/// One row of slots (bars, array cells, search range).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarFrame {
    /// Slot states, left to right.
    pub slots: Vec<SlotState>,
}

impl BarFrame {
    /// A frame of n idle slots.
    #[must_use]
    pub fn idle(n: usize) -> Self {
        Self {
            slots: vec![SlotState::Idle; n],
        }
    }

    /// Index of the probe slot, if any.
    #[must_use]
    pub fn probe(&self) -> Option<usize> {
        self.slots.iter().position(|s| *s == SlotState::Probe)
    }
}

/// An n×n grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFrame {
    /// Grid side length.
    pub n: usize,
    /// Cell states, row-major.
    pub cells: Vec<SlotState>,
}

impl GridFrame {
    /// A frame of n×n idle cells.
    #[must_use]
    pub fn idle(n: usize) -> Self {
        Self {
            n,
            cells: vec![SlotState::Idle; n * n],
        }
    }

    /// State of the cell at (row, col).
    ///
    /// Out-of-range coordinates read as idle.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> SlotState {
        if row >= self.n || col >= self.n {
            return SlotState::Idle;
        }
        self.cells[row * self.n + col]
    }

    /// Number of visited cells.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|s| **s == SlotState::Visited)
            .count()
    }
}

/// Renderer-independent frame data for one demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoFrame {
    /// A single row of slots.
    Bars(BarFrame),
    /// An n×n grid.
    Grid(GridFrame),
}

/// Result of advancing a running demo by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The run continues; wait one step delay and step again.
    Advanced,
    /// The run just ended; the guard is released.
    Finished,
}

/// Common interface for all four demos.
///
/// A demo is driven through a small lifecycle: `begin` arms a run (at most
/// one in flight), `step` advances it after each timed delay, and
/// `is_running` reports whether more steps are pending. `frame` is valid
/// at any point, running or not.
pub trait ComplexityDemo {
    /// Demo name for display and error messages.
    fn name(&self) -> &'static str;

    /// The complexity class this demo illustrates.
    fn class(&self) -> ComplexityClass;

    /// Current input size n.
    fn size(&self) -> usize;

    /// Change the input size. Cancels any run in flight and resets.
    fn set_size(&mut self, n: usize);

    /// Work units completed so far in the current or last run.
    fn ops_done(&self) -> u64;

    /// Worst-case work units for the current size.
    fn total_ops(&self) -> u64 {
        self.class().total_ops(self.size())
    }

    /// Arm a new run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LabError::AlreadyRunning`] if a run is in flight;
    /// callers treat that as a no-op.
    fn begin(&mut self) -> LabResult<()>;

    /// Advance a running demo by one step.
    ///
    /// Stepping a demo that is not running returns `Finished` without
    /// changing state.
    fn step(&mut self) -> StepOutcome;

    /// Whether a run is in flight.
    fn is_running(&self) -> bool;

    /// Cancel any run and restore the idle frame. Keeps the current size.
    fn reset(&mut self);

    /// Current frame for rendering.
    fn frame(&self) -> DemoFrame;

    /// Stat line shown next to the visualization.
    fn stat_line(&self) -> String {
        format!("{}", self.ops_done())
    }
}
