//! O(log n) demo: binary search with dimming.
//!
//! A sorted array of n slots hides a random target. Each probe examines
//! the midpoint of the active window; the discarded half dims. The run
//! ends when the probe lands on the target, which it always does within
//! floor(log2 n) + 1 probes.

use crate::demos::{BarFrame, ComplexityDemo, DemoFrame, SlotState, StepOutcome};
use crate::engine::{ComplexityClass, DemoRng, RunGuard};
use crate::error::{LabError, LabResult};
use serde::{Deserialize, Serialize};

/// Binary search demo state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinarySearchDemo {
    /// Array length.
    n: usize,
    /// Hidden search target for the current run.
    target: Option<usize>,
    /// Lower edge of the active window.
    low: usize,
    /// Upper edge of the active window (inclusive).
    high: usize,
    /// Midpoint currently probed.
    mid: Option<usize>,
    /// Located target, once found.
    found: Option<usize>,
    /// Probes performed.
    ops: u64,
    /// Single-run guard.
    guard: RunGuard,
    /// RNG for the target.
    rng: DemoRng,
}

impl BinarySearchDemo {
    /// Create a new demo with array length `n`.
    #[must_use]
    pub fn new(n: usize, seed: u64) -> Self {
        Self {
            n,
            target: None,
            low: 0,
            high: n.saturating_sub(1),
            mid: None,
            found: None,
            ops: 0,
            guard: RunGuard::new(),
            rng: DemoRng::with_stream(seed, ComplexityClass::Logarithmic as u64),
        }
    }

    /// Active window as (low, high), inclusive.
    #[must_use]
    pub const fn window(&self) -> (usize, usize) {
        (self.low, self.high)
    }

    /// Midpoint currently probed.
    #[must_use]
    pub const fn mid(&self) -> Option<usize> {
        self.mid
    }

    /// Located target, once the search has found it.
    #[must_use]
    pub const fn found(&self) -> Option<usize> {
        self.found
    }

    /// Hidden target of the current run.
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        self.target
    }
}

impl ComplexityDemo for BinarySearchDemo {
    fn name(&self) -> &'static str {
        "logarithmic"
    }

    fn class(&self) -> ComplexityClass {
        ComplexityClass::Logarithmic
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
            self.guard.finish();
            self.ops = 0;
            return Ok(());
        }
        self.target = Some(self.rng.gen_index(self.n));
        self.low = 0;
        self.high = self.n - 1;
        self.found = None;
        self.mid = Some((self.low + self.high) / 2);
        self.ops = 1;
        Ok(())
    }

    fn step(&mut self) -> StepOutcome {
        if !self.guard.is_running() {
            return StepOutcome::Finished;
        }
        let (Some(mid), Some(target)) = (self.mid, self.target) else {
            self.guard.finish();
            return StepOutcome::Finished;
        };

        if mid == target {
            self.found = Some(mid);
            self.guard.finish();
            return StepOutcome::Finished;
        }

        // The target is always present, so the window never empties.
        if mid < target {
            self.low = mid + 1;
        } else {
            self.high = mid - 1;
        }
        self.mid = Some((self.low + self.high) / 2);
        self.ops += 1;
        StepOutcome::Advanced
    }

    fn is_running(&self) -> bool {
        self.guard.is_running()
    }

    fn reset(&mut self) {
        self.target = None;
        self.low = 0;
        self.high = self.n.saturating_sub(1);
        self.mid = None;
        self.found = None;
        self.ops = 0;
        self.guard.finish();
    }

    fn frame(&self) -> DemoFrame {
        let mut frame = BarFrame::idle(self.n);
        for (i, slot) in frame.slots.iter_mut().enumerate() {
            *slot = if Some(i) == self.found {
                SlotState::Found
            } else if Some(i) == self.mid {
                SlotState::Probe
            } else if i >= self.low && i <= self.high {
                SlotState::Window
            } else {
                SlotState::Dimmed
            };
        }
        DemoFrame::Bars(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(demo: &mut BinarySearchDemo) {
        demo.begin().expect("begin");
        while demo.step() == StepOutcome::Advanced {}
    }

    #[test]
    fn test_idle_frame_shows_full_window() {
        let demo = BinarySearchDemo::new(8, 42);
        let DemoFrame::Bars(frame) = demo.frame() else {
            panic!("logarithmic demo emits bar frames");
        };
        assert!(frame.slots.iter().all(|s| *s == SlotState::Window));
    }

    #[test]
    fn test_search_finds_target() {
        let mut demo = BinarySearchDemo::new(16, 42);
        run_to_completion(&mut demo);
        assert_eq!(demo.found(), demo.target());
        assert!(!demo.is_running());
    }

    #[test]
    fn test_probe_budget_respected() {
        for seed in 0..50 {
            let mut demo = BinarySearchDemo::new(64, seed);
            run_to_completion(&mut demo);
            assert!(
                demo.ops_done() <= 7,
                "seed {seed}: {} probes exceed budget",
                demo.ops_done()
            );
        }
    }

    #[test]
    fn test_window_narrows_monotonically() {
        let mut demo = BinarySearchDemo::new(32, 3);
        demo.begin().expect("begin");
        let (mut low, mut high) = demo.window();
        while demo.step() == StepOutcome::Advanced {
            let (l, h) = demo.window();
            assert!(l >= low && h <= high, "window must never widen");
            assert!(l <= h, "window must never empty");
            (low, high) = (l, h);
        }
    }

    #[test]
    fn test_mid_inside_window() {
        let mut demo = BinarySearchDemo::new(32, 9);
        demo.begin().expect("begin");
        loop {
            let (low, high) = demo.window();
            let mid = demo.mid().expect("mid set during run");
            assert!(mid >= low && mid <= high);
            if demo.step() == StepOutcome::Finished {
                break;
            }
        }
    }

    #[test]
    fn test_frame_dims_discarded_half() {
        let mut demo = BinarySearchDemo::new(16, 42);
        demo.begin().expect("begin");
        demo.step();
        let DemoFrame::Bars(frame) = demo.frame() else {
            panic!("logarithmic demo emits bar frames");
        };
        let (low, high) = demo.window();
        for (i, slot) in frame.slots.iter().enumerate() {
            if i < low || i > high {
                assert_eq!(*slot, SlotState::Dimmed, "slot {i} outside window");
            } else {
                assert_ne!(*slot, SlotState::Dimmed, "slot {i} inside window");
            }
        }
    }

    #[test]
    fn test_found_slot_marked() {
        let mut demo = BinarySearchDemo::new(16, 42);
        run_to_completion(&mut demo);
        let DemoFrame::Bars(frame) = demo.frame() else {
            panic!("logarithmic demo emits bar frames");
        };
        let found = demo.found().expect("target found");
        assert_eq!(frame.slots[found], SlotState::Found);
    }

    #[test]
    fn test_reentrant_begin_rejected() {
        let mut demo = BinarySearchDemo::new(16, 42);
        demo.begin().expect("begin");
        assert!(demo.begin().expect_err("must reject").is_already_running());
    }

    #[test]
    fn test_determinism() {
        let mut a = BinarySearchDemo::new(64, 11);
        let mut b = BinarySearchDemo::new(64, 11);
        run_to_completion(&mut a);
        run_to_completion(&mut b);
        assert_eq!(a.target(), b.target());
        assert_eq!(a.ops_done(), b.ops_done());
    }

    #[test]
    fn test_single_element() {
        let mut demo = BinarySearchDemo::new(1, 42);
        run_to_completion(&mut demo);
        assert_eq!(demo.found(), Some(0));
        assert_eq!(demo.ops_done(), 1);
    }

    #[test]
    fn test_reset_restores_idle_window() {
        let mut demo = BinarySearchDemo::new(16, 42);
        run_to_completion(&mut demo);
        demo.reset();
        assert_eq!(demo.window(), (0, 15));
        assert_eq!(demo.mid(), None);
        assert_eq!(demo.found(), None);
        assert_eq!(demo.ops_done(), 0);
    }
}
