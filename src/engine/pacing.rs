//! Step pacing.
//!
//! The demos simulate running time with timed suspension between draw
//! steps. `StepPacer` turns a class-and-size pair into a delay schedule
//! that both frontends consume: the TUI steps a demo when enough ticks
//! of its render loop have elapsed, the WASM frontend skips animation
//! frames to the same effect.

use crate::engine::ComplexityClass;
use std::time::Duration;

/// Pacing schedule for one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPacer {
    delay: Duration,
}

impl StepPacer {
    /// Create a pacer for the given class and input size.
    #[must_use]
    pub fn new(class: ComplexityClass, n: usize) -> Self {
        Self {
            delay: class.step_delay(n),
        }
    }

    /// Create a pacer with an explicit per-step delay.
    #[must_use]
    pub const fn from_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Delay between consecutive steps.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of render-loop ticks per animation step.
    ///
    /// Always at least 1: a demo never steps more than once per tick.
    #[must_use]
    pub fn ticks_per_step(&self, tick: Duration) -> u64 {
        if tick.is_zero() {
            return 1;
        }
        let ratio = self.delay.as_secs_f64() / tick.as_secs_f64();
        (ratio.round() as u64).max(1)
    }

    /// Whether the demo should step, `elapsed` ticks after its run was
    /// armed.
    ///
    /// The first step lands one full delay after arming, never on the
    /// arming tick itself. Callers count ticks from the run's own start
    /// so the first delay is always a whole one.
    #[must_use]
    pub fn should_step(&self, elapsed: u64, tick: Duration) -> bool {
        elapsed > 0 && elapsed % self.ticks_per_step(tick) == 0
    }
}
