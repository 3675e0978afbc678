//! Shared engine machinery for the complexity demos.
//!
//! The demos themselves live in [`crate::demos`]; this module holds the
//! pieces they share: the complexity classes with their work and pacing
//! laws, the deterministic RNG, and the single-run guard.

pub mod guard;
pub mod pacing;
pub mod rng;

pub use guard::RunGuard;
pub use pacing::StepPacer;
pub use rng::DemoRng;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The four complexity classes the lab visualizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityClass {
    /// O(1) — random array access.
    Constant,
    /// O(n) — linear scan.
    Linear,
    /// O(n²) — grid fill.
    Quadratic,
    /// O(log n) — binary search.
    Logarithmic,
}

impl ComplexityClass {
    /// All classes in display order.
    pub const ALL: [Self; 4] = [
        Self::Constant,
        Self::Linear,
        Self::Quadratic,
        Self::Logarithmic,
    ];

    /// Worst-case number of work units for input size `n`.
    #[must_use]
    pub fn total_ops(self, n: usize) -> u64 {
        let n = n as u64;
        match self {
            Self::Constant => 1,
            Self::Linear => n,
            Self::Quadratic => n * n,
            Self::Logarithmic => {
                if n == 0 {
                    0
                } else {
                    u64::from(n.ilog2()) + 1
                }
            }
        }
    }

    /// Big-O notation for display.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Linear => "O(n)",
            Self::Quadratic => "O(n²)",
            Self::Logarithmic => "O(log n)",
        }
    }

    /// Delay between draw steps for input size `n`.
    ///
    /// The linear scan speeds up with n so a full run takes about one
    /// second regardless of size; the other classes use fixed delays.
    #[must_use]
    pub fn step_delay(self, n: usize) -> Duration {
        match self {
            Self::Constant => Duration::from_millis(500),
            Self::Linear => Duration::from_secs_f64(1.0 / (n.max(1) as f64)),
            Self::Quadratic => Duration::from_millis(20),
            Self::Logarithmic => Duration::from_millis(1000),
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: logarithmic work is bounded by floor(log2 n) + 1.
        #[test]
        fn prop_log_ops_bounded(n in 1usize..100_000) {
            let ops = ComplexityClass::Logarithmic.total_ops(n);
            prop_assert!(ops <= 64);
            prop_assert_eq!(ops, u64::from((n as u64).ilog2()) + 1);
        }

        /// Falsification: quadratic work is exactly n².
        #[test]
        fn prop_quadratic_ops(n in 0usize..10_000) {
            let ops = ComplexityClass::Quadratic.total_ops(n);
            prop_assert_eq!(ops, (n as u64) * (n as u64));
        }

        /// Falsification: all step delays are positive and finite.
        #[test]
        fn prop_delays_positive(n in 1usize..10_000) {
            for class in ComplexityClass::ALL {
                let d = class.step_delay(n);
                prop_assert!(d > Duration::ZERO);
                prop_assert!(d <= Duration::from_secs(1));
            }
        }
    }
}
