//! Single-run guard.
//!
//! Each visualization allows at most one animation run in flight. The
//! guard is the whole of that invariant: `try_begin` either arms the run
//! or reports that one is active, and `finish` releases it.

use serde::{Deserialize, Serialize};

/// Guard preventing overlapping runs of the same animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunGuard {
    in_flight: bool,
}

impl RunGuard {
    /// Create a released guard.
    #[must_use]
    pub const fn new() -> Self {
        Self { in_flight: false }
    }

    /// Try to arm the guard for a new run.
    ///
    /// Returns `false` if a run is already in flight; the caller must
    /// treat that as a no-op.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Release the guard at the end of a run.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Check whether a run is in flight.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.in_flight
    }
}
