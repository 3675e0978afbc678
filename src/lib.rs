//! # bigolab
//!
//! Interactive visualizations of algorithmic complexity classes.
//!
//! Four small demo engines step through the work units of a toy algorithm
//! and expose renderer-independent frames:
//!
//! - **O(1)** — random access into an array (one flash, done)
//! - **O(n)** — a left-to-right scan over n bars
//! - **O(n²)** — filling an n×n grid cell by cell
//! - **O(log n)** — binary search with the discarded half dimmed
//!
//! The engines know nothing about terminals or canvases. A ratatui frontend
//! (feature `tui`) and a web-sys canvas frontend (feature `wasm`) render the
//! same frame sequences.
//!
//! ## Example
//!
//! ```rust
//! use bigolab::prelude::*;
//!
//! let mut demo = LinearScanDemo::new(10, 42);
//! demo.begin().expect("no run in flight");
//! while demo.step() == StepOutcome::Advanced {}
//! assert_eq!(demo.ops_done(), 10);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,
    clippy::needless_range_loop
)]

pub mod config;
pub mod demos;
pub mod engine;
pub mod error;
pub mod runner;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{LabConfig, LabConfigBuilder, SliderConfig};
    pub use crate::demos::{
        BinarySearchDemo, ComplexityDemo, ConstantAccessDemo, DemoFrame, LinearScanDemo,
        QuadraticGridDemo, SlotState, StepOutcome,
    };
    pub use crate::engine::{ComplexityClass, DemoRng, RunGuard, StepPacer};
    pub use crate::error::{LabError, LabResult};
    pub use crate::runner::DemoRunner;
}

/// Re-export for public API.
pub use error::{LabError, LabResult};
