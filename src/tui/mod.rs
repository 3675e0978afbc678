//! TUI module for bigolab.
//!
//! Reusable TUI application state and logic, extracted from the binary
//! to enable testing. The actual terminal I/O lives in `bin/bigo_tui.rs`;
//! all testable state management is here.

#[cfg(feature = "tui")]
pub mod app;

#[cfg(feature = "tui")]
pub use app::LabApp;
