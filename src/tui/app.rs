//! TUI application state and logic for the complexity lab.
//!
//! Holds all four demos side by side. One demo has keyboard focus at a
//! time; size and run controls act on it. Terminal I/O is handled by the
//! binary, but all state management lives here.

use crate::config::LabConfig;
use crate::demos::{
    BinarySearchDemo, ComplexityDemo, ConstantAccessDemo, LinearScanDemo, QuadraticGridDemo,
};
use crate::engine::{ComplexityClass, StepPacer};
use crate::error::LabResult;
use crossterm::event::KeyCode;
use std::path::Path;
use std::time::Duration;

/// Application state for the complexity lab TUI.
pub struct LabApp {
    /// O(1) demo.
    pub constant: ConstantAccessDemo,
    /// O(n) demo.
    pub linear: LinearScanDemo,
    /// O(n²) demo.
    pub quadratic: QuadraticGridDemo,
    /// O(log n) demo.
    pub logarithmic: BinarySearchDemo,
    /// Demo holding keyboard focus.
    pub focus: ComplexityClass,
    /// Frame counter, advanced once per tick.
    pub frame_count: u64,
    /// Frame at which each demo's current run was armed, by class index.
    run_started: [u64; 4],
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Loaded configuration.
    pub config: LabConfig,
}

impl LabApp {
    /// Create a new application from a configuration.
    #[must_use]
    pub fn new(config: LabConfig) -> Self {
        let seed = config.seed;
        Self {
            constant: ConstantAccessDemo::new(config.sliders.constant.default, seed),
            linear: LinearScanDemo::new(config.sliders.linear.default, seed),
            quadratic: QuadraticGridDemo::new(config.sliders.quadratic.default, seed),
            logarithmic: BinarySearchDemo::new(config.sliders.logarithmic.default, seed),
            focus: ComplexityClass::Constant,
            frame_count: 0,
            run_started: [0; 4],
            should_quit: false,
            config,
        }
    }

    /// Create application from a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or validation fails.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> LabResult<Self> {
        Ok(Self::new(LabConfig::load(path)?))
    }

    /// Demo for the given class.
    #[must_use]
    pub fn demo(&self, class: ComplexityClass) -> &dyn ComplexityDemo {
        match class {
            ComplexityClass::Constant => &self.constant,
            ComplexityClass::Linear => &self.linear,
            ComplexityClass::Quadratic => &self.quadratic,
            ComplexityClass::Logarithmic => &self.logarithmic,
        }
    }

    /// Mutable demo for the given class.
    pub fn demo_mut(&mut self, class: ComplexityClass) -> &mut dyn ComplexityDemo {
        match class {
            ComplexityClass::Constant => &mut self.constant,
            ComplexityClass::Linear => &mut self.linear,
            ComplexityClass::Quadratic => &mut self.quadratic,
            ComplexityClass::Logarithmic => &mut self.logarithmic,
        }
    }

    /// Demo holding keyboard focus.
    #[must_use]
    pub fn focused(&self) -> &dyn ComplexityDemo {
        self.demo(self.focus)
    }

    /// Mutable demo holding keyboard focus.
    pub fn focused_mut(&mut self) -> &mut dyn ComplexityDemo {
        self.demo_mut(self.focus)
    }

    /// Advance every running demo whose pacer is due, then bump the
    /// frame counter.
    ///
    /// Each demo's ticks are counted from the frame its run was armed,
    /// so the first step always lands one whole step delay after the
    /// run button, however long the app has been idling.
    pub fn tick(&mut self, tick_rate: Duration) {
        let frame = self.frame_count;
        for class in ComplexityClass::ALL {
            let elapsed = frame.saturating_sub(self.run_started[class as usize]);
            let demo = self.demo_mut(class);
            if !demo.is_running() {
                continue;
            }
            let pacer = StepPacer::new(class, demo.size());
            if pacer.should_step(elapsed, tick_rate) {
                demo.step();
            }
        }
        self.frame_count += 1;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Char('1') => self.focus = ComplexityClass::Constant,
            KeyCode::Char('2') => self.focus = ComplexityClass::Linear,
            KeyCode::Char('3') => self.focus = ComplexityClass::Quadratic,
            KeyCode::Char('4') => self.focus = ComplexityClass::Logarithmic,
            KeyCode::Char('+' | '=') => self.adjust_size(1),
            KeyCode::Char('-') => self.adjust_size(-1),
            KeyCode::Enter | KeyCode::Char('r') => self.run_focused(),
            KeyCode::Char('R') => self.focused_mut().reset(),
            _ => {}
        }
    }

    /// Move focus to the next demo in display order.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            ComplexityClass::Constant => ComplexityClass::Linear,
            ComplexityClass::Linear => ComplexityClass::Quadratic,
            ComplexityClass::Quadratic => ComplexityClass::Logarithmic,
            ComplexityClass::Logarithmic => ComplexityClass::Constant,
        };
    }

    /// Adjust the focused demo's size by `delta`, clamped to its slider
    /// bounds. Resizing resets any run in flight.
    #[allow(clippy::cast_possible_wrap)] // Slider sizes are tiny
    pub fn adjust_size(&mut self, delta: i64) {
        let slider = *self.config.slider_for(self.focus);
        let demo = self.focused_mut();
        let current = demo.size() as i64;
        let requested = usize::try_from((current + delta).max(0)).unwrap_or(0);
        demo.set_size(slider.clamp(requested));
    }

    /// Arm a run of the focused demo. A press while a run is in flight
    /// is ignored, matching the run buttons.
    pub fn run_focused(&mut self) {
        let focus = self.focus;
        if self.focused_mut().begin().is_ok() {
            self.run_started[focus as usize] = self.frame_count;
        }
    }

    /// Check if the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether any demo has a run in flight.
    #[must_use]
    pub fn any_running(&self) -> bool {
        ComplexityClass::ALL
            .iter()
            .any(|&class| self.demo(class).is_running())
    }
}

impl Default for LabApp {
    fn default() -> Self {
        Self::new(LabConfig::default())
    }
}
