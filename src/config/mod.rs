//! Configuration with YAML schema and validation.
//!
//! Mistake-proofing through type-safe structs, serde schema checking,
//! and runtime semantic validation: a slider whose default falls outside
//! its own bounds is rejected before any demo is built.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::ComplexityClass;
use crate::error::{LabError, LabResult};

/// Top-level lab configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Master seed for the random probe index and search target.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Per-demo slider bounds and defaults.
    #[validate(nested)]
    #[serde(default)]
    pub sliders: SliderSet,

    /// Theme colors for the canvas frontend.
    #[serde(default)]
    pub theme: ThemeConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

const fn default_seed() -> u64 {
    42
}

impl LabConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> LabResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> LabResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for programmatic construction.
    #[must_use]
    pub fn builder() -> LabConfigBuilder {
        LabConfigBuilder::default()
    }

    /// Slider settings for the given complexity class.
    #[must_use]
    pub const fn slider_for(&self, class: ComplexityClass) -> &SliderConfig {
        match class {
            ComplexityClass::Constant => &self.sliders.constant,
            ComplexityClass::Linear => &self.sliders.linear,
            ComplexityClass::Quadratic => &self.sliders.quadratic,
            ComplexityClass::Logarithmic => &self.sliders.logarithmic,
        }
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> LabResult<()> {
        for class in ComplexityClass::ALL {
            let slider = self.slider_for(class);
            if slider.min < 2 {
                return Err(LabError::config(format!(
                    "{class} slider minimum must be at least 2, got {}",
                    slider.min
                )));
            }
            if slider.min > slider.max {
                return Err(LabError::config(format!(
                    "{class} slider has min {} > max {}",
                    slider.min, slider.max
                )));
            }
            if slider.default < slider.min || slider.default > slider.max {
                return Err(LabError::config(format!(
                    "{class} slider default {} outside [{}, {}]",
                    slider.default, slider.min, slider.max
                )));
            }
        }
        Ok(())
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            seed: default_seed(),
            sliders: SliderSet::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Slider bounds for one demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
    /// Smallest selectable n.
    pub min: usize,
    /// Largest selectable n.
    pub max: usize,
    /// Initial n.
    pub default: usize,
}

impl SliderConfig {
    /// Create a slider with the given bounds.
    #[must_use]
    pub const fn new(min: usize, max: usize, default: usize) -> Self {
        Self { min, max, default }
    }

    /// Clamp a requested size into this slider's range.
    #[must_use]
    pub fn clamp(&self, n: usize) -> usize {
        n.clamp(self.min, self.max)
    }
}

/// Slider settings for all four demos.
///
/// Defaults keep the animations close to the original pacing: the grid
/// demo caps at 12 because a full fill already takes n² × 20ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SliderSet {
    /// O(1) array length.
    #[serde(default = "default_constant_slider")]
    pub constant: SliderConfig,
    /// O(n) bar count.
    #[serde(default = "default_linear_slider")]
    pub linear: SliderConfig,
    /// O(n²) grid side length.
    #[serde(default = "default_quadratic_slider")]
    pub quadratic: SliderConfig,
    /// O(log n) array length.
    #[serde(default = "default_logarithmic_slider")]
    pub logarithmic: SliderConfig,
}

const fn default_constant_slider() -> SliderConfig {
    SliderConfig::new(2, 50, 10)
}

const fn default_linear_slider() -> SliderConfig {
    SliderConfig::new(2, 50, 10)
}

const fn default_quadratic_slider() -> SliderConfig {
    SliderConfig::new(2, 12, 5)
}

const fn default_logarithmic_slider() -> SliderConfig {
    SliderConfig::new(4, 64, 16)
}

impl Default for SliderSet {
    fn default() -> Self {
        Self {
            constant: default_constant_slider(),
            linear: default_linear_slider(),
            quadratic: default_quadratic_slider(),
            logarithmic: default_logarithmic_slider(),
        }
    }
}

/// Theme colors, as CSS color strings.
///
/// The canvas frontend prefers the page's CSS custom properties and
/// falls back to these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ThemeConfig {
    /// Canvas background.
    pub background: String,
    /// Highlight for the probed cell.
    pub accent: String,
    /// Inactive bars and cells.
    pub bar: String,
    /// Visited cells and the found slot.
    pub fill: String,
    /// Active search window.
    pub window: String,
    /// Cell borders.
    pub border: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#2e3440".to_string(),
            accent: "#88c0d0".to_string(),
            bar: "#4c566a".to_string(),
            fill: "#a3be8c".to_string(),
            window: "#8fbcbb".to_string(),
            border: "#4c566a".to_string(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct LabConfigBuilder {
    seed: Option<u64>,
    sliders: Option<SliderSet>,
    theme: Option<ThemeConfig>,
}

impl LabConfigBuilder {
    /// Set the master seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set all slider bounds at once.
    #[must_use]
    pub const fn sliders(mut self, sliders: SliderSet) -> Self {
        self.sliders = Some(sliders);
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> LabConfig {
        let mut config = LabConfig::default();
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(sliders) = self.sliders {
            config.sliders = sliders;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        config
    }
}
