//! Panel appearance and animation settings.
//!
//! [`PanelConfig`] is plain data with sensible defaults. The crate performs
//! no file I/O: hosts embed the struct in their own configuration files
//! (everything derives `serde` and a JSON schema) and hand it to
//! [`crate::panel::SidePanel`].

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sizing, spacing, and animation settings for the side panel.
///
/// All fields have defaults matching the reference appearance. Out-of-range
/// values are clamped by [`PanelConfig::validate_and_clamp`] with a logged
/// warning instead of failing.
///
/// # Example TOML
/// ```toml
/// [panel]
/// expanded_width = 200.0
/// toggle_diameter = 48.0
/// padding = 8.0
/// animation_ms = 300
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PanelConfig {
    /// Panel width when fully expanded, in host units
    pub expanded_width: f32,

    /// Diameter of the toggle affordance; also the fully-collapsed width
    pub toggle_diameter: f32,

    /// Spacing between interior elements
    pub padding: f32,

    /// Height of the separator lines
    pub divider_height: f32,

    /// Button edge as a fraction of the interior content width
    pub button_scale: f32,

    /// Width transition duration in milliseconds
    pub animation_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            expanded_width: 200.0,
            toggle_diameter: 48.0,
            padding: 8.0,
            divider_height: 1.0,
            button_scale: 0.9,
            animation_ms: 300,
        }
    }
}

impl PanelConfig {
    /// Clamps all values to usable ranges, logging a warning for each
    /// correction.
    ///
    /// Validated ranges:
    /// - `toggle_diameter`: 16.0 - 128.0
    /// - `expanded_width`: at least `toggle_diameter`, at most 1024.0
    /// - `padding`: 0.0 - 64.0
    /// - `divider_height`: 0.0 - 16.0
    /// - `button_scale`: 0.1 - 1.0
    /// - `animation_ms`: at most 5000
    pub fn validate_and_clamp(&mut self) {
        if !(16.0..=128.0).contains(&self.toggle_diameter) {
            log::warn!(
                "Invalid toggle_diameter {:.1}, clamping to 16.0-128.0 range",
                self.toggle_diameter
            );
            self.toggle_diameter = clamp_finite(self.toggle_diameter, 16.0, 128.0);
        }

        let min_width = self.toggle_diameter;
        if !(min_width..=1024.0).contains(&self.expanded_width) {
            log::warn!(
                "Invalid expanded_width {:.1}, clamping to {:.1}-1024.0 range",
                self.expanded_width,
                min_width
            );
            self.expanded_width = clamp_finite(self.expanded_width, min_width, 1024.0);
        }

        if !(0.0..=64.0).contains(&self.padding) {
            log::warn!("Invalid padding {:.1}, clamping to 0.0-64.0 range", self.padding);
            self.padding = clamp_finite(self.padding, 0.0, 64.0);
        }

        if !(0.0..=16.0).contains(&self.divider_height) {
            log::warn!(
                "Invalid divider_height {:.1}, clamping to 0.0-16.0 range",
                self.divider_height
            );
            self.divider_height = clamp_finite(self.divider_height, 0.0, 16.0);
        }

        if !(0.1..=1.0).contains(&self.button_scale) {
            log::warn!(
                "Invalid button_scale {:.2}, clamping to 0.1-1.0 range",
                self.button_scale
            );
            self.button_scale = clamp_finite(self.button_scale, 0.1, 1.0);
        }

        if self.animation_ms > 5000 {
            log::warn!(
                "Invalid animation_ms {}, clamping to 5000",
                self.animation_ms
            );
            self.animation_ms = 5000;
        }
    }

    /// Width transition duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

/// Like `f32::clamp` but NaN resolves to the lower bound.
fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}
