//! Viewer configuration, loaded from an optional TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::animation::{WrapPolicy, DEFAULT_SPIN_RATE};
use crate::error::ConfigError;
use crate::projection::REFERENCE_EXTENT_PX;

/// Largest accepted cell dimension in logical pixels.
pub const MAX_CELL_PX: u32 = 256;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
}

/// Window and drawing-surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical window size in pixels.
    pub width: u32,
    pub height: u32,
    /// Pixels that span two world units (-1 to 1) across the window.
    pub reference_extent_px: f32,
    /// Logical pixels covered by one terminal cell.
    pub cell_width_px: u32,
    pub cell_height_px: u32,
    /// Character stamped along every edge.
    pub line_glyph: char,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tetrahedron: Press x, y, z".into(),
            width: 250,
            height: 250,
            reference_extent_px: REFERENCE_EXTENT_PX,
            cell_width_px: 8,
            cell_height_px: 16,
            line_glyph: '#',
        }
    }
}

/// Spin speed and angle wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Radians per second.
    pub spin_rate: f32,
    pub wrap: WrapPolicy,
    /// How long the idle loop waits for input before the next tick.
    pub idle_sleep_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            spin_rate: DEFAULT_SPIN_RATE,
            wrap: WrapPolicy::default(),
            idle_sleep_ms: 10,
        }
    }
}

impl ViewerConfig {
    /// Parse a TOML document; missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::ValidationError(
                "window width and height must be positive".into(),
            ));
        }
        if !(window.reference_extent_px.is_finite() && window.reference_extent_px > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "reference_extent_px must be a positive number, got {}",
                window.reference_extent_px
            )));
        }
        let cell_range = 1..=MAX_CELL_PX;
        if !cell_range.contains(&window.cell_width_px)
            || !cell_range.contains(&window.cell_height_px)
        {
            return Err(ConfigError::ValidationError(format!(
                "cell dimensions must be between 1 and {MAX_CELL_PX}, got {}x{}",
                window.cell_width_px, window.cell_height_px
            )));
        }
        if window.line_glyph.is_control() || window.line_glyph.is_whitespace() {
            return Err(ConfigError::ValidationError(format!(
                "line_glyph must be a visible character, got {:?}",
                window.line_glyph
            )));
        }
        let spin_rate = self.animation.spin_rate;
        if !(spin_rate.is_finite() && spin_rate >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "spin_rate must be a non-negative number, got {spin_rate}"
            )));
        }
        Ok(())
    }
}

/// Load and validate config from a TOML file.
pub fn load_from_path(path: &Path) -> Result<ViewerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;
    let config = ViewerConfig::from_toml_str(&content)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}
