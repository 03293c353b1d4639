//! Widget configuration, as supplied by the host before construction.
//!
//! Keys follow the attribute names hosts already use (`progressColor`,
//! `strokeWidth`, ...). Every field has a default, but a configuration
//! document itself must be present: an empty document is an error.
//!
//! ```
//! use roundprogress_widgets::{ProgressStyle, RoundProgressConfig};
//!
//! let config = RoundProgressConfig::from_yaml(
//!     "max: 200\nprogress: 50\nstyle: half\nprogressColor: '#ff5722'\n",
//! )
//! .expect("valid config");
//! assert_eq!(config.max, 200);
//! assert_eq!(config.style, ProgressStyle::Half);
//! ```

use crate::arc_geometry::{BackgroundStyle, ProgressStyle};
use crate::error::ConfigError;
use roundprogress_core::Color;
use serde::{Deserialize, Serialize};

/// Default progress arc color (#2196F3).
pub const DEFAULT_PROGRESS_COLOR: u32 = 0xFF21_96F3;

/// Default background arc color (#E0E0E0).
pub const DEFAULT_BACKGROUND_COLOR: u32 = 0xFFE0_E0E0;

/// Typed construction options for a round progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RoundProgressConfig {
    /// Background arc color
    #[serde(with = "color_value")]
    pub background_color: Color,
    /// Progress arc and cap color
    #[serde(with = "color_value")]
    pub progress_color: Color,
    /// Draw caps even at zero progress
    pub zero_progress_enabled: bool,
    /// Upper bound of the progress range
    pub max: i32,
    /// Initial progress
    pub progress: i32,
    /// Progress arc stroke width
    pub stroke_width: f32,
    /// Background arc stroke width
    pub background_stroke_width: f32,
    /// Cap radius
    #[serde(alias = "endCapsSize")]
    pub end_cap_size: f32,
    /// Whether caps are drawn
    #[serde(alias = "endCapsVisible")]
    pub end_cap_visible: bool,
    /// Animation duration in milliseconds
    pub animation_duration: u32,
    /// Full circle or semicircle
    pub style: ProgressStyle,
    /// Solid or dotted background
    pub background_style: BackgroundStyle,
}

impl Default for RoundProgressConfig {
    fn default() -> Self {
        Self {
            background_color: Color::from_argb(DEFAULT_BACKGROUND_COLOR),
            progress_color: Color::from_argb(DEFAULT_PROGRESS_COLOR),
            zero_progress_enabled: true,
            max: 100,
            progress: 0,
            stroke_width: 8.0,
            background_stroke_width: 4.0,
            end_cap_size: 4.0,
            end_cap_visible: true,
            animation_duration: 1000,
            style: ProgressStyle::Full,
            background_style: BackgroundStyle::Solid,
        }
    }
}

impl RoundProgressConfig {
    /// Parse a YAML document.
    ///
    /// An empty or `null` document is [`ConfigError::MissingConfiguration`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Err(ConfigError::MissingConfiguration);
        }
        serde_yaml_ng::from_str::<Option<Self>>(yaml)?.ok_or(ConfigError::MissingConfiguration)
    }

    /// Parse a TOML document.
    ///
    /// An empty document is [`ConfigError::MissingConfiguration`].
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        if toml.trim().is_empty() {
            return Err(ConfigError::MissingConfiguration);
        }
        Ok(toml::from_str(toml)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the progress color.
    #[must_use]
    pub fn with_progress_color(mut self, color: Color) -> Self {
        self.progress_color = color;
        self
    }

    /// Set whether caps show at zero progress.
    #[must_use]
    pub fn with_zero_progress_enabled(mut self, enabled: bool) -> Self {
        self.zero_progress_enabled = enabled;
        self
    }

    /// Set the maximum.
    #[must_use]
    pub fn with_max(mut self, max: i32) -> Self {
        self.max = max;
        self
    }

    /// Set the initial progress.
    #[must_use]
    pub fn with_progress(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    /// Set the progress stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the background stroke width.
    #[must_use]
    pub fn with_background_stroke_width(mut self, width: f32) -> Self {
        self.background_stroke_width = width;
        self
    }

    /// Set the cap radius.
    #[must_use]
    pub fn with_end_cap_size(mut self, size: f32) -> Self {
        self.end_cap_size = size;
        self
    }

    /// Set cap visibility.
    #[must_use]
    pub fn with_end_cap_visible(mut self, visible: bool) -> Self {
        self.end_cap_visible = visible;
        self
    }

    /// Set the animation duration in milliseconds.
    #[must_use]
    pub fn with_animation_duration(mut self, millis: u32) -> Self {
        self.animation_duration = millis;
        self
    }

    /// Set the progress style.
    #[must_use]
    pub fn with_style(mut self, style: ProgressStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the background style.
    #[must_use]
    pub fn with_background_style(mut self, style: BackgroundStyle) -> Self {
        self.background_style = style;
        self
    }
}

/// Colors as `#RRGGBB` / `#RRGGBBAA` strings or packed `0xAARRGGBB` integers.
mod color_value {
    use roundprogress_core::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ColorRepr {
        Packed(u32),
        Hex(String),
    }

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex_with_alpha())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Packed(argb) => Ok(Color::from_argb(argb)),
            ColorRepr::Hex(hex) => Color::from_hex(&hex)
                .map_err(|e| de::Error::custom(format!("invalid color '{hex}': {e}"))),
        }
    }
}
