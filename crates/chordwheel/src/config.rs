//! Configuration types for chordwheel rendering.
//!
//! This module provides configuration structures that control how wheels
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout, style, and palette settings.
//! - [`LayoutConfig`] - Controls wheel geometry: rim radius and label reach.
//! - [`StyleConfig`] - Controls visual styling: colors, stroke widths, fonts.
//! - [`PaletteConfig`] - Controls the category color gradient.
//!
//! Color fields are stored as CSS color strings and parsed on access, so a
//! deserialized config with a bad color only fails when the color is used.
//!
//! # Example
//!
//! ```
//! # use chordwheel::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().rim_color().is_ok());
//! ```

use serde::Deserialize;

use chordwheel_core::color::Color;

/// Top-level configuration combining layout, style, and palette settings.
///
/// Groups [`LayoutConfig`], [`StyleConfig`], and [`PaletteConfig`] into a
/// single configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Palette configuration section.
    #[serde(default)]
    palette: PaletteConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `layout` - Wheel geometry settings.
    /// * `style` - Visual styling options.
    /// * `palette` - Category color gradient settings.
    pub fn new(layout: LayoutConfig, style: StyleConfig, palette: PaletteConfig) -> Self {
        Self {
            layout,
            style,
            palette,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the palette configuration.
    pub fn palette(&self) -> &PaletteConfig {
        &self.palette
    }
}

/// Wheel geometry configuration.
///
/// Controls the rim radius and how far label anchor rays reach beyond it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rim radius in pixels.
    radius: f32,

    /// Gap between the rim and the start of each label ray, in pixels.
    label_spacing: f32,

    /// Length of each label ray beyond the rim, in pixels.
    label_max_length: f32,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified geometry.
    ///
    /// # Arguments
    ///
    /// * `radius` - Rim radius in pixels.
    /// * `label_spacing` - Gap between rim and label rays.
    /// * `label_max_length` - Label ray length beyond the rim.
    pub fn new(radius: f32, label_spacing: f32, label_max_length: f32) -> Self {
        Self {
            radius,
            label_spacing,
            label_max_length,
        }
    }

    /// Returns the rim radius in pixels.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the gap between the rim and label rays.
    pub fn label_spacing(&self) -> f32 {
        self.label_spacing
    }

    /// Returns the label ray length beyond the rim.
    pub fn label_max_length(&self) -> f32 {
        self.label_max_length
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 300.0,
            label_spacing: 17.0,
            label_max_length: 300.0,
        }
    }
}

/// Visual styling configuration for rendered wheels.
///
/// The rim color doubles as the fill for slot markers and labels, so a
/// single dark-gray default covers every non-chord element.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Document background [`Color`] as a color string, or none for transparent.
    background_color: Option<String>,

    /// Rim, slot, and label [`Color`] as a color string.
    rim_color: String,

    /// Rim stroke width in pixels.
    rim_width: f32,

    /// Chord stroke width in pixels.
    chord_width: f32,

    /// Slot marker radius in pixels.
    slot_radius: f32,

    /// Label font family name.
    font_family: String,

    /// Label font size in pixels.
    font_size: f32,
}

impl StyleConfig {
    /// Returns a copy with the given background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns a copy with the given rim color string.
    pub fn with_rim_color(mut self, color: impl Into<String>) -> Self {
        self.rim_color = color.into();
        self
    }

    /// Returns a copy with the given rim stroke width.
    pub fn with_rim_width(mut self, width: f32) -> Self {
        self.rim_width = width;
        self
    }

    /// Returns a copy with the given chord stroke width.
    pub fn with_chord_width(mut self, width: f32) -> Self {
        self.chord_width = width;
        self
    }

    /// Returns a copy with the given slot marker radius.
    pub fn with_slot_radius(mut self, radius: f32) -> Self {
        self.slot_radius = radius;
        self
    }

    /// Returns a copy with the given label font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Returns a copy with the given label font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed rim [`Color`], shared by slots and labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn rim_color(&self) -> Result<Color, String> {
        Color::new(&self.rim_color).map_err(|err| format!("Invalid rim color in config: {err}"))
    }

    /// Returns the rim stroke width in pixels.
    pub fn rim_width(&self) -> f32 {
        self.rim_width
    }

    /// Returns the chord stroke width in pixels.
    pub fn chord_width(&self) -> f32 {
        self.chord_width
    }

    /// Returns the slot marker radius in pixels.
    pub fn slot_radius(&self) -> f32 {
        self.slot_radius
    }

    /// Returns the label font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the label font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            rim_color: "#444444".to_string(),
            rim_width: 4.0,
            chord_width: 3.0,
            slot_radius: 10.0,
            font_family: "sans-serif".to_string(),
            font_size: 34.0,
        }
    }
}

/// Category color gradient configuration.
///
/// The palette interpolates from `begin` to `end` over `size` entries; the
/// seed drives the jitter applied to interior entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Gradient start [`Color`] as a color string.
    begin: String,

    /// Gradient end [`Color`] as a color string.
    end: String,

    /// Number of palette entries.
    size: usize,

    /// Seed for the interior-entry jitter.
    seed: u64,
}

impl PaletteConfig {
    /// Returns a copy with the given gradient start color string.
    pub fn with_begin(mut self, color: impl Into<String>) -> Self {
        self.begin = color.into();
        self
    }

    /// Returns a copy with the given gradient end color string.
    pub fn with_end(mut self, color: impl Into<String>) -> Self {
        self.end = color.into();
        self
    }

    /// Returns a copy with the given palette size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Returns a copy with the given jitter seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the parsed gradient start [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn begin(&self) -> Result<Color, String> {
        Color::new(&self.begin)
            .map_err(|err| format!("Invalid palette begin color in config: {err}"))
    }

    /// Returns the parsed gradient end [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn end(&self) -> Result<Color, String> {
        Color::new(&self.end).map_err(|err| format!("Invalid palette end color in config: {err}"))
    }

    /// Returns the number of palette entries.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the jitter seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            begin: "#ff0000".to_string(),
            end: "#0000ff".to_string(),
            size: 50,
            seed: 0,
        }
    }
}
