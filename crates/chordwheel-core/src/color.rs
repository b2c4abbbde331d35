//! Color handling for chordwheel scenes
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for working with colors
//! in the chordwheel project.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
/// This provides convenience methods for working with colors in the chordwheel project
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordwheel_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Arguments
    ///
    /// * `alpha` - The alpha value to set, typically between 0.0 (fully transparent)
    ///   and 1.0 (fully opaque)
    ///
    /// # Returns
    ///
    /// A new `Color` instance with the updated alpha value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordwheel_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let semi_transparent_red = red.with_alpha(0.5);
    /// assert_eq!(semi_transparent_red.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// # Returns
    ///
    /// The alpha value as a `f32` between 0.0 and 1.0, where:
    /// - 0.0 = fully transparent
    /// - 1.0 = fully opaque
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Linearly interpolates each RGB channel between this color and `other`.
    ///
    /// `t = 0.0` yields this color and `t = 1.0` yields `other`; values in
    /// between mix the channels proportionally. The parameter is clamped to
    /// `[0.0, 1.0]`. Both colors are read in their parsed component form, so
    /// endpoints should come from the same color space (hex and named CSS
    /// colors both parse as sRGB). The result is fully opaque; apply
    /// [`with_alpha`](Self::with_alpha) afterwards for transparency.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordwheel_core::color::Color;
    ///
    /// let black = Color::new("#000000").unwrap();
    /// let white = Color::new("#ffffff").unwrap();
    /// let gray = black.lerp(white, 0.5);
    /// assert_eq!(gray.to_string(), Color::new("#808080").unwrap().to_string());
    /// ```
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let a = self.color.components;
        let b = other.color.components;

        let channel = |i: usize| {
            let mixed = a[i] + (b[i] - a[i]) * t;
            (mixed.clamp(0.0, 1.0) * 255.0).round() as u8
        };

        let hex = format!("#{:02x}{:02x}{:02x}", channel(0), channel(1), channel(2));
        Self::new(&hex).expect("formatted hex string is a valid CSS color")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

// For compatibility with code that passes colors as SVG attribute strings
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}
