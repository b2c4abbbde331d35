//! Gradient color palettes for category coloring.
//!
//! A [`ColorPalette`] precomputes a fixed number of colors along the gradient
//! between two endpoint colors and hands them out round-robin. Categories that
//! appear first get the colors nearest the begin endpoint; once every color
//! has been handed out the palette wraps around and reuses them in the same
//! order.
//!
//! Interpolation positions are jittered by a seeded random offset so that
//! neighboring colors do not band into an obviously uniform ramp. The jitter
//! is strictly smaller than half an interpolation step, so palette order
//! still follows the gradient and no two entries collapse into one. The same
//! seed always produces the same palette.

use log::trace;
use rand::{RngExt, SeedableRng, rngs::StdRng};

use crate::color::Color;

/// Seed used by [`ColorPalette::new`]. Palettes are reproducible across runs
/// unless the caller picks a seed of their own.
const DEFAULT_SEED: u64 = 0;

/// Maximum jitter applied to an interior interpolation position, as a
/// fraction of one step. Must stay below 0.5 to keep entries ordered and
/// distinct.
const JITTER_FRACTION: f32 = 0.4;

/// A fixed-size gradient palette handing out colors round-robin.
///
/// # Examples
///
/// ```
/// use chordwheel_core::{color::Color, palette::ColorPalette};
///
/// let begin = Color::new("#ff0000").unwrap();
/// let end = Color::new("#0000ff").unwrap();
/// let mut palette = ColorPalette::new(begin, end, 3);
///
/// let first = palette.next_color();
/// let second = palette.next_color();
/// let third = palette.next_color();
///
/// // The fourth draw wraps back around to the first color.
/// assert_eq!(palette.next_color(), first);
/// assert_ne!(first, second);
/// assert_ne!(second, third);
/// ```
#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<Color>,
    cursor: usize,
}

impl ColorPalette {
    /// Creates a palette of `size` colors interpolated from `begin` to `end`,
    /// using the default jitter seed.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. A zero-size palette has no color to hand
    /// out and indicates a programming error at the call site.
    pub fn new(begin: Color, end: Color, size: usize) -> Self {
        Self::with_seed(begin, end, size, DEFAULT_SEED)
    }

    /// Creates a palette of `size` colors with an explicit jitter seed.
    ///
    /// The first color is exactly `begin` and the last exactly `end`;
    /// interior colors sit near their even spacing, nudged by a seeded
    /// random offset.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn with_seed(begin: Color, end: Color, size: usize, seed: u64) -> Self {
        assert!(size > 0, "palette size must be at least 1, got {size}");

        let mut rng = StdRng::seed_from_u64(seed);
        let mut colors = Vec::with_capacity(size);

        if size == 1 {
            colors.push(begin);
        } else {
            let step = 1.0 / (size - 1) as f32;
            for i in 0..size {
                // Endpoints stay exact; only interior positions are jittered.
                let t = if i == 0 || i == size - 1 {
                    i as f32 * step
                } else {
                    let jitter = rng.random_range(-JITTER_FRACTION..JITTER_FRACTION) * step;
                    (i as f32).mul_add(step, jitter) // i * step + jitter
                };
                colors.push(begin.lerp(end, t));
            }
        }

        trace!(size = size, seed = seed; "gradient palette built");

        Self { colors, cursor: 0 }
    }

    /// Returns the next color in the palette, wrapping around after the last
    /// one. Never fails.
    pub fn next_color(&mut self) -> Color {
        let color = self.colors[self.cursor];
        self.cursor = (self.cursor + 1) % self.colors.len();
        color
    }

    /// Returns the precomputed colors in hand-out order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette holds no colors.
    ///
    /// Always false: construction rejects zero-size palettes.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
