//! Abstract draw commands with layer-based z-ordering.
//!
//! This module is the boundary between wheel construction and any concrete
//! drawing backend. Scene composition produces an ordered list of abstract
//! commands; backends (an SVG writer, a raster canvas, a test harness)
//! consume the list without the core ever touching their APIs.
//!
//! # Overview
//!
//! - [`SceneLayer`]: An enum defining available rendering layers in paint order
//! - [`DrawCommand`]: One abstract drawing instruction (circle, curve, text on a path)
//! - [`Stroke`]: Outline color and width for stroked commands
//! - [`TextStyle`]: Font and fill for text commands
//! - [`Scene`]: A structure collecting commands by layer
//!
//! # Example
//!
//! ```
//! use chordwheel_core::draw::{DrawCommand, Scene, SceneLayer, Stroke};
//! use chordwheel_core::geometry::Point;
//!
//! let mut scene = Scene::new();
//!
//! scene.add(
//!     SceneLayer::Rim,
//!     DrawCommand::Circle {
//!         center: Point::new(0.0, 0.0),
//!         radius: 100.0,
//!         fill: None,
//!         stroke: Some(Stroke::default()),
//!     },
//! );
//!
//! // Commands come back grouped by layer, bottom to top.
//! let layers = scene.into_layers();
//! assert_eq!(layers.len(), 1);
//! assert_eq!(layers[0].0, SceneLayer::Rim);
//! ```

use log::debug;

use crate::{
    color::Color,
    geometry::{Bounds, Point, QuadCurve, Size},
};

/// Defines the rendering layers of a wheel scene.
///
/// Layers are painted from bottom to top in the order defined by variant
/// declaration. The `Ord` derive uses declaration order, so the first variant
/// paints first (bottom) and the last variant paints last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SceneLayer {
    /// The wheel rim circle - paints first, beneath everything
    Rim,
    /// Chord curves between related slots
    Chords,
    /// Filled slot markers on the rim
    Slots,
    /// Item labels riding their anchor paths - paints last
    Labels,
}

impl SceneLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rim => "rim",
            Self::Chords => "chords",
            Self::Slots => "slots",
            Self::Labels => "labels",
        }
    }
}

/// Outline color and width for stroked commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    color: Color,
    width: f32,
}

impl Stroke {
    /// Creates a stroke with the given color and width
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for Stroke {
    /// Black, 1px wide.
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Font and fill settings for a text command.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_family: String,
    font_size: f32,
    color: Color,
}

impl TextStyle {
    /// Creates a text style from font family, size, and fill color
    pub fn new(font_family: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            color,
        }
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the text fill color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for TextStyle {
    /// Black sans-serif at 16px.
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 16.0,
            color: Color::default(),
        }
    }
}

/// Which half of the wheel a label's anchor ray points into.
///
/// Labels on the right half read outward along their anchor path. Labels on
/// the left half would come out upside down on the same path direction, so
/// backends render them along the reversed path with end alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSide {
    /// Anchor ray points into the right half (angle below half a turn)
    Right,
    /// Anchor ray points into the left half
    Left,
}

/// One abstract drawing instruction.
///
/// Commands carry geometry and style only; how they become pixels or markup
/// is the backend's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A circle, filled and/or stroked.
    Circle {
        center: Point,
        radius: f32,
        /// Fill color, or None for an unfilled outline
        fill: Option<Color>,
        /// Outline, or None for a fill-only circle
        stroke: Option<Stroke>,
    },
    /// A stroked quadratic curve.
    Curve { curve: QuadCurve, stroke: Stroke },
    /// Text rendered along the straight path from `start` to `end`.
    TextOnPath {
        start: Point,
        end: Point,
        side: LabelSide,
        text: String,
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Returns a conservative bounding box for this command.
    ///
    /// Text extent is approximated by its anchor path; backends that need
    /// exact text metrics measure for themselves.
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Circle { center, radius, .. } => {
                Bounds::new_from_center(*center, Size::new(radius * 2.0, radius * 2.0))
            }
            Self::Curve { curve, .. } => curve.bounds(),
            Self::TextOnPath { start, end, .. } => Bounds::enclosing(&[*start, *end]),
        }
    }
}

/// Draw commands grouped by rendering layer.
///
/// This struct collects commands and organizes them by layer. Commands within
/// one layer keep their insertion order; across layers the paint order follows
/// [`SceneLayer`]'s declaration order, bottom to top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    items: Vec<(SceneLayer, DrawCommand)>,
}

impl Scene {
    /// Creates a new empty `Scene`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single command to the specified layer.
    ///
    /// Commands are appended to the layer in the order they are added.
    pub fn add(&mut self, layer: SceneLayer, command: DrawCommand) {
        self.items.push((layer, command));
    }

    /// Merges all commands from another `Scene` into this one.
    ///
    /// Commands from the other scene are appended after existing commands in
    /// their respective layers.
    pub fn merge(&mut self, other: Scene) {
        self.items.extend(other.items);
    }

    /// Returns `true` if the scene holds no commands.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total number of commands across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the merged bounding box of every command in the scene.
    ///
    /// Returns [`Bounds::default`] for an empty scene.
    pub fn bounds(&self) -> Bounds {
        let mut commands = self.items.iter().map(|(_, command)| command.bounds());
        let Some(first) = commands.next() else {
            return Bounds::default();
        };
        commands.fold(first, |acc, b| acc.merge(&b))
    }

    /// Groups all commands by layer, consuming the scene.
    ///
    /// Layers come back in paint order, bottom to top, and only layers that
    /// actually hold commands appear. Within a layer, commands keep their
    /// insertion order (the sort is stable).
    pub fn into_layers(mut self) -> Vec<(SceneLayer, Vec<DrawCommand>)> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result: Vec<(SceneLayer, Vec<DrawCommand>)> = Vec::new();
        for (layer, command) in self.items {
            match result.last_mut() {
                Some((current, commands)) if *current == layer => commands.push(command),
                _ => result.push((layer, vec![command])),
            }
        }

        debug!(layer_count = result.len(); "scene grouped into layers");

        result
    }
}
