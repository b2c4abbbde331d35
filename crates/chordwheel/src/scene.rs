//! Scene composition: from laid-out wheel to draw commands.
//!
//! [`SceneBuilder`] is the adapter between the model/layout side and any
//! drawing backend. It owns the color state of a wheel: a gradient palette
//! plus a memo of which color each category has been assigned, so a category
//! keeps its color across re-renders. Composition resolves chord colors and
//! alpha, then emits one layered [`Scene`] of abstract commands.
//!
//! Chord transparency encodes category size: the more members a category
//! has, the fainter its chords, down to a floor. The category count is
//! clamped to 9, so `alpha = 255 − min(count, 9)·25` never drops below 30.

use std::{collections::HashMap, fmt};

use chordwheel_core::{
    color::Color,
    draw::{DrawCommand, Scene, SceneLayer, Stroke, TextStyle},
    identifier::Key,
    palette::ColorPalette,
};
use log::debug;

use crate::{
    layout::WheelLayout,
    model::{Category, ChordGraph},
};

/// Visual styling for everything in a wheel scene except chord colors,
/// which come from the palette.
#[derive(Debug, Clone)]
pub struct WheelStyle {
    rim_stroke: Stroke,
    chord_width: f32,
    slot_radius: f32,
    slot_color: Color,
    text: TextStyle,
}

impl WheelStyle {
    /// Creates the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the given rim stroke
    pub fn with_rim_stroke(mut self, stroke: Stroke) -> Self {
        self.rim_stroke = stroke;
        self
    }

    /// Returns a copy with the given chord stroke width
    pub fn with_chord_width(mut self, width: f32) -> Self {
        self.chord_width = width;
        self
    }

    /// Returns a copy with the given slot marker radius
    pub fn with_slot_radius(mut self, radius: f32) -> Self {
        self.slot_radius = radius;
        self
    }

    /// Returns a copy with the given slot marker fill color
    pub fn with_slot_color(mut self, color: Color) -> Self {
        self.slot_color = color;
        self
    }

    /// Returns a copy with the given label text style
    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    /// Returns the rim stroke
    pub fn rim_stroke(&self) -> Stroke {
        self.rim_stroke
    }

    /// Returns the chord stroke width
    pub fn chord_width(&self) -> f32 {
        self.chord_width
    }

    /// Returns the slot marker radius
    pub fn slot_radius(&self) -> f32 {
        self.slot_radius
    }

    /// Returns the slot marker fill color
    pub fn slot_color(&self) -> Color {
        self.slot_color
    }

    /// Returns the label text style
    pub fn text(&self) -> &TextStyle {
        &self.text
    }
}

impl Default for WheelStyle {
    /// Dark-gray rim, slots, and labels; 4px rim, 3px chords, 10px slots,
    /// 34px sans-serif labels.
    fn default() -> Self {
        let primary = Color::new("#444444").expect("'#444444' is a valid CSS color");
        Self {
            rim_stroke: Stroke::new(primary, 4.0),
            chord_width: 3.0,
            slot_radius: 10.0,
            slot_color: primary,
            text: TextStyle::new("sans-serif", 34.0, primary),
        }
    }
}

/// Composes layered scenes from a graph and its layout, assigning and
/// remembering category colors.
///
/// The builder is the keeper of color state: feed it successive rebuilds of
/// the same text and categories keep their colors, because assignments are
/// memoized by canonical key and the palette cursor only advances on first
/// encounter.
///
/// # Examples
///
/// ```
/// use chordwheel::{
///     layout::{compute_layout, LayoutSettings},
///     model::ChordGraph,
///     scene::{SceneBuilder, WheelStyle},
/// };
/// use chordwheel_core::{color::Color, palette::ColorPalette};
///
/// let mut graph = ChordGraph::new();
/// for token in ["cat", "dog", "cat"] {
///     graph.add_item(token);
/// }
/// let layout = compute_layout(&graph, &LayoutSettings::new(100.0));
///
/// let palette = ColorPalette::new(
///     Color::new("#aa0000").unwrap(),
///     Color::new("#0000aa").unwrap(),
///     50,
/// );
/// let mut builder = SceneBuilder::new(palette, WheelStyle::default());
/// let scene = builder.compose(&graph, &layout);
///
/// // One rim, one chord, three slots, three labels.
/// assert_eq!(scene.len(), 8);
/// ```
#[derive(Debug)]
pub struct SceneBuilder {
    palette: ColorPalette,
    assigned: HashMap<Key, Color>,
    style: WheelStyle,
}

impl SceneBuilder {
    /// Creates a builder drawing colors from `palette` and styling from
    /// `style`.
    pub fn new(palette: ColorPalette, style: WheelStyle) -> Self {
        Self {
            palette,
            assigned: HashMap::new(),
            style,
        }
    }

    /// Returns the color assigned to a category key, assigning the next
    /// palette color on first encounter.
    ///
    /// The memo is unbounded; at on-screen-text scale the number of
    /// distinct values stays small.
    pub fn color_for(&mut self, key: Key) -> Color {
        let palette = &mut self.palette;
        *self
            .assigned
            .entry(key)
            .or_insert_with(|| palette.next_color())
    }

    /// Returns the chord alpha for a category of the given size.
    ///
    /// Alpha decreases by 25 per member and the count is clamped at 9, so
    /// the result never drops below 30.
    pub fn chord_alpha(count: usize) -> u8 {
        255 - (count.min(9) as u8) * 25
    }

    /// Composes the scene for a graph and its layout.
    ///
    /// Emits the rim circle beneath everything, one curve per chord colored
    /// by its category with size-derived alpha, one filled circle per slot,
    /// and one text-on-path command per label. An empty layout produces an
    /// empty scene with nothing drawn at all.
    pub fn compose<T>(&mut self, graph: &ChordGraph<T>, layout: &WheelLayout) -> Scene
    where
        T: fmt::Display,
    {
        let mut scene = Scene::new();
        if layout.is_empty() {
            return scene;
        }

        scene.add(
            SceneLayer::Rim,
            DrawCommand::Circle {
                center: layout.center(),
                radius: layout.radius(),
                fill: None,
                stroke: Some(self.style.rim_stroke()),
            },
        );

        for arc in layout.chords() {
            let count = graph.category(arc.key()).map_or(0, Category::count);
            let alpha = Self::chord_alpha(count);
            let color = self.color_for(arc.key()).with_alpha(f32::from(alpha) / 255.0);
            scene.add(
                SceneLayer::Chords,
                DrawCommand::Curve {
                    curve: arc.curve(),
                    stroke: Stroke::new(color, self.style.chord_width()),
                },
            );
        }

        for slot in layout.slots() {
            scene.add(
                SceneLayer::Slots,
                DrawCommand::Circle {
                    center: *slot,
                    radius: self.style.slot_radius(),
                    fill: Some(self.style.slot_color()),
                    stroke: None,
                },
            );
        }

        for label in layout.labels() {
            let anchor = label.anchor();
            scene.add(
                SceneLayer::Labels,
                DrawCommand::TextOnPath {
                    start: anchor.start(),
                    end: anchor.end(),
                    side: anchor.side(),
                    text: label.key().to_string(),
                    style: self.style.text().clone(),
                },
            );
        }

        debug!(command_count = scene.len(); "scene composed");

        scene
    }
}
