//! Chordwheel - A text chord-graph visualizer.
//!
//! Tokenizing, graph building, radial layout, and rendering for text chord
//! wheels. Every token becomes a slot on a circular rim, and each repeated
//! token arcs back to every earlier occurrence of the same value, so the
//! texture of repetition in a piece of text becomes visible at a glance.

pub mod config;
pub mod export;
pub mod layout;
pub mod model;
pub mod scene;
pub mod tokenize;

mod error;

pub use chordwheel_core::{color, draw, geometry, identifier, palette};

pub use error::ChordwheelError;

use log::{debug, info, trace};

use chordwheel_core::{
    draw::{Stroke, TextStyle},
    palette::ColorPalette,
};

use config::AppConfig;
use export::{Exporter, svg::SvgExporter};
use layout::LayoutSettings;
use model::ChordGraph;
use scene::{SceneBuilder, WheelStyle};
use tokenize::{SplitTokenizer, Tokenizer};

/// Builder for turning text into rendered chord wheels.
///
/// This provides an API for processing text through the tokenize, graph,
/// layout, scene, and export stages.
///
/// Each [`render_svg`](Self::render_svg) call composes a fresh scene, so the
/// same graph always renders to the same markup. Hosts that re-render
/// evolving text and want categories to keep their colors across edits
/// should drive a [`SceneBuilder`] directly, which memoizes assignments.
///
/// # Examples
///
/// ```rust
/// use chordwheel::{WheelBuilder, config::AppConfig};
///
/// let text = "the quick brown fox jumps over the lazy dog";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = WheelBuilder::new(config);
///
/// // Build the chord graph from text
/// let graph = builder.ingest(text);
///
/// // Render the graph to SVG
/// let svg = builder.render_svg(&graph)
///     .expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
///
/// // Or use default config
/// let builder = WheelBuilder::default();
/// ```
#[derive(Default)]
pub struct WheelBuilder {
    config: AppConfig,
}

impl WheelBuilder {
    /// Create a new wheel builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, style, and
    ///   palette settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chordwheel::{WheelBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = WheelBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build a chord graph from raw text.
    ///
    /// This tokenizes the text on runs of non-alphanumeric characters and
    /// adds every token to a fresh graph, reproducing the wholesale
    /// clear-and-refill update hosts perform on each text change.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw input text
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chordwheel::WheelBuilder;
    ///
    /// let builder = WheelBuilder::default();
    /// let graph = builder.ingest("cat dog cat");
    /// assert_eq!(graph.len(), 3);
    /// assert_eq!(graph.chords().len(), 1);
    /// ```
    pub fn ingest(&self, text: &str) -> ChordGraph<String> {
        info!("Ingesting text");

        let tokenizer = SplitTokenizer::new();
        let tokens = tokenizer.tokenize(text);
        debug!(token_count = tokens.len(); "Text tokenized");

        let mut graph = ChordGraph::new();
        for token in tokens {
            graph.add_item(token.to_string());
        }

        trace!(
            item_count = graph.len(),
            chord_count = graph.chords().len();
            "Graph populated"
        );

        graph
    }

    /// Render a chord graph to an SVG string.
    ///
    /// This transforms the graph through the layout, scene, and export
    /// pipeline to produce an SVG document string. An empty graph renders to
    /// an empty document with nothing drawn.
    ///
    /// # Arguments
    ///
    /// * `graph` - A chord graph to render
    ///
    /// # Errors
    ///
    /// Returns `ChordwheelError` if a configured color string cannot be
    /// parsed or the export backend fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chordwheel::WheelBuilder;
    ///
    /// let builder = WheelBuilder::default();
    /// let graph = builder.ingest("cat dog cat");
    ///
    /// let svg = builder.render_svg(&graph)
    ///     .expect("Failed to render wheel");
    ///
    /// println!("{}", svg);
    /// ```
    pub fn render_svg(&self, graph: &ChordGraph<String>) -> Result<String, ChordwheelError> {
        // Compute the radial layout
        info!(item_count = graph.len(); "Computing wheel layout");
        let layout_config = self.config.layout();
        let settings = LayoutSettings::new(layout_config.radius())
            .with_label_spacing(layout_config.label_spacing())
            .with_label_max_length(layout_config.label_max_length());
        let layout = layout::compute_layout(graph, &settings);
        debug!("Layout calculated");

        // Compose the scene, assigning category colors
        let palette = self.color_palette().map_err(ChordwheelError::Style)?;
        let style = self.wheel_style().map_err(ChordwheelError::Style)?;
        let mut scene_builder = SceneBuilder::new(palette, style);
        let scene = scene_builder.compose(graph, &layout);
        info!(command_count = scene.len(); "Scene composed");

        // Render to SVG in memory
        let mut exporter = SvgExporter::new();
        if let Some(background) = self
            .config
            .style()
            .background_color()
            .map_err(ChordwheelError::Style)?
        {
            exporter = exporter.with_background(background);
        }
        let svg = exporter.export_scene(&scene)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Builds the category color palette from the palette configuration.
    fn color_palette(&self) -> Result<ColorPalette, String> {
        let palette = self.config.palette();
        Ok(ColorPalette::with_seed(
            palette.begin()?,
            palette.end()?,
            palette.size(),
            palette.seed(),
        ))
    }

    /// Builds the scene style from the style configuration.
    fn wheel_style(&self) -> Result<WheelStyle, String> {
        let style = self.config.style();
        let rim_color = style.rim_color()?;

        Ok(WheelStyle::new()
            .with_rim_stroke(Stroke::new(rim_color, style.rim_width()))
            .with_chord_width(style.chord_width())
            .with_slot_radius(style.slot_radius())
            .with_slot_color(rim_color)
            .with_text(TextStyle::new(
                style.font_family(),
                style.font_size(),
                rim_color,
            )))
    }
}
