//! SVG rendering for wheel scenes.
//!
//! [`SvgExporter`] is the bundled [`Exporter`] backend. It walks a scene's
//! layers bottom to top and serializes every draw command into SVG markup,
//! entirely in memory. Label anchor paths are emitted into `<defs>` and
//! referenced by `<textPath>` elements, which is how text rides the anchor
//! rays instead of sitting at fixed positions.

use log::debug;
use svg::{Document, node::element as svg_element};

use chordwheel_core::{
    color::Color,
    draw::{DrawCommand, LabelSide, Scene, Stroke, TextStyle},
    geometry::{Point, QuadCurve, Size},
};

use super::{Error, Exporter};

/// Default whitespace margin around the scene content, in pixels.
const DEFAULT_MARGIN: f32 = 50.0;

/// Applies stroke attributes to an SVG element.
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}

/// Scene-to-SVG backend rendering entirely in memory.
///
/// The exporter translates the scene so its minimum corner lands at
/// `(margin, margin)` and sizes the document to the content plus margins,
/// keeping the wheel centered whatever its configured radius and label
/// reach are.
///
/// # Examples
///
/// ```
/// use chordwheel::export::svg::SvgExporter;
/// use chordwheel_core::draw::Scene;
///
/// let exporter = SvgExporter::new();
/// let markup = exporter.render_to_string(&Scene::new());
/// assert!(markup.starts_with("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgExporter {
    margin: f32,
    background: Option<Color>,
}

impl SvgExporter {
    /// Creates an exporter with the default margin and no background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the given content margin in pixels.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Returns a copy with the given document background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Returns the content margin in pixels.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the document background color, if set.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Renders a scene to an SVG document.
    pub fn render_document(&self, scene: &Scene) -> Document {
        // Calculate content bounds and final dimensions with margins
        let content_bounds = scene.bounds();
        let content_size = content_bounds.to_size();
        let svg_size = content_size.grow(self.margin);

        debug!(
            width = svg_size.width(),
            height = svg_size.height();
            "svg document sized"
        );

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());

        let mut doc = self.add_background(doc, svg_size);

        // Shift content so its minimum corner lands at (margin, margin)
        let mut main_group = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                self.margin - content_bounds.min_x(),
                self.margin - content_bounds.min_y()
            ),
        );

        let mut defs = svg_element::Definitions::new();
        let mut label_count = 0usize;

        for (layer, commands) in scene.clone().into_layers() {
            let mut layer_group = svg_element::Group::new().set("id", layer.name());

            for command in &commands {
                let node: Box<dyn svg::Node> = match command {
                    DrawCommand::Circle {
                        center,
                        radius,
                        fill,
                        stroke,
                    } => self.render_circle(*center, *radius, *fill, *stroke),
                    DrawCommand::Curve { curve, stroke } => self.render_curve(curve, *stroke),
                    DrawCommand::TextOnPath {
                        start,
                        end,
                        side,
                        text,
                        style,
                    } => {
                        let path_id = format!("label-path-{label_count}");
                        label_count += 1;

                        let (anchor_path, text_element) =
                            self.render_text_on_path(&path_id, *start, *end, *side, text, style);
                        defs = defs.add(anchor_path);
                        text_element.into()
                    }
                };
                layer_group = layer_group.add(node);
            }

            main_group = main_group.add(layer_group);
        }

        if label_count > 0 {
            doc = doc.add(defs);
        }

        doc.add(main_group)
    }

    /// Renders a scene to an SVG document string.
    pub fn render_to_string(&self, scene: &Scene) -> String {
        self.render_document(scene).to_string()
    }

    /// Adds the background rectangle to the document, if one is configured.
    fn add_background(&self, doc: Document, size: Size) -> Document {
        match self.background {
            Some(color) => doc.add(
                svg_element::Rectangle::new()
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            ),
            None => doc,
        }
    }

    fn render_circle(
        &self,
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) -> Box<dyn svg::Node> {
        let mut circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius);

        // SVG fills unpainted circles black, so an absent fill must be
        // written out explicitly.
        circle = match fill {
            Some(color) => circle
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
            None => circle.set("fill", "none"),
        };

        if let Some(stroke) = stroke {
            circle = apply_stroke!(circle, stroke);
        }

        circle.into()
    }

    fn render_curve(&self, curve: &QuadCurve, stroke: Stroke) -> Box<dyn svg::Node> {
        let path = svg_element::Path::new()
            .set("d", self.create_quad_path_data(curve))
            .set("fill", "none");

        apply_stroke!(path, stroke).into()
    }

    fn render_text_on_path(
        &self,
        path_id: &str,
        start: Point,
        end: Point,
        side: LabelSide,
        text: &str,
        style: &TextStyle,
    ) -> (svg_element::Path, svg_element::Text) {
        // Left-half labels ride the reversed path with end alignment so the
        // glyphs stay upright and the text still hugs the rim.
        let path_data = match side {
            LabelSide::Right => self.create_path_data_from_points(start, end),
            LabelSide::Left => self.create_path_data_from_points(end, start),
        };

        let anchor_path = svg_element::Path::new()
            .set("id", path_id)
            .set("d", path_data)
            .set("fill", "none");

        let mut text_path = svg_element::TextPath::new(text).set("href", format!("#{path_id}"));

        let mut text_element = svg_element::Text::new("")
            .set("font-family", style.font_family())
            .set("font-size", style.font_size())
            .set("fill", style.color().to_string())
            .set("fill-opacity", style.color().alpha())
            .set("dominant-baseline", "central");

        if side == LabelSide::Left {
            text_path = text_path.set("startOffset", "100%");
            text_element = text_element.set("text-anchor", "end");
        }

        (anchor_path, text_element.add(text_path))
    }

    /// Create a path data string from two points
    fn create_path_data_from_points(&self, start: Point, end: Point) -> String {
        format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
    }

    /// Create a quadratic path data string from a curve
    fn create_quad_path_data(&self, curve: &QuadCurve) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            curve.start().x(),
            curve.start().y(),
            curve.control().x(),
            curve.control().y(),
            curve.end().x(),
            curve.end().y()
        )
    }
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            background: None,
        }
    }
}

impl Exporter for SvgExporter {
    fn export_scene(&mut self, scene: &Scene) -> Result<String, Error> {
        let document = self.render_document(scene);
        debug!("SVG document rendered");

        Ok(document.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chordwheel_core::{
        draw::{SceneLayer, TextStyle},
        palette::ColorPalette,
    };

    use crate::{
        layout::{LayoutSettings, compute_layout},
        model::ChordGraph,
        scene::{SceneBuilder, WheelStyle},
    };

    use super::*;

    fn circle_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(
            SceneLayer::Rim,
            DrawCommand::Circle {
                center: Point::new(0.0, 0.0),
                radius: 100.0,
                fill: None,
                stroke: Some(Stroke::default()),
            },
        );
        scene
    }

    fn wheel_scene(tokens: &[&str]) -> Scene {
        let mut graph = ChordGraph::new();
        for token in tokens {
            graph.add_item((*token).to_string());
        }
        let layout = compute_layout(&graph, &LayoutSettings::new(100.0));
        let palette = ColorPalette::new(
            Color::new("#aa0000").unwrap(),
            Color::new("#0000aa").unwrap(),
            50,
        );
        SceneBuilder::new(palette, WheelStyle::default()).compose(&graph, &layout)
    }

    #[test]
    fn test_document_sized_from_content_plus_margin() {
        let markup = SvgExporter::new().render_to_string(&circle_scene());

        // Content spans 200x200 around the origin; margin 50 on each side.
        assert!(markup.contains(r#"viewBox="0 0 300 300""#));
        assert!(markup.contains(r#"width="300""#));
        assert!(markup.contains(r#"height="300""#));
        assert!(markup.contains(r#"transform="translate(150, 150)""#));
    }

    #[test]
    fn test_custom_margin_changes_dimensions() {
        let markup = SvgExporter::new()
            .with_margin(10.0)
            .render_to_string(&circle_scene());

        assert!(markup.contains(r#"viewBox="0 0 220 220""#));
        assert!(markup.contains(r#"transform="translate(110, 110)""#));
    }

    #[test]
    fn test_empty_scene_renders_empty_document() {
        let markup = SvgExporter::new().render_to_string(&Scene::new());

        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"width="100""#));
        assert!(!markup.contains("<circle"));
        assert!(!markup.contains("<path"));
        assert!(!markup.contains("<defs"));
    }

    #[test]
    fn test_unfilled_circle_writes_fill_none() {
        let markup = SvgExporter::new().render_to_string(&circle_scene());

        assert!(markup.contains("<circle"));
        assert!(markup.contains(r#"fill="none""#));
        assert!(markup.contains(r#"stroke-width="1""#));
    }

    #[test]
    fn test_background_rectangle_when_configured() {
        let exporter = SvgExporter::new().with_background(Color::new("white").unwrap());
        let markup = exporter.render_to_string(&circle_scene());

        assert!(markup.contains("<rect"));
        assert!(markup.contains(r#"fill="white""#));
    }

    #[test]
    fn test_no_background_rectangle_by_default() {
        let markup = SvgExporter::new().render_to_string(&circle_scene());

        assert!(!markup.contains("<rect"));
    }

    #[test]
    fn test_layer_groups_carry_layer_ids() {
        let markup = SvgExporter::new().render_to_string(&wheel_scene(&["cat", "dog", "cat"]));

        assert!(markup.contains(r#"id="rim""#));
        assert!(markup.contains(r#"id="chords""#));
        assert!(markup.contains(r#"id="slots""#));
        assert!(markup.contains(r#"id="labels""#));
    }

    #[test]
    fn test_chords_render_as_quadratic_paths() {
        let markup = SvgExporter::new().render_to_string(&wheel_scene(&["cat", "cat"]));

        assert!(markup.contains(" Q "));
        assert!(markup.contains(r#"stroke-width="3""#));
    }

    #[test]
    fn test_label_paths_live_in_defs() {
        let markup = SvgExporter::new().render_to_string(&wheel_scene(&["cat", "dog"]));

        assert!(markup.contains("<defs"));
        assert!(markup.contains(r#"id="label-path-0""#));
        assert!(markup.contains(r#"id="label-path-1""#));
        assert!(markup.contains(r##"href="#label-path-0""##));
        assert!(markup.contains(r#"<textPath"#));
        assert!(markup.contains(r#"font-size="34""#));
    }

    #[test]
    fn test_top_label_path_points_straight_up() {
        // Slot 0 sits at the top; its anchor runs from radius + spacing to
        // radius + max length along the negative y axis.
        let markup = SvgExporter::new().render_to_string(&wheel_scene(&["cat", "dog"]));

        assert!(markup.contains(r#"d="M 0 -117 L 0 -400""#));
    }

    #[test]
    fn test_left_half_labels_reverse_their_path() {
        // Two items: slot 0 is right-half, slot 1 (angle half a turn) is left.
        let markup = SvgExporter::new().render_to_string(&wheel_scene(&["cat", "dog"]));

        assert_eq!(markup.matches(r#"startOffset="100%""#).count(), 1);
        assert_eq!(markup.matches(r#"text-anchor="end""#).count(), 1);
    }

    #[test]
    fn test_exporter_trait_produces_document_string() {
        let mut exporter = SvgExporter::new();
        let markup = exporter
            .export_scene(&wheel_scene(&["cat", "cat"]))
            .expect("in-memory SVG export should not fail");

        assert!(markup.starts_with("<svg"));
        assert!(markup.ends_with("</svg>"));
    }

    #[test]
    fn test_text_style_attributes_carried_through() {
        let style = WheelStyle::default().with_text(TextStyle::new(
            "monospace",
            20.0,
            Color::new("black").unwrap(),
        ));
        let mut graph = ChordGraph::new();
        graph.add_item("cat".to_string());
        let layout = compute_layout(&graph, &LayoutSettings::new(100.0));
        let palette = ColorPalette::new(
            Color::new("#aa0000").unwrap(),
            Color::new("#0000aa").unwrap(),
            50,
        );
        let scene = SceneBuilder::new(palette, style).compose(&graph, &layout);

        let markup = SvgExporter::new().render_to_string(&scene);
        assert!(markup.contains(r#"font-family="monospace""#));
        assert!(markup.contains(r#"font-size="20""#));
    }
}
