//! Radial wheel layout.
//!
//! This module turns a [`ChordGraph`] into renderable geometry. Every item
//! gets one angular slot around the rim in insertion order, starting at
//! 12 o'clock and proceeding clockwise; chords become quadratic curves
//! bowing through the wheel center; labels get straight anchor paths
//! pointing radially outward from their slots.
//!
//! The positioning functions are pure and individually usable; most callers
//! go through [`compute_layout`], which applies them to a whole graph and
//! bundles the result into a [`WheelLayout`].

use std::f32::consts::{PI, TAU};
use std::fmt;

use chordwheel_core::{
    draw::LabelSide,
    geometry::{Point, QuadCurve},
    identifier::Key,
};
use log::debug;

use crate::model::ChordGraph;

/// Geometry settings for one wheel layout pass.
///
/// # Examples
///
/// ```
/// use chordwheel::layout::LayoutSettings;
///
/// let settings = LayoutSettings::new(250.0).with_label_spacing(20.0);
/// assert_eq!(settings.radius(), 250.0);
/// assert_eq!(settings.label_spacing(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    center: Point,
    radius: f32,
    label_spacing: f32,
    label_max_length: f32,
}

impl LayoutSettings {
    /// Creates settings for a wheel of the given rim radius, centered at the
    /// origin, with default label geometry.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Returns a copy with the wheel center moved to `center`
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Returns a copy with the given gap between rim and label start
    pub fn with_label_spacing(mut self, spacing: f32) -> Self {
        self.label_spacing = spacing;
        self
    }

    /// Returns a copy with the given label path reach beyond the rim
    pub fn with_label_max_length(mut self, max_length: f32) -> Self {
        self.label_max_length = max_length;
        self
    }

    /// Returns the wheel center
    pub fn center(self) -> Point {
        self.center
    }

    /// Returns the rim radius
    pub fn radius(self) -> f32 {
        self.radius
    }

    /// Returns the gap between the rim and the start of a label path
    pub fn label_spacing(self) -> f32 {
        self.label_spacing
    }

    /// Returns how far beyond the rim a label path reaches
    pub fn label_max_length(self) -> f32 {
        self.label_max_length
    }
}

impl Default for LayoutSettings {
    /// Origin-centered wheel with a 300px rim, labels starting 17px past the
    /// rim and reaching 300px out.
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: 300.0,
            label_spacing: 17.0,
            label_max_length: 300.0,
        }
    }
}

/// The straight outward path a label rides, with its side flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    start: Point,
    end: Point,
    side: LabelSide,
}

impl LabelAnchor {
    /// Returns the path start, nearest the rim
    pub fn start(self) -> Point {
        self.start
    }

    /// Returns the path end, farthest from the rim
    pub fn end(self) -> Point {
        self.end
    }

    /// Returns which half of the wheel the path points into
    pub fn side(self) -> LabelSide {
        self.side
    }
}

/// A laid-out chord: its curve plus the category key of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordArc {
    curve: QuadCurve,
    key: Key,
}

impl ChordArc {
    /// Returns the chord's quadratic curve
    pub fn curve(self) -> QuadCurve {
        self.curve
    }

    /// Returns the category key shared by both endpoints
    pub fn key(self) -> Key {
        self.key
    }
}

/// A laid-out label: its anchor path plus the text it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLabel {
    anchor: LabelAnchor,
    key: Key,
}

impl SlotLabel {
    /// Returns the label's anchor path
    pub fn anchor(self) -> LabelAnchor {
        self.anchor
    }

    /// Returns the canonical text the label shows
    pub fn key(self) -> Key {
        self.key
    }
}

/// The complete laid-out wheel, in deterministic item and chord order.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    center: Point,
    radius: f32,
    slots: Vec<Point>,
    chords: Vec<ChordArc>,
    labels: Vec<SlotLabel>,
}

impl WheelLayout {
    /// Returns the wheel center
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the rim radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns one rim position per item, in insertion order
    pub fn slots(&self) -> &[Point] {
        &self.slots
    }

    /// Returns the laid-out chords in creation order
    pub fn chords(&self) -> &[ChordArc] {
        &self.chords
    }

    /// Returns the laid-out labels, one per item in insertion order
    pub fn labels(&self) -> &[SlotLabel] {
        &self.labels
    }

    /// Returns `true` if the layout holds no slots.
    ///
    /// An empty layout renders as nothing, rim included.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Returns the angle between adjacent slots, in radians.
///
/// # Arguments
/// * `item_count` - The number of items sharing the rim; must be non-zero
pub fn angular_step(item_count: usize) -> f32 {
    debug_assert!(item_count > 0, "angular step needs at least one item");
    TAU / item_count as f32
}

/// Returns the rim position of the slot at the given index.
///
/// Slot 0 sits at 12 o'clock; increasing indices proceed clockwise. The
/// position follows `x = cx + r·sin(step·i)`, `y = cy − r·cos(step·i)`.
///
/// # Arguments
/// * `index` - The slot index, counting from zero
/// * `step` - The angle between adjacent slots, from [`angular_step`]
/// * `center` - The wheel center
/// * `radius` - The rim radius
pub fn slot_position(index: usize, step: f32, center: Point, radius: f32) -> Point {
    let angle = step * index as f32;
    Point::new(
        radius.mul_add(angle.sin(), center.x()), // cx + r * sin(angle)
        (-radius).mul_add(angle.cos(), center.y()), // cy - r * cos(angle)
    )
}

/// Returns the curve for a chord between two slots.
///
/// Both endpoints sit on the rim; the control point is the wheel center, so
/// every chord bows through the middle of the wheel.
pub fn chord_curve(
    a_index: usize,
    b_index: usize,
    step: f32,
    center: Point,
    radius: f32,
) -> QuadCurve {
    QuadCurve::new(
        slot_position(a_index, step, center, radius),
        center,
        slot_position(b_index, step, center, radius),
    )
}

/// Returns the label anchor path for the slot at the given index.
///
/// The path runs along the slot's ray, from `radius + spacing` out to
/// `radius + max_length`. Slots in the right half of the wheel (angle below
/// half a turn) are flagged [`LabelSide::Right`]; the rest [`LabelSide::Left`],
/// so renderers can keep left-half labels upright.
///
/// # Arguments
/// * `index` - The slot index, counting from zero
/// * `step` - The angle between adjacent slots, from [`angular_step`]
/// * `center` - The wheel center
/// * `radius` - The rim radius
/// * `spacing` - The gap between the rim and the path start
/// * `max_length` - The path's reach beyond the rim
pub fn label_anchor(
    index: usize,
    step: f32,
    center: Point,
    radius: f32,
    spacing: f32,
    max_length: f32,
) -> LabelAnchor {
    let side = if step * (index as f32) < PI {
        LabelSide::Right
    } else {
        LabelSide::Left
    };

    LabelAnchor {
        start: slot_position(index, step, center, radius + spacing),
        end: slot_position(index, step, center, radius + max_length),
        side,
    }
}

/// Lays out a whole graph as a wheel.
///
/// Slots and labels follow item insertion order, chords follow chord
/// creation order, so the same graph always produces the same layout. An
/// empty graph produces an empty layout; no division by the item count ever
/// happens in that case.
pub fn compute_layout<T>(graph: &ChordGraph<T>, settings: &LayoutSettings) -> WheelLayout
where
    T: fmt::Display,
{
    let center = settings.center();
    let radius = settings.radius();

    if graph.is_empty() {
        return WheelLayout {
            center,
            radius,
            slots: Vec::new(),
            chords: Vec::new(),
            labels: Vec::new(),
        };
    }

    let step = angular_step(graph.len());

    let slots = graph
        .items()
        .map(|item| slot_position(item.index(), step, center, radius))
        .collect();

    let chords = graph
        .chords()
        .iter()
        .map(|chord| {
            let a = graph.item_unchecked(chord.a());
            let b = graph.item_unchecked(chord.b());
            ChordArc {
                curve: chord_curve(a.index(), b.index(), step, center, radius),
                key: a.key(),
            }
        })
        .collect();

    let labels = graph
        .items()
        .map(|item| SlotLabel {
            anchor: label_anchor(
                item.index(),
                step,
                center,
                radius,
                settings.label_spacing(),
                settings.label_max_length(),
            ),
            key: item.key(),
        })
        .collect();

    let layout = WheelLayout {
        center,
        radius,
        slots,
        chords,
        labels,
    };

    debug!(
        item_count = graph.len(),
        chord_count = layout.chords.len();
        "wheel layout computed"
    );

    layout
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    const EPS: f32 = 1e-3;

    fn build(tokens: &[&str]) -> ChordGraph<String> {
        let mut graph = ChordGraph::new();
        for token in tokens {
            graph.add_item((*token).to_string());
        }
        graph
    }

    #[test]
    fn test_angular_step() {
        assert_approx_eq!(f32, angular_step(1), TAU);
        assert_approx_eq!(f32, angular_step(4), PI / 2.0);
        assert_approx_eq!(f32, angular_step(6), PI / 3.0);
    }

    #[test]
    fn test_slot_zero_is_at_twelve_oclock() {
        let center = Point::new(10.0, 20.0);
        let position = slot_position(0, angular_step(6), center, 100.0);

        assert_approx_eq!(f32, position.x(), 10.0, epsilon = EPS);
        assert_approx_eq!(f32, position.y(), -80.0, epsilon = EPS);
    }

    #[test]
    fn test_slots_proceed_clockwise() {
        // Four slots land on the compass points: top, right, bottom, left.
        let center = Point::new(0.0, 0.0);
        let step = angular_step(4);

        let top = slot_position(0, step, center, 100.0);
        let right = slot_position(1, step, center, 100.0);
        let bottom = slot_position(2, step, center, 100.0);
        let left = slot_position(3, step, center, 100.0);

        assert_approx_eq!(f32, top.x(), 0.0, epsilon = EPS);
        assert_approx_eq!(f32, top.y(), -100.0, epsilon = EPS);
        assert_approx_eq!(f32, right.x(), 100.0, epsilon = EPS);
        assert_approx_eq!(f32, right.y(), 0.0, epsilon = EPS);
        assert_approx_eq!(f32, bottom.x(), 0.0, epsilon = EPS);
        assert_approx_eq!(f32, bottom.y(), 100.0, epsilon = EPS);
        assert_approx_eq!(f32, left.x(), -100.0, epsilon = EPS);
        assert_approx_eq!(f32, left.y(), 0.0, epsilon = EPS);
    }

    #[test]
    fn test_slots_sit_on_the_rim() {
        let center = Point::new(5.0, -3.0);
        let step = angular_step(7);

        for index in 0..7 {
            let position = slot_position(index, step, center, 120.0);
            assert_approx_eq!(f32, position.distance_to(center), 120.0, epsilon = EPS);
        }
    }

    #[test]
    fn test_chord_curve_bows_through_center() {
        let center = Point::new(0.0, 0.0);
        let step = angular_step(4);
        let curve = chord_curve(0, 2, step, center, 100.0);

        assert_eq!(curve.control(), center);
        assert_approx_eq!(f32, curve.start().y(), -100.0, epsilon = EPS);
        assert_approx_eq!(f32, curve.end().y(), 100.0, epsilon = EPS);

        // Midpoint of a diameter chord passes through the center.
        let mid = curve.point_at(0.5);
        assert_approx_eq!(f32, mid.x(), 0.0, epsilon = EPS);
        assert_approx_eq!(f32, mid.y(), 0.0, epsilon = EPS);
    }

    #[test]
    fn test_label_anchor_runs_outward_along_the_ray() {
        let center = Point::new(0.0, 0.0);
        let anchor = label_anchor(0, angular_step(4), center, 100.0, 17.0, 300.0);

        assert_approx_eq!(f32, anchor.start().x(), 0.0, epsilon = EPS);
        assert_approx_eq!(f32, anchor.start().y(), -117.0, epsilon = EPS);
        assert_approx_eq!(f32, anchor.end().x(), 0.0, epsilon = EPS);
        assert_approx_eq!(f32, anchor.end().y(), -400.0, epsilon = EPS);
    }

    #[test]
    fn test_label_side_flips_at_half_turn() {
        let center = Point::new(0.0, 0.0);
        let step = angular_step(4);

        // Slots at 0 and π/2 are right-half; π and 3π/2 are left-half.
        assert_eq!(
            label_anchor(0, step, center, 100.0, 17.0, 300.0).side(),
            LabelSide::Right
        );
        assert_eq!(
            label_anchor(1, step, center, 100.0, 17.0, 300.0).side(),
            LabelSide::Right
        );
        assert_eq!(
            label_anchor(2, step, center, 100.0, 17.0, 300.0).side(),
            LabelSide::Left
        );
        assert_eq!(
            label_anchor(3, step, center, 100.0, 17.0, 300.0).side(),
            LabelSide::Left
        );
    }

    #[test]
    fn test_compute_layout_counts() {
        let graph = build(&["cat", "dog", "cat", "bird", "dog", "cat"]);
        let layout = compute_layout(&graph, &LayoutSettings::new(100.0));

        assert!(!layout.is_empty());
        assert_eq!(layout.slots().len(), 6);
        assert_eq!(layout.chords().len(), 4);
        assert_eq!(layout.labels().len(), 6);
    }

    #[test]
    fn test_compute_layout_tags_chords_with_category_keys() {
        let graph = build(&["cat", "dog", "cat", "bird", "dog", "cat"]);
        let layout = compute_layout(&graph, &LayoutSettings::new(100.0));

        let keys: Vec<String> = layout
            .chords()
            .iter()
            .map(|arc| arc.key().to_string())
            .collect();
        assert_eq!(keys, vec!["cat", "dog", "cat", "cat"]);
    }

    #[test]
    fn test_compute_layout_tags_labels_in_item_order() {
        let graph = build(&["cat", "dog", "bird"]);
        let layout = compute_layout(&graph, &LayoutSettings::new(100.0));

        let texts: Vec<String> = layout
            .labels()
            .iter()
            .map(|label| label.key().to_string())
            .collect();
        assert_eq!(texts, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_compute_layout_slots_match_positions() {
        let graph = build(&["a", "b", "c", "d"]);
        let settings = LayoutSettings::new(150.0).with_center(Point::new(30.0, 40.0));
        let layout = compute_layout(&graph, &settings);

        let step = angular_step(4);
        for (index, slot) in layout.slots().iter().enumerate() {
            let expected = slot_position(index, step, settings.center(), 150.0);
            assert_approx_eq!(f32, slot.x(), expected.x(), epsilon = EPS);
            assert_approx_eq!(f32, slot.y(), expected.y(), epsilon = EPS);
        }
    }

    #[test]
    fn test_compute_layout_empty_graph() {
        let graph: ChordGraph<String> = ChordGraph::new();
        let layout = compute_layout(&graph, &LayoutSettings::new(100.0));

        assert!(layout.is_empty());
        assert!(layout.slots().is_empty());
        assert!(layout.chords().is_empty());
        assert!(layout.labels().is_empty());
    }

    #[test]
    fn test_compute_layout_single_item() {
        let graph = build(&["solo"]);
        let layout = compute_layout(&graph, &LayoutSettings::new(100.0));

        assert_eq!(layout.slots().len(), 1);
        assert!(layout.chords().is_empty());
        assert_approx_eq!(f32, layout.slots()[0].y(), -100.0, epsilon = EPS);
        assert_eq!(layout.labels()[0].anchor().side(), LabelSide::Right);
    }

    #[test]
    fn test_compute_layout_is_deterministic() {
        let graph = build(&["cat", "dog", "cat", "bird"]);
        let settings = LayoutSettings::new(200.0);

        assert_eq!(
            compute_layout(&graph, &settings),
            compute_layout(&graph, &settings)
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn item_count_strategy() -> impl Strategy<Value = usize> {
        1usize..64
    }

    fn radius_strategy() -> impl Strategy<Value = f32> {
        10.0f32..1000.0
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Steps should tile the full circle: step · count == 2π.
    fn check_steps_tile_the_circle(count: usize) -> Result<(), TestCaseError> {
        let step = angular_step(count);

        prop_assert!(approx_eq!(
            f32,
            step * count as f32,
            TAU,
            epsilon = 1e-3
        ));
        Ok(())
    }

    /// Every slot should sit exactly on the rim.
    fn check_slots_preserve_radius(count: usize, radius: f32) -> Result<(), TestCaseError> {
        let center = Point::new(12.0, -7.0);
        let step = angular_step(count);

        for index in 0..count {
            let position = slot_position(index, step, center, radius);
            prop_assert!(
                approx_eq!(
                    f32,
                    position.distance_to(center),
                    radius,
                    epsilon = radius * 1e-4
                ),
                "slot {index} of {count} strays from the rim"
            );
        }
        Ok(())
    }

    /// Chord endpoints should coincide with their slots' rim positions.
    fn check_chord_endpoints_on_rim(count: usize, radius: f32) -> Result<(), TestCaseError> {
        let center = Point::default();
        let step = angular_step(count);

        let a = 0;
        let b = count / 2;
        let curve = chord_curve(a, b, step, center, radius);

        prop_assert_eq!(curve.start(), slot_position(a, step, center, radius));
        prop_assert_eq!(curve.end(), slot_position(b, step, center, radius));
        prop_assert_eq!(curve.control(), center);
        Ok(())
    }

    /// The side flag should match the slot angle against half a turn.
    fn check_label_side_matches_angle(count: usize) -> Result<(), TestCaseError> {
        let center = Point::default();
        let step = angular_step(count);

        for index in 0..count {
            let anchor = label_anchor(index, step, center, 100.0, 17.0, 300.0);
            let expected = if step * (index as f32) < PI {
                LabelSide::Right
            } else {
                LabelSide::Left
            };
            prop_assert_eq!(anchor.side(), expected);
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn steps_tile_the_circle(count in item_count_strategy()) {
            check_steps_tile_the_circle(count)?;
        }

        #[test]
        fn slots_preserve_radius(count in item_count_strategy(), radius in radius_strategy()) {
            check_slots_preserve_radius(count, radius)?;
        }

        #[test]
        fn chord_endpoints_on_rim(count in item_count_strategy(), radius in radius_strategy()) {
            check_chord_endpoints_on_rim(count, radius)?;
        }

        #[test]
        fn label_side_matches_angle(count in item_count_strategy()) {
            check_label_side_matches_angle(count)?;
        }
    }
}
