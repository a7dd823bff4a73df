use crate::geometry::{Bounds, Point};

/// Final placement of one label.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    anchor: Point,
    position: Point,
    text: String,
}

impl Placement {
    pub(crate) fn new(anchor: Point, position: Point, text: impl Into<String>) -> Self {
        Self {
            anchor,
            position,
            text: text.into(),
        }
    }

    /// The anchor coordinate, exactly as given.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Where the label text goes, in the anchor's units.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Segment from the label back to its anchor.
    pub fn leader_line(&self) -> (Point, Point) {
        (self.position, self.anchor)
    }
}

/// Output of one layout run.
///
/// Placements are in input order: `placements()[i]` belongs to input `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    placements: Vec<Placement>,
    bounds: Option<Bounds>,
}

impl LayoutResult {
    pub(crate) fn new(placements: Vec<Placement>, bounds: Option<Bounds>) -> Self {
        Self { placements, bounds }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Anchor coordinates in input order.
    pub fn anchors(&self) -> impl Iterator<Item = Point> + '_ {
        self.placements.iter().map(Placement::anchor)
    }

    /// Label positions in input order.
    pub fn label_positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.placements.iter().map(Placement::position)
    }

    /// Margin-expanded box around every anchor and label, `None` when there
    /// is nothing to lay out.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}
