//! Bipartite anchor/label graph.
//!
//! The topology is fixed: anchor `i` and label `i` are joined by exactly one
//! edge and nothing else is connected. Positions live in two flat arrays so
//! the solver can iterate pairs without any graph bookkeeping.

use crate::geometry::Point;

/// A fixed point a label is attached to, such as a shot location.
///
/// Identity is the anchor's index in the input slice, never its text, so two
/// shots with the same label stay distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPoint {
    position: Point,
    text: String,
}

impl AnchorPoint {
    /// Creates an anchor at `(x, y)` carrying the given label text.
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::at(Point::new(x, y), text)
    }

    /// Creates an anchor at an existing point.
    pub fn at(position: Point, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// The anchor's coordinate in caller units.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The label text attached to this anchor.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Link from a free (label) node to its fixed (anchor) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub free: usize,
    pub fixed: usize,
}

/// Node positions for one layout run.
#[derive(Debug, Clone)]
pub(crate) struct LabelGraph {
    fixed: Vec<Point>,
    free: Vec<Point>,
    edges: Vec<Edge>,
}

impl LabelGraph {
    /// Builds one pinned and one free node per anchor, co-located, plus the
    /// edge joining them.
    pub fn build(anchors: &[AnchorPoint]) -> Self {
        let fixed: Vec<Point> = anchors.iter().map(AnchorPoint::position).collect();
        let free = fixed.clone();
        let edges = (0..anchors.len())
            .map(|index| Edge {
                free: index,
                fixed: index,
            })
            .collect();

        Self { fixed, free, edges }
    }

    /// Total simulation nodes, fixed and free.
    pub fn node_count(&self) -> usize {
        self.fixed.len() + self.free.len()
    }

    pub fn fixed(&self) -> &[Point] {
        &self.fixed
    }

    pub fn free(&self) -> &[Point] {
        &self.free
    }

    pub fn free_mut(&mut self) -> &mut [Point] {
        &mut self.free
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Moves every node, fixed and free, through `transform`.
    ///
    /// Used to switch coordinate frames; the simulation itself never moves
    /// fixed nodes.
    pub fn map_positions(&mut self, transform: impl Fn(Point) -> Point) {
        for point in self.fixed.iter_mut().chain(self.free.iter_mut()) {
            *point = transform(*point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<AnchorPoint> {
        vec![
            AnchorPoint::new(0.0, 0.0, "A"),
            AnchorPoint::new(10.0, 0.0, "B"),
            AnchorPoint::new(5.0, 8.66, "A"),
        ]
    }

    #[test]
    fn test_anchor_accessors() {
        let anchor = AnchorPoint::new(1.5, -2.0, "Kane 12'");
        assert_eq!(anchor.position(), Point::new(1.5, -2.0));
        assert_eq!(anchor.text(), "Kane 12'");
    }

    #[test]
    fn test_build_node_and_edge_counts() {
        let graph = LabelGraph::build(&anchors());
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edges().len(), 3);
    }

    #[test]
    fn test_build_colocates_labels_with_anchors() {
        let anchors = anchors();
        let graph = LabelGraph::build(&anchors);

        for (index, anchor) in anchors.iter().enumerate() {
            assert_eq!(graph.fixed()[index], anchor.position());
            assert_eq!(graph.free()[index], anchor.position());
        }
    }

    #[test]
    fn test_build_edges_pair_by_index() {
        let graph = LabelGraph::build(&anchors());
        for (index, edge) in graph.edges().iter().enumerate() {
            assert_eq!(edge.free, index);
            assert_eq!(edge.fixed, index);
        }
    }

    #[test]
    fn test_duplicate_text_is_not_merged() {
        // "A" appears twice; both anchors keep their own nodes
        let graph = LabelGraph::build(&anchors());
        assert_eq!(graph.free().len(), 3);
    }

    #[test]
    fn test_build_empty() {
        let graph = LabelGraph::build(&[]);
        assert_eq!(graph.node_count(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_map_positions_moves_all_nodes() {
        let mut graph = LabelGraph::build(&anchors());
        graph.map_positions(|p| p.add_point(Point::new(1.0, 1.0)));

        assert_eq!(graph.fixed()[0], Point::new(1.0, 1.0));
        assert_eq!(graph.free()[1], Point::new(11.0, 1.0));
    }
}
