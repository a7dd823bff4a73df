//! Force-directed label placement.
//!
//! Given anchor points (shot locations) and one text label per anchor, this
//! module computes label positions that sit near their anchors without
//! piling on top of each other. Each label is meant to be drawn with a
//! leader line back to its anchor.
//!
//! The run has four phases:
//!
//! 1. Build a bipartite graph: one pinned node per anchor, one free node per
//!    label starting on its anchor, one edge between them.
//! 2. Relax the free nodes with a spring-embedding simulation in the
//!    solver's own normalized frame.
//! 3. Fit a per-axis least-squares line from the pinned nodes' simulated
//!    positions back to the true anchors and apply it to every label.
//! 4. Compute a margin-expanded bounding box over anchors and labels.
//!
//! Everything is local to the call; independent runs can execute on
//! separate threads.
//!
//! # Example
//!
//! ```
//! use shotmap_core::label::{AnchorPoint, LabelLayout};
//!
//! let anchors = vec![
//!     AnchorPoint::new(0.0, 0.0, "A"),
//!     AnchorPoint::new(10.0, 0.0, "B"),
//!     AnchorPoint::new(5.0, 8.66, "C"),
//! ];
//!
//! let result = LabelLayout::new().with_k(1.5).layout(&anchors).unwrap();
//! assert_eq!(result.len(), 3);
//! for (placement, anchor) in result.placements().iter().zip(&anchors) {
//!     assert_eq!(placement.anchor(), anchor.position());
//! }
//! ```

mod error;
mod graph;
mod rescale;
mod result;
mod solver;

pub use error::LayoutError;
pub use graph::AnchorPoint;
pub use result::{LayoutResult, Placement};

use log::debug;

use crate::geometry::Bounds;
use graph::LabelGraph;
use rescale::AffineRescale;
use solver::{Solver, SpringSolver};

/// Default spacing strength, in caller units.
pub const DEFAULT_K: f64 = 1.5;

/// Default number of simulation steps.
pub const DEFAULT_ITERATIONS: usize = 50;

/// Default bounding-box margin as a fraction of each axis's span.
pub const DEFAULT_MARGIN: f64 = 0.15;

/// Default ceiling on the number of labels per run.
///
/// Repulsion is pairwise, so cost grows with the square of this value.
pub const DEFAULT_MAX_LABELS: usize = 500;

/// Label layout engine configuration.
///
/// Holds parameters only; every [`layout`](Self::layout) call builds and
/// discards its own state.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    k: f64,
    iterations: usize,
    margin: f64,
    max_labels: usize,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            iterations: DEFAULT_ITERATIONS,
            margin: DEFAULT_MARGIN,
            max_labels: DEFAULT_MAX_LABELS,
        }
    }
}

impl LabelLayout {
    /// Create a layout engine with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spacing strength `k`. Larger values push labels farther from
    /// their anchors.
    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    /// Set the number of simulation steps
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the bounding-box margin fraction
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the maximum number of labels accepted in one run
    pub fn with_max_labels(mut self, max_labels: usize) -> Self {
        self.max_labels = max_labels;
        self
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn max_labels(&self) -> usize {
        self.max_labels
    }

    /// Lay out one label per anchor.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidParameter`] for a non-positive `k`, a negative
    ///   margin or a zero iteration count.
    /// - [`LayoutError::TooManyLabels`] above the configured ceiling.
    /// - [`LayoutError::NonFinite`] for NaN or infinite anchor coordinates.
    /// - [`LayoutError::Diverged`] if the simulation produces a non-finite
    ///   position.
    pub fn layout(&self, anchors: &[AnchorPoint]) -> Result<LayoutResult, LayoutError> {
        self.layout_with(&SpringSolver::new(self.k, self.iterations), anchors)
    }

    /// Column-wise variant of [`layout`](Self::layout): `xs[i]`, `ys[i]` and
    /// `labels[i]` describe anchor `i`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::LengthMismatch`] when the three slices differ in
    /// length, plus everything [`layout`](Self::layout) reports.
    pub fn layout_columns<S: AsRef<str>>(
        &self,
        xs: &[f64],
        ys: &[f64],
        labels: &[S],
    ) -> Result<LayoutResult, LayoutError> {
        if xs.len() != ys.len() || xs.len() != labels.len() {
            return Err(LayoutError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
                labels: labels.len(),
            });
        }

        let anchors: Vec<AnchorPoint> = xs
            .iter()
            .zip(ys)
            .zip(labels)
            .map(|((&x, &y), label)| AnchorPoint::new(x, y, label.as_ref()))
            .collect();

        self.layout(&anchors)
    }

    fn validate(&self, anchors: &[AnchorPoint]) -> Result<(), LayoutError> {
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(LayoutError::InvalidParameter(format!(
                "k must be finite and positive, got {}",
                self.k
            )));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(LayoutError::InvalidParameter(format!(
                "margin must be finite and non-negative, got {}",
                self.margin
            )));
        }
        if self.iterations == 0 {
            return Err(LayoutError::InvalidParameter(
                "iterations must be at least 1".to_string(),
            ));
        }
        if anchors.len() > self.max_labels {
            return Err(LayoutError::TooManyLabels {
                count: anchors.len(),
                limit: self.max_labels,
            });
        }
        if let Some(index) = anchors
            .iter()
            .position(|anchor| !anchor.position().is_finite())
        {
            return Err(LayoutError::NonFinite { index });
        }
        Ok(())
    }

    fn layout_with(
        &self,
        solver: &impl Solver,
        anchors: &[AnchorPoint],
    ) -> Result<LayoutResult, LayoutError> {
        self.validate(anchors)?;

        if anchors.is_empty() {
            debug!("No anchors to label");
            return Ok(LayoutResult::default());
        }

        let graph = LabelGraph::build(anchors);
        debug!(
            label_count = anchors.len(),
            node_count = graph.node_count(),
            k = self.k,
            iterations = self.iterations;
            "Running label layout"
        );

        let simulated = solver.solve(graph)?;

        let truth: Vec<_> = anchors.iter().map(AnchorPoint::position).collect();
        let rescale = AffineRescale::fit(simulated.fixed(), &truth);

        let placements: Vec<Placement> = anchors
            .iter()
            .zip(simulated.free())
            .map(|(anchor, &label)| {
                Placement::new(anchor.position(), rescale.apply(label), anchor.text())
            })
            .collect();

        let bounds = Bounds::from_points(
            placements
                .iter()
                .flat_map(|placement| [placement.anchor(), placement.position()]),
        )
        .map(|bounds| bounds.expand_by_fraction(self.margin));

        debug!(bounds:?; "Label layout complete");

        Ok(LayoutResult::new(placements, bounds))
    }
}
