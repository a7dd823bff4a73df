//! Force-directed relaxation of label nodes.
//!
//! Fruchterman-Reingold forces: every node pair repels with `k² / d`, every
//! anchor/label edge attracts with `d² / k`. Free nodes move along their net
//! displacement, capped by a temperature that cools linearly to zero over
//! the iteration budget. Fixed nodes never move.
//!
//! The starting temperature scales with `k`, not with the anchor spread, so
//! a label never steps much further than its rest distance from the anchor.

use log::trace;

use super::{LayoutError, graph::LabelGraph};
use crate::geometry::{Bounds, Point};

/// Distances are clamped from below to keep forces bounded.
const MIN_DISTANCE: f64 = 0.01;

/// Below this separation two nodes are treated as sitting on the same spot.
const COINCIDENT: f64 = 1e-9;

/// Mean per-node movement under which the run stops early.
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

/// Initial temperature as a fraction of `k`.
const INITIAL_TEMPERATURE_FRACTION: f64 = 0.5;

/// Push on a label resting on its own anchor, as a fraction of `k`.
///
/// Symmetric neighbours cancel exactly, so without it such a label would
/// never leave its anchor.
const ANCHOR_NUDGE: f64 = 1e-3;

/// π(3 − √5), spreads successive tie-break directions evenly.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// A layout simulation over a label graph.
///
/// The returned graph holds positions in the solver's own frame. Fixed nodes
/// must come back exactly where that frame placed them, so the caller can
/// fit the frame back onto the original anchors.
pub(crate) trait Solver {
    fn solve(&self, graph: LabelGraph) -> Result<LabelGraph, LayoutError>;
}

/// Spring-embedding solver with pinned anchors.
#[derive(Debug, Clone)]
pub(crate) struct SpringSolver {
    k: f64,
    iterations: usize,
}

impl SpringSolver {
    /// `k` is the target spacing in caller units.
    pub fn new(k: f64, iterations: usize) -> Self {
        Self { k, iterations }
    }

    /// Net displacement of every free node for the current positions.
    fn displacements(graph: &LabelGraph, partner: &[usize], k: f64) -> Vec<Point> {
        let k_sq = k * k;
        let fixed = graph.fixed();
        let free = graph.free();
        let anchor_count = fixed.len();
        let mut displacement = vec![Point::default(); free.len()];

        // Repulsion from every pinned node
        for (i, &label) in free.iter().enumerate() {
            for (j, &anchor) in fixed.iter().enumerate() {
                let push = repulsion(label, anchor, (partner[i], j), k_sq, anchor_count);
                displacement[i] = displacement[i].add_point(push);
            }
        }

        // Repulsion between labels, applied to both sides
        for i in 0..free.len() {
            for j in (i + 1)..free.len() {
                let push = repulsion(
                    free[i],
                    free[j],
                    (partner[i], partner[j]),
                    k_sq,
                    anchor_count,
                );
                displacement[i] = displacement[i].add_point(push);
                displacement[j] = displacement[j].sub_point(push);
            }
        }

        // Attraction along each edge, pulling the label toward its anchor
        for edge in graph.edges() {
            let delta = free[edge.free].sub_point(fixed[edge.fixed]);
            let distance = delta.hypot().max(MIN_DISTANCE);
            displacement[edge.free] = displacement[edge.free].sub_point(delta.scale(distance / k));

            if anchor_count > 1 && delta.hypot() < COINCIDENT {
                displacement[edge.free] =
                    displacement[edge.free].add_point(spin(edge.fixed).scale(k * ANCHOR_NUDGE));
            }
        }

        displacement
    }
}

impl Solver for SpringSolver {
    fn solve(&self, mut graph: LabelGraph) -> Result<LabelGraph, LayoutError> {
        let Some(bounds) = Bounds::from_points(graph.fixed().iter().copied()) else {
            return Ok(graph);
        };

        // Enter the solver frame: anchors centred, larger span normalized to 1
        let center = bounds.center();
        let span = bounds.max_span();
        let scale = if span > f64::EPSILON { span } else { 1.0 };
        graph.map_positions(|point| point.sub_point(center).scale(1.0 / scale));

        let k = self.k / scale;
        let mut temperature = INITIAL_TEMPERATURE_FRACTION * k;
        let cooling = temperature / (self.iterations as f64 + 1.0);

        let mut partner = vec![0; graph.free().len()];
        for edge in graph.edges() {
            partner[edge.free] = edge.fixed;
        }

        let label_count = graph.free().len() as f64;
        for iteration in 0..self.iterations {
            let displacement = Self::displacements(&graph, &partner, k);

            let mut moved = 0.0;
            for (index, (position, push)) in graph
                .free_mut()
                .iter_mut()
                .zip(&displacement)
                .enumerate()
            {
                let length = push.hypot();
                if !length.is_finite() {
                    return Err(LayoutError::Diverged { index });
                }
                if length > 0.0 {
                    let step = push.scale(length.min(temperature) / length);
                    *position = position.add_point(step);
                    moved += step.hypot();
                }
                if !position.is_finite() {
                    return Err(LayoutError::Diverged { index });
                }
            }

            temperature -= cooling;

            if moved / label_count < CONVERGENCE_THRESHOLD {
                trace!(iteration; "Label simulation converged");
                break;
            }
        }

        Ok(graph)
    }
}

/// Repulsive push on `node` away from `other`.
///
/// `owners` are the anchor indices the two nodes belong to. Coincident nodes
/// of the same anchor exert nothing on each other; coincident nodes of
/// different anchors are split along a deterministic direction.
fn repulsion(
    node: Point,
    other: Point,
    owners: (usize, usize),
    k_sq: f64,
    anchor_count: usize,
) -> Point {
    let delta = node.sub_point(other);
    let distance = delta.hypot();

    if distance < COINCIDENT {
        if owners.0 == owners.1 {
            return Point::default();
        }
        return tie_break(owners.0, owners.1, anchor_count).scale(k_sq / MIN_DISTANCE);
    }

    let clamped = distance.max(MIN_DISTANCE);
    delta.scale(k_sq / (distance * clamped))
}

/// Unit direction separating anchors `a` and `b`; `tie_break(b, a)` is its
/// opposite.
fn tie_break(a: usize, b: usize, anchor_count: usize) -> Point {
    let (low, high, sign) = if a < b { (a, b, 1.0) } else { (b, a, -1.0) };
    let angle = (low * anchor_count + high) as f64 * GOLDEN_ANGLE;
    Point::new(angle.cos(), angle.sin()).scale(sign)
}

/// Unit direction for anchor `index` along the golden-angle sequence.
fn spin(index: usize) -> Point {
    let angle = (index + 1) as f64 * GOLDEN_ANGLE;
    Point::new(angle.cos(), angle.sin())
}
