//! SVG rendering for shot markers and their labels.

use svg::node::element as svg_element;

use shotmap_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    label::LayoutResult,
};

use super::{Screen, Svg};
use crate::scene::Scene;

/// Outline width of shot markers, in pixels.
const MARKER_OUTLINE_WIDTH: f64 = 1.0;

/// Radius in pixels of a marker whose area is `xg * size_factor`.
pub(crate) fn marker_radius(xg: f64, size_factor: f64) -> f64 {
    (xg * size_factor / std::f64::consts::PI).sqrt()
}

/// Unfilled marker interior.
pub(crate) fn hollow_fill() -> Color {
    Color::new("white").unwrap_or_default()
}

impl Svg {
    /// Renders one marker per shot, in the scene's drawing order.
    ///
    /// Goals are filled with the team color; other shots are hollow.
    pub(super) fn render_shots(&self, scene: &Scene, screen: Screen) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for shot in scene.shots() {
            let team_color = self
                .style
                .team_color(scene.team_index(shot.team()).unwrap_or_default());
            let fill = if shot.is_goal() {
                team_color
            } else {
                hollow_fill()
            };
            let stroke = StrokeDefinition::solid(team_color, MARKER_OUTLINE_WIDTH);
            let center = screen.to_screen(shot.position());

            let circle = svg_element::Circle::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("r", marker_radius(shot.xg(), self.plot.shot_size_factor()))
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha())
                .set("clip-path", self.plot_clip());
            output.add_to_layer(RenderLayer::Marker, Box::new(apply_stroke!(circle, &stroke)));
        }

        output
    }

    /// Renders label text and a leader line back to each shot.
    pub(super) fn render_labels(&self, labels: &LayoutResult, screen: Screen) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let leader = self.style.leader_stroke();

        for placement in labels.placements() {
            let (from, to) = placement.leader_line();
            let from = screen.to_screen(from);
            let to = screen.to_screen(to);

            let line = svg_element::Line::new()
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y());
            output.add_to_layer(RenderLayer::Leader, Box::new(apply_stroke!(line, &leader)));

            let text = svg_element::Text::new("")
                .set("x", from.x())
                .set("y", from.y())
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-family", self.style.font_family())
                .set("font-size", self.style.font_size())
                .add(svg::node::Text::new(placement.text()));
            output.add_to_layer(RenderLayer::Text, Box::new(text));
        }

        output
    }
}
