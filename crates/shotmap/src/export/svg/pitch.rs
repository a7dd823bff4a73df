//! SVG rendering for pitch markings.

use svg::node::element as svg_element;

use shotmap_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
};

use super::{Screen, Svg, path_data};
use crate::{pitch::Marking, scene::Scene};

impl Svg {
    /// Renders every pitch marking of `scene`, clipped to the plot area.
    pub(super) fn render_markings(&self, scene: &Scene, screen: Screen) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let stroke = StrokeDefinition::solid(self.style.line_color(), self.style.line_width());

        for marking in scene.markings() {
            let node: Box<dyn svg::Node> = match marking {
                Marking::Line(points) => {
                    let path = svg_element::Path::new()
                        .set("d", path_data(points.iter().map(|p| screen.to_screen(*p))))
                        .set("fill", "none")
                        .set("clip-path", self.plot_clip());
                    Box::new(apply_stroke!(path, &stroke))
                }
                Marking::Circle { center, radius } => {
                    let center = screen.to_screen(*center);
                    let circle = svg_element::Circle::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("r", screen.scale(*radius))
                        .set("fill", "none")
                        .set("clip-path", self.plot_clip());
                    Box::new(apply_stroke!(circle, &stroke))
                }
                Marking::Spot { center, radius } => {
                    let center = screen.to_screen(*center);
                    Box::new(
                        svg_element::Circle::new()
                            .set("cx", center.x())
                            .set("cy", center.y())
                            .set("r", screen.scale(*radius))
                            .set("fill", stroke.color().to_string())
                            .set("fill-opacity", stroke.color().alpha())
                            .set("clip-path", self.plot_clip()),
                    )
                }
            };
            output.add_to_layer(RenderLayer::Pitch, node);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, export::svg::SvgBuilder};

    #[test]
    fn test_one_node_per_marking() {
        let config = AppConfig::default();
        let scene = Scene::build(&[], &config).unwrap();
        let svg = SvgBuilder::new(&config).build().unwrap();
        let screen = Screen::new(scene.viewport(), 10.0);

        let output = svg.render_markings(&scene, screen);
        assert_eq!(output.len(), scene.markings().len());
    }

    #[test]
    fn test_markings_are_clipped() {
        let config = AppConfig::default();
        let scene = Scene::build(&[], &config).unwrap();
        let svg = SvgBuilder::new(&config).build().unwrap();
        let screen = Screen::new(scene.viewport(), 10.0);

        let doc = svg
            .render_markings(&scene, screen)
            .render()
            .into_iter()
            .fold(svg::Document::new(), |doc, node| doc.add(node))
            .to_string();

        let clipped = doc.matches("clip-path=\"url(#plot-area)\"").count();
        assert_eq!(clipped, scene.markings().len());
    }
}
