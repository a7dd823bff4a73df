//! SVG rendering for the xG and team legends.
//!
//! Both legends sit inside the plot area: the xG size key along the top
//! edge, the team key in the lower-left corner. On a comparison map the
//! team key moves up under the xG key, since both ends of the pitch hold
//! shots, and provider captions are drawn on their halves.

use svg::node::element as svg_element;

use shotmap_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

use super::{
    Screen, Svg,
    shots::{hollow_fill, marker_radius},
};
use crate::scene::Scene;

/// Sample xG values shown as hollow markers.
const XG_SAMPLES: [f64; 3] = [0.05, 0.25, 0.5];

/// xG of the filled marker explaining goals.
const GOAL_SAMPLE: f64 = 0.25;

/// Inset of a legend from the plot area edge, in pixels.
const INSET: f64 = 10.0;

/// Gap between a legend symbol and its text.
const SYMBOL_GAP: f64 = 4.0;

/// Gap between consecutive xG entries.
const ENTRY_GAP: f64 = 16.0;

/// Side of a team color swatch, relative to the font size.
const SWATCH_RATIO: f64 = 0.9;

/// Rough advance width of one character, relative to the font size.
const CHAR_WIDTH_RATIO: f64 = 0.6;

/// xG legend title on a comparison map, which mixes providers.
const COMPARISON_TITLE: &str = "Expected goals (xG) for shots";

/// Vertical placement of the xG legend rows, in document pixels.
struct XgRows {
    title_y: f64,
    marker_y: f64,
    max_radius: f64,
}

impl XgRows {
    fn bottom(&self) -> f64 {
        self.marker_y + self.max_radius
    }
}

fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_RATIO
}

impl Svg {
    fn legend_text(&self, position: Point, content: &str) -> svg_element::Text {
        svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("dominant-baseline", "central")
            .set("font-family", self.style.font_family())
            .set("font-size", self.style.legend_font_size())
            .add(svg::node::Text::new(content))
    }

    fn xg_rows(&self, screen: Screen) -> XgRows {
        let font_size = self.style.legend_font_size();
        let factor = self.plot.shot_size_factor();

        let title_y = screen.plot_area().min_y() + INSET + font_size / 2.0;
        let max_radius = XG_SAMPLES
            .iter()
            .chain([GOAL_SAMPLE].iter())
            .map(|&xg| marker_radius(xg, factor))
            .fold(0.0, f64::max);

        XgRows {
            title_y,
            marker_y: title_y + font_size / 2.0 + INSET + max_radius,
            max_radius,
        }
    }

    /// Renders the xG size key: a title over one row of sample markers.
    pub(super) fn render_xg_legend(&self, scene: &Scene, screen: Screen) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let area = screen.plot_area();
        let font_size = self.style.legend_font_size();
        let factor = self.plot.shot_size_factor();
        let rows = self.xg_rows(screen);

        let title = if scene.is_comparison() {
            COMPARISON_TITLE.to_string()
        } else {
            self.plot.legend_title()
        };
        output.add_to_layer(
            RenderLayer::Legend,
            Box::new(self.legend_text(Point::new(area.min_x() + INSET, rows.title_y), &title)),
        );

        let entries = XG_SAMPLES
            .iter()
            .map(|&xg| (xg, xg.to_string(), false))
            .chain(std::iter::once((GOAL_SAMPLE, "goal".to_string(), true)));

        let max_radius = rows.max_radius;
        let row_y = rows.marker_y;
        let ink = Color::default();
        let stroke = StrokeDefinition::solid(ink, 1.0);

        let mut x = area.min_x() + INSET + max_radius;
        for (xg, label, filled) in entries {
            let fill = if filled { ink } else { hollow_fill() };
            let circle = svg_element::Circle::new()
                .set("cx", x)
                .set("cy", row_y)
                .set("r", marker_radius(xg, factor))
                .set("fill", fill.to_string());
            output.add_to_layer(RenderLayer::Legend, Box::new(apply_stroke!(circle, &stroke)));

            let text_x = x + max_radius + SYMBOL_GAP;
            output.add_to_layer(
                RenderLayer::Legend,
                Box::new(self.legend_text(Point::new(text_x, row_y), &label)),
            );

            x = text_x + estimate_text_width(&label, font_size) + ENTRY_GAP + max_radius;
        }

        output
    }

    /// Renders one color swatch and name per team, first team on top.
    pub(super) fn render_team_legend(&self, scene: &Scene, screen: Screen) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let teams = scene.teams();
        if teams.is_empty() {
            return output;
        }

        let area = screen.plot_area();
        let font_size = self.style.legend_font_size();
        let swatch = font_size * SWATCH_RATIO;
        let row_height = font_size * 1.5;
        let first_row_y = if scene.is_comparison() {
            self.xg_rows(screen).bottom() + INSET + row_height / 2.0
        } else {
            area.max_y() - INSET - row_height * (teams.len() as f64 - 0.5)
        };

        for (index, team) in teams.iter().enumerate() {
            let color = self.style.team_color(index);
            let row_y = first_row_y + row_height * index as f64;

            let rect = svg_element::Rectangle::new()
                .set("x", area.min_x() + INSET)
                .set("y", row_y - swatch / 2.0)
                .set("width", swatch)
                .set("height", swatch)
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Legend, Box::new(rect));

            let text_position = Point::new(area.min_x() + INSET + swatch + SYMBOL_GAP, row_y);
            output.add_to_layer(
                RenderLayer::Legend,
                Box::new(self.legend_text(text_position, team)),
            );
        }

        output
    }

    /// Renders the provider captions of a comparison map.
    pub(super) fn render_captions(&self, scene: &Scene, screen: Screen) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for caption in scene.captions() {
            let position = screen.to_screen(caption.position());
            let text = self
                .legend_text(position, caption.text())
                .set("text-anchor", "middle");
            output.add_to_layer(RenderLayer::Legend, Box::new(text));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        data::Shot,
        export::svg::{SvgBuilder, text_contents},
    };

    fn svg_and_screen() -> (Svg, Screen) {
        let config = AppConfig::default();
        let scene = Scene::build(&[], &config).unwrap();
        let screen = Screen::new(scene.viewport(), 10.0);
        (SvgBuilder::new(&config).build().unwrap(), screen)
    }

    fn comparison() -> (Scene, Svg, Screen) {
        let config = AppConfig::default();
        let shots = [
            Shot::new(Point::new(30.0, 95.0), 0.1, "Home", false, "a 1'"),
            Shot::new(Point::new(40.0, 90.0), 0.2, "Away", false, "b 2'"),
        ];
        let scene =
            Scene::build_comparison(&shots, &shots, ["Opta", "Statsbomb"], &config).unwrap();
        let screen = Screen::new(scene.viewport(), 10.0);
        (scene, SvgBuilder::new(&config).build().unwrap(), screen)
    }

    fn to_string(output: LayeredOutput) -> String {
        output
            .render()
            .into_iter()
            .fold(svg::Document::new(), |doc, node| doc.add(node))
            .to_string()
    }

    #[test]
    fn test_xg_legend_entries() {
        let (svg, screen) = svg_and_screen();
        let scene = Scene::build(&[], &AppConfig::default()).unwrap();
        let output = svg.render_xg_legend(&scene, screen);

        // Title plus a marker and a text per entry
        assert_eq!(output.len(), 1 + 2 * (XG_SAMPLES.len() + 1));

        let texts = text_contents(&to_string(output));
        assert_eq!(
            texts,
            [
                "Statsbomb expected goals (xG) for shots",
                "0.05",
                "0.25",
                "0.5",
                "goal"
            ]
        );
    }

    #[test]
    fn test_team_legend_rows() {
        let config = AppConfig::default();
        let shots = [
            Shot::new(Point::new(30.0, 95.0), 0.1, "Home", false, "a 1'"),
            Shot::new(Point::new(40.0, 90.0), 0.2, "Away", false, "b 2'"),
        ];
        let scene = Scene::build(&shots, &config).unwrap();
        let screen = Screen::new(scene.viewport(), 10.0);
        let svg = SvgBuilder::new(&config).build().unwrap();

        let output = svg.render_team_legend(&scene, screen);
        assert_eq!(output.len(), 4);

        // First team on top
        assert_eq!(text_contents(&to_string(output)), ["Home", "Away"]);
    }

    #[test]
    fn test_team_legend_empty_without_shots() {
        let config = AppConfig::default();
        let scene = Scene::build(&[], &config).unwrap();
        let (svg, screen) = svg_and_screen();
        assert!(svg.render_team_legend(&scene, screen).is_empty());
    }

    #[test]
    fn test_comparison_title_drops_provider() {
        let (scene, svg, screen) = comparison();
        let texts = text_contents(&to_string(svg.render_xg_legend(&scene, screen)));
        assert_eq!(texts[0], "Expected goals (xG) for shots");
    }

    #[test]
    fn test_comparison_team_legend_under_xg_legend() {
        let (scene, svg, screen) = comparison();
        let bottom = svg.xg_rows(screen).bottom();

        let doc = to_string(svg.render_team_legend(&scene, screen));
        let y_values: Vec<f64> = doc
            .split("<rect")
            .skip(1)
            .filter_map(|rect| {
                // Leading space so `fill-opacity="` does not match
                let start = rect.find(" y=\"")? + 4;
                let end = start + rect[start..].find('"')?;
                rect[start..end].parse().ok()
            })
            .collect();

        assert_eq!(y_values.len(), 2);
        assert!(y_values.iter().all(|&y| y > bottom), "{y_values:?} vs {bottom}");
        assert!(y_values[0] < y_values[1]);
        // Well above the lower edge, where the single map puts it
        assert!(y_values[1] < screen.plot_area().center().y());
    }

    #[test]
    fn test_captions_rendered_centred() {
        let (scene, svg, screen) = comparison();
        let output = svg.render_captions(&scene, screen);
        assert_eq!(output.len(), 2);

        let doc = to_string(output);
        assert_eq!(text_contents(&doc), ["Opta", "Statsbomb"]);
        assert_eq!(doc.matches("text-anchor=\"middle\"").count(), 2);
    }

    #[test]
    fn test_single_map_has_no_captions() {
        let (svg, screen) = svg_and_screen();
        let scene = Scene::build(&[], &AppConfig::default()).unwrap();
        assert!(svg.render_captions(&scene, screen).is_empty());
    }

    #[test]
    fn test_estimate_text_width() {
        assert_eq!(estimate_text_width("", 12.0), 0.0);
        assert!(estimate_text_width("goal", 12.0) > estimate_text_width("0.5", 12.0));
    }
}
