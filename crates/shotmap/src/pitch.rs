//! Pitch dimensions, orientation and markings.
//!
//! All geometry lives in the *pitch frame*: metres, origin at the left end
//! of the bottom touchline, `x` along the pitch towards the attacked goal,
//! `y` across it. [`Orientation`] maps the pitch frame onto the plot frame
//! the shot map is drawn in.

use std::{f64::consts::PI, str::FromStr};

use serde::Deserialize;

use shotmap_core::geometry::Point;

/// StatsBomb pitch length in its own yard-based units.
const STATSBOMB_LENGTH: f64 = 120.0;

/// StatsBomb pitch width in its own yard-based units.
const STATSBOMB_WIDTH: f64 = 80.0;

/// Empirical widening of the penalty-arc half angle.
///
/// Without it the arc stops short of the penalty area line. The base formula
/// takes the cosine of a ratio instead of its arc cosine, so this factor is
/// an approximation that happens to land close, not a derived value.
const PENALTY_ARC_CORRECTION: f64 = 1.1;

/// Polyline segments used to draw one penalty arc.
const ARC_SEGMENTS: usize = 32;

/// Radius of the centre spot, in metres.
const CENTRE_SPOT_RADIUS: f64 = 0.3;

/// Radius of the penalty spots, in metres.
const PENALTY_SPOT_RADIUS: f64 = 0.15;

/// Pitch measurements in metres.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PitchDimensions {
    length: f64,
    width: f64,
    centre_circle_radius: f64,
    penalty_spot_distance: f64,
    penalty_area_depth: f64,
    goal_area_depth: f64,
    goal_width: f64,
    goal_depth: f64,
}

impl Default for PitchDimensions {
    fn default() -> Self {
        Self {
            length: 105.0,
            width: 68.0,
            centre_circle_radius: 9.15,
            penalty_spot_distance: 11.0,
            penalty_area_depth: 16.5,
            goal_area_depth: 5.5,
            goal_width: 7.32,
            goal_depth: 1.5,
        }
    }
}

impl PitchDimensions {
    /// Creates dimensions for a pitch of the given size with standard
    /// markings.
    pub fn with_size(length: f64, width: f64) -> Self {
        Self {
            length,
            width,
            ..Self::default()
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn centre_circle_radius(&self) -> f64 {
        self.centre_circle_radius
    }

    pub fn penalty_spot_distance(&self) -> f64 {
        self.penalty_spot_distance
    }

    pub fn penalty_area_depth(&self) -> f64 {
        self.penalty_area_depth
    }

    pub fn goal_area_depth(&self) -> f64 {
        self.goal_area_depth
    }

    pub fn goal_width(&self) -> f64 {
        self.goal_width
    }

    pub fn goal_depth(&self) -> f64 {
        self.goal_depth
    }

    /// Validates that every measurement is finite and positive and that the
    /// pitch is large enough to hold its markings.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("length", self.length),
            ("width", self.width),
            ("centre_circle_radius", self.centre_circle_radius),
            ("penalty_spot_distance", self.penalty_spot_distance),
            ("penalty_area_depth", self.penalty_area_depth),
            ("goal_area_depth", self.goal_area_depth),
            ("goal_width", self.goal_width),
            ("goal_depth", self.goal_depth),
        ];
        if let Some((name, value)) = fields
            .iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(format!("pitch {name} must be positive, got {value}"));
        }

        if 2.0 * self.penalty_area_depth >= self.length
            || self.goal_width + 2.0 * self.penalty_area_depth >= self.width
        {
            return Err(format!(
                "penalty areas do not fit on a {}x{} pitch",
                self.length, self.width
            ));
        }
        Ok(())
    }

    /// Converts StatsBomb coordinates (120x80, `y` pointing down) into the
    /// pitch frame.
    pub fn from_statsbomb(&self, x: f64, y: f64) -> Point {
        Point::new(
            x * self.length / STATSBOMB_LENGTH,
            self.width - y * self.width / STATSBOMB_WIDTH,
        )
    }

    /// Reflects a pitch-frame point through the centre spot, so a shot at
    /// one end lands at the matching spot of the other end.
    pub fn mirror(&self, point: Point) -> Point {
        Point::new(self.length - point.x(), self.width - point.y())
    }

    /// Half angle of the penalty arcs in degrees, measured at the penalty
    /// spot from the pitch's long axis.
    pub fn penalty_arc_half_angle(&self) -> f64 {
        let ratio = (self.penalty_area_depth - self.penalty_spot_distance)
            / self.centre_circle_radius;
        ratio.cos().to_degrees() * PENALTY_ARC_CORRECTION
    }

    /// Every pitch marking in the pitch frame.
    pub fn markings(&self) -> Vec<Marking> {
        let length = self.length;
        let width = self.width;
        let mid_x = length / 2.0;
        let mid_y = width / 2.0;

        // Distances from the centre of the goal line across the pitch
        let to_post = self.goal_width / 2.0;
        let to_box = to_post + self.penalty_area_depth;
        let to_goal_area = to_post + self.goal_area_depth;

        let line = |points: &[(f64, f64)]| {
            Marking::Line(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
        };

        let mut markings = vec![
            // Outline and halfway line
            line(&[(0.0, 0.0), (0.0, width), (length, width), (length, 0.0), (0.0, 0.0)]),
            line(&[(mid_x, 0.0), (mid_x, width)]),
        ];

        // Penalty areas, goal areas and goals at both ends, mirrored through
        // the halfway line
        for (goal_line, inward) in [(0.0, 1.0), (length, -1.0)] {
            let box_x = goal_line + inward * self.penalty_area_depth;
            let goal_area_x = goal_line + inward * self.goal_area_depth;
            let goal_x = goal_line - inward * self.goal_depth;

            markings.push(line(&[
                (goal_line, mid_y + to_box),
                (box_x, mid_y + to_box),
                (box_x, mid_y - to_box),
                (goal_line, mid_y - to_box),
            ]));
            markings.push(line(&[
                (goal_line, mid_y + to_goal_area),
                (goal_area_x, mid_y + to_goal_area),
                (goal_area_x, mid_y - to_goal_area),
                (goal_line, mid_y - to_goal_area),
            ]));
            markings.push(line(&[
                (goal_line, mid_y - to_post),
                (goal_x, mid_y - to_post),
                (goal_x, mid_y + to_post),
                (goal_line, mid_y + to_post),
            ]));
        }

        let centre = Point::new(mid_x, mid_y);
        let left_spot = Point::new(self.penalty_spot_distance, mid_y);
        let right_spot = Point::new(length - self.penalty_spot_distance, mid_y);
        let theta = self.penalty_arc_half_angle();

        markings.extend([
            Marking::Circle {
                center: centre,
                radius: self.centre_circle_radius,
            },
            Marking::Spot {
                center: centre,
                radius: CENTRE_SPOT_RADIUS,
            },
            Marking::Spot {
                center: left_spot,
                radius: PENALTY_SPOT_RADIUS,
            },
            Marking::Spot {
                center: right_spot,
                radius: PENALTY_SPOT_RADIUS,
            },
            Marking::Line(sample_arc(
                left_spot,
                self.centre_circle_radius,
                -theta,
                theta,
            )),
            Marking::Line(sample_arc(
                right_spot,
                self.centre_circle_radius,
                180.0 - theta,
                180.0 + theta,
            )),
        ]);

        markings
    }
}

/// Points along a circular arc, counter-clockwise from `start` to `end`
/// degrees.
fn sample_arc(center: Point, radius: f64, start: f64, end: f64) -> Vec<Point> {
    (0..=ARC_SEGMENTS)
        .map(|step| {
            let degrees = start + (end - start) * step as f64 / ARC_SEGMENTS as f64;
            let radians = degrees * PI / 180.0;
            Point::new(
                center.x() + radius * radians.cos(),
                center.y() + radius * radians.sin(),
            )
        })
        .collect()
}

/// One pitch marking.
#[derive(Debug, Clone, PartialEq)]
pub enum Marking {
    /// Open or closed polyline
    Line(Vec<Point>),
    /// Stroked, unfilled circle
    Circle { center: Point, radius: f64 },
    /// Filled dot
    Spot { center: Point, radius: f64 },
}

impl Marking {
    /// Maps this marking from the pitch frame into the plot frame.
    pub fn project(&self, orientation: Orientation, dimensions: &PitchDimensions) -> Self {
        let project = |point: Point| orientation.project(point, dimensions);
        match self {
            Self::Line(points) => Self::Line(points.iter().copied().map(project).collect()),
            Self::Circle { center, radius } => Self::Circle {
                center: project(*center),
                radius: *radius,
            },
            Self::Spot { center, radius } => Self::Spot {
                center: project(*center),
                radius: *radius,
            },
        }
    }
}

/// Direction of play in the finished plot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Attacking left to right
    Horizontal,
    /// Attacking upwards
    #[default]
    Vertical,
}

impl Orientation {
    /// Maps a pitch-frame point into the plot frame.
    pub fn project(self, point: Point, dimensions: &PitchDimensions) -> Point {
        match self {
            Self::Horizontal => point,
            Self::Vertical => Point::new(dimensions.width() - point.y(), point.x()),
        }
    }

    /// Maps a plot-frame point back into the pitch frame.
    pub fn unproject(self, point: Point, dimensions: &PitchDimensions) -> Point {
        match self {
            Self::Horizontal => point,
            Self::Vertical => Point::new(point.y(), dimensions.width() - point.x()),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(format!(
                "Unknown orientation '{s}', expected 'horizontal' or 'vertical'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_statsbomb_corners() {
        let dims = PitchDimensions::default();

        let origin = dims.from_statsbomb(0.0, 0.0);
        assert_eq!(origin, Point::new(0.0, 68.0));

        let far = dims.from_statsbomb(120.0, 80.0);
        assert!(approx_eq!(f64, far.x(), 105.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, far.y(), 0.0, epsilon = 1e-12));
    }

    #[test]
    fn test_statsbomb_penalty_spot() {
        let dims = PitchDimensions::default();
        // StatsBomb penalty spot at (108, 40)
        let spot = dims.from_statsbomb(108.0, 40.0);
        assert!(approx_eq!(f64, spot.x(), 94.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, spot.y(), 34.0, epsilon = 1e-12));
    }

    #[test]
    fn test_vertical_projection_round_trip() {
        let dims = PitchDimensions::default();
        let point = Point::new(90.0, 20.0);

        let projected = Orientation::Vertical.project(point, &dims);
        assert_eq!(projected, Point::new(48.0, 90.0));
        assert_eq!(Orientation::Vertical.unproject(projected, &dims), point);
    }

    #[test]
    fn test_mirror_through_centre_spot() {
        let dims = PitchDimensions::default();
        assert_eq!(dims.mirror(Point::new(94.5, 34.0)), Point::new(10.5, 34.0));
        assert_eq!(dims.mirror(Point::new(100.0, 10.0)), Point::new(5.0, 58.0));
        assert_eq!(dims.mirror(dims.mirror(Point::new(3.0, 4.0))), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_horizontal_projection_is_identity() {
        let dims = PitchDimensions::default();
        let point = Point::new(90.0, 20.0);
        assert_eq!(Orientation::Horizontal.project(point, &dims), point);
    }

    #[test]
    fn test_penalty_arc_half_angle() {
        let theta = PitchDimensions::default().penalty_arc_half_angle();
        // cos(5.5 / 9.15) in degrees, widened by 10%
        assert!(approx_eq!(f64, theta, 51.98, epsilon = 0.01));
    }

    #[test]
    fn test_penalty_arc_clears_the_box() {
        let dims = PitchDimensions::default();
        let arc = sample_arc(
            Point::new(dims.penalty_spot_distance(), 34.0),
            dims.centre_circle_radius(),
            -dims.penalty_arc_half_angle(),
            dims.penalty_arc_half_angle(),
        );

        assert_eq!(arc.len(), ARC_SEGMENTS + 1);
        // Arc ends sit just outside the penalty area line
        let end = arc.last().unwrap();
        assert!(end.x() > dims.penalty_area_depth());
        assert!(end.x() < dims.penalty_area_depth() + 0.5);
    }

    #[test]
    fn test_markings_count() {
        let markings = PitchDimensions::default().markings();
        // outline, halfway, 2 x (box, goal area, goal), circle, 3 spots, 2 arcs
        assert_eq!(markings.len(), 14);

        let spots = markings
            .iter()
            .filter(|m| matches!(m, Marking::Spot { .. }))
            .count();
        assert_eq!(spots, 3);
    }

    #[test]
    fn test_markings_stay_near_pitch() {
        let dims = PitchDimensions::default();
        for marking in dims.markings() {
            if let Marking::Line(points) = marking {
                for point in points {
                    assert!(point.x() >= -dims.goal_depth() - 1e-9);
                    assert!(point.x() <= dims.length() + dims.goal_depth() + 1e-9);
                    assert!(point.y() >= -1e-9 && point.y() <= dims.width() + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_marking_projection() {
        let dims = PitchDimensions::default();
        let circle = Marking::Circle {
            center: Point::new(52.5, 34.0),
            radius: 9.15,
        };
        assert_eq!(
            circle.project(Orientation::Vertical, &dims),
            Marking::Circle {
                center: Point::new(34.0, 52.5),
                radius: 9.15
            }
        );
    }

    #[test]
    fn test_validate() {
        assert!(PitchDimensions::default().validate().is_ok());
        assert!(PitchDimensions::with_size(-1.0, 68.0).validate().is_err());
        assert!(PitchDimensions::with_size(30.0, 68.0).validate().is_err());
        assert!(PitchDimensions::with_size(105.0, 30.0).validate().is_err());
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
        assert_eq!(
            "horizontal".parse::<Orientation>(),
            Ok(Orientation::Horizontal)
        );
        assert!("diagonal".parse::<Orientation>().is_err());
    }
}
