//! Visible region of the plot.
//!
//! The zoom heuristic frames the attacking end of the pitch: wide enough for
//! the penalty area and every shot, deep enough to reach the penalty arc and
//! the deepest shot, and a little past the goal line.

use shotmap_core::geometry::Bounds;

use crate::{
    data::Shot,
    pitch::{Orientation, PitchDimensions},
};

/// Relative padding around the zoomed region.
const ZOOM_BUFFER: f64 = 0.05;

/// How far past the attacked goal line the view extends, relative to the
/// pitch length.
const GOAL_END_FACTOR: f64 = 1.07;

/// Zoomed plot-frame region covering the shots.
///
/// With no shots the region still covers the penalty area and arc.
pub fn zoom_region(
    shots: &[Shot],
    dimensions: &PitchDimensions,
    orientation: Orientation,
) -> Bounds {
    let half_width = dimensions.width() / 2.0;
    let across_floor = dimensions.penalty_area_depth() + dimensions.goal_width() / 2.0;
    let along_floor = dimensions.penalty_spot_distance() + dimensions.centre_circle_radius();

    let pitch_points: Vec<_> = shots
        .iter()
        .map(|shot| orientation.unproject(shot.position(), dimensions))
        .collect();

    let across = pitch_points
        .iter()
        .map(|point| (point.y() - half_width).abs())
        .fold(across_floor, f64::max);
    let along_min = pitch_points
        .iter()
        .map(|point| point.x())
        .reduce(f64::min)
        .map_or(along_floor, |min_x| min_x.max(along_floor));

    let along = (
        along_min * (1.0 - ZOOM_BUFFER),
        dimensions.length() * GOAL_END_FACTOR,
    );
    let across = (
        (half_width - across) * (1.0 - ZOOM_BUFFER),
        (half_width + across) * (1.0 + ZOOM_BUFFER),
    );

    plot_bounds(along, across, orientation)
}

/// The whole pitch, goals included, with the same padding as the zoom.
pub fn full_pitch(dimensions: &PitchDimensions, orientation: Orientation) -> Bounds {
    let pad = dimensions.length() * ZOOM_BUFFER;
    let along = (
        -dimensions.goal_depth() - pad,
        dimensions.length() + dimensions.goal_depth() + pad,
    );
    let across = (-pad, dimensions.width() + pad);

    plot_bounds(along, across, orientation)
}

/// Places pitch-frame ranges on the plot axes.
fn plot_bounds(along: (f64, f64), across: (f64, f64), orientation: Orientation) -> Bounds {
    match orientation {
        Orientation::Horizontal => Bounds::new(along.0, across.0, along.1, across.1),
        Orientation::Vertical => Bounds::new(across.0, along.0, across.1, along.1),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use shotmap_core::geometry::Point;

    use super::*;

    fn shot_at(x: f64, y: f64, orientation: Orientation) -> Shot {
        let dims = PitchDimensions::default();
        let position = orientation.project(Point::new(x, y), &dims);
        Shot::new(position, 0.1, "A", false, "a 1'")
    }

    #[test]
    fn test_empty_uses_floors() {
        let dims = PitchDimensions::default();
        let bounds = zoom_region(&[], &dims, Orientation::Horizontal);

        // along: 20.15 * 0.95 .. 105 * 1.07
        assert!(approx_eq!(f64, bounds.min_x(), 19.1425, epsilon = 1e-9));
        assert!(approx_eq!(f64, bounds.max_x(), 112.35, epsilon = 1e-9));
        // across: (34 - 20.16) * 0.95 .. (34 + 20.16) * 1.05
        assert!(approx_eq!(f64, bounds.min_y(), 13.148, epsilon = 1e-9));
        assert!(approx_eq!(f64, bounds.max_y(), 56.868, epsilon = 1e-9));
    }

    #[test]
    fn test_shots_inside_floors_keep_floors_across() {
        let dims = PitchDimensions::default();
        let shots = [shot_at(95.0, 30.0, Orientation::Horizontal)];
        let bounds = zoom_region(&shots, &dims, Orientation::Horizontal);

        assert!(approx_eq!(f64, bounds.min_y(), 13.148, epsilon = 1e-9));
        // Along range starts from the shot
        assert!(approx_eq!(f64, bounds.min_x(), 95.0 * 0.95, epsilon = 1e-9));
    }

    #[test]
    fn test_wide_shot_widens_view() {
        let dims = PitchDimensions::default();
        let shots = [
            shot_at(80.0, 5.0, Orientation::Horizontal),
            shot_at(100.0, 34.0, Orientation::Horizontal),
        ];
        let bounds = zoom_region(&shots, &dims, Orientation::Horizontal);

        // |5 - 34| = 29 beats the 20.16 floor
        assert!(approx_eq!(f64, bounds.min_y(), 5.0 * 0.95, epsilon = 1e-9));
        assert!(approx_eq!(f64, bounds.max_y(), 63.0 * 1.05, epsilon = 1e-9));
        assert!(approx_eq!(f64, bounds.min_x(), 80.0 * 0.95, epsilon = 1e-9));
    }

    #[test]
    fn test_vertical_swaps_axes() {
        let dims = PitchDimensions::default();
        let shots = [shot_at(80.0, 5.0, Orientation::Vertical)];

        let horizontal = zoom_region(
            &[shot_at(80.0, 5.0, Orientation::Horizontal)],
            &dims,
            Orientation::Horizontal,
        );
        let vertical = zoom_region(&shots, &dims, Orientation::Vertical);

        assert!(approx_eq!(f64, vertical.min_x(), horizontal.min_y(), epsilon = 1e-9));
        assert!(approx_eq!(f64, vertical.max_x(), horizontal.max_y(), epsilon = 1e-9));
        assert!(approx_eq!(f64, vertical.min_y(), horizontal.min_x(), epsilon = 1e-9));
        assert!(approx_eq!(f64, vertical.max_y(), horizontal.max_x(), epsilon = 1e-9));
    }

    #[test]
    fn test_zoom_contains_shots() {
        let dims = PitchDimensions::default();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let shots = [
                shot_at(70.0, 60.0, orientation),
                shot_at(102.0, 36.0, orientation),
            ];
            let bounds = zoom_region(&shots, &dims, orientation);
            for shot in &shots {
                assert!(bounds.contains(shot.position()), "{orientation:?}");
            }
        }
    }

    #[test]
    fn test_full_pitch_contains_goals() {
        let dims = PitchDimensions::default();
        let bounds = full_pitch(&dims, Orientation::Horizontal);
        assert!(bounds.contains(Point::new(-1.5, 34.0)));
        assert!(bounds.contains(Point::new(106.5, 34.0)));
        assert!(bounds.contains(Point::new(52.5, 68.0)));
    }
}
