//! Basic geometric types in data units.
//!
//! Positions on the pitch, label positions and viewport extents are all
//! expressed in the caller's data units (metres for a shot map).

/// A 2D position in data units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks that neither coordinate is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        self.sub_point(other).hypot()
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds from explicit extents.
    ///
    /// Swapped extents are normalized so that `min <= max` on both axes.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    /// Smallest bounds containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let initial = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        Some(points.fold(initial, |acc, point| Self {
            min_x: acc.min_x.min(point.x),
            min_y: acc.min_y.min(point.y),
            max_x: acc.max_x.max(point.x),
            max_y: acc.max_y.max(point.y),
        }))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the center of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the larger of width and height
    pub fn max_span(self) -> f64 {
        self.width().max(self.height())
    }

    /// Checks whether the point lies inside the bounds (edges included)
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows each side outward by `fraction` of that axis's span.
    ///
    /// A zero-span axis stays zero-span.
    pub fn expand_by_fraction(&self, fraction: f64) -> Self {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Self {
            min_x: self.min_x - dx,
            min_y: self.min_y - dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_midpoint() {
        let midpoint = Point::new(0.0, 0.0).midpoint(Point::new(4.0, 6.0));
        assert_eq!(midpoint, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::new(1.0, 1.0).distance(Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_point_scale() {
        let scaled = Point::new(2.0, 3.0).scale(2.5);
        assert_eq!(scaled, Point::new(5.0, 7.5));
        assert!(Point::new(10.0, 20.0).scale(0.0).is_zero());
    }

    #[test]
    fn test_bounds_new_normalizes() {
        let bounds = Bounds::new(5.0, 8.0, 1.0, 2.0);
        assert_eq!(bounds.min_x(), 1.0);
        assert_eq!(bounds.min_y(), 2.0);
        assert_eq!(bounds.max_x(), 5.0);
        assert_eq!(bounds.max_y(), 8.0);
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds::from_points([
            Point::new(1.0, 4.0),
            Point::new(-2.0, 3.0),
            Point::new(0.0, 9.0),
        ])
        .unwrap();

        assert_eq!(bounds, Bounds::new(-2.0, 3.0, 1.0, 9.0));
        assert_eq!(bounds.width(), 3.0);
        assert_eq!(bounds.height(), 6.0);
        assert_eq!(bounds.max_span(), 6.0);
    }

    #[test]
    fn test_bounds_from_no_points() {
        assert!(Bounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_bounds_center_and_contains() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(bounds.center(), Point::new(5.0, 2.0));
        assert!(bounds.contains(Point::new(10.0, 0.0)));
        assert!(!bounds.contains(Point::new(10.1, 0.0)));
    }

    #[test]
    fn test_bounds_merge() {
        let merged = Bounds::new(1.0, 2.0, 5.0, 6.0).merge(&Bounds::new(3.0, 0.0, 8.0, 4.0));
        assert_eq!(merged, Bounds::new(1.0, 0.0, 8.0, 6.0));
    }

    #[test]
    fn test_bounds_expand_by_fraction() {
        let expanded = Bounds::new(0.0, 10.0, 10.0, 30.0).expand_by_fraction(0.15);
        assert_eq!(expanded.min_x(), -1.5);
        assert_eq!(expanded.max_x(), 11.5);
        assert_eq!(expanded.min_y(), 7.0);
        assert_eq!(expanded.max_y(), 33.0);
    }

    #[test]
    fn test_bounds_expand_zero_span() {
        let point = Bounds::from_points([Point::new(2.0, 3.0)]).unwrap();
        assert_eq!(point.expand_by_fraction(0.15), point);
    }
}
