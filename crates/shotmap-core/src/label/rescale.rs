//! Per-axis least-squares mapping from the solver frame to caller units.
//!
//! The pinned nodes give paired samples (simulated, true) on each axis. A
//! line `true = scale * simulated + shift` is fitted per axis and applied to
//! every label. Axes are fitted independently.

use crate::geometry::Point;

/// Relative spread under which an axis is treated as degenerate.
const DEGENERATE_SPREAD: f64 = 1e-12;

/// `value * scale + shift` on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisFit {
    scale: f64,
    shift: f64,
}

impl AxisFit {
    pub fn scale(self) -> f64 {
        self.scale
    }

    pub fn shift(self) -> f64 {
        self.shift
    }

    pub fn apply(self, value: f64) -> f64 {
        value * self.scale + self.shift
    }
}

/// Independent scale and shift for each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AffineRescale {
    x: AxisFit,
    y: AxisFit,
}

impl AffineRescale {
    /// Fits the mapping from `simulated` pinned positions onto `truth`.
    ///
    /// A degenerate axis (all simulated samples equal) falls back to a pure
    /// translation. Its scale is borrowed from the other axis when that one
    /// could be fitted, otherwise it is 1.
    pub fn fit(simulated: &[Point], truth: &[Point]) -> Self {
        debug_assert_eq!(simulated.len(), truth.len());

        let sim_x: Vec<f64> = simulated.iter().map(|p| p.x()).collect();
        let sim_y: Vec<f64> = simulated.iter().map(|p| p.y()).collect();
        let true_x: Vec<f64> = truth.iter().map(|p| p.x()).collect();
        let true_y: Vec<f64> = truth.iter().map(|p| p.y()).collect();

        let fit_x = least_squares(&sim_x, &true_x);
        let fit_y = least_squares(&sim_y, &true_y);

        let fallback_scale = |other: Option<AxisFit>| other.map_or(1.0, AxisFit::scale);
        let x = fit_x.unwrap_or_else(|| translation(&sim_x, &true_x, fallback_scale(fit_y)));
        let y = fit_y.unwrap_or_else(|| translation(&sim_y, &true_y, fallback_scale(fit_x)));

        Self { x, y }
    }

    pub fn x(&self) -> AxisFit {
        self.x
    }

    pub fn y(&self) -> AxisFit {
        self.y
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(self.x.apply(point.x()), self.y.apply(point.y()))
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn is_degenerate(values: &[f64]) -> bool {
    let (min, max, magnitude) = values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0_f64),
        |(min, max, magnitude), &v| (min.min(v), max.max(v), magnitude.max(v.abs())),
    );
    values.is_empty() || max - min <= DEGENERATE_SPREAD * magnitude.max(1.0)
}

/// Ordinary least squares, or `None` when the samples have no spread.
fn least_squares(simulated: &[f64], truth: &[f64]) -> Option<AxisFit> {
    if is_degenerate(simulated) {
        return None;
    }

    let sim_mean = mean(simulated);
    let true_mean = mean(truth);
    let (covariance, variance) = simulated.iter().zip(truth).fold(
        (0.0, 0.0),
        |(covariance, variance), (&s, &t)| {
            let ds = s - sim_mean;
            (covariance + ds * (t - true_mean), variance + ds * ds)
        },
    );

    let scale = covariance / variance;
    Some(AxisFit {
        scale,
        shift: true_mean - scale * sim_mean,
    })
}

fn translation(simulated: &[f64], truth: &[f64], scale: f64) -> AxisFit {
    AxisFit {
        scale,
        shift: mean(truth) - scale * mean(simulated),
    }
}
