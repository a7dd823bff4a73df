use thiserror::Error;

/// Errors reported by [`LabelLayout`](super::LabelLayout).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Column-wise input with differing lengths.
    #[error("Mismatched input lengths: {xs} x values, {ys} y values, {labels} labels")]
    LengthMismatch { xs: usize, ys: usize, labels: usize },

    /// An anchor coordinate is NaN or infinite.
    #[error("Anchor {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("Invalid layout parameter: {0}")]
    InvalidParameter(String),

    /// More labels than the configured ceiling. The caller may truncate,
    /// sample, or skip labelling.
    #[error("Too many labels: {count} exceeds the limit of {limit}")]
    TooManyLabels { count: usize, limit: usize },

    /// A label position became non-finite mid-simulation. This is a solver
    /// bug, not an input problem.
    #[error("Label {index} diverged during simulation")]
    Diverged { index: usize },
}
