//! Drawing primitives shared by the shot map renderer.
//!
//! - [`StrokeDefinition`] and [`apply_stroke!`](crate::apply_stroke!) for line styling
//! - [`RenderLayer`] and [`LayeredOutput`] for z-ordered SVG output

mod layer;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
