//! Drawing primitives shared by SVG renderers.
//!
//! - [`LayeredOutput`] accumulates immutable SVG fragments tagged with a
//!   [`RenderLayer`] and assembles them once, in z-order.
//! - [`StrokeDefinition`] describes a stroke and is applied to SVG elements
//!   with [`apply_stroke!`](crate::apply_stroke!).

mod layer;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
