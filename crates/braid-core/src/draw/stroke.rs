//! Stroke definitions for connectors, outlines and ring arcs.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width, dash pattern and cap of a stroke
//! - [`StrokeStyle`]: dash pattern (solid, dashed, dotted)
//! - [`StrokeCap`]: how line endpoints are rendered
//! - [`apply_stroke!`](crate::apply_stroke!): applies a definition to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke` | `"#64748b"` |
//! | `width` | `stroke-width` | `2` |
//! | `style` | `stroke-dasharray` | `"6,4"`, `"2,3"` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"` |
//!
//! # Example
//!
//! ```
//! use braid_core::color::Color;
//! use braid_core::draw::{StrokeCap, StrokeDefinition, StrokeStyle};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("#64748b").unwrap(), 2.0)
//!     .with_style(StrokeStyle::Dashed)
//!     .with_cap(StrokeCap::Round);
//!
//! let path = braid_core::apply_stroke!(svg_element::Path::new(), &stroke);
//! assert!(path.to_string().contains(r#"stroke-dasharray="6,4""#));
//! ```

use crate::{color::Color, semantic::WireStyle};

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Continuous line (no dasharray attribute)
    #[default]
    Solid,
    /// 6px dash, 4px gap
    Dashed,
    /// 2px dot, 3px gap
    Dotted,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("6,4"),
            Self::Dotted => Some("2,3"),
        }
    }
}

impl From<WireStyle> for StrokeStyle {
    fn from(style: WireStyle) -> Self {
        match style {
            WireStyle::Solid => Self::Solid,
            WireStyle::Dashed => Self::Dashed,
            WireStyle::Dotted => Self::Dotted,
        }
    }
}

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// A stroke definition for rendering lines and outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a solid, butt-capped stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
            cap: StrokeCap::Butt,
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns a copy of this stroke with another dash pattern.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns a copy of this stroke with another cap.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns a copy of this stroke with another width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

/// Applies all stroke attributes from a [`StrokeDefinition`] to an SVG element.
///
/// Sets `stroke`, `stroke-width` and `stroke-linecap`, and
/// `stroke-dasharray` for patterned styles.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_new() {
        let stroke = StrokeDefinition::new(Color::new("red").unwrap(), 2.0);
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.style(), StrokeStyle::Solid);
        assert_eq!(stroke.cap(), StrokeCap::Butt);
    }

    #[test]
    fn test_stroke_builders() {
        let stroke = StrokeDefinition::new(Color::new("red").unwrap(), 2.0)
            .with_style(StrokeStyle::Dotted)
            .with_cap(StrokeCap::Round)
            .with_width(6.0);

        assert_eq!(stroke.style(), StrokeStyle::Dotted);
        assert_eq!(stroke.cap(), StrokeCap::Round);
        assert_eq!(stroke.width(), 6.0);
    }

    #[test]
    fn test_wire_style_conversion() {
        assert_eq!(StrokeStyle::from(WireStyle::Solid).to_svg_value(), None);
        assert_eq!(StrokeStyle::from(WireStyle::Dashed).to_svg_value(), Some("6,4"));
        assert_eq!(StrokeStyle::from(WireStyle::Dotted).to_svg_value(), Some("2,3"));
    }

    #[test]
    fn test_apply_stroke_solid() {
        let stroke = StrokeDefinition::new(Color::new("blue").unwrap(), 1.5);
        let markup = crate::apply_stroke!(svg_element::Path::new(), &stroke).to_string();

        assert!(markup.contains(r#"stroke-width="1.5""#));
        assert!(markup.contains(r#"stroke-linecap="butt""#));
        assert!(!markup.contains("stroke-dasharray"));
    }

    #[test]
    fn test_apply_stroke_dashed_round() {
        let stroke = StrokeDefinition::new(Color::new("blue").unwrap(), 3.0)
            .with_style(StrokeStyle::Dashed)
            .with_cap(StrokeCap::Round);
        let markup = crate::apply_stroke!(svg_element::Path::new(), &stroke).to_string();

        assert!(markup.contains(r#"stroke-dasharray="6,4""#));
        assert!(markup.contains(r#"stroke-linecap="round""#));
    }
}
