//! Color handling for Braid diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are used as keys when shared SVG definitions
//! (markers, gradients) are deduplicated, so they implement [`Eq`] and [`Hash`]
//! through their CSS serialization.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Rgba8, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#10b981", "rgb(16, 185, 129)", "teal", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use braid_core::color::Color;
    ///
    /// let emerald = Color::new("#10b981").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a sanitized, ID-safe string representation of this color.
    ///
    /// The result is used as the suffix of marker and gradient ids such as
    /// `arrow-<id>` and `grad-<id>`. It contains only alphanumeric characters,
    /// underscores and dots, and always starts with a letter. Opaque colors map
    /// to `hex` followed by their six hex digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use braid_core::color::Color;
    ///
    /// let color = Color::new("#ff8000").unwrap();
    /// let id_str = color.to_id_safe_string();
    /// assert!(id_str.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.'));
    /// assert!(!id_str.contains('#'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '/', '%'], "_");

        // SVG ids must start with a letter
        if sanitized.chars().next().is_some_and(|c| !c.is_ascii_alphabetic()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::new([0.0, 0.0, 0.0, 1.0])),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    /// Opaque colors are written as `#rrggbb`, anything translucent in CSS
    /// color syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba8 { r, g, b, a } = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if a == u8::MAX {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "{}", self.color)
        }
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_string())
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#10b981").is_ok());
        assert!(Color::new("rgb(16, 185, 129)").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_color_from_str() {
        let parsed: Color = "red".parse().unwrap();
        assert_eq!(parsed, Color::new("red").unwrap());
    }

    #[test]
    fn test_color_to_id_safe_string() {
        for input in ["#ff0000", "rgb(1, 2, 3)", "teal", "#10b98180"] {
            let safe_id = Color::new(input).unwrap().to_id_safe_string();
            assert!(
                safe_id
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '.'),
                "unsafe id `{safe_id}` for `{input}`"
            );
            assert!(safe_id.starts_with(|c: char| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_opaque_colors_display_as_hex() {
        assert_eq!(Color::new("#0f172a").unwrap().to_string(), "#0f172a");
        assert_eq!(Color::new("rgb(16, 185, 129)").unwrap().to_string(), "#10b981");
        assert_eq!(Color::new("teal").unwrap().to_string(), "#008080");
        assert_eq!(Color::default().to_string(), "#000000");
        assert_eq!(Color::new("#10B981").unwrap().to_id_safe_string(), "hex10b981");
    }

    #[test]
    fn test_translucent_colors_keep_alpha() {
        let translucent = Color::new("#10b98180").unwrap().to_string();
        assert!(!translucent.starts_with('#'), "alpha dropped: {translucent}");
    }

    #[test]
    fn test_distinct_colors_have_distinct_ids() {
        let a = Color::new("#10b981").unwrap().to_id_safe_string();
        let b = Color::new("#8b5cf6").unwrap().to_id_safe_string();
        assert_ne!(a, b);
    }

    #[test]
    fn test_color_alpha() {
        assert!((Color::new("red").unwrap().alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_default_is_opaque_black() {
        let black = Color::default();
        assert!((black.alpha() - 1.0).abs() < 0.001);
        assert_eq!(black.to_id_safe_string(), Color::default().to_id_safe_string());
    }

    #[test]
    fn test_color_eq_hash() {
        let color1 = Color::new("#10b981").unwrap();
        let color2 = Color::new("#10b981").unwrap();
        let color3 = Color::new("#3b82f6").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
