//! Configuration types for Braid diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field is optional and falls back to the defaults listed
//! on each getter.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Grid spacing, margins and canvas floors.
//! - [`StyleConfig`] - Palette overrides and font family.
//! - [`Palette`] - The resolved colors handed to the renderer.
//!
//! # Example
//!
//! ```
//! # use braid::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().spacing_x(), 160.0);
//! assert!(config.style().palette().is_ok());
//! ```

use serde::Deserialize;

use braid_core::{
    color::Color,
    geometry::{Insets, Size},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Grid and canvas settings for the positioner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    spacing_x: f32,
    spacing_y: f32,
    margin_top: f32,
    margin_bottom: f32,
    margin_x: f32,
    min_width: f32,
    min_height: f32,
    empty_width: f32,
    empty_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing_x: 160.0,
            spacing_y: 140.0,
            margin_top: 100.0,
            margin_bottom: 120.0,
            margin_x: 80.0,
            min_width: 500.0,
            min_height: 0.0,
            empty_width: 600.0,
            empty_height: 400.0,
        }
    }
}

impl LayoutConfig {
    /// Horizontal distance between node centers in a layer. Default 160.
    pub fn spacing_x(&self) -> f32 {
        self.spacing_x
    }

    /// Vertical distance between layers. Default 140.
    pub fn spacing_y(&self) -> f32 {
        self.spacing_y
    }

    /// Canvas margins: top 100, horizontal 80, bottom 120 by default.
    ///
    /// The top margin is where the first layer's centers sit; the header
    /// text lives inside it.
    pub fn margins(&self) -> Insets {
        Insets::symmetric_horizontal(self.margin_top, self.margin_x, self.margin_bottom)
    }

    /// Minimum canvas size. Default 500 x 0.
    pub fn min_canvas(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Canvas size used when the composition has no nodes. Default 600 x 400.
    pub fn empty_canvas(&self) -> Size {
        Size::new(self.empty_width, self.empty_height)
    }

    pub fn with_spacing(mut self, spacing_x: f32, spacing_y: f32) -> Self {
        self.spacing_x = spacing_x;
        self.spacing_y = spacing_y;
        self
    }

    pub fn with_margins(mut self, top: f32, horizontal: f32, bottom: f32) -> Self {
        self.margin_top = top;
        self.margin_x = horizontal;
        self.margin_bottom = bottom;
        self
    }

    pub fn with_min_canvas(mut self, width: f32, height: f32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }
}

const DEFAULT_FONT_FAMILY: &str = "'SF Mono', 'Fira Code', 'JetBrains Mono', monospace";

/// Visual styling configuration for rendered diagrams.
///
/// Palette entries that are not set fall back to the built-in dark palette.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background: Option<String>,
    background_grid: Option<String>,
    text_primary: Option<String>,
    text_secondary: Option<String>,
    text_on_node: Option<String>,
    accent: Option<String>,
    node: Option<String>,
    wire: Option<String>,
    font_family: Option<String>,
}

impl StyleConfig {
    /// Returns the palette with configured overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry whose color string cannot be
    /// parsed into a [`Color`].
    pub fn palette(&self) -> Result<Palette, String> {
        let mut palette = Palette::default();

        let overrides = [
            ("background", &self.background, &mut palette.background),
            ("background_grid", &self.background_grid, &mut palette.background_grid),
            ("text_primary", &self.text_primary, &mut palette.text_primary),
            ("text_secondary", &self.text_secondary, &mut palette.text_secondary),
            ("text_on_node", &self.text_on_node, &mut palette.text_on_node),
            ("accent", &self.accent, &mut palette.accent),
            ("node", &self.node, &mut palette.node),
            ("wire", &self.wire, &mut palette.wire),
        ];

        for (key, value, slot) in overrides {
            if let Some(value) = value {
                *slot = Color::new(value)
                    .map_err(|err| format!("Invalid `{key}` color in config: {err}"))?;
            }
        }

        Ok(palette)
    }

    /// Returns the font family for all diagram text.
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_node(mut self, color: impl Into<String>) -> Self {
        self.node = Some(color.into());
        self
    }

    pub fn with_wire(mut self, color: impl Into<String>) -> Self {
        self.wire = Some(color.into());
        self
    }
}

/// Resolved colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    background: Color,
    background_grid: Color,
    text_primary: Color,
    text_secondary: Color,
    text_on_node: Color,
    accent: Color,
    node: Color,
    wire: Color,
}

fn builtin(hex: &str) -> Color {
    Color::new(hex).unwrap_or_default()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: builtin("#0f172a"),
            background_grid: builtin("#1e293b"),
            text_primary: builtin("#f1f5f9"),
            text_secondary: builtin("#94a3b8"),
            text_on_node: builtin("#ffffff"),
            accent: builtin("#f59e0b"),
            node: builtin("#10b981"),
            wire: builtin("#64748b"),
        }
    }
}

impl Palette {
    /// Canvas fill and badge background.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Background dot grid and node outlines.
    pub fn background_grid(&self) -> Color {
        self.background_grid
    }

    /// Title text.
    pub fn text_primary(&self) -> Color {
        self.text_primary
    }

    /// Subtitle, type labels, wire labels and the footer.
    pub fn text_secondary(&self) -> Color {
        self.text_secondary
    }

    /// Node names drawn over the node body.
    pub fn text_on_node(&self) -> Color {
        self.text_on_node
    }

    /// Token cost annotations.
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Default node color.
    pub fn node(&self) -> Color {
        self.node
    }

    /// Default wire color, used when neither the edge nor its source node has one.
    pub fn wire(&self) -> Color {
        self.wire
    }
}
