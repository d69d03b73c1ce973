//! Wire-format types deserialized directly from JSON.
//!
//! Every field a user may misspell or mistype is kept loosely typed here
//! (enums as strings, colors as strings) so validation can point at the
//! offending value instead of failing the whole document in serde.
//!
//! Keys are camelCase, and the snake_case spelling is accepted as an alias.

use serde::Deserialize;

use braid_core::semantic::Properties;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawComposition {
    #[serde(default)]
    pub(crate) nodes: Vec<RawNode>,
    #[serde(default)]
    pub(crate) edges: Vec<RawEdge>,
    #[serde(default)]
    pub(crate) metadata: RawMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNode {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default, alias = "input_type")]
    pub(crate) input_type: Option<String>,
    #[serde(default, alias = "output_type")]
    pub(crate) output_type: Option<String>,
    #[serde(default)]
    pub(crate) properties: Properties,
    #[serde(default)]
    pub(crate) visual: Option<RawNodeVisual>,
    #[serde(default)]
    pub(crate) metadata: Properties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNodeVisual {
    #[serde(default)]
    pub(crate) color: Option<String>,
    #[serde(default)]
    pub(crate) shape: Option<String>,
    #[serde(default)]
    pub(crate) size: Option<String>,
    #[serde(default)]
    pub(crate) badge: Option<String>,
    #[serde(default, alias = "badge_color")]
    pub(crate) badge_color: Option<String>,
    #[serde(default)]
    pub(crate) opacity: Option<f32>,
    #[serde(default)]
    pub(crate) glow: Option<bool>,
    #[serde(default, alias = "ring_colors")]
    pub(crate) ring_colors: Option<Vec<String>>,
    #[serde(default, alias = "ring_weights")]
    pub(crate) ring_weights: Option<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawEdge {
    pub(crate) source: String,
    pub(crate) target: String,
    #[serde(default)]
    pub(crate) label: Option<String>,
    #[serde(default)]
    pub(crate) visual: Option<RawEdgeVisual>,
    #[serde(default)]
    pub(crate) metadata: Properties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawEdgeVisual {
    #[serde(default)]
    pub(crate) color: Option<String>,
    #[serde(default)]
    pub(crate) style: Option<String>,
    #[serde(default)]
    pub(crate) weight: Option<f32>,
    #[serde(default)]
    pub(crate) opacity: Option<f32>,
    #[serde(default, alias = "show_label")]
    pub(crate) show_label: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawMetadata {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(flatten)]
    pub(crate) extra: Properties,
}

/// Brick workflow document: bricks with four graded layers, wired by
/// connections.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawBrickComposition {
    #[serde(default)]
    pub(crate) bricks: Vec<RawBrick>,
    #[serde(default)]
    pub(crate) connections: Vec<RawConnection>,
    #[serde(default)]
    pub(crate) metadata: Properties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBrick {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) input_schema: String,
    pub(crate) output_schema: String,
    #[serde(default)]
    pub(crate) layers: Vec<RawLayer>,
    #[serde(default)]
    pub(crate) metadata: Properties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLayer {
    pub(crate) name: String,
    pub(crate) grade: u8,
    #[serde(default)]
    pub(crate) estimated_tokens: u64,
    // Carried in the document, not drawn.
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawConnection {
    pub(crate) source_brick_id: String,
    pub(crate) target_brick_id: String,
    #[serde(default)]
    pub(crate) source_output: Option<String>,
    #[serde(default)]
    pub(crate) target_input: Option<String>,
    #[serde(default)]
    pub(crate) is_branching: bool,
}
