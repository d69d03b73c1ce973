//! Brick workflow adapter.
//!
//! A brick is a four-layer processing unit (foundation, structure,
//! relational, contextual) where each layer carries a grade: 0 for
//! deterministic code, 1 for an LLM call, 2 for a human step. This module
//! validates brick documents and maps them onto a [`Composition`]:
//!
//! - the highest grade picks the node color and badge,
//! - each layer becomes one ring arc, thicker for LLM layers,
//! - LLM token cost drives node size and wire weight.

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;

use braid_core::semantic::{
    Composition, CompositionMetadata, Edge, EdgeVisual, Node, NodeShape, NodeSize, NodeVisual,
    Properties, WireStyle,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    parser_types::{RawBrick, RawBrickComposition},
    span::SourceLocator,
};

/// Layer names every brick must carry, in order.
const LAYER_NAMES: [&str; 4] = ["foundation", "structure", "relational", "contextual"];

const LLM_GRADE: u8 = 1;

/// Token cost above which a brick is drawn large.
const LARGE_TOKEN_THRESHOLD: u64 = 200;

const FALLBACK_COLOR: &str = "#10b981";
const FALLBACK_LAYER_COLOR: &str = "#6b7280";
const BRANCHING_WIRE_COLOR: &str = "#667eea";
const LLM_WIRE_COLOR: &str = "#8b5cf6";
const DETERMINISTIC_WIRE_COLOR: &str = "#10b981";

fn grade_color(grade: u8) -> &'static str {
    match grade {
        0 => "#10b981",
        1 => "#8b5cf6",
        2 => "#ef4444",
        _ => FALLBACK_COLOR,
    }
}

fn layer_color(name: &str) -> &'static str {
    match name {
        "foundation" => "#6b7280",
        "structure" => "#10b981",
        "relational" => "#3b82f6",
        "contextual" => "#8b5cf6",
        _ => FALLBACK_LAYER_COLOR,
    }
}

/// Per-brick grade summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GradeSummary {
    det_layers: usize,
    llm_layers: usize,
    grade_max: u8,
    llm_tokens: u64,
}

impl GradeSummary {
    fn of(brick: &RawBrick) -> Self {
        let layers = &brick.layers;
        Self {
            det_layers: layers.iter().filter(|l| l.grade == 0).count(),
            llm_layers: layers.iter().filter(|l| l.grade == LLM_GRADE).count(),
            grade_max: layers.iter().map(|l| l.grade).max().unwrap_or(0),
            llm_tokens: layers
                .iter()
                .filter(|l| l.grade == LLM_GRADE)
                .map(|l| l.estimated_tokens)
                .sum(),
        }
    }

    fn has_llm(&self) -> bool {
        self.llm_layers > 0
    }

    fn size(&self) -> NodeSize {
        if self.llm_tokens > LARGE_TOKEN_THRESHOLD {
            NodeSize::Large
        } else if self.llm_tokens > 0 {
            NodeSize::Medium
        } else {
            NodeSize::Small
        }
    }
}

/// Validates a brick document, collecting every problem.
pub(crate) fn validate_bricks(raw: &RawBrickComposition, source: &str) -> DiagnosticCollector {
    let locator = SourceLocator::new(source);
    let mut collector = DiagnosticCollector::new();
    let mut known: IndexMap<&str, usize> = IndexMap::new();

    for (index, brick) in raw.bricks.iter().enumerate() {
        let id = brick.id.as_str();
        if let Some(&first) = known.get(id) {
            let nth = raw.bricks[..index].iter().filter(|b| b.id == id).count();
            collector.emit(
                Diagnostic::error(format!(
                    "brick id `{id}` is defined multiple times (first defined by brick {first})"
                ))
                .with_code(ErrorCode::E300)
                .with_label(locator.string(id, nth), "duplicate brick")
                .with_secondary_label(locator.string(id, 0), "first defined here"),
            );
            continue;
        }
        known.insert(id, index);

        if brick.layers.len() != LAYER_NAMES.len() {
            collector.emit(
                Diagnostic::error(format!(
                    "brick `{id}` has {} layers, expected {}",
                    brick.layers.len(),
                    LAYER_NAMES.len()
                ))
                .with_code(ErrorCode::E303)
                .with_label(locator.string(id, 0), "in this brick"),
            );
            continue;
        }

        let names: Vec<&str> = brick.layers.iter().map(|l| l.name.as_str()).collect();
        if names != LAYER_NAMES {
            collector.emit(
                Diagnostic::error(format!(
                    "brick `{id}` has layers [{}]",
                    names.join(", ")
                ))
                .with_code(ErrorCode::E304)
                .with_label(locator.string(id, 0), "in this brick")
                .with_help(format!("layers must be {}", LAYER_NAMES.join(", "))),
            );
        }
    }

    for connection in &raw.connections {
        for (endpoint, code, role) in [
            (&connection.source_brick_id, ErrorCode::E301, "source"),
            (&connection.target_brick_id, ErrorCode::E302, "target"),
        ] {
            if !known.contains_key(endpoint.as_str()) {
                collector.emit(
                    Diagnostic::error(format!(
                        "connection references unknown {role} brick `{endpoint}`"
                    ))
                    .with_code(code)
                    .with_label(locator.string(endpoint, 0), "no brick with this id"),
                );
            }
        }
    }

    collector
}

/// Maps a brick document onto a composition.
///
/// Connections whose source brick is unknown are skipped.
pub(crate) fn bricks_to_composition(raw: RawBrickComposition) -> Composition {
    let summaries: IndexMap<&str, (GradeSummary, &RawBrick)> = raw
        .bricks
        .iter()
        .map(|brick| (brick.id.as_str(), (GradeSummary::of(brick), brick)))
        .collect();

    let max_tokens = summaries
        .values()
        .map(|(summary, _)| summary.llm_tokens)
        .max()
        .filter(|&tokens| tokens > 0)
        .unwrap_or(1);

    let nodes: Vec<Node> = raw
        .bricks
        .iter()
        .map(|brick| brick_node(brick, GradeSummary::of(brick)))
        .collect();

    let mut edges = Vec::with_capacity(raw.connections.len());
    for connection in &raw.connections {
        let Some((summary, source_brick)) = summaries.get(connection.source_brick_id.as_str())
        else {
            warn!(
                source = connection.source_brick_id.as_str();
                "Skipping connection from unknown brick"
            );
            continue;
        };

        let (color, style) = if connection.is_branching {
            (BRANCHING_WIRE_COLOR, WireStyle::Solid)
        } else if summary.has_llm() {
            (LLM_WIRE_COLOR, WireStyle::Dashed)
        } else {
            (DETERMINISTIC_WIRE_COLOR, WireStyle::Solid)
        };

        let weight = if summary.llm_tokens > 0 {
            0.5 + 2.5 * (summary.llm_tokens as f32 / max_tokens as f32)
        } else {
            1.0
        };

        let mut metadata = Properties::new();
        metadata.insert("tokens".to_string(), Value::from(summary.llm_tokens));
        metadata.insert(
            "is_branching".to_string(),
            Value::from(connection.is_branching),
        );
        if let Some(output) = &connection.source_output {
            metadata.insert("source_output".to_string(), Value::from(output.as_str()));
        }
        if let Some(input) = &connection.target_input {
            metadata.insert("target_input".to_string(), Value::from(input.as_str()));
        }

        edges.push(
            Edge::new(
                connection.source_brick_id.as_str(),
                connection.target_brick_id.as_str(),
            )
            .with_label(source_brick.output_schema.as_str())
            .with_visual(
                EdgeVisual::default()
                    .with_color(color)
                    .with_style(style)
                    .with_weight(weight)
                    .with_show_label(true),
            )
            .with_metadata(metadata),
        );
    }

    debug!(nodes = nodes.len(), edges = edges.len(); "Adapted brick workflow");

    let mut extra = raw.metadata;
    let name = extra.remove("name").and_then(into_string);
    let description = extra.remove("description").and_then(into_string);
    extra.remove("category");
    extra.insert(
        "adapted_from".to_string(),
        Value::from("BrickComposition"),
    );

    let mut metadata = CompositionMetadata::default()
        .with_category("lushy")
        .with_extra(extra);
    if let Some(name) = name {
        metadata = metadata.with_name(name);
    }
    if let Some(description) = description {
        metadata = metadata.with_description(description);
    }

    Composition::new(nodes, edges).with_metadata(metadata)
}

fn brick_node(brick: &RawBrick, summary: GradeSummary) -> Node {
    let color = grade_color(summary.grade_max);

    let ring_colors = brick
        .layers
        .iter()
        .map(|layer| layer_color(&layer.name).to_string())
        .collect();
    let ring_weights = brick
        .layers
        .iter()
        .map(|layer| if layer.grade == LLM_GRADE { 5.0 } else { 3.0 })
        .collect();

    let visual = NodeVisual::default()
        .with_color(color)
        .with_shape(NodeShape::Circle)
        .with_size(summary.size())
        .with_badge(format!("G{}", summary.grade_max))
        .with_badge_color(color)
        .with_glow(summary.has_llm())
        .with_ring(ring_colors, ring_weights);

    let mut properties = Properties::new();
    properties.insert("det_layers".to_string(), Value::from(summary.det_layers));
    properties.insert("llm_layers".to_string(), Value::from(summary.llm_layers));
    properties.insert("total_tokens".to_string(), Value::from(summary.llm_tokens));
    properties.insert("grade_max".to_string(), Value::from(summary.grade_max));

    Node::new(brick.id.as_str(), brick.name.as_str())
        .with_input_type(brick.input_schema.as_str())
        .with_output_type(brick.output_schema.as_str())
        .with_properties(properties)
        .with_visual(visual)
        .with_metadata(brick.metadata.clone())
}

fn into_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}
