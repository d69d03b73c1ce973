//! Built-in sample compositions.
//!
//! # Example
//!
//! ```
//! use braid::samples::Sample;
//!
//! let sample: Sample = "branching".parse().unwrap();
//! let composition = sample.composition();
//! assert_eq!(composition.nodes().len(), 4);
//! ```

use std::{fmt, str::FromStr};

use serde_json::{Value, json};

use braid_core::semantic::{
    Composition, CompositionMetadata, Edge, EdgeVisual, Node, NodeShape, NodeSize, NodeVisual,
    Properties, WireStyle,
};

/// One of the bundled demonstration compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Three-node pipeline: parse, transform, synthesize.
    Sequential,
    /// Bell-state preparation circuit.
    Quantum,
    /// Fan-out into two analyses that merge again.
    Branching,
}

impl Sample {
    pub const NAMES: [&'static str; 3] = ["sequential", "quantum", "branching"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Quantum => "quantum",
            Self::Branching => "branching",
        }
    }

    /// Builds the sample composition.
    pub fn composition(self) -> Composition {
        match self {
            Self::Sequential => sequential(),
            Self::Quantum => quantum(),
            Self::Branching => branching(),
        }
    }
}

impl FromStr for Sample {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "quantum" => Ok(Self::Quantum),
            "branching" => Ok(Self::Branching),
            _ => Err(format!(
                "unknown sample `{s}`, expected one of: {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn properties(value: Value) -> Properties {
    match value {
        Value::Object(map) => map,
        _ => Properties::new(),
    }
}

fn metadata(name: &str, category: &str) -> CompositionMetadata {
    CompositionMetadata::default()
        .with_name(name)
        .with_category(category)
}

fn dashed_heavy() -> EdgeVisual {
    EdgeVisual::default()
        .with_style(WireStyle::Dashed)
        .with_weight(1.5)
}

fn sequential() -> Composition {
    Composition::new(
        vec![
            Node::new("parse", "Parse")
                .with_input_type("RawData")
                .with_output_type("Structured")
                .with_visual(NodeVisual::default().with_color("#10b981").with_badge("G0")),
            Node::new("transform", "Transform")
                .with_input_type("Structured")
                .with_output_type("Processed")
                .with_visual(NodeVisual::default().with_color("#3b82f6").with_badge("G0")),
            Node::new("synthesize", "Synthesize")
                .with_input_type("Processed")
                .with_output_type("Output")
                .with_visual(
                    NodeVisual::default()
                        .with_color("#8b5cf6")
                        .with_badge("G1")
                        .with_glow(true),
                ),
        ],
        vec![
            Edge::new("parse", "transform").with_label("Structured"),
            Edge::new("transform", "synthesize")
                .with_label("Processed")
                .with_visual(dashed_heavy()),
        ],
    )
    .with_metadata(metadata("Sample Sequential Pipeline", "generic"))
}

fn qubit_terminal(id: &str, name: &str) -> Node {
    Node::new(id, name).with_visual(
        NodeVisual::default()
            .with_color("#6b7280")
            .with_shape(NodeShape::Point)
            .with_size(NodeSize::Small),
    )
}

fn quantum() -> Composition {
    Composition::new(
        vec![
            qubit_terminal("q0_init", "|0⟩").with_output_type("Qubit"),
            qubit_terminal("q1_init", "|0⟩").with_output_type("Qubit"),
            Node::new("h", "H")
                .with_input_type("Qubit")
                .with_output_type("Qubit")
                .with_properties(properties(json!({"spider_type": "H", "phase": 0.0})))
                .with_visual(
                    NodeVisual::default()
                        .with_color("#f59e0b")
                        .with_shape(NodeShape::Square)
                        .with_badge("H"),
                ),
            Node::new("cx", "CNOT")
                .with_input_type("Qubit×Qubit")
                .with_output_type("Qubit×Qubit")
                .with_properties(properties(json!({"spider_type": "Z", "is_entangling": true})))
                .with_visual(
                    NodeVisual::default()
                        .with_color("#ef4444")
                        .with_shape(NodeShape::Circle)
                        .with_badge("CX")
                        .with_size(NodeSize::Large),
                ),
            qubit_terminal("q0_out", "β₀₀").with_input_type("Qubit"),
            qubit_terminal("q1_out", "β₀₀").with_input_type("Qubit"),
        ],
        vec![
            Edge::new("q0_init", "h").with_label("Qubit"),
            Edge::new("h", "cx").with_label("Qubit"),
            Edge::new("q1_init", "cx").with_label("Qubit"),
            Edge::new("cx", "q0_out").with_label("Qubit"),
            Edge::new("cx", "q1_out").with_label("Qubit"),
        ],
    )
    .with_metadata(metadata("Bell State Preparation", "quantum"))
}

fn analysis(id: &str, name: &str, output_type: &str) -> Node {
    Node::new(id, name)
        .with_input_type("ParsedData")
        .with_output_type(output_type)
        .with_visual(
            NodeVisual::default()
                .with_color("#8b5cf6")
                .with_badge("G1")
                .with_glow(true),
        )
}

fn branching() -> Composition {
    Composition::new(
        vec![
            Node::new("input", "Input Parser")
                .with_input_type("CSV")
                .with_output_type("ParsedData")
                .with_visual(NodeVisual::default().with_color("#10b981").with_badge("G0")),
            analysis("path_a", "Analysis A", "ResultA"),
            analysis("path_b", "Analysis B", "ResultB"),
            Node::new("merge", "Merge")
                .with_input_type("ResultA,ResultB")
                .with_output_type("Final")
                .with_visual(
                    NodeVisual::default()
                        .with_color("#f59e0b")
                        .with_shape(NodeShape::Diamond)
                        .with_badge("⊗"),
                ),
        ],
        vec![
            Edge::new("input", "path_a").with_label("ParsedData"),
            Edge::new("input", "path_b").with_label("ParsedData"),
            Edge::new("path_a", "merge")
                .with_label("ResultA")
                .with_visual(dashed_heavy()),
            Edge::new("path_b", "merge")
                .with_label("ResultB")
                .with_visual(dashed_heavy()),
        ],
    )
    .with_metadata(metadata("Branching Workflow", "generic"))
}
