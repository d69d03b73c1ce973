//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use braid::{
    BraidError, DiagramBuilder, ParseOptions,
    config::{AppConfig, LayoutConfig, StyleConfig},
    samples::Sample,
};

const SIMPLE: &str = r#"{
    "nodes": [
        {"id": "parse", "name": "Parse", "outputType": "Structured"},
        {"id": "emit", "name": "Emit", "inputType": "Structured"}
    ],
    "edges": [{"source": "parse", "target": "emit", "label": "Structured"}],
    "metadata": {"name": "Simple", "category": "generic"}
}"#;

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_parse_simple_composition() {
    let builder = DiagramBuilder::default();
    let result = builder.parse(SIMPLE);
    assert!(
        result.is_ok(),
        "Should parse valid composition: {:?}",
        result.err()
    );
}

#[test]
fn test_render_simple_composition() {
    let builder = DiagramBuilder::default();
    let composition = builder.parse(SIMPLE).expect("Failed to parse composition");
    let svg = builder.render_svg(&composition);

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("data-id=\"parse\""));
    assert!(svg.contains("data-id=\"emit\""));
    assert!(svg.contains("GENERIC"));
    assert!(svg.contains("2 NODES · 1 EDGES · 2 LAYERS · 0 CROSSINGS"));
}

#[test]
fn test_build_metadata() {
    let builder = DiagramBuilder::default();
    let composition = builder.parse(SIMPLE).expect("Failed to parse composition");
    let result = builder.build(&composition);
    let metadata = result.metadata();

    assert_eq!(metadata.node_count(), 2);
    assert_eq!(metadata.edge_count(), 1);
    assert_eq!(metadata.layer_depth(), 2);
    assert_eq!(metadata.crossing_count(), 0);
    assert_eq!(metadata.canvas_width(), 500.0);
    assert_eq!(metadata.canvas_height(), 395.0);
}

#[test]
fn test_metadata_serializes_camel_case() {
    let builder = DiagramBuilder::default();
    let result = builder.build(&Sample::Sequential.composition());
    let json = serde_json::to_value(result.metadata()).expect("metadata serializes");

    assert_eq!(json["nodeCount"], 3);
    assert_eq!(json["edgeCount"], 2);
    assert_eq!(json["layerDepth"], 3);
    assert_eq!(json["crossingCount"], 0);
    assert!(json.get("canvasWidth").is_some());
    assert!(json.get("canvasHeight").is_some());
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("{\"nodes\": [");

    match result {
        Err(BraidError::Parse { err, src }) => {
            assert_eq!(src, "{\"nodes\": [");
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_validation_errors_are_reported() {
    let source = r#"{
        "nodes": [{"id": "a", "name": "A"}],
        "edges": [{"source": "a", "target": "ghost"}]
    }"#;

    let builder = DiagramBuilder::default();
    assert!(builder.parse(source).is_err());

    let composition = builder
        .parse_with(source, ParseOptions::lenient())
        .expect("Lenient parse should succeed");
    let result = builder.build(&composition);

    assert_eq!(result.metadata().edge_count(), 0);
    assert_eq!(result.metadata().node_count(), 1);
}

#[test]
fn test_parse_brick_document() {
    let source = r#"{
        "bricks": [
            {
                "id": "b1", "name": "Reader", "input_schema": "Text", "output_schema": "Facts",
                "layers": [
                    {"name": "foundation", "grade": 0, "estimated_tokens": 0},
                    {"name": "structure", "grade": 0, "estimated_tokens": 0},
                    {"name": "relational", "grade": 1, "estimated_tokens": 120},
                    {"name": "contextual", "grade": 0, "estimated_tokens": 0}
                ]
            },
            {
                "id": "b2", "name": "Writer", "input_schema": "Facts", "output_schema": "Text",
                "layers": [
                    {"name": "foundation", "grade": 0, "estimated_tokens": 0},
                    {"name": "structure", "grade": 0, "estimated_tokens": 0},
                    {"name": "relational", "grade": 0, "estimated_tokens": 0},
                    {"name": "contextual", "grade": 0, "estimated_tokens": 0}
                ]
            }
        ],
        "connections": [{"source_brick_id": "b1", "target_brick_id": "b2"}]
    }"#;

    let builder = DiagramBuilder::default();
    let composition = builder.parse_brick(source).expect("Failed to parse bricks");
    let svg = builder.render_svg(&composition);

    assert!(svg.contains("LUSHY"));
    assert!(svg.contains(">120t<"));
    assert_eq!(svg.matches("class=\"ring-arc\"").count(), 8);
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        LayoutConfig::default().with_spacing(200.0, 100.0),
        StyleConfig::default().with_background("white"),
    );
    let builder = DiagramBuilder::new(config);
    let composition = builder.parse(SIMPLE).expect("Failed to parse composition");
    let (layout, _) = builder.arrange(&composition);

    let parse = layout.position("parse").expect("parse is placed");
    let emit = layout.position("emit").expect("emit is placed");
    assert_eq!(emit.center().y() - parse.center().y(), 100.0);
}

#[test]
fn test_invalid_palette_falls_back() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        StyleConfig::default().with_node("definitely-not-a-color"),
    );
    let svg = DiagramBuilder::new(config).render_svg(&Sample::Sequential.composition());

    assert!(svg.contains("</svg>"));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder.render_svg(&Sample::Quantum.composition());
    let second = builder.render_svg(&Sample::Branching.composition());

    assert!(first.contains("Bell State Preparation"));
    assert!(second.contains("Branching Workflow"));
}
