//! Structural and visual-hint validation of compositions.
//!
//! Validation runs on the wire-format document, where spans can be located,
//! and on programmatically built [`Composition`]s, where they cannot. Both
//! paths report through the same [`Validator`].

use std::str::FromStr;

use indexmap::IndexMap;
use log::debug;

use braid_core::{
    color::Color,
    semantic::{Composition, NodeShape, NodeSize, WireStyle},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    parser_types::RawComposition,
    span::{SourceLocator, Span},
};

/// Ring arcs beyond this count are not drawn.
const MAX_RING_ARCS: usize = 8;

/// Typical wire weight range; values outside it are accepted with a warning.
const WEIGHT_RANGE: std::ops::RangeInclusive<f32> = 0.5..=3.0;

/// Validates a parsed wire-format document against its source text.
pub(crate) fn validate_document(raw: &RawComposition, source: &str) -> DiagnosticCollector {
    let mut validator = Validator::new(Some(SourceLocator::new(source)));

    let known = validator.node_ids(raw.nodes.iter().map(|node| node.id.as_str()));

    for node in &raw.nodes {
        let Some(visual) = &node.visual else {
            continue;
        };
        let owner = node.id.as_str();

        if let Some(shape) = &visual.shape {
            validator.enum_value::<NodeShape>(ErrorCode::E203, shape, "unknown shape");
        }
        if let Some(size) = &visual.size {
            validator.enum_value::<NodeSize>(ErrorCode::E204, size, "unknown size");
        }
        for color in [&visual.color, &visual.badge_color].into_iter().flatten() {
            validator.color(owner, color);
        }
        if let Some(colors) = &visual.ring_colors {
            for color in colors {
                validator.color(owner, color);
            }
            validator.ring_count(owner, colors.len());
        }
        if let Some(opacity) = visual.opacity {
            validator.opacity(owner, opacity);
        }
    }

    for edge in &raw.edges {
        validator.edge_endpoints(&known, &edge.source, &edge.target);

        let Some(visual) = &edge.visual else {
            continue;
        };
        let owner = format!("{} -> {}", edge.source, edge.target);

        if let Some(style) = &visual.style {
            validator.enum_value::<WireStyle>(ErrorCode::E205, style, "unknown style");
        }
        if let Some(color) = &visual.color {
            validator.color(&owner, color);
        }
        if let Some(opacity) = visual.opacity {
            validator.opacity(&owner, opacity);
        }
        if let Some(weight) = visual.weight {
            validator.weight(&owner, weight);
        }
    }

    validator.into_collector()
}

/// Validates a composition built in code.
///
/// Enumerated hints are already typed, so only structural problems and
/// out-of-range values are reported.
pub(crate) fn validate_composition(composition: &Composition) -> DiagnosticCollector {
    let mut validator = Validator::new(None);

    let known = validator.node_ids(composition.nodes().iter().map(|node| node.id()));

    for node in composition.nodes() {
        let Some(visual) = node.visual() else {
            continue;
        };
        let owner = node.id();

        for color in [visual.color(), visual.badge_color()].into_iter().flatten() {
            validator.color(owner, color);
        }
        for color in visual.ring_colors() {
            validator.color(owner, color);
        }
        validator.ring_count(owner, visual.ring_colors().len());
        if let Some(opacity) = visual.opacity() {
            validator.opacity(owner, opacity);
        }
    }

    for edge in composition.edges() {
        validator.edge_endpoints(&known, edge.source(), edge.target());

        let Some(visual) = edge.visual() else {
            continue;
        };
        let owner = format!("{} -> {}", edge.source(), edge.target());

        if let Some(color) = visual.color() {
            validator.color(&owner, color);
        }
        if let Some(opacity) = visual.opacity() {
            validator.opacity(&owner, opacity);
        }
        if let Some(weight) = visual.weight() {
            validator.weight(&owner, weight);
        }
    }

    validator.into_collector()
}

struct Validator<'a> {
    locator: Option<SourceLocator<'a>>,
    collector: DiagnosticCollector,
}

impl<'a> Validator<'a> {
    fn new(locator: Option<SourceLocator<'a>>) -> Self {
        Self {
            locator,
            collector: DiagnosticCollector::new(),
        }
    }

    fn into_collector(self) -> DiagnosticCollector {
        self.collector
    }

    fn locate(&self, value: &str, nth: usize) -> Option<Span> {
        self.locator
            .map(|locator| locator.string(value, nth))
            .filter(|span| !span.is_empty())
    }

    fn emit_at(&mut self, diagnostic: Diagnostic, span: Option<Span>, label: &str) {
        let diagnostic = match span {
            Some(span) => diagnostic.with_label(span, label),
            None => diagnostic,
        };
        self.collector.emit(diagnostic);
    }

    /// Collects node ids in order, reporting every repeated id.
    ///
    /// The first definition wins; the returned map points each id at the
    /// index of that definition.
    fn node_ids<'i>(&mut self, ids: impl Iterator<Item = &'i str>) -> IndexMap<&'i str, usize> {
        let mut known: IndexMap<&str, usize> = IndexMap::new();
        let mut seen_count: IndexMap<&str, usize> = IndexMap::new();

        for (index, id) in ids.enumerate() {
            let occurrence = seen_count.entry(id).or_insert(0);
            let nth = *occurrence;
            *occurrence += 1;

            if let Some(&first) = known.get(id) {
                let diagnostic = Diagnostic::error(format!(
                    "node id `{id}` is defined multiple times (first defined by node {first})"
                ))
                .with_code(ErrorCode::E200)
                .with_help("node ids must be unique within a composition");

                let diagnostic = match self.locate(id, 0) {
                    Some(first_span) => {
                        diagnostic.with_secondary_label(first_span, "first defined here")
                    }
                    None => diagnostic,
                };
                let span = self.locate(id, nth);
                self.emit_at(diagnostic, span, "duplicate id");
            } else {
                known.insert(id, index);
            }
        }

        debug!(nodes = known.len(); "Collected node ids");
        known
    }

    fn edge_endpoints(&mut self, known: &IndexMap<&str, usize>, source: &str, target: &str) {
        for (endpoint, code, role) in [
            (source, ErrorCode::E201, "source"),
            (target, ErrorCode::E202, "target"),
        ] {
            if known.contains_key(endpoint) {
                continue;
            }
            let diagnostic =
                Diagnostic::error(format!("edge references unknown {role} `{endpoint}`"))
                    .with_code(code)
                    .with_help(known_ids_help(known));
            let span = self.locate(endpoint, 0);
            self.emit_at(diagnostic, span, "no node with this id");
        }
    }

    fn enum_value<T>(&mut self, code: ErrorCode, value: &str, label: &str)
    where
        T: FromStr<Err = String>,
    {
        if let Err(message) = value.parse::<T>() {
            let span = self.locate(value, 0);
            self.emit_at(Diagnostic::error(message).with_code(code), span, label);
        }
    }

    fn color(&mut self, owner: &str, value: &str) {
        if let Err(reason) = Color::new(value) {
            let diagnostic = Diagnostic::warning(format!("invalid color on `{owner}`: {reason}"))
                .with_code(ErrorCode::E206)
                .with_help("the palette default is used instead");
            let span = self.locate(value, 0);
            self.emit_at(diagnostic, span, "unrecognized color");
        }
    }

    fn opacity(&mut self, owner: &str, value: f32) {
        if !(0.0..=1.0).contains(&value) {
            let diagnostic = Diagnostic::warning(format!(
                "opacity {value} on `{owner}` is outside [0, 1]"
            ))
            .with_code(ErrorCode::E207)
            .with_help("the value is clamped when rendering");
            self.collector.emit(diagnostic);
        }
    }

    fn weight(&mut self, owner: &str, value: f32) {
        if !WEIGHT_RANGE.contains(&value) {
            let diagnostic = Diagnostic::warning(format!(
                "wire weight {value} on `{owner}` is outside the typical range {}..={}",
                WEIGHT_RANGE.start(),
                WEIGHT_RANGE.end()
            ))
            .with_code(ErrorCode::E208);
            self.collector.emit(diagnostic);
        }
    }

    fn ring_count(&mut self, owner: &str, count: usize) {
        if count > MAX_RING_ARCS {
            let diagnostic = Diagnostic::warning(format!(
                "node `{owner}` has {count} ring colors, only the first {MAX_RING_ARCS} are drawn"
            ))
            .with_code(ErrorCode::E209);
            let span = self.locate(owner, 0);
            self.emit_at(diagnostic, span, "on this node");
        }
    }
}

fn known_ids_help(known: &IndexMap<&str, usize>) -> String {
    const SHOWN: usize = 8;

    if known.is_empty() {
        return "the composition defines no nodes".to_string();
    }

    let mut ids: Vec<&str> = known.keys().take(SHOWN).copied().collect();
    if known.len() > SHOWN {
        ids.push("...");
    }
    format!("known node ids: {}", ids.join(", "))
}
