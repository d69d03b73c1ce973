//! Rendering of laid-out compositions.
//!
//! A [`Scene`] bundles everything a renderer reads: the composition, its
//! graph, the layout and the routed connectors. Renderers only read it.

pub mod svg;

use braid_core::semantic::Composition;

use crate::{DiagramMetadata, layout::Layout, route::Routing, structure::CompositionGraph};

/// Read-only inputs of a renderer.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'s, 'a> {
    pub composition: &'a Composition,
    pub graph: &'s CompositionGraph<'a>,
    pub layout: &'s Layout<'a>,
    pub routing: &'s Routing<'a>,
    pub metadata: &'s DiagramMetadata,
}
