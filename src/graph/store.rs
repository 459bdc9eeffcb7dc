use super::{CondensedGraph, ExpandedGraph, Graph, GraphInfo, Neighbors};
use crate::{
    error::Result,
    types::{Direction, VId},
};
use derive_more::From;

/// A graph store whose layout is picked at construction time.
#[derive(Debug, Clone, From)]
pub enum GraphStore {
    Condensed(CondensedGraph),
    Expanded(ExpandedGraph),
}

impl GraphStore {
    pub fn is_condensed(&self) -> bool {
        matches!(self, GraphStore::Condensed(_))
    }

    /// Replaces a condensed layout by its expansion; expanded stores are left as they are.
    ///
    /// This cannot be undone.
    pub fn expand(&mut self, materialize_both: bool) {
        if let GraphStore::Condensed(graph) = self {
            *self = GraphStore::Expanded(graph.expand(materialize_both));
        }
    }
}

impl Graph for GraphStore {
    fn num_vertices(&self) -> usize {
        match self {
            GraphStore::Condensed(graph) => graph.num_vertices(),
            GraphStore::Expanded(graph) => graph.num_vertices(),
        }
    }

    fn num_edges(&self) -> usize {
        match self {
            GraphStore::Condensed(graph) => graph.num_edges(),
            GraphStore::Expanded(graph) => graph.num_edges(),
        }
    }

    fn neighbors(&self, vid: VId, direction: Direction) -> Result<Neighbors<'_>> {
        match self {
            GraphStore::Condensed(graph) => graph.neighbors(vid, direction),
            GraphStore::Expanded(graph) => graph.neighbors(vid, direction),
        }
    }

    fn info(&self) -> GraphInfo {
        match self {
            GraphStore::Condensed(graph) => graph.info(),
            GraphStore::Expanded(graph) => graph.info(),
        }
    }
}

impl std::fmt::Display for GraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphStore::Condensed(graph) => std::fmt::Display::fmt(graph, f),
            GraphStore::Expanded(graph) => std::fmt::Display::fmt(graph, f),
        }
    }
}
