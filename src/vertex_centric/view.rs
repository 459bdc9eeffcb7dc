use crate::{
    error::Result,
    graph::{Graph, Neighbors},
    types::{Direction, VId},
};

/// The vertex a compute call runs for.
///
/// It holds the only mutable reference to the vertex's pending value; everything reachable
/// from it is read-only.
pub struct VertexView<'a, V> {
    id: VId,
    value: &'a mut V,
    committed: &'a [V],
    graph: &'a (dyn Graph + Sync),
    halted: bool,
}

impl<'a, V> VertexView<'a, V> {
    pub(crate) fn new(
        id: VId,
        value: &'a mut V,
        committed: &'a [V],
        graph: &'a (dyn Graph + Sync),
    ) -> Self {
        Self {
            id,
            value,
            committed,
            graph,
            halted: false,
        }
    }

    pub fn id(&self) -> VId {
        self.id
    }

    /// The value written so far in this superstep, or the committed one.
    pub fn value(&self) -> &V {
        &*self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut *self.value
    }

    pub fn set_value(&mut self, value: V) {
        *self.value = value;
    }

    /// The value committed at the end of the previous superstep.
    pub fn committed_value(&self) -> &'a V {
        &self.committed[self.id]
    }

    pub fn neighbors(&self, direction: Direction) -> Result<NeighborViews<'a, V>> {
        Ok(NeighborViews {
            ids: self.graph.neighbors(self.id, direction)?,
            committed: self.committed,
            graph: self.graph,
        })
    }

    pub fn degree(&self, direction: Direction) -> Result<usize> {
        Ok(self.graph.neighbors(self.id, direction)?.len())
    }

    pub(crate) fn halted(&self) -> bool {
        self.halted
    }
}

/// A read-only view of another vertex.
pub struct NeighborView<'a, V> {
    id: VId,
    committed: &'a [V],
    graph: &'a (dyn Graph + Sync),
}

impl<'a, V> Clone for NeighborView<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for NeighborView<'a, V> {}

impl<'a, V> NeighborView<'a, V> {
    pub fn id(&self) -> VId {
        self.id
    }

    /// The value committed at the end of the previous superstep.
    pub fn value(&self) -> &'a V {
        &self.committed[self.id]
    }

    pub fn neighbors(&self, direction: Direction) -> Result<NeighborViews<'a, V>> {
        Ok(NeighborViews {
            ids: self.graph.neighbors(self.id, direction)?,
            committed: self.committed,
            graph: self.graph,
        })
    }

    pub fn degree(&self, direction: Direction) -> Result<usize> {
        Ok(self.graph.neighbors(self.id, direction)?.len())
    }
}

/// An iterator visiting the neighbors of a vertex.
pub struct NeighborViews<'a, V> {
    ids: Neighbors<'a>,
    committed: &'a [V],
    graph: &'a (dyn Graph + Sync),
}

impl<'a, V> Iterator for NeighborViews<'a, V> {
    type Item = NeighborView<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|id| NeighborView {
            id,
            committed: self.committed,
            graph: self.graph,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for NeighborViews<'a, V> {}

/// What a compute call may ask of the engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineHandle {
    superstep: usize,
    num_vertices: usize,
}

impl EngineHandle {
    pub(crate) fn new(superstep: usize, num_vertices: usize) -> Self {
        Self {
            superstep,
            num_vertices,
        }
    }

    pub fn superstep(&self) -> usize {
        self.superstep
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Deactivates `vertex` from the next superstep on.
    pub fn vote_to_halt<V>(&self, vertex: &mut VertexView<'_, V>) {
        vertex.halted = true;
    }
}
