use derive_more::Display;

/// Size summary of a graph store.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(
    fmt = "num_vertices: {}\nnum_virtual: {}\nnum_edges: {}\ncondensed: {}",
    num_vertices,
    num_virtual,
    num_edges,
    condensed
)]
pub struct GraphInfo {
    num_vertices: usize,
    num_virtual: usize,
    num_edges: usize,
    condensed: bool,
}

impl GraphInfo {
    pub fn new(num_vertices: usize, num_virtual: usize, num_edges: usize, condensed: bool) -> Self {
        Self {
            num_vertices,
            num_virtual,
            num_edges,
            condensed,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_virtual(&self) -> usize {
        self.num_virtual
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn condensed(&self) -> bool {
        self.condensed
    }
}
