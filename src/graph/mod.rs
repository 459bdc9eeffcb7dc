//! Graph stores consumed by the vertex-centric engine.
//!
//! Topology is fixed once a store is built. Two layouts share the [`Graph`] contract:
//! [`CondensedGraph`] derives neighbor lists from its compressed encoding on every query,
//! [`ExpandedGraph`] keeps them materialized.

pub use condensed::CondensedGraph;
pub use expanded::ExpandedGraph;
pub use info::GraphInfo;
pub use neighbors::Neighbors;
pub use store::GraphStore;

pub(crate) use csr::Csr;
pub(crate) use display::display;

use crate::{
    error::{Err, Result},
    types::{Direction, VId},
};

mod condensed;
mod csr;
mod display;
mod expanded;
mod info;
mod neighbors;
mod store;

pub trait Graph {
    /// Number of (real) vertices; valid ids are `0..num_vertices()`.
    fn num_vertices(&self) -> usize;

    /// Number of stored edges.
    fn num_edges(&self) -> usize;

    /// Returns the distinct neighbors of `vid` along `direction`, in ascending order.
    fn neighbors(&self, vid: VId, direction: Direction) -> Result<Neighbors<'_>>;

    fn info(&self) -> GraphInfo;

    fn check_vertex(&self, vid: VId) -> Result<()> {
        let num_vertices = self.num_vertices();
        if vid < num_vertices {
            Ok(())
        } else {
            Err(Err::OutOfRangeVertex { vid, num_vertices })
        }
    }
}

impl<'g, G: Graph + ?Sized> Graph for &'g G {
    fn num_vertices(&self) -> usize {
        (**self).num_vertices()
    }

    fn num_edges(&self) -> usize {
        (**self).num_edges()
    }

    fn neighbors(&self, vid: VId, direction: Direction) -> Result<Neighbors<'_>> {
        (**self).neighbors(vid, direction)
    }

    fn info(&self) -> GraphInfo {
        (**self).info()
    }
}
