use super::{Csr, ExpandedGraph, Graph, GraphInfo, Neighbors};
use crate::{
    error::{Err, Result},
    tools::sort_dedup,
    types::{Direction, VId},
};
use log::debug;
use rayon::prelude::*;

/// A graph whose cliques are stored through virtual vertices.
///
/// Ids `0..num_vertices` are real vertices, ids `num_vertices..num_vertices + num_virtual`
/// are virtual ones. The stored path `u -> x -> w` through a virtual vertex `x` stands for the
/// logical edge `u -> w`, so `k` members of a clique cost `2k` stored edges instead of `k^2`.
///
/// ```text
///   real        virtual        real
///   +---+                      +---+
///   | 0 |---+                +-| 1 |
///   +---+   |    +-------+   | +---+
///           +--->|   x   |---+
///   +---+   |    +-------+   | +---+
///   | 2 |---+                +-| 0 |
///   +---+                      +---+
/// ```
///
/// Neighbor lists are derived on every query in O(degree) and never cached; a vertex is
/// not its own neighbor through a virtual vertex. Call [`expand`](CondensedGraph::expand)
/// to pay the derivation once for the whole graph.
#[derive(Debug, Clone)]
pub struct CondensedGraph {
    num_vertices: usize,
    num_virtual: usize,
    outgoing: Csr,
    incoming: Csr,
}

impl CondensedGraph {
    /// Builds the store from stored edges over real and virtual ids.
    pub fn new<E>(num_vertices: usize, num_virtual: usize, edges: E) -> Result<Self>
    where
        E: IntoIterator<Item = (VId, VId)>,
    {
        let total = total_vertices(num_vertices, num_virtual)?;
        let mut pairs = Vec::new();
        for (src, dst) in edges {
            check_stored_edge(num_vertices, total, src, dst)?;
            pairs.push((src, dst));
        }
        let outgoing = Csr::from_pairs(total, &mut pairs)?;
        let incoming = outgoing.transpose();
        Ok(Self {
            num_vertices,
            num_virtual,
            outgoing,
            incoming,
        })
    }

    /// Adopts the row-offset and column-index arrays of an externally built store.
    ///
    /// `offsets` has one row per real and virtual vertex, plus the trailing end offset.
    pub fn from_csr_parts(
        num_vertices: usize,
        num_virtual: usize,
        offsets: Vec<usize>,
        targets: Vec<VId>,
    ) -> Result<Self> {
        let total = total_vertices(num_vertices, num_virtual)?;
        let outgoing = Csr::from_parts(offsets, targets)?;
        if outgoing.num_rows() != total {
            return Err(Err::MalformedOffsets(format!(
                "{} rows for {} vertices",
                outgoing.num_rows(),
                total
            )));
        }
        for (src, dsts) in outgoing.rows() {
            for &dst in dsts {
                check_stored_edge(num_vertices, total, src, dst)?;
            }
        }
        let incoming = outgoing.transpose();
        Ok(Self {
            num_vertices,
            num_virtual,
            outgoing,
            incoming,
        })
    }

    pub fn num_virtual(&self) -> usize {
        self.num_virtual
    }

    /// Materializes the adjacency lists of every real vertex.
    ///
    /// The condensed store is left untouched. With `materialize_both` the merged
    /// [`Direction::Both`] lists are stored too.
    pub fn expand(&self, materialize_both: bool) -> ExpandedGraph {
        debug!(
            "expanding {} vertices through {} virtual vertices",
            self.num_vertices, self.num_virtual
        );
        let outgoing = Csr::from_rows(
            (0..self.num_vertices)
                .into_par_iter()
                .map(|vid| self.derive(&self.outgoing, vid))
                .collect(),
        );
        let incoming = outgoing.transpose();
        ExpandedGraph::from_adjacency(outgoing, incoming, materialize_both)
    }
}

// Private methods.
impl CondensedGraph {
    fn is_virtual(&self, vid: VId) -> bool {
        vid >= self.num_vertices
    }

    /// Follows the stored rows of `vid` one step, or two steps through virtual vertices.
    fn derive(&self, adjacency: &Csr, vid: VId) -> Vec<VId> {
        let mut ids = Vec::with_capacity(adjacency.row(vid).len());
        for &x in adjacency.row(vid) {
            if self.is_virtual(x) {
                ids.extend(adjacency.row(x).iter().copied().filter(|&w| w != vid));
            } else {
                ids.push(x);
            }
        }
        sort_dedup(&mut ids);
        ids
    }
}

impl Graph for CondensedGraph {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn num_edges(&self) -> usize {
        self.outgoing.num_entries()
    }

    fn neighbors(&self, vid: VId, direction: Direction) -> Result<Neighbors<'_>> {
        self.check_vertex(vid)?;
        Ok(Neighbors::owned(match direction {
            Direction::Outgoing => self.derive(&self.outgoing, vid),
            Direction::Incoming => self.derive(&self.incoming, vid),
            Direction::Both => {
                let mut ids = self.derive(&self.outgoing, vid);
                ids.extend(self.derive(&self.incoming, vid));
                sort_dedup(&mut ids);
                ids
            }
        }))
    }

    fn info(&self) -> GraphInfo {
        GraphInfo::new(self.num_vertices, self.num_virtual, self.num_edges(), true)
    }
}

impl std::fmt::Display for CondensedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        super::display(self, f)
    }
}

fn total_vertices(num_vertices: usize, num_virtual: usize) -> Result<usize> {
    num_vertices.checked_add(num_virtual).ok_or_else(|| {
        Err::TooManyVertices(format!(
            "{} real and {} virtual vertices overflow the id space",
            num_vertices, num_virtual
        ))
    })
}

/// `total` counts real and virtual vertices.
fn check_stored_edge(num_vertices: usize, total: usize, src: VId, dst: VId) -> Result<()> {
    for &vid in &[src, dst] {
        if vid >= total {
            return Err(Err::OutOfRangeVertex {
                vid,
                num_vertices: total,
            });
        }
    }
    if src >= num_vertices && dst >= num_vertices {
        return Err(Err::InvalidEdge { src, dst });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Authors 0, 1, 2 share paper 4; authors 2, 3 share paper 5; 3 cites 0 directly.
    fn create_coauthors() -> CondensedGraph {
        CondensedGraph::new(
            4,
            2,
            vec![
                (0, 4),
                (4, 0),
                (1, 4),
                (4, 1),
                (2, 4),
                (4, 2),
                (2, 5),
                (5, 2),
                (3, 5),
                (5, 3),
                (3, 0),
            ],
        )
        .unwrap()
    }

    fn neighbors(graph: &impl Graph, vid: VId, direction: Direction) -> Vec<VId> {
        graph.neighbors(vid, direction).unwrap().collect()
    }

    #[test]
    fn test_counts() {
        let graph = create_coauthors();
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_virtual(), 2);
        assert_eq!(graph.num_edges(), 11);
        assert_eq!(graph.info(), GraphInfo::new(4, 2, 11, true));
    }

    #[test]
    fn test_neighbors_through_virtual() {
        let graph = create_coauthors();
        assert_eq!(neighbors(&graph, 0, Direction::Outgoing), [1, 2]);
        assert_eq!(neighbors(&graph, 0, Direction::Incoming), [1, 2, 3]);
        assert_eq!(neighbors(&graph, 0, Direction::Both), [1, 2, 3]);
        assert_eq!(neighbors(&graph, 2, Direction::Outgoing), [0, 1, 3]);
        assert_eq!(neighbors(&graph, 3, Direction::Outgoing), [0, 2]);
        assert_eq!(neighbors(&graph, 3, Direction::Incoming), [2]);
    }

    #[test]
    fn test_shared_virtual_vertices_are_deduplicated() {
        let graph =
            CondensedGraph::new(2, 2, vec![(0, 2), (2, 1), (0, 3), (3, 1), (0, 1)]).unwrap();
        assert_eq!(neighbors(&graph, 0, Direction::Outgoing), [1]);
        assert_eq!(neighbors(&graph, 1, Direction::Incoming), [0]);
        assert_eq!(neighbors(&graph, 1, Direction::Outgoing), Vec::<VId>::new());
    }

    #[test]
    fn test_direct_self_loop_is_kept() {
        let graph = CondensedGraph::new(1, 1, vec![(0, 0), (0, 1), (1, 0)]).unwrap();
        assert_eq!(neighbors(&graph, 0, Direction::Both), [0]);
    }

    #[test]
    fn test_out_of_range() {
        let graph = create_coauthors();
        assert!(matches!(
            graph.neighbors(4, Direction::Both),
            Err(Err::OutOfRangeVertex {
                vid: 4,
                num_vertices: 4
            })
        ));
        assert!(matches!(
            CondensedGraph::new(2, 1, vec![(0, 3)]),
            Err(Err::OutOfRangeVertex { vid: 3, .. })
        ));
    }

    #[test]
    fn test_virtual_to_virtual_is_rejected() {
        assert!(matches!(
            CondensedGraph::new(1, 2, vec![(1, 2)]),
            Err(Err::InvalidEdge { src: 1, dst: 2 })
        ));
    }

    #[test]
    fn test_from_csr_parts() {
        let graph =
            CondensedGraph::from_csr_parts(2, 1, vec![0, 1, 1, 2], vec![2, 1]).unwrap();
        assert_eq!(neighbors(&graph, 0, Direction::Outgoing), [1]);
        assert_eq!(neighbors(&graph, 1, Direction::Incoming), [0]);
        assert!(matches!(
            CondensedGraph::from_csr_parts(2, 1, vec![0, 1, 2], vec![1, 0]),
            Err(Err::MalformedOffsets(_))
        ));
    }

    #[test]
    fn test_expand_matches_on_demand_queries() {
        let graph = create_coauthors();
        for &materialize_both in &[false, true] {
            let expanded = graph.expand(materialize_both);
            assert_eq!(expanded.num_vertices(), graph.num_vertices());
            for vid in 0..graph.num_vertices() {
                for &direction in &[Direction::Incoming, Direction::Outgoing, Direction::Both] {
                    assert_eq!(
                        neighbors(&expanded, vid, direction),
                        neighbors(&graph, vid, direction)
                    );
                }
            }
        }
    }
}
