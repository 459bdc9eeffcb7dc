use super::{Csr, Graph, GraphInfo, Neighbors};
use crate::{
    error::{Err, Result},
    tools::merge_dedup,
    types::{Direction, VId},
};
use rayon::prelude::*;

/// A graph whose adjacency lists are materialized per vertex.
///
/// Outgoing and incoming lists are always stored; the merged [`Direction::Both`] lists
/// only when requested, otherwise they are merged from the other two on each query.
#[derive(Debug, Clone)]
pub struct ExpandedGraph {
    outgoing: Csr,
    incoming: Csr,
    both: Option<Csr>,
}

impl ExpandedGraph {
    /// Builds the store from directed edges; parallel edges collapse into one.
    pub fn new<E>(num_vertices: usize, edges: E, materialize_both: bool) -> Result<Self>
    where
        E: IntoIterator<Item = (VId, VId)>,
    {
        let mut pairs = Vec::new();
        for (src, dst) in edges {
            for &vid in &[src, dst] {
                if vid >= num_vertices {
                    return Err(Err::OutOfRangeVertex { vid, num_vertices });
                }
            }
            pairs.push((src, dst));
        }
        pairs.par_sort_unstable();
        pairs.dedup();
        let outgoing = Csr::from_sorted_pairs(num_vertices, &pairs)?;
        let incoming = outgoing.transpose();
        Ok(Self::from_adjacency(outgoing, incoming, materialize_both))
    }

    /// Builds an undirected store: every edge is listed in both directions.
    pub fn undirected<E>(num_vertices: usize, edges: E) -> Result<Self>
    where
        E: IntoIterator<Item = (VId, VId)>,
    {
        Self::new(
            num_vertices,
            edges
                .into_iter()
                .flat_map(|(src, dst)| vec![(src, dst), (dst, src)]),
            false,
        )
    }

    pub(crate) fn from_adjacency(outgoing: Csr, incoming: Csr, materialize_both: bool) -> Self {
        let both = if materialize_both {
            Some(Csr::from_rows(
                (0..outgoing.num_rows())
                    .into_par_iter()
                    .map(|vid| merge_dedup(outgoing.row(vid), incoming.row(vid)))
                    .collect(),
            ))
        } else {
            None
        };
        Self {
            outgoing,
            incoming,
            both,
        }
    }

    /// Whether the [`Direction::Both`] lists are materialized.
    pub fn materialized_both(&self) -> bool {
        self.both.is_some()
    }
}

impl Graph for ExpandedGraph {
    fn num_vertices(&self) -> usize {
        self.outgoing.num_rows()
    }

    fn num_edges(&self) -> usize {
        self.outgoing.num_entries()
    }

    fn neighbors(&self, vid: VId, direction: Direction) -> Result<Neighbors<'_>> {
        self.check_vertex(vid)?;
        Ok(match direction {
            Direction::Outgoing => Neighbors::borrowed(self.outgoing.row(vid)),
            Direction::Incoming => Neighbors::borrowed(self.incoming.row(vid)),
            Direction::Both => match &self.both {
                Some(both) => Neighbors::borrowed(both.row(vid)),
                None => Neighbors::owned(merge_dedup(
                    self.outgoing.row(vid),
                    self.incoming.row(vid),
                )),
            },
        })
    }

    fn info(&self) -> GraphInfo {
        GraphInfo::new(self.num_vertices(), 0, self.num_edges(), false)
    }
}

impl std::fmt::Display for ExpandedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        super::display(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_cycle() -> ExpandedGraph {
        ExpandedGraph::new(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)], false).unwrap()
    }

    #[test]
    fn test_neighbors() {
        let graph = create_cycle();
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(
            graph.neighbors(0, Direction::Outgoing).unwrap().collect::<Vec<_>>(),
            [1]
        );
        assert_eq!(
            graph.neighbors(0, Direction::Incoming).unwrap().collect::<Vec<_>>(),
            [3]
        );
        assert_eq!(
            graph.neighbors(0, Direction::Both).unwrap().collect::<Vec<_>>(),
            [1, 3]
        );
        assert_eq!(graph.neighbors(2, Direction::Both).unwrap().len(), 2);
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let graph = ExpandedGraph::new(2, vec![(0, 1), (0, 1), (1, 0)], true).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert!(graph.materialized_both());
        assert_eq!(
            graph.neighbors(1, Direction::Both).unwrap().collect::<Vec<_>>(),
            [0]
        );
    }

    #[test]
    fn test_undirected() {
        let graph = ExpandedGraph::undirected(3, vec![(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(
            graph.neighbors(1, Direction::Outgoing).unwrap().collect::<Vec<_>>(),
            [0, 2]
        );
        assert_eq!(
            graph.neighbors(1, Direction::Both).unwrap().collect::<Vec<_>>(),
            [0, 2]
        );
    }

    #[test]
    fn test_out_of_range() {
        let graph = ExpandedGraph::new(5, vec![(0, 4)], false).unwrap();
        assert!(matches!(
            graph.neighbors(5, Direction::Both),
            Err(Err::OutOfRangeVertex {
                vid: 5,
                num_vertices: 5
            })
        ));
        assert!(matches!(
            ExpandedGraph::new(2, vec![(0, 2)], false),
            Err(Err::OutOfRangeVertex { vid: 2, .. })
        ));
    }

    #[test]
    fn test_isolated_vertex() {
        let graph = ExpandedGraph::new(1, vec![], false).unwrap();
        assert_eq!(graph.neighbors(0, Direction::Both).unwrap().len(), 0);
    }
}
