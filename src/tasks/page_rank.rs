use crate::{
    types::{Direction, VId},
    vertex_centric::{ComputeTask, EngineHandle, TaskError, VertexView},
};

/// PageRank with a fixed number of iterations, one per superstep.
///
/// Rank flowing into dangling vertices is not redistributed.
#[derive(Debug, Clone)]
pub struct PageRank {
    iterations: usize,
    damping: f64,
    undirected: bool,
}

impl PageRank {
    /// Every vertex starts at `1 / n` on a graph of `n` vertices.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            damping: 0.85,
            undirected: false,
        }
    }

    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Treats every edge as going both ways.
    pub fn undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }
}

impl ComputeTask<f64> for PageRank {
    fn name(&self) -> &str {
        "PageRank"
    }

    fn initial_value(&self, _vid: VId, engine: &EngineHandle) -> f64 {
        1.0 / engine.num_vertices() as f64
    }

    fn compute(
        &self,
        vertex: &mut VertexView<'_, f64>,
        engine: &EngineHandle,
    ) -> Result<(), TaskError> {
        if engine.superstep() < self.iterations {
            let (inward, outward) = if self.undirected {
                (Direction::Both, Direction::Both)
            } else {
                (Direction::Incoming, Direction::Outgoing)
            };
            let mut sum = 0.0;
            for neighbor in vertex.neighbors(inward)? {
                sum += neighbor.value() / neighbor.degree(outward)? as f64;
            }
            let n = engine.num_vertices() as f64;
            vertex.set_value((1.0 - self.damping) / n + self.damping * sum);
        }
        if engine.superstep() + 1 >= self.iterations {
            engine.vote_to_halt(vertex);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::ExpandedGraph, vertex_centric::VertexCentric};

    #[test]
    fn test_cycle_is_uniform() {
        let graph = ExpandedGraph::new(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)], false).unwrap();
        let mut engine = VertexCentric::new(&graph);
        let stats = engine.run(&PageRank::new(10)).unwrap();
        assert_eq!(stats.supersteps(), 10);
        for &rank in engine.values("PageRank").unwrap() {
            assert!((rank - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_star() {
        let graph = ExpandedGraph::undirected(4, vec![(0, 1), (0, 2), (0, 3)]).unwrap();
        let mut engine = VertexCentric::new(&graph);
        engine.run(&PageRank::new(30).undirected(true)).unwrap();
        let ranks = engine.values("PageRank").unwrap();
        assert!(ranks[0] > ranks[1]);
        assert!((ranks[1] - ranks[2]).abs() < 1e-12);
        assert!((ranks.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_iterations() {
        let graph = ExpandedGraph::new(2, vec![(0, 1)], false).unwrap();
        let mut engine = VertexCentric::new(&graph);
        let stats = engine.run(&PageRank::new(0)).unwrap();
        assert_eq!(stats.supersteps(), 1);
        assert_eq!(engine.values("PageRank").unwrap(), [0.5, 0.5]);
    }

    #[test]
    fn test_ranks_sum_to_one() {
        let graph = ExpandedGraph::new(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)], false).unwrap();
        let mut engine = VertexCentric::new(&graph);
        engine.run(&PageRank::new(1)).unwrap();
        let ranks = engine.values("PageRank").unwrap();
        assert!((ranks.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((ranks[0] - 0.25).abs() < 1e-12);
    }
}
