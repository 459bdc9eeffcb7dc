use vcgraph::{
    error::Err,
    graph::{CondensedGraph, ExpandedGraph, Graph, GraphStore},
    tasks::Degree,
    types::Direction,
    vertex_centric::{EngineState, VertexCentric},
};

fn create_cycle() -> ExpandedGraph {
    ExpandedGraph::undirected(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
}

/// Authors 0, 1, 2, 3 write paper 5 together, authors 3 and 4 write paper 6.
fn create_coauthorship() -> CondensedGraph {
    let mut edges = vec![];
    for author in 0..4 {
        edges.push((author, 5));
        edges.push((5, author));
    }
    for &author in &[3, 4] {
        edges.push((author, 6));
        edges.push((6, author));
    }
    CondensedGraph::new(5, 2, edges).unwrap()
}

#[test]
fn test_cycle_degree() {
    let graph = create_cycle();
    let mut engine = VertexCentric::new(&graph);
    let stats = engine.run(&Degree::new()).unwrap();
    assert_eq!(stats.supersteps(), 1);
    assert_eq!(engine.values("Degree").unwrap(), [2, 2, 2, 2]);
}

#[test]
fn test_directed_cycle_degree() {
    let graph = ExpandedGraph::new(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)], true).unwrap();
    let mut engine = VertexCentric::new(&graph);
    engine.run(&Degree::new()).unwrap();
    assert_eq!(engine.values("Degree").unwrap(), [2, 2, 2, 2]);
}

#[test]
fn test_isolated_vertex() {
    let graph = ExpandedGraph::new(1, vec![], false).unwrap();
    let mut engine = VertexCentric::new(&graph);
    let stats = engine.run(&Degree::new()).unwrap();
    assert_eq!(stats.supersteps(), 1);
    assert_eq!(engine.state(), EngineState::Halted { supersteps: 1 });
    assert_eq!(engine.values("Degree").unwrap(), [0]);
}

#[test]
fn test_out_of_range_neighbors() {
    let graph = ExpandedGraph::new(5, vec![(0, 1), (1, 2), (2, 3), (3, 4)], false).unwrap();
    assert!(matches!(
        graph.neighbors(5, Direction::Both),
        Err(Err::OutOfRangeVertex {
            vid: 5,
            num_vertices: 5
        })
    ));
    let condensed = CondensedGraph::new(5, 0, vec![(0, 1)]).unwrap();
    assert!(matches!(
        condensed.neighbors(5, Direction::Both),
        Err(Err::OutOfRangeVertex { vid: 5, .. })
    ));
}

#[test]
fn test_condensed_and_expanded_agree() {
    let condensed = create_coauthorship();
    let mut engine = VertexCentric::new(&condensed);
    engine.run(&Degree::new()).unwrap();
    let on_demand = engine.values("Degree").unwrap().to_vec();
    assert_eq!(on_demand, [3, 3, 3, 4, 1]);

    let mut store = GraphStore::from(condensed.clone());
    store.expand(true);
    let mut engine = VertexCentric::new(&store);
    engine.run(&Degree::new()).unwrap();
    assert_eq!(engine.values("Degree").unwrap(), on_demand.as_slice());

    let expanded = condensed.expand(false);
    for vid in 0..condensed.num_vertices() {
        for &direction in &[Direction::Incoming, Direction::Outgoing, Direction::Both] {
            let mut a: Vec<_> = condensed.neighbors(vid, direction).unwrap().collect();
            let mut b: Vec<_> = expanded.neighbors(vid, direction).unwrap().collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }
}
