use super::{Graph, GraphInfo};
use crate::types::{Direction, VId};
use itertools::Itertools;

fn display_header(info: &GraphInfo, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "+-------------------------------------------------+")?;
    writeln!(
        f,
        "|{:^49}|",
        format!(
            "{} graph",
            if info.condensed() {
                "condensed"
            } else {
                "expanded"
            }
        )
    )?;
    writeln!(f, "+------------------------+------------------------+")?;
    writeln!(
        f,
        "| num_vertices: {:<9}| num_virtual: {:<10}|",
        info.num_vertices(),
        info.num_virtual()
    )?;
    writeln!(f, "| num_edges: {:<12}|{:24}|", info.num_edges(), "")?;
    writeln!(f, "+-------------+----------+----------+-------------+")?;
    writeln!(f, "|         vid |   in_deg |  out_deg |             |")?;
    writeln!(f, "+-------------+----------+----------+-------------+")
}

fn display_vertex<G: Graph + ?Sized>(
    graph: &G,
    vid: VId,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let incoming = graph
        .neighbors(vid, Direction::Incoming)
        .map_err(|_| std::fmt::Error)?;
    let outgoing = graph
        .neighbors(vid, Direction::Outgoing)
        .map_err(|_| std::fmt::Error)?;
    writeln!(
        f,
        "|{:>12} |{:>9} |{:>9} |             |",
        vid,
        incoming.len(),
        outgoing.len()
    )?;
    writeln!(f, "|  -> [{}]", outgoing.format(", "))
}

/// Writes every vertex with its outgoing neighbors as a table.
pub fn display<G: Graph + ?Sized>(graph: &G, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    display_header(&graph.info(), f)?;
    for vid in 0..graph.num_vertices() {
        display_vertex(graph, vid, f)?;
    }
    writeln!(f, "+-------------------------------------------------+")
}

#[cfg(test)]
mod tests {
    use crate::graph::ExpandedGraph;

    #[test]
    fn test_display() {
        let graph = ExpandedGraph::new(2, vec![(0, 1)], false).unwrap();
        let text = graph.to_string();
        assert!(text.contains("expanded graph"));
        assert!(text.contains("num_vertices: 2"));
        assert!(text.contains("|  -> [1]"));
        assert!(text.contains("|  -> []"));
    }
}
