use crate::{
    error::{Err, Result},
    graph::CondensedGraph,
    types::VId,
};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a graph in edge-list format.
///
/// ```text
/// # coauthors of one paper, stored through virtual vertex 3
/// vertices 3 1
/// 0 3
/// 3 0
/// 1 3
/// 3 1
/// 2 3
/// 3 2
/// ```
///
/// Blank lines and `#` comments are skipped. The header gives the number of real
/// vertices and, optionally, of virtual ones; every other line is one stored edge.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<CondensedGraph> {
    let mut header: Option<(usize, usize)> = None;
    let mut edges: Vec<(VId, VId)> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        match (header, fields.as_slice()) {
            (None, ["vertices", num_vertices]) => {
                header = Some((parse_field(num_vertices, line_no)?, 0));
            }
            (None, ["vertices", num_vertices, num_virtual]) => {
                header = Some((
                    parse_field(num_vertices, line_no)?,
                    parse_field(num_virtual, line_no)?,
                ));
            }
            (None, _) => {
                return Err(Err::Parse {
                    line: line_no,
                    message: String::from("expected `vertices <num_vertices> [<num_virtual>]`"),
                })
            }
            (Some(_), [src, dst]) => {
                edges.push((parse_field(src, line_no)?, parse_field(dst, line_no)?));
            }
            (Some(_), _) => {
                return Err(Err::Parse {
                    line: line_no,
                    message: format!("expected `<src> <dst>`, found `{}`", line),
                })
            }
        }
    }
    let (num_vertices, num_virtual) = header.ok_or(Err::Parse {
        line: 0,
        message: String::from("missing `vertices` header"),
    })?;
    debug!(
        "read {} vertices, {} virtual vertices, {} edges",
        num_vertices,
        num_virtual,
        edges.len()
    );
    CondensedGraph::new(num_vertices, num_virtual, edges)
}

pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<CondensedGraph> {
    read_edge_list(BufReader::new(File::open(path)?))
}

fn parse_field(field: &str, line: usize) -> Result<usize> {
    field.parse().map_err(|_| Err::Parse {
        line,
        message: format!("`{}` is not a vertex id", field),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::Graph, types::Direction};
    use std::io::Write;

    #[test]
    fn test_read_condensed() {
        let text = "\
# one paper
vertices 3 1

0 3  # author 0
3 0
1 3
3 1
2 3
3 2
";
        let graph = read_edge_list(text.as_bytes()).unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_virtual(), 1);
        assert_eq!(
            graph.neighbors(0, Direction::Both).unwrap().collect::<Vec<_>>(),
            [1, 2]
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            read_edge_list("0 1\n".as_bytes()),
            Err(Err::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_edge_list("vertices 2\n0 x\n".as_bytes()),
            Err(Err::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read_edge_list("vertices 2\n0 1 2\n".as_bytes()),
            Err(Err::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read_edge_list("# nothing\n".as_bytes()),
            Err(Err::Parse { line: 0, .. })
        ));
        assert!(matches!(
            read_edge_list("vertices 2\n0 2\n".as_bytes()),
            Err(Err::OutOfRangeVertex { vid: 2, .. })
        ));
        assert!(matches!(
            read_edge_list("vertices 18446744073709551615 1\n".as_bytes()),
            Err(Err::TooManyVertices(_))
        ));
        assert!(matches!(
            read_edge_list("vertices 18446744073709551615\n".as_bytes()),
            Err(Err::TooManyVertices(_))
        ));
        assert!(matches!(
            read_edge_list("vertices 4611686018427387903\n".as_bytes()),
            Err(Err::TooManyVertices(_))
        ));
    }

    #[test]
    fn test_load_edge_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vertices 2").unwrap();
        writeln!(file, "0 1").unwrap();
        let graph = load_edge_list(file.path()).unwrap();
        assert_eq!(graph.num_edges(), 1);
        assert!(matches!(
            load_edge_list(file.path().with_extension("missing")),
            Err(Err::Io(_))
        ));
    }
}
