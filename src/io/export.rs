use crate::{
    error::Result,
    graph::Graph,
    types::{Direction, VId},
};
use std::fmt::Display;
use std::io::Write;

/// Writes one `vid value` line per vertex.
pub fn write_plain<V, W>(values: &[V], mut writer: W) -> Result<()>
where
    V: Display,
    W: Write,
{
    for (vid, value) in values.iter().enumerate() {
        writeln!(writer, "{}\t{}", vid, value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the logical graph in GML, with `values` attached to the nodes as `name`.
pub fn write_gml<G, V, W>(graph: &G, name: &str, values: &[V], mut writer: W) -> Result<()>
where
    G: Graph + ?Sized,
    V: Display,
    W: Write,
{
    writeln!(writer, "graph [")?;
    writeln!(writer, "  directed 1")?;
    for vid in 0..graph.num_vertices() {
        writeln!(writer, "  node [")?;
        writeln!(writer, "    id {}", vid)?;
        if let Some(value) = values.get(vid) {
            writeln!(writer, "    {} \"{}\"", name, value)?;
        }
        writeln!(writer, "  ]")?;
    }
    for (src, dst) in logical_edges(graph)? {
        writeln!(writer, "  edge [")?;
        writeln!(writer, "    source {}", src)?;
        writeln!(writer, "    target {}", dst)?;
        writeln!(writer, "  ]")?;
    }
    writeln!(writer, "]")?;
    writer.flush()?;
    Ok(())
}

/// Writes the logical graph in GraphML, with `values` attached to the nodes as `name`.
pub fn write_graphml<G, V, W>(graph: &G, name: &str, values: &[V], mut writer: W) -> Result<()>
where
    G: Graph + ?Sized,
    V: Display,
    W: Write,
{
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        writer,
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns">"#
    )?;
    writeln!(
        writer,
        r#"  <key id="d0" for="node" attr.name="{}" attr.type="string"/>"#,
        escape(name)
    )?;
    writeln!(writer, r#"  <graph id="G" edgedefault="directed">"#)?;
    for vid in 0..graph.num_vertices() {
        match values.get(vid) {
            Some(value) => writeln!(
                writer,
                r#"    <node id="n{}"><data key="d0">{}</data></node>"#,
                vid,
                escape(&value.to_string())
            )?,
            None => writeln!(writer, r#"    <node id="n{}"/>"#, vid)?,
        }
    }
    for (src, dst) in logical_edges(graph)? {
        writeln!(
            writer,
            r#"    <edge source="n{}" target="n{}"/>"#,
            src, dst
        )?;
    }
    writeln!(writer, "  </graph>")?;
    writeln!(writer, "</graphml>")?;
    writer.flush()?;
    Ok(())
}

fn logical_edges<G: Graph + ?Sized>(graph: &G) -> Result<Vec<(VId, VId)>> {
    let mut edges = Vec::new();
    for src in 0..graph.num_vertices() {
        edges.extend(
            graph
                .neighbors(src, Direction::Outgoing)?
                .map(|dst| (src, dst)),
        );
    }
    Ok(edges)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
