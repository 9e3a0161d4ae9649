//! Visualization data export for graph viewers

use anyhow::Result;
use crate::graph::CompressedGraph;
use crate::network::Snapshot;
use petgraph::dot::{Config as DotConfig, Dot};
use petgraph::graph::UnGraph;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Cytoscape-style element: a node or an edge
#[derive(Debug, Serialize)]
pub struct Element {
    pub group: &'static str,
    pub data: ElementData,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ElementData {
    Node { id: String, label: String },
    Edge { id: String, source: String, target: String },
}

/// Generate visualization files for the snapshot's friendship graph
pub fn generate_visualizations(snapshot: &Snapshot, output_dir: &str) -> Result<()> {
    log::info!(
        "Generating visualizations for {} nodes",
        snapshot.graph().node_count
    );

    let viz_dir = Path::new(output_dir).join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    let mut elements_file = File::create(viz_dir.join("elements.json"))?;
    elements_file.write_all(to_string_pretty(&elements(snapshot))?.as_bytes())?;

    generate_graphml(snapshot, &viz_dir)?;

    let mut dot_file = File::create(viz_dir.join("graph.dot"))?;
    write!(dot_file, "{}", render_dot(snapshot))?;

    generate_node_table(snapshot, &viz_dir)?;

    log::info!("Visualizations generated successfully");

    Ok(())
}

/// Nodes for every person, then one edge per symmetric relation in relation order
pub fn elements(snapshot: &Snapshot) -> Vec<Element> {
    let graph = snapshot.graph();

    let nodes = graph.node_ids.iter().map(|&id| Element {
        group: "nodes",
        data: ElementData::Node {
            id: id.to_string(),
            label: snapshot.name_of(id).to_string(),
        },
    });

    let edges = snapshot
        .relations()
        .iter()
        .enumerate()
        .filter(|(_, r)| graph.contains(r.user_id) && graph.contains(r.friend_id))
        .map(|(index, r)| Element {
            group: "edges",
            data: ElementData::Edge {
                id: format!("e{}", index),
                source: r.user_id.to_string(),
                target: r.friend_id.to_string(),
            },
        });

    nodes.chain(edges).collect()
}

/// Render the friendship graph in Graphviz DOT, nodes labelled by name
pub fn render_dot(snapshot: &Snapshot) -> String {
    let graph = to_petgraph(snapshot.graph(), |id| snapshot.name_of(id).to_string());
    format!("{:?}", Dot::with_config(&graph, &[DotConfig::EdgeNoLabel]))
}

/// Copy the graph into a petgraph undirected graph, one edge per friendship
fn to_petgraph<F: Fn(u64) -> String>(graph: &CompressedGraph, label: F) -> UnGraph<String, ()> {
    let mut out = UnGraph::with_capacity(graph.node_count, graph.edge_count());
    let indices: Vec<_> = graph
        .node_ids
        .iter()
        .map(|&id| out.add_node(label(id)))
        .collect();

    for src in 0..graph.node_count {
        for &dst in graph.outgoing_edges(src) {
            if src < dst as usize {
                out.add_edge(indices[src], indices[dst as usize], ());
            }
        }
    }

    out
}

fn generate_graphml(snapshot: &Snapshot, viz_dir: &Path) -> Result<()> {
    let graph = snapshot.graph();
    let mut file = File::create(viz_dir.join("graph.graphml"))?;

    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(file, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(file, "  <key id=\"label\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>")?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    for &id in &graph.node_ids {
        writeln!(
            file,
            "    <node id=\"n{}\">\n      <data key=\"label\">{}</data>\n    </node>",
            id,
            escape_xml(snapshot.name_of(id))
        )?;
    }

    let mut edge_id = 0;
    for src in 0..graph.node_count {
        for &dst in graph.outgoing_edges(src) {
            if src < dst as usize {
                writeln!(
                    file,
                    "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\"/>",
                    edge_id,
                    graph.person_id(src as u32),
                    graph.person_id(dst)
                )?;
                edge_id += 1;
            }
        }
    }

    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;

    Ok(())
}

fn generate_node_table(snapshot: &Snapshot, viz_dir: &Path) -> Result<()> {
    let graph = snapshot.graph();
    let mut file = File::create(viz_dir.join("nodes.csv"))?;

    writeln!(file, "id,label,degree")?;
    for &id in &graph.node_ids {
        writeln!(
            file,
            "{},\"{}\",{}",
            id,
            snapshot.name_of(id).replace('"', "\"\""),
            graph.degree(id)
        )?;
    }

    Ok(())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
