//! Results export module

use anyhow::Result;
use crate::network::{Snapshot, display_records};
use serde::Serialize;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Degree buckets 0..=9 plus a final 10+ bucket
const DEGREE_BUCKETS: usize = 11;

/// Friend-of-friend entry with names resolved for readers of the export
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DisplayPath<'a> {
    issuer: &'a str,
    receiver: &'a str,
    receiver_avatar: &'a str,
    hop_count: usize,
}

/// Save the derived state of a snapshot to the specified directory
pub fn save_results(snapshot: &Snapshot, output_dir: &str) -> Result<()> {
    log::info!(
        "Saving {} persons and {} path records to {}",
        snapshot.persons().len(),
        snapshot.path_records().len(),
        output_dir
    );

    fs::create_dir_all(output_dir)?;

    write_json(output_dir, "persons.json", snapshot.persons())?;
    write_json(output_dir, "relations.json", snapshot.relations())?;
    write_json(output_dir, "path_records.json", snapshot.path_records())?;
    save_friends_of_friends(snapshot, output_dir)?;
    save_summary(snapshot, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

fn write_json<T: Serialize + ?Sized>(output_dir: &str, name: &str, value: &T) -> Result<()> {
    let path = Path::new(output_dir).join(name);
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}

/// Save deduplicated, non-zero friend-of-friend records with names resolved
fn save_friends_of_friends(snapshot: &Snapshot, output_dir: &str) -> Result<()> {
    log::info!("Saving friend-of-friend records");

    let records = display_records(snapshot.path_records());
    let entries: Vec<DisplayPath> = records
        .iter()
        .map(|r| DisplayPath {
            issuer: snapshot.name_of(r.issuer),
            receiver: snapshot.name_of(r.receiver),
            receiver_avatar: snapshot
                .person(r.receiver)
                .map(|p| p.avatar_url.as_str())
                .unwrap_or(""),
            hop_count: r.hop_count,
        })
        .collect();

    write_json(output_dir, "friends_of_friends.json", &entries)
}

/// Save summary information
fn save_summary(snapshot: &Snapshot, output_dir: &str) -> Result<()> {
    log::info!("Saving summary information");

    let graph = snapshot.graph();
    let mut degree_dist = vec![0usize; DEGREE_BUCKETS];
    for node in 0..graph.node_count {
        let bucket = std::cmp::min(graph.out_degree(node), DEGREE_BUCKETS - 1);
        degree_dist[bucket] += 1;
    }

    let avg_degree = if graph.node_count == 0 {
        0.0
    } else {
        graph.edges.len() as f64 / graph.node_count as f64
    };

    let summary = json!({
        "graph_stats": {
            "node_count": graph.node_count,
            "edge_count": graph.edge_count(),
            "avg_degree": avg_degree,
            "isolated_count": graph.isolated_nodes().count(),
            "degree_distribution": degree_dist,
        },
        "path_stats": {
            "record_count": snapshot.path_records().len(),
            "displayed_count": display_records(snapshot.path_records()).len(),
        }
    });

    write_json(output_dir, "summary.json", &summary)
}
