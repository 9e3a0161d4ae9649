//! Graph algorithms for path queries

use crate::data::PersonId;
use crate::graph::CompressedGraph;
use std::collections::VecDeque;

const UNVISITED: u32 = u32::MAX;

/// One shortest unweighted path between two persons, endpoints included.
///
/// Returns `None` when either id is unknown or no path exists. A person's path to
/// itself is the single node `[a]`. Ties are broken by BFS discovery order, which
/// follows the sorted adjacency lists.
pub fn shortest_path(graph: &CompressedGraph, a: PersonId, b: PersonId) -> Option<Vec<PersonId>> {
    let src = graph.node_index(a)?;
    let dst = graph.node_index(b)?;

    if src == dst {
        return Some(vec![a]);
    }

    let mut parent = vec![UNVISITED; graph.node_count];
    parent[src as usize] = src;

    let mut queue = VecDeque::new();
    queue.push_back(src);

    while let Some(node) = queue.pop_front() {
        for &next in graph.outgoing_edges(node as usize) {
            if parent[next as usize] != UNVISITED {
                continue;
            }
            parent[next as usize] = node;

            if next == dst {
                return Some(reconstruct(graph, &parent, src, dst));
            }
            queue.push_back(next);
        }
    }

    log::debug!("No path between {} and {}", a, b);
    None
}

/// Number of intermediaries on a shortest path; 0 when disconnected
pub fn hop_count(graph: &CompressedGraph, a: PersonId, b: PersonId) -> usize {
    shortest_path(graph, a, b)
        .map(|path| path.len().saturating_sub(2))
        .unwrap_or(0)
}

fn reconstruct(graph: &CompressedGraph, parent: &[u32], src: u32, dst: u32) -> Vec<PersonId> {
    let mut path = vec![graph.person_id(dst)];
    let mut node = dst;
    while node != src {
        node = parent[node as usize];
        path.push(graph.person_id(node));
    }
    path.reverse();
    path
}
