//! Compact adjacency representation of the friendship graph

use crate::data::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compressed sparse representation of the undirected friendship graph.
///
/// Each undirected edge is stored twice (once per endpoint). Nodes are addressed
/// internally by dense `u32` indices and externally by [`PersonId`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Offset array: index where each node's edges begin
    /// offsets[i] to offsets[i+1] defines the edge range for node i
    pub offsets: Vec<u32>,

    /// Edge array: concatenated, sorted neighbour lists
    pub edges: Vec<u32>,

    /// Person id of each node, by node index
    pub node_ids: Vec<PersonId>,

    /// Reverse lookup from person id to node index
    pub(crate) index: HashMap<PersonId, u32>,
}

impl CompressedGraph {
    /// Node index of a person, if present
    pub fn node_index(&self, id: PersonId) -> Option<u32> {
        self.index.get(&id).copied()
    }

    /// Person id stored at a node index
    pub fn person_id(&self, node: u32) -> PersonId {
        self.node_ids[node as usize]
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get outgoing edges for a node
    pub fn outgoing_edges(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Neighbours of a person as person ids, ascending by node index
    pub fn neighbors(&self, id: PersonId) -> Vec<PersonId> {
        match self.node_index(id) {
            Some(node) => self
                .outgoing_edges(node as usize)
                .iter()
                .map(|&n| self.person_id(n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check whether two persons are directly connected
    pub fn has_edge(&self, a: PersonId, b: PersonId) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(src), Some(dst)) => self.outgoing_edges(src as usize).binary_search(&dst).is_ok(),
            _ => false,
        }
    }

    /// Degree of a person; 0 for unknown ids
    pub fn degree(&self, id: PersonId) -> usize {
        self.node_index(id)
            .map(|node| self.out_degree(node as usize))
            .unwrap_or(0)
    }

    /// Get out-degree of a node
    pub fn out_degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Persons with no friends
    pub fn isolated_nodes(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.node_count)
            .filter(|&node| self.out_degree(node) == 0)
            .map(|node| self.node_ids[node])
    }
}
