//! Graph construction module

use crate::data::{Person, PersonId};
use crate::graph::CompressedGraph;
use crate::relation::Relation;
use std::collections::{HashMap, HashSet};

/// Builder for incrementally constructing an undirected CompressedGraph
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Number of nodes
    node_count: usize,

    /// Mapping from person ids to node indices
    id_to_index: HashMap<PersonId, u32>,

    /// Person id of each node
    node_ids: Vec<PersonId>,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,

    /// Undirected edges already added, as (min, max) node pairs
    seen_edges: HashSet<(u32, u32)>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            node_count: 0,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            seen_edges: HashSet::new(),
        }
    }

    /// Get or create the node for a person id
    pub fn get_or_create_node(&mut self, id: PersonId) -> u32 {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.node_count as u32;
        self.id_to_index.insert(id, idx);
        self.node_ids.push(id);
        self.adjacency_lists.push(Vec::new());
        self.node_count += 1;

        idx
    }

    pub fn has_node(&self, id: PersonId) -> bool {
        self.id_to_index.contains_key(&id)
    }

    /// Add an undirected edge. Self-loops and repeats are ignored.
    pub fn add_edge(&mut self, a: PersonId, b: PersonId) {
        let a_idx = self.get_or_create_node(a);
        let b_idx = self.get_or_create_node(b);

        if a_idx == b_idx {
            return;
        }

        let key = (a_idx.min(b_idx), a_idx.max(b_idx));
        if !self.seen_edges.insert(key) {
            return;
        }

        self.adjacency_lists[a_idx as usize].push(b_idx);
        self.adjacency_lists[b_idx as usize].push(a_idx);
    }

    /// Build the compressed graph
    pub fn build(mut self) -> CompressedGraph {
        let edge_count: usize = self.adjacency_lists.iter().map(|list| list.len()).sum();

        let mut offsets = Vec::with_capacity(self.node_count + 1);
        offsets.push(0);

        let mut offset = 0;
        for list in &self.adjacency_lists {
            offset += list.len() as u32;
            offsets.push(offset);
        }

        let mut edges = Vec::with_capacity(edge_count);
        for list in &mut self.adjacency_lists {
            // Sorted for binary search and a stable BFS discovery order
            list.sort_unstable();
            edges.extend_from_slice(list);
        }

        CompressedGraph {
            node_count: self.node_count,
            offsets,
            edges,
            node_ids: self.node_ids,
            index: self.id_to_index,
        }
    }
}

/// Build the friendship graph: every person is a node, every symmetric relation an edge.
///
/// Relations naming an id outside `persons` are skipped.
pub fn build_friendship_graph(persons: &[Person], relations: &[Relation]) -> CompressedGraph {
    let mut builder = GraphBuilder::with_capacity(persons.len());

    for person in persons {
        builder.get_or_create_node(person.id);
    }

    let mut skipped = 0usize;
    for relation in relations {
        if builder.has_node(relation.user_id) && builder.has_node(relation.friend_id) {
            builder.add_edge(relation.user_id, relation.friend_id);
        } else {
            skipped += 1;
        }
    }
    if skipped > 0 {
        log::debug!("Skipped {} relations with unknown endpoints", skipped);
    }

    let graph = builder.build();
    log::info!(
        "Built friendship graph with {} nodes and {} edges",
        graph.node_count,
        graph.edge_count()
    );
    graph
}
