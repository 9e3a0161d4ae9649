//! Friend-of-friend shortest path records

use crate::data::{Person, PersonId};
use crate::graph::algorithms::hop_count;
use crate::graph::CompressedGraph;
use crate::network::enrich::index_by_id;
use crate::relation::Relation;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Hop count from a person to one of its friends-of-friends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRecord {
    pub issuer: PersonId,
    pub receiver: PersonId,
    /// Intermediaries strictly between issuer and receiver; 0 when disconnected
    pub hop_count: usize,
}

/// Compute one record per `(u, f, g)` triple where `(u, f)` is a symmetric relation
/// and `g` is a friend of `f` that is neither `u` nor a direct friend of `u`.
///
/// Records are not deduplicated: a friend-of-friend reached through several common
/// friends appears once per intermediary. See [`display_records`].
pub fn compute_path_records(
    persons: &[Person],
    relations: &[Relation],
    graph: &CompressedGraph,
) -> Vec<PathRecord> {
    let index = index_by_id(persons);
    let mut records = Vec::new();

    for relation in relations {
        let (Some(_), Some(&friend_pos)) =
            (index.get(&relation.user_id), index.get(&relation.friend_id))
        else {
            log::debug!("Skipping unresolved relation {:?}", relation);
            continue;
        };

        let issuer = relation.user_id;
        for candidate in &persons[friend_pos].friends {
            if candidate.id == issuer || graph.has_edge(issuer, candidate.id) {
                continue;
            }

            records.push(PathRecord {
                issuer,
                receiver: candidate.id,
                hop_count: hop_count(graph, issuer, candidate.id),
            });
        }
    }

    log::info!("Computed {} friend-of-friend path records", records.len());
    records
}

/// Consumer view of the engine output: drop zero-hop records and exact duplicates,
/// keeping first occurrences in order
pub fn display_records(records: &[PathRecord]) -> Vec<PathRecord> {
    records
        .iter()
        .filter(|r| r.hop_count > 0)
        .copied()
        .unique()
        .collect()
}
