//! Pipeline context and the entry points used by presentation code

pub mod enrich;
pub mod paths;

use crate::config::Config;
use crate::data::identity::normalize_identities;
use crate::data::{Person, PersonId, RawPerson};
use crate::graph::algorithms::shortest_path;
use crate::graph::{CompressedGraph, build_friendship_graph};
use crate::relation::{RandomSampler, Relation, RelationSampler, symmetrize};
use std::collections::HashMap;

pub use paths::{PathRecord, display_records};

/// Answer to a name-keyed path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathQuery {
    /// Display names along one shortest path, endpoints included
    Found(Vec<String>),
    Disconnected,
}

/// Everything derived by one refresh
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    persons: Vec<Person>,
    relations: Vec<Relation>,
    graph: CompressedGraph,
    path_records: Vec<PathRecord>,
    /// Position in `persons` of each id; the first person carrying an id wins
    positions: HashMap<PersonId, usize>,
    names: HashMap<String, PersonId>,
}

impl Snapshot {
    /// Run the full pipeline over a batch of raw identities
    pub fn build<S: RelationSampler + ?Sized>(
        raw: &[RawPerson],
        sampler: &mut S,
        config: &Config,
    ) -> Self {
        if raw.is_empty() {
            log::info!("No identities supplied; producing an empty snapshot");
        }

        let persons = normalize_identities(raw, &config.cover_url);
        let sampled = sampler.sample(&persons);
        let relations = symmetrize(&sampled);
        let graph = build_friendship_graph(&persons, &relations);
        let persons = enrich::enrich_friends(&persons, &relations);
        let path_records = paths::compute_path_records(&persons, &relations, &graph);
        let positions = enrich::index_by_id(&persons);
        let names = name_directory(&persons);

        Self {
            persons,
            relations,
            graph,
            path_records,
            positions,
            names,
        }
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// The symmetric relation
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn graph(&self) -> &CompressedGraph {
        &self.graph
    }

    /// Raw engine output, duplicates and zero-hop records included
    pub fn path_records(&self) -> &[PathRecord] {
        &self.path_records
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.positions.get(&id).map(|&pos| &self.persons[pos])
    }

    /// Friend-of-friend records shown on one person's profile: zero-hop records
    /// and exact duplicates dropped, engine order kept
    pub fn records_for(&self, issuer: PersonId) -> Vec<PathRecord> {
        display_records(&self.path_records)
            .into_iter()
            .filter(|r| r.issuer == issuer)
            .collect()
    }

    /// Display name of a person id, empty when unknown
    pub fn name_of(&self, id: PersonId) -> &str {
        self.person(id).map(|p| p.name.as_str()).unwrap_or("")
    }

    /// Person id registered for a display name
    pub fn id_of(&self, name: &str) -> Option<PersonId> {
        self.names.get(name).copied()
    }
}

/// Name lookup table; the first person carrying a name wins
fn name_directory(persons: &[Person]) -> HashMap<String, PersonId> {
    let mut names = HashMap::with_capacity(persons.len());
    for person in persons {
        if let Some(&existing) = names.get(&person.name) {
            if existing != person.id {
                log::warn!(
                    "Name {:?} is shared by persons {} and {}; name queries resolve to {}",
                    person.name,
                    existing,
                    person.id,
                    existing
                );
            }
            continue;
        }
        names.insert(person.name.clone(), person.id);
    }
    names
}

/// Owner of the current snapshot.
///
/// `refresh` and `update_avatar` take `&mut self`, so refreshes are serialized with
/// each other and with avatar edits. A refresh replaces the snapshot whole and
/// discards any avatar edits made since the previous one.
pub struct SocialNetwork<S: RelationSampler = RandomSampler> {
    config: Config,
    sampler: S,
    snapshot: Snapshot,
}

impl SocialNetwork<RandomSampler> {
    /// Network backed by the random sampler described by `config`
    pub fn from_config(config: Config) -> Self {
        let sampler = RandomSampler::from_seed(config.seed, config.max_friends);
        Self::new(config, sampler)
    }
}

impl<S: RelationSampler> SocialNetwork<S> {
    pub fn new(config: Config, sampler: S) -> Self {
        Self {
            config,
            sampler,
            snapshot: Snapshot::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Rebuild all derived state from a fresh batch of identities
    pub fn refresh(&mut self, raw: &[RawPerson]) -> &Snapshot {
        log::info!("Refreshing network from {} identities", raw.len());
        let snapshot = Snapshot::build(raw, &mut self.sampler, &self.config);
        self.snapshot = snapshot;
        &self.snapshot
    }

    /// Replace one person's avatar in place. Friend-list copies keep the old URL.
    ///
    /// Returns `false` when no person has `id`.
    pub fn update_avatar(&mut self, id: PersonId, avatar_url: impl Into<String>) -> bool {
        match self.snapshot.positions.get(&id).copied() {
            Some(pos) => {
                self.snapshot.persons[pos].avatar_url = avatar_url.into();
                log::debug!("Updated avatar of person {}", id);
                true
            }
            None => {
                log::warn!("Avatar update for unknown person {}", id);
                false
            }
        }
    }

    /// Shortest path between two persons looked up by display name
    pub fn shortest_path_between(&self, name_a: &str, name_b: &str) -> PathQuery {
        let (Some(a), Some(b)) = (self.snapshot.id_of(name_a), self.snapshot.id_of(name_b)) else {
            log::debug!("Unknown name in path query {:?} -> {:?}", name_a, name_b);
            return PathQuery::Disconnected;
        };

        match self.shortest_path_between_ids(a, b) {
            Some(path) => PathQuery::Found(
                path.into_iter()
                    .map(|id| self.snapshot.name_of(id).to_string())
                    .collect(),
            ),
            None => PathQuery::Disconnected,
        }
    }

    /// Shortest path between two persons by id
    pub fn shortest_path_between_ids(&self, a: PersonId, b: PersonId) -> Option<Vec<PersonId>> {
        shortest_path(&self.snapshot.graph, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::FixedSampler;

    fn raw(id: PersonId, first: &str) -> RawPerson {
        RawPerson {
            id,
            first_name: first.to_string(),
            last_name: "Test".to_string(),
            ..RawPerson::default()
        }
    }

    fn network(relations: Vec<Relation>) -> SocialNetwork<FixedSampler> {
        SocialNetwork::new(Config::default(), FixedSampler::new(relations))
    }

    #[test]
    fn name_queries_translate_at_the_boundary() {
        let mut net = network(vec![Relation::new(1, 2), Relation::new(2, 3)]);
        net.refresh(&[raw(1, "A"), raw(2, "B"), raw(3, "C")]);

        assert_eq!(
            net.shortest_path_between("A Test", "C Test"),
            PathQuery::Found(vec![
                "A Test".to_string(),
                "B Test".to_string(),
                "C Test".to_string()
            ])
        );
        assert_eq!(
            net.shortest_path_between("A Test", "A Test"),
            PathQuery::Found(vec!["A Test".to_string()])
        );
        assert_eq!(
            net.shortest_path_between("A Test", "Nobody"),
            PathQuery::Disconnected
        );
    }

    #[test]
    fn duplicate_names_resolve_to_first_person() {
        let mut net = network(vec![Relation::new(1, 3)]);
        net.refresh(&[raw(1, "A"), raw(2, "Twin"), raw(3, "Twin")]);

        assert_eq!(net.snapshot().id_of("Twin Test"), Some(2));
        assert_eq!(
            net.shortest_path_between("A Test", "Twin Test"),
            PathQuery::Disconnected
        );
        assert_eq!(net.shortest_path_between_ids(1, 3), Some(vec![1, 3]));
    }

    #[test]
    fn update_avatar_touches_only_the_person() {
        let mut net = network(vec![Relation::new(1, 2)]);
        net.refresh(&[raw(1, "A"), raw(2, "B")]);

        assert!(net.update_avatar(1, "https://robohash.org/z?set=set4"));
        assert!(!net.update_avatar(99, "x"));

        let snapshot = net.snapshot();
        assert_eq!(
            snapshot.person(1).unwrap().avatar_url,
            "https://robohash.org/z?set=set4"
        );
        assert_eq!(snapshot.person(2).unwrap().friends[0].avatar_url, "");
    }

    #[test]
    fn person_lookup_keeps_first_of_duplicate_ids() {
        let mut net = network(vec![Relation::new(1, 2)]);
        net.refresh(&[raw(1, "A"), raw(2, "B"), raw(1, "Shadow")]);

        assert_eq!(net.snapshot().person(1).unwrap().name, "A Test");
        assert_eq!(net.snapshot().person(2).unwrap().name, "B Test");
        assert!(net.snapshot().person(3).is_none());

        assert!(net.update_avatar(1, "u"));
        assert_eq!(net.snapshot().persons()[0].avatar_url, "u");
        assert_eq!(net.snapshot().persons()[2].avatar_url, "");

        net.refresh(&[raw(5, "E")]);
        assert!(net.snapshot().person(1).is_none());
        assert_eq!(net.snapshot().name_of(5), "E Test");
    }

    #[test]
    fn records_for_filters_one_profile() {
        let mut net = network(vec![Relation::new(1, 2), Relation::new(2, 3)]);
        net.refresh(&[raw(1, "A"), raw(2, "B"), raw(3, "C"), raw(4, "D")]);
        let snapshot = net.snapshot();

        let record = |issuer, receiver| PathRecord {
            issuer,
            receiver,
            hop_count: 1,
        };
        assert_eq!(snapshot.records_for(1), vec![record(1, 3)]);
        assert_eq!(snapshot.records_for(3), vec![record(3, 1)]);
        assert!(snapshot.records_for(2).is_empty());
        assert!(snapshot.records_for(4).is_empty());
        assert!(snapshot.records_for(99).is_empty());
    }

    #[test]
    fn records_for_collapses_repeated_paths() {
        // 1 reaches 4 through both 2 and 3
        let mut net = network(vec![
            Relation::new(1, 2),
            Relation::new(1, 3),
            Relation::new(2, 4),
            Relation::new(3, 4),
        ]);
        net.refresh(&[raw(1, "A"), raw(2, "B"), raw(3, "C"), raw(4, "D")]);

        let snapshot = net.snapshot();
        assert_eq!(
            snapshot.path_records().iter().filter(|r| r.issuer == 1).count(),
            2
        );
        assert_eq!(
            snapshot.records_for(1),
            vec![PathRecord {
                issuer: 1,
                receiver: 4,
                hop_count: 1
            }]
        );
    }

    #[test]
    fn random_network_from_config() {
        let config = Config {
            seed: Some(9),
            ..Config::default()
        };
        let mut net = SocialNetwork::from_config(config);
        let raw: Vec<RawPerson> = (1..=5).map(|id| raw(id, "P")).collect();
        let snapshot = net.refresh(&raw);

        assert_eq!(snapshot.persons().len(), 5);
        assert_eq!(snapshot.graph().node_count, 5);
    }
}
