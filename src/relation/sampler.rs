//! Random friend sampling

use crate::data::Person;
use crate::relation::Relation;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of the raw (directed, unsymmetrized) relation sample
pub trait RelationSampler {
    fn sample(&mut self, persons: &[Person]) -> Vec<Relation>;
}

impl<S: RelationSampler + ?Sized> RelationSampler for Box<S> {
    fn sample(&mut self, persons: &[Person]) -> Vec<Relation> {
        (**self).sample(persons)
    }
}

/// Draws `0..=max_friends` distinct persons for each person.
///
/// Self-selection is possible here and is removed by the symmetrizer.
pub struct RandomSampler<R: Rng = StdRng> {
    rng: R,
    max_friends: usize,
}

impl RandomSampler<StdRng> {
    /// Seeded sampler when `seed` is set, entropy-backed otherwise
    pub fn from_seed(seed: Option<u64>, max_friends: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, max_friends)
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R, max_friends: usize) -> Self {
        Self { rng, max_friends }
    }
}

impl<R: Rng> RelationSampler for RandomSampler<R> {
    fn sample(&mut self, persons: &[Person]) -> Vec<Relation> {
        let mut relations = Vec::new();

        for person in persons {
            let k = self.rng.gen_range(0..=self.max_friends);

            // choose_multiple caps at persons.len() and never repeats an element
            for friend in persons.choose_multiple(&mut self.rng, k) {
                relations.push(Relation::new(person.id, friend.id));
            }
        }

        log::debug!(
            "Sampled {} directed relations for {} persons",
            relations.len(),
            persons.len()
        );
        relations
    }
}

/// Replays a fixed relation list regardless of the persons given
#[derive(Debug, Clone, Default)]
pub struct FixedSampler {
    relations: Vec<Relation>,
}

impl FixedSampler {
    pub fn new(relations: Vec<Relation>) -> Self {
        Self { relations }
    }
}

impl RelationSampler for FixedSampler {
    fn sample(&mut self, _persons: &[Person]) -> Vec<Relation> {
        self.relations.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::identity::normalize_identities;
    use crate::data::RawPerson;
    use std::collections::{HashMap, HashSet};

    fn persons(n: u64) -> Vec<Person> {
        let raw: Vec<RawPerson> = (1..=n)
            .map(|id| RawPerson {
                id,
                first_name: format!("P{}", id),
                ..RawPerson::default()
            })
            .collect();
        normalize_identities(&raw, "c")
    }

    #[test]
    fn never_exceeds_bound_or_repeats_per_person() {
        let people = persons(6);
        let mut sampler = RandomSampler::new(StdRng::seed_from_u64(3), 3);

        for _ in 0..50 {
            let relations = sampler.sample(&people);

            let mut per_user: HashMap<u64, HashSet<u64>> = HashMap::new();
            for r in &relations {
                assert!(per_user.entry(r.user_id).or_default().insert(r.friend_id));
            }
            assert!(per_user.values().all(|friends| friends.len() <= 3));
        }
    }

    #[test]
    fn bound_larger_than_population_is_capped() {
        let people = persons(2);
        let mut sampler = RandomSampler::new(StdRng::seed_from_u64(11), 10);

        for _ in 0..20 {
            let relations = sampler.sample(&people);
            assert!(relations.len() <= 4);
        }
    }

    #[test]
    fn zero_bound_and_empty_input_produce_nothing() {
        let mut sampler = RandomSampler::new(StdRng::seed_from_u64(5), 0);
        assert!(sampler.sample(&persons(4)).is_empty());

        let mut sampler = RandomSampler::from_seed(Some(5), 3);
        assert!(sampler.sample(&[]).is_empty());
    }

    #[test]
    fn seeded_samplers_agree() {
        let people = persons(8);
        let a = RandomSampler::from_seed(Some(42), 3).sample(&people);
        let b = RandomSampler::from_seed(Some(42), 3).sample(&people);
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_sampler_replays() {
        let forced = vec![Relation::new(1, 2)];
        let mut sampler = FixedSampler::new(forced.clone());
        assert_eq!(sampler.sample(&persons(3)), forced);
        assert_eq!(sampler.sample(&[]), forced);
    }
}
