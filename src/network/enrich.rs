//! Friend list resolution

use crate::data::{FriendRef, Person, PersonId};
use crate::relation::Relation;
use std::collections::HashMap;

/// Index of person ids to their position; the first occurrence of an id wins
pub(crate) fn index_by_id(persons: &[Person]) -> HashMap<PersonId, usize> {
    let mut index = HashMap::with_capacity(persons.len());
    for (pos, person) in persons.iter().enumerate() {
        index.entry(person.id).or_insert(pos);
    }
    index
}

/// Attach resolved friends to every person.
///
/// A person's friends are the `friend_id`s of the relations whose `user_id` is that
/// person, in relation-list order. Ids that resolve to no person are skipped.
pub fn enrich_friends(persons: &[Person], relations: &[Relation]) -> Vec<Person> {
    let index = index_by_id(persons);
    let mut unresolved = 0usize;

    let enriched: Vec<Person> = persons
        .iter()
        .map(|person| {
            let friends: Vec<FriendRef> = relations
                .iter()
                .filter(|r| r.user_id == person.id)
                .filter_map(|r| match index.get(&r.friend_id) {
                    Some(&pos) => Some(persons[pos].as_friend_ref()),
                    None => {
                        unresolved += 1;
                        None
                    }
                })
                .collect();

            Person {
                friends,
                ..person.clone()
            }
        })
        .collect();

    if unresolved > 0 {
        log::debug!("Skipped {} relations pointing at unknown persons", unresolved);
    }
    log::info!(
        "Enriched {} persons with {} friend entries",
        enriched.len(),
        enriched.iter().map(|p| p.friends.len()).sum::<usize>()
    );

    enriched
}
