//! Friendship relations: sampling and symmetrization

pub mod sampler;
pub mod symmetrize;

use crate::data::PersonId;
use serde::{Deserialize, Serialize};

pub use sampler::{FixedSampler, RandomSampler, RelationSampler};
pub use symmetrize::symmetrize;

/// Directed friendship edge `user_id -> friend_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub user_id: PersonId,
    pub friend_id: PersonId,
}

impl Relation {
    pub fn new(user_id: PersonId, friend_id: PersonId) -> Self {
        Self { user_id, friend_id }
    }

    /// The same edge pointing the other way
    pub fn reversed(&self) -> Self {
        Self::new(self.friend_id, self.user_id)
    }

    pub fn is_self_loop(&self) -> bool {
        self.user_id == self.friend_id
    }
}
