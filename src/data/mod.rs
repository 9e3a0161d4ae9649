//! Identity records: raw input, normalization and sources

pub mod identity;
pub mod loader;
pub mod synthetic;

pub use identity::{FriendRef, Person, PersonId, RawPerson};
