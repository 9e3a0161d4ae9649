//! Identity normalization from raw external records into [`Person`]

use serde::{Deserialize, Serialize};

/// Stable numeric identifier of a person
pub type PersonId = u64;

/// Raw identity record as delivered by the seed-data source.
///
/// Every field is optional on input; missing values become `0` or `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPerson {
    pub id: PersonId,
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub email: String,
}

/// Lightweight projection of a person, used inside friend lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRef {
    pub id: PersonId,
    pub uid: String,
    pub name: String,
    pub avatar_url: String,
    pub email: String,
    pub cover_url: String,
}

/// Normalized person carrying its resolved friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub uid: String,
    pub name: String,
    pub avatar_url: String,
    pub email: String,
    pub cover_url: String,
    pub friends: Vec<FriendRef>,
}

impl Person {
    /// Project this person down to a friend-list entry
    pub fn as_friend_ref(&self) -> FriendRef {
        FriendRef {
            id: self.id,
            uid: self.uid.clone(),
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
            email: self.email.clone(),
            cover_url: self.cover_url.clone(),
        }
    }

    /// Whether `id` appears in this person's friend list
    pub fn is_friend_of(&self, id: PersonId) -> bool {
        self.friends.iter().any(|f| f.id == id)
    }
}

impl From<&RawPerson> for Person {
    fn from(raw: &RawPerson) -> Self {
        Self {
            id: raw.id,
            uid: raw.uid.clone(),
            name: format!("{} {}", raw.first_name, raw.last_name),
            avatar_url: raw.avatar.clone(),
            email: raw.email.clone(),
            cover_url: String::new(),
            friends: Vec::new(),
        }
    }
}

/// Map raw records into persons with empty friend lists and a shared cover image
pub fn normalize_identities(raw: &[RawPerson], cover_url: &str) -> Vec<Person> {
    raw.iter()
        .map(|r| Person {
            cover_url: cover_url.to_string(),
            ..Person::from(r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: PersonId, first: &str, last: &str) -> RawPerson {
        RawPerson {
            id,
            uid: format!("uid-{}", id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar: format!("https://robohash.org/{}", id),
            email: format!("{}@example.com", first.to_lowercase()),
        }
    }

    #[test]
    fn joins_names_and_sets_cover() {
        let persons = normalize_identities(&[raw(7, "Ada", "Lovelace")], "cover.jpeg");

        assert_eq!(persons.len(), 1);
        let ada = &persons[0];
        assert_eq!(ada.id, 7);
        assert_eq!(ada.name, "Ada Lovelace");
        assert_eq!(ada.cover_url, "cover.jpeg");
        assert_eq!(ada.avatar_url, "https://robohash.org/7");
        assert!(ada.friends.is_empty());
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let parsed: RawPerson = serde_json::from_str(r#"{ "id": 3 }"#).unwrap();
        let persons = normalize_identities(&[parsed], "c");

        assert_eq!(persons[0].name, " ");
        assert_eq!(persons[0].uid, "");
        assert_eq!(persons[0].email, "");
    }

    #[test]
    fn empty_input_yields_no_persons() {
        assert!(normalize_identities(&[], "c").is_empty());
    }
}
