//! JSON file handling for seed identities and forced relations

use crate::data::RawPerson;
use crate::error::SocialGraphError;
use crate::relation::Relation;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON document
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SocialGraphError> {
    if !path.exists() {
        return Err(SocialGraphError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| SocialGraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| SocialGraphError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load raw identities from a JSON array in the random-user API shape
pub fn load_raw_identities(path: impl AsRef<Path>) -> Result<Vec<RawPerson>, SocialGraphError> {
    let path = path.as_ref();
    log::info!("Reading identities from {}", path.display());

    let identities: Vec<RawPerson> = read_json(path)?;

    log::info!("Loaded {} raw identities", identities.len());
    Ok(identities)
}

/// Load a forced relation sample (`[{"userId": 1, "friendId": 2}, ...]`)
pub fn load_relations(path: impl AsRef<Path>) -> Result<Vec<Relation>, SocialGraphError> {
    let path = path.as_ref();
    log::info!("Reading relations from {}", path.display());

    let relations: Vec<Relation> = read_json(path)?;

    log::info!("Loaded {} relations", relations.len());
    Ok(relations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_api_records_and_ignores_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "uid": "a-1", "first_name": "Ana", "last_name": "Diaz",
                 "avatar": "https://robohash.org/x", "email": "ana@example.com",
                 "username": "ana.diaz", "gender": "Female"},
                {"id": 2, "first_name": "Bo"}
            ]"#,
        )
        .unwrap();

        let identities = load_raw_identities(&path).unwrap();
        assert_eq!(identities.len(), 2);
        assert_eq!(identities[0].uid, "a-1");
        assert_eq!(identities[1].last_name, "");
    }

    #[test]
    fn reads_camel_case_relations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relations.json");
        fs::write(&path, r#"[{"userId": 1, "friendId": 2}]"#).unwrap();

        let relations = load_relations(&path).unwrap();
        assert_eq!(relations, vec![Relation::new(1, 2)]);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_raw_identities("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SocialGraphError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_raw_identities(&path).unwrap_err();
        assert!(matches!(err, SocialGraphError::Parse { .. }));
    }
}
