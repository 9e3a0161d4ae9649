//! Configuration management for the social network kernel

use crate::data::loader::read_json;
use crate::error::SocialGraphError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cover image shared by every person
pub const DEFAULT_COVER_URL: &str = "assets/cover.jpeg";

/// Runtime configuration for the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound (inclusive) of friends sampled per person
    pub max_friends: usize,

    /// Number of synthetic identities to fabricate when no input is given
    pub identity_count: usize,

    /// Cover image reference assigned to every normalized person
    pub cover_url: String,

    /// Seed for the relation sampler; `None` draws from entropy
    pub seed: Option<u64>,

    /// Number of avatar candidates offered for an avatar change
    pub avatar_choices: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_friends: 3,
            identity_count: 5,
            cover_url: DEFAULT_COVER_URL.to_string(),
            seed: None,
            avatar_choices: 5,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        max_friends: usize,
        identity_count: usize,
        cover_url: impl Into<String>,
        seed: Option<u64>,
        avatar_choices: usize,
    ) -> Self {
        Self {
            max_friends,
            identity_count,
            cover_url: cover_url.into(),
            seed,
            avatar_choices,
        }
    }

    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SocialGraphError> {
        let config: Config = read_json(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot work with.
    ///
    /// `identity_count == 0` is valid and yields an empty network.
    pub fn validate(&self) -> Result<(), SocialGraphError> {
        if self.avatar_choices == 0 {
            return Err(SocialGraphError::InvalidConfig(
                "avatar_choices must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
