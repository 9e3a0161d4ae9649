//! Core library for the mock social network kernel

pub mod avatar;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod network;
pub mod relation;
pub mod storage;
pub mod viz;

pub use anyhow::{Result, anyhow};
pub use error::SocialGraphError;
pub use network::{PathQuery, SocialNetwork, Snapshot};
