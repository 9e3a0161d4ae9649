//! Graph representation and algorithms module

pub mod algorithms;
pub mod builder;
pub mod compressed;

pub use builder::{GraphBuilder, build_friendship_graph};
pub use compressed::CompressedGraph;
