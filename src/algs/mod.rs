//! Graph algorithms over face graphs.

pub mod spanning_trees;

pub use spanning_trees::{TreeSearch, enumerate_spanning_trees, is_bridge, spanning_trees};
