//! # box-nets
//!
//! box-nets is a Rust library for exhaustive search over the unfoldings (nets)
//! of rectangular boxes. It models a box's surface as a 4-regular graph of
//! unit faces, enumerates that graph's spanning trees by deletion and
//! contraction, folds candidate polyominoes back onto the surface with a
//! backtracking validator, and drives a parallel search for a single net
//! shared by several boxes of equal area.
//!
//! ## Features
//! - Face-adjacency graph builder for any `LxHxD` box, with the nine seams
//!   between its six surfaces stitched explicitly
//! - Spanning-tree enumeration with early-exit callbacks, tolerant of
//!   parallel edges
//! - Net bitmaps with trim, rotation, mirror, and canonical-form helpers
//! - Folding validator and its inverse, a tree-to-net layout builder
//! - Rayon-parallel search for a common net across target boxes
//!
//! ## Determinism
//!
//! The enumeration order is fixed by face indices, so runs are reproducible.
//! Randomized relabelling uses `SmallRng` with caller-supplied seeds.
//!
//! ## Usage
//! Add `box-nets` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! box-nets = "0.1.0"
//! # Optional features:
//! # features = ["strict-invariants"]
//! ```
//!
//! Count the spanning trees of a cube's face graph:
//!
//! ```
//! use box_nets::prelude::*;
//!
//! let graph = BoxGraph::build(BoxDims::new(1, 1, 1)?)?;
//! let trees = spanning_trees(&graph.vertices(), graph.edges());
//! assert_eq!(trees.len(), 384);
//! # Ok::<(), box_nets::BoxNetError>(())
//! ```

pub mod algs;
pub mod box_net_error;
pub mod debug_invariants;
pub mod net;
pub mod search;
pub mod topology;

pub use box_net_error::BoxNetError;
pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{TreeSearch, enumerate_spanning_trees, spanning_trees};
    pub use crate::box_net_error::BoxNetError;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::net::{Net, build_net, check_net};
    pub use crate::search::{CommonNetSearch, OffsetSearchConfig, Reporter};
    pub use crate::topology::{BoxDims, BoxGraph, Direction, Edge, EdgeLabel, Face, FaceId};
}
