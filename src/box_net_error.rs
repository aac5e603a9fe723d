//! BoxNetError: unified error type for box-nets public APIs.
//!
//! This error type is used throughout the box-nets library to provide robust,
//! non-panicking error handling for all public APIs.

use thiserror::Error;

use crate::topology::direction::Direction;

/// Unified error type for box-nets operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoxNetError {
    /// Box dimensions must all be positive.
    #[error("box dimensions must be positive, got {length}x{height}x{depth}")]
    InvalidDimensions {
        length: usize,
        height: usize,
        depth: usize,
    },
    /// A bitmap row had a different width than the first row.
    #[error("bitmap rows must have uniform width: row {row} is {found} wide, expected {expected}")]
    RaggedBitmap {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The built graph does not have the `2(LD+LH+DH)` faces its dimensions demand.
    #[error("graph has {found} faces, expected {expected}")]
    FaceCountMismatch { expected: usize, found: usize },
    /// A face listed itself as a neighbour.
    #[error("face {0} lists itself as a neighbour")]
    SelfAdjacentFace(usize),
    /// A face listed the same neighbour in two directions.
    #[error("face {face} lists neighbour {neighbor} more than once")]
    RepeatedNeighbor { face: usize, neighbor: usize },
    /// A neighbour index was outside the face arena.
    #[error("face {face} lists neighbour {neighbor}, but the graph only has {total} faces")]
    NeighborOutOfRange {
        face: usize,
        neighbor: usize,
        total: usize,
    },
    /// Face adjacency was not symmetric as an undirected relation.
    #[error("face {face} lists {neighbor} under {direction}, but {neighbor} does not list {face}")]
    AsymmetricAdjacency {
        face: usize,
        neighbor: usize,
        direction: Direction,
    },
    /// The edge set disagrees with the adjacency recorded on the faces.
    #[error("edge set disagrees with face adjacency: {found} edges recorded, {expected} implied")]
    EdgeSetMismatch { expected: usize, found: usize },
    /// A seam left some face without a neighbour in one direction.
    #[error("face {face} has no neighbour in direction {direction} after stitching")]
    MissingNeighbor { face: usize, direction: Direction },
    /// Target boxes of a common-net search must all have the same surface area.
    #[error("target boxes disagree on face count: {first} vs {other}")]
    MismatchedTargetAreas { first: usize, other: usize },
    /// The strip pattern cannot tile the target area.
    #[error("{faces} faces cannot be split into cap cells plus rows of {strip_width}")]
    UnevenStripPartition { faces: usize, strip_width: usize },
    /// A search needs at least one target box.
    #[error("common-net search needs at least one target box")]
    NoTargets,
}
