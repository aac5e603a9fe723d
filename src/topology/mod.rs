//! Top-level module for box-surface topology.
//!
//! This module provides the types that model a box's surface as a graph:
//! - [`direction::Direction`] for the four grid directions
//! - [`face::Face`] nodes with re-orientable directional neighbour lists
//! - [`edge::Edge`] records with stable labels and contraction endpoints
//! - [`box_builder::BoxGraph`] which stitches the six surfaces together
//! - [`validation`] for structural checks of a built graph

pub mod box_builder;
pub mod direction;
pub mod edge;
pub mod face;
pub mod validation;

pub use box_builder::{BoxDims, BoxGraph};
pub use direction::Direction;
pub use edge::{Edge, EdgeLabel};
pub use face::{Face, FaceId};
