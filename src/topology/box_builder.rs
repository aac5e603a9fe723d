//! Construction of a box's face-adjacency graph.
//!
//! A box with edge lengths `L x H x D` is cut into unit faces across its six
//! surfaces, laid out as one cross-shaped chart and indexed row-major within
//! each surface:
//!
//! ```text
//!                  L
//!             o---------o
//!           D |   TOP   | D
//!        D    |         |    D
//!   o---------o---------o---------o
//! H |  LEFT   |  FRONT  |  RIGHT  | H
//!   o---------o---------o---------o
//!        D    |  BOTTOM | D
//!           D |         |
//!             o---------o
//!           H |   BACK  | H
//!             o---------o
//!                  L
//! ```
//!
//! Top, front, bottom and back form one vertical strip, so their interior
//! rows wrap into each other by plain `index ± L` arithmetic. The remaining
//! boundaries are stitched by explicit seam tables below; left and right zip
//! to all four strip surfaces, and some seams reverse traversal order to keep
//! a consistent clockwise winding. This module is the only place encoding
//! which physical box edges are shared by which face pair, so
//! [`crate::topology::validation`] re-checks the result structurally.

use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::box_net_error::BoxNetError;
use crate::debug_invariants::DebugInvariants;
use crate::topology::direction::Direction;
use crate::topology::edge::Edge;
use crate::topology::face::{Face, FaceId};

/// Validated edge lengths of a rectangular box.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct BoxDims {
    length: usize,
    height: usize,
    depth: usize,
}

impl BoxDims {
    /// Create dimensions, rejecting any non-positive edge length.
    pub fn new(length: usize, height: usize, depth: usize) -> Result<Self, BoxNetError> {
        if length == 0 || height == 0 || depth == 0 {
            return Err(BoxNetError::InvalidDimensions {
                length,
                height,
                depth,
            });
        }
        Ok(Self {
            length,
            height,
            depth,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of unit faces on the box surface: `2(LD + LH + DH)`.
    pub fn total_faces(&self) -> usize {
        2 * (self.length * self.depth + self.length * self.height + self.height * self.depth)
    }
}

impl fmt::Display for BoxDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.height, self.depth)
    }
}

/// The face-adjacency graph of one box.
#[derive(Debug, Clone)]
pub struct BoxGraph {
    dims: BoxDims,
    faces: Vec<Face>,
    edges: Vec<Edge>,
}

impl BoxGraph {
    /// Build the graph with the deterministic identity face labelling.
    pub fn build(dims: BoxDims) -> Result<Self, BoxNetError> {
        let order: Vec<FaceId> = (0..dims.total_faces()).collect();
        Self::build_with_order(dims, order)
    }

    /// Build the graph with a uniformly shuffled face labelling.
    ///
    /// Hook for randomized testing: the graph is isomorphic to the identity
    /// labelling, only the indices differ.
    pub fn build_relabeled<R: Rng>(dims: BoxDims, rng: &mut R) -> Result<Self, BoxNetError> {
        let mut order: Vec<FaceId> = (0..dims.total_faces()).collect();
        order.shuffle(rng);
        Self::build_with_order(dims, order)
    }

    fn build_with_order(dims: BoxDims, order: Vec<FaceId>) -> Result<Self, BoxNetError> {
        let maps = DirectionMaps::stitched(dims);
        let total = dims.total_faces();

        let mut faces = vec![Face::new([0; Direction::COUNT]); total];
        for i in 0..total {
            faces[order[i]] = Face::new([
                order[maps.require(Direction::Up, i)?],
                order[maps.require(Direction::Right, i)?],
                order[maps.require(Direction::Down, i)?],
                order[maps.require(Direction::Left, i)?],
            ]);
        }

        // One entry per undirected adjacency; the BTreeSet both dedups the
        // two directed sightings of each seam and fixes a deterministic order.
        let mut pairs = BTreeSet::new();
        for (index, face) in faces.iter().enumerate() {
            for &other in face.adjacents() {
                if index < other {
                    pairs.insert((index, other));
                }
            }
        }
        let edges = pairs
            .into_iter()
            .map(|(a, b)| Edge::between(a, b))
            .collect();

        let graph = Self { dims, faces, edges };
        graph.debug_assert_invariants();
        Ok(graph)
    }

    pub fn dims(&self) -> BoxDims {
        self.dims
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Vertex list for the spanning-tree enumerator: all face ids in order.
    pub fn vertices(&self) -> Vec<FaceId> {
        (0..self.faces.len()).collect()
    }
}

impl DebugInvariants for BoxGraph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "BoxGraph");
    }

    fn validate_invariants(&self) -> Result<(), BoxNetError> {
        crate::topology::validation::validate_box_graph(
            self,
            crate::topology::validation::GraphValidationOptions::all(),
        )
    }
}

/// Per-direction neighbour tables, filled surface by surface and then across
/// the seams. `None` survives only if the stitching missed a boundary.
struct DirectionMaps {
    slots: [Vec<Option<FaceId>>; Direction::COUNT],
}

impl DirectionMaps {
    fn stitched(dims: BoxDims) -> Self {
        let (l, h, d) = (dims.length(), dims.height(), dims.depth());
        let total = dims.total_faces();
        let mut maps = Self {
            slots: std::array::from_fn(|_| vec![None; total]),
        };

        maps.fill_strip_surfaces(l, h, d);
        maps.fill_side_surfaces(l, h, d);
        maps.stitch_seams(l, h, d);
        maps
    }

    fn set(&mut self, direction: Direction, index: usize, neighbor: usize) {
        self.slots[direction.index()][index] = Some(neighbor);
    }

    fn require(&self, direction: Direction, index: usize) -> Result<FaceId, BoxNetError> {
        self.slots[direction.index()][index].ok_or(BoxNetError::MissingNeighbor {
            face: index,
            direction,
        })
    }

    /// Top, front, bottom and back: one vertical strip of width `l`.
    ///
    /// Rows of consecutive surfaces continue each other, so `down` on the
    /// last row of top/front/bottom wraps straight onto the next surface.
    fn fill_strip_surfaces(&mut self, l: usize, h: usize, d: usize) {
        // (row count, wraps up into previous surface, wraps down into next)
        let surfaces = [
            (d, false, true),
            (h, true, true),
            (d, true, true),
            (h, true, false),
        ];
        let mut start = 0;
        for (rows, wrap_up, wrap_down) in surfaces {
            for i in 0..l {
                for j in 0..rows {
                    let index = start + j * l + i;
                    if j > 0 || wrap_up {
                        self.set(Direction::Up, index, index - l);
                    }
                    if i < l - 1 {
                        self.set(Direction::Right, index, index + 1);
                    }
                    if j < rows - 1 || wrap_down {
                        self.set(Direction::Down, index, index + l);
                    }
                    if i > 0 {
                        self.set(Direction::Left, index, index - 1);
                    }
                }
            }
            start += rows * l;
        }
    }

    /// Left and right surfaces: `d x h` grids with purely local adjacency.
    fn fill_side_surfaces(&mut self, l: usize, h: usize, d: usize) {
        for surface in 0..2 {
            let start = 2 * (d + h) * l + surface * h * d;
            for i in 0..d {
                for j in 0..h {
                    let index = start + j * d + i;
                    if j > 0 {
                        self.set(Direction::Up, index, index - d);
                    }
                    if i < d - 1 {
                        self.set(Direction::Right, index, index + 1);
                    }
                    if j < h - 1 {
                        self.set(Direction::Down, index, index + d);
                    }
                    if i > 0 {
                        self.set(Direction::Left, index, index - 1);
                    }
                }
            }
        }
    }

    /// The nine seams that are not plain strip arithmetic.
    ///
    /// Index expressions follow the chart layout; traversal direction
    /// reverses wherever the clockwise winding demands it.
    fn stitch_seams(&mut self, l: usize, h: usize, d: usize) {
        let side_base = 2 * (d + h) * l;

        // Front | left: left's right column meets front's left column.
        let left_col = side_base + d - 1;
        for i in 0..h {
            self.set(Direction::Right, left_col + i * d, (d + i) * l);
            self.set(Direction::Left, (d + i) * l, left_col + i * d);
        }

        // Front | right: front's right column meets right's left column.
        let right_col = side_base + h * d;
        for i in 0..h {
            self.set(Direction::Right, (d + i + 1) * l - 1, right_col + i * d);
            self.set(Direction::Left, right_col + i * d, (d + i + 1) * l - 1);
        }

        // Top | back: top's first row zips to back's last row.
        let back_last_row = (2 * (d + h) - 1) * l;
        for i in 0..l {
            self.set(Direction::Up, i, back_last_row + i);
            self.set(Direction::Down, back_last_row + i, i);
        }

        // Top | left: left's first row runs along top's left column.
        for i in 0..d {
            self.set(Direction::Up, side_base + i, i * l);
            self.set(Direction::Left, i * l, side_base + i);
        }

        // Top | right: right's first row runs along top's right column,
        // reversed to keep the winding.
        let right_base = side_base + h * d;
        for i in 0..d {
            let top_index = (d - i) * l - 1;
            self.set(Direction::Up, right_base + i, top_index);
            self.set(Direction::Right, top_index, right_base + i);
        }

        // Bottom | left: left's last row along bottom's left column, reversed.
        let left_last_row = side_base + (h - 1) * d;
        for i in 0..d {
            let bottom_index = (2 * d + h - 1 - i) * l;
            self.set(Direction::Down, left_last_row + i, bottom_index);
            self.set(Direction::Left, bottom_index, left_last_row + i);
        }

        // Bottom | right: right's last row along bottom's right column.
        let right_last_row = side_base + (2 * h - 1) * d;
        for i in 0..d {
            let bottom_index = (d + h + 1 + i) * l - 1;
            self.set(Direction::Down, right_last_row + i, bottom_index);
            self.set(Direction::Right, bottom_index, right_last_row + i);
        }

        // Back | left: both surfaces expose their physical left edge here, so
        // left-of-left meets left-of-back, one of them traversed bottom-up.
        let back_left_col = side_base - l;
        for i in 0..h {
            let left_index = side_base + i * d;
            let back_index = back_left_col - i * l;
            self.set(Direction::Left, left_index, back_index);
            self.set(Direction::Left, back_index, left_index);
        }

        // Back | right: right-of-right meets right-of-back, mirrored likewise.
        let right_right_col = side_base + (h + 1) * d - 1;
        let back_right_col = side_base - 1;
        for i in 0..h {
            let right_index = right_right_col + i * d;
            let back_index = back_right_col - i * l;
            self.set(Direction::Right, right_index, back_index);
            self.set(Direction::Right, back_index, right_index);
        }
    }
}
