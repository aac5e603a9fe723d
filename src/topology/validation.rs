//! Structural validation of built face graphs.
//!
//! The seam tables in [`crate::topology::box_builder`] are the only encoding
//! of which physical box edges join which faces, and an index slip there
//! still yields a 4-regular graph that is silently wrong. These checks catch
//! the failure modes that are detectable structurally.

use std::collections::BTreeSet;

use crate::box_net_error::BoxNetError;
use crate::topology::box_builder::BoxGraph;
use crate::topology::direction::Direction;

/// Optional validation toggles for face-graph checks.
#[derive(Debug, Clone, Copy)]
pub struct GraphValidationOptions {
    /// Ensure the face count matches `2(LD + LH + DH)`.
    pub check_face_count: bool,
    /// Ensure every neighbour entry is in range, not the face itself, and
    /// that the four entries are pairwise distinct.
    pub check_degree: bool,
    /// Ensure adjacency is symmetric as an undirected relation.
    pub check_symmetry: bool,
    /// Ensure the edge set matches the adjacency recorded on the faces.
    pub check_edge_set: bool,
}

impl GraphValidationOptions {
    /// Enable every check.
    pub fn all() -> Self {
        Self {
            check_face_count: true,
            check_degree: true,
            check_symmetry: true,
            check_edge_set: true,
        }
    }
}

/// Validate a box graph against the structural invariants of a stitched box.
pub fn validate_box_graph(
    graph: &BoxGraph,
    options: GraphValidationOptions,
) -> Result<(), BoxNetError> {
    let faces = graph.faces();
    let total = faces.len();

    if options.check_face_count {
        let expected = graph.dims().total_faces();
        if total != expected {
            return Err(BoxNetError::FaceCountMismatch {
                expected,
                found: total,
            });
        }
    }

    if options.check_degree {
        for (face, record) in faces.iter().enumerate() {
            let mut seen = BTreeSet::new();
            for &neighbor in record.adjacents() {
                if neighbor == face {
                    return Err(BoxNetError::SelfAdjacentFace(face));
                }
                if neighbor >= total {
                    return Err(BoxNetError::NeighborOutOfRange {
                        face,
                        neighbor,
                        total,
                    });
                }
                if !seen.insert(neighbor) {
                    return Err(BoxNetError::RepeatedNeighbor { face, neighbor });
                }
            }
        }
    }

    if options.check_symmetry {
        // Undirected symmetry only: across seams the back-reference generally
        // sits in a rotated slot, not the literally opposite one, because a
        // face's slot labels are defined only up to rotation.
        for (face, record) in faces.iter().enumerate() {
            for direction in Direction::ALL {
                let neighbor = record.neighbor(direction);
                if neighbor < total && !faces[neighbor].is_adjacent_to(face) {
                    return Err(BoxNetError::AsymmetricAdjacency {
                        face,
                        neighbor,
                        direction,
                    });
                }
            }
        }
    }

    if options.check_edge_set {
        let mut implied = BTreeSet::new();
        for (face, record) in faces.iter().enumerate() {
            for &neighbor in record.adjacents() {
                implied.insert((face.min(neighbor), face.max(neighbor)));
            }
        }
        let recorded: BTreeSet<_> = graph.edges().iter().map(|e| (e.start, e.end)).collect();
        if implied != recorded || recorded.len() != graph.edges().len() {
            return Err(BoxNetError::EdgeSetMismatch {
                expected: implied.len(),
                found: graph.edges().len(),
            });
        }
    }

    Ok(())
}
