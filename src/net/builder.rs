//! Materialize a spanning tree as a net bitmap.
//!
//! The inverse of [`crate::net::validator::check_net`]: a spanning tree of
//! the face graph fixes which physical edges stay hinged, so laying face 0 at
//! the grid centre and walking the tree produces the one net that tree folds
//! from. The walk is plain reachability, not a search; a tree is acyclic and
//! spans every face by construction.

use std::collections::HashSet;

use crate::net::bitmap::Net;
use crate::topology::direction::Direction;
use crate::topology::edge::EdgeLabel;
use crate::topology::face::{Face, FaceId};

/// Lay out `faces` on a grid along the edges of `tree`, producing the net's
/// bitmap trimmed to its minimal bounding box.
///
/// `tree` must be a spanning tree over the face indices (as reported by the
/// enumerator); faces unreachable through tree edges are simply not placed.
/// A tree whose layout self-overlaps yields stacked cells, which
/// [`crate::net::validator::check_net`] rejects.
///
/// The faces are copied internally: orientation propagation never touches
/// the caller's array.
pub fn build_net(tree: &[EdgeLabel], faces: &[Face]) -> Net {
    if faces.is_empty() {
        return Net::empty();
    }
    let mut faces = faces.to_vec();
    let in_tree: HashSet<EdgeLabel> = tree
        .iter()
        .map(|&(a, b)| (a.min(b), a.max(b)))
        .collect();

    // A spanning walk reaches at most `n - 1` cells from the centre in any
    // direction, so a (2n + 1) square can never overflow.
    let n = faces.len();
    let size = 2 * n + 1;
    let mut grid = vec![vec![0u8; size]; size];
    let mut visited = vec![false; n];

    grow(0, n, n, &mut faces, &in_tree, &mut grid, &mut visited);

    Net::from_rows(grid)
        .unwrap_or_else(|_| Net::empty())
        .trimmed()
}

fn grow(
    face: FaceId,
    row: usize,
    col: usize,
    faces: &mut [Face],
    in_tree: &HashSet<EdgeLabel>,
    grid: &mut [Vec<u8>],
    visited: &mut [bool],
) {
    grid[row][col] = grid[row][col].saturating_add(1);
    visited[face] = true;

    let adjacents = *faces[face].adjacents();
    for direction in Direction::ALL {
        let adjacent = adjacents[direction.index()];
        let label = (face.min(adjacent), face.max(adjacent));
        if !visited[adjacent] && in_tree.contains(&label) {
            // Re-anchor the entered face so its edge back to us lies opposite
            // the direction just travelled.
            faces[adjacent].orient(face, direction.opposite());

            let (dr, dc) = direction.step();
            let next_row = (row as isize + dr) as usize;
            let next_col = (col as isize + dc) as usize;
            grow(adjacent, next_row, next_col, faces, in_tree, grid, visited);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::box_builder::{BoxDims, BoxGraph};

    #[test]
    fn empty_tree_and_faces_build_the_empty_net() {
        assert!(build_net(&[], &[]).is_empty());
    }

    #[test]
    fn cube_tree_covers_six_cells() {
        let graph = BoxGraph::build(BoxDims::new(1, 1, 1).unwrap()).unwrap();
        let trees = crate::algs::spanning_trees(&graph.vertices(), graph.edges());
        assert!(!trees.is_empty());
        let net = build_net(&trees[0], graph.faces());
        assert_eq!(net.filled_count(), 6);
        assert!(!net.has_stacked_cells());
    }

    #[test]
    fn built_net_is_trimmed() {
        let graph = BoxGraph::build(BoxDims::new(1, 1, 1).unwrap()).unwrap();
        let trees = crate::algs::spanning_trees(&graph.vertices(), graph.edges());
        let net = build_net(&trees[0], graph.faces());
        // No all-empty border row or column survives trimming.
        let h = net.height();
        let w = net.width();
        assert!((0..w).any(|c| net.filled(0, c)));
        assert!((0..w).any(|c| net.filled(h - 1, c)));
        assert!((0..h).any(|r| net.filled(r, 0)));
        assert!((0..h).any(|r| net.filled(r, w - 1)));
    }

    #[test]
    fn caller_faces_are_left_untouched() {
        let graph = BoxGraph::build(BoxDims::new(1, 1, 1).unwrap()).unwrap();
        let before = graph.faces().to_vec();
        let trees = crate::algs::spanning_trees(&graph.vertices(), graph.edges());
        let _ = build_net(&trees[0], graph.faces());
        assert_eq!(graph.faces(), &before[..]);
    }
}
