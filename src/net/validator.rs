//! Decide whether a bitmap is a net of a box.
//!
//! Backtracking search: anchor face 0 at a filled cell under one of four
//! starting rotations, then walk depth-first. Each step moves to the bitmap
//! cell one direction over and demands the face graph list the matching
//! neighbour in that same direction; the entered face is re-anchored with
//! `orient` so its edge back to the current face lies opposite the direction
//! just travelled. A placement succeeds when every face is visited exactly
//! once; the first success wins.

use crate::net::bitmap::Net;
use crate::topology::direction::Direction;
use crate::topology::face::{Face, FaceId};

/// True iff `net` folds into the box whose face graph is `faces`.
///
/// Cheap rejections first: a filled-cell count different from the face count
/// (the common case when probing one candidate against several boxes of
/// different areas) and stacked cells can never fold flat. The empty net is
/// a net of the empty face list, "no box".
///
/// The faces are copied internally, so concurrent callers may share one face
/// array; orientation churn stays private to this call.
pub fn check_net(net: &Net, faces: &[Face]) -> bool {
    if net.is_empty() || net.filled_count() == 0 {
        return faces.is_empty();
    }
    if net.filled_count() != faces.len() || net.has_stacked_cells() {
        return false;
    }

    let mut faces = faces.to_vec();
    let mut net = net.clone();

    // Four starting orientations of face 0, expressed by twisting the net a
    // quarter turn per round instead of touching the face itself.
    for rotation in 0..4 {
        if rotation > 0 {
            net = net.rotated();
        }
        for row in 0..net.height() {
            for col in 0..net.width() {
                if net.filled(row, col) && check_at(&net, &mut faces, row, col) {
                    return true;
                }
            }
        }
    }
    false
}

/// Try anchoring face 0 at `(row, col)` with the current orientations.
///
/// Leftover orientations from earlier failed anchors are harmless: every
/// face is re-anchored on entry, and face 0 (never entered, only started
/// from) is handled by the net-rotation loop above.
fn check_at(net: &Net, faces: &mut [Face], row: usize, col: usize) -> bool {
    let mut visited = vec![false; faces.len()];
    follow(net, faces, &mut visited, 0, row as isize, col as isize)
        && visited.iter().all(|&v| v)
}

fn follow(
    net: &Net,
    faces: &mut [Face],
    visited: &mut [bool],
    face: FaceId,
    row: isize,
    col: isize,
) -> bool {
    if visited[face] {
        return false;
    }
    visited[face] = true;

    let adjacents = *faces[face].adjacents();
    for direction in Direction::ALL {
        let adjacent = adjacents[direction.index()];
        let (dr, dc) = direction.step();
        let (next_row, next_col) = (row + dr, col + dc);

        if net.filled_at(next_row, next_col) && !visited[adjacent] {
            faces[adjacent].orient(face, direction.opposite());
            if !follow(net, faces, visited, adjacent, next_row, next_col) {
                return false;
            }
        }
    }
    true
}
