//! `Face`: one unit quadrilateral of a box surface.
//!
//! A face records its four neighbouring faces in clockwise slot order
//! (up, right, down, left). The order is relative: a net in tree form has no
//! inherent orientation, so the slot labels are re-anchored with [`Face::orient`]
//! every time a traversal crosses into the face. Orienting rotates the array
//! cyclically; its contents never change.

use crate::topology::direction::Direction;

/// Index of a face in its graph's face arena.
pub type FaceId = usize;

/// A unit face with its four directional neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Face {
    /// Neighbour ids in clockwise slot order: up, right, down, left.
    adjacents: [FaceId; Direction::COUNT],
}

impl Face {
    /// Create a face from its clockwise neighbour list.
    pub fn new(adjacents: [FaceId; Direction::COUNT]) -> Self {
        Self { adjacents }
    }

    /// The neighbour currently occupying `direction`.
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> FaceId {
        self.adjacents[direction.index()]
    }

    /// The full neighbour array in slot order.
    #[inline]
    pub fn adjacents(&self) -> &[FaceId; Direction::COUNT] {
        &self.adjacents
    }

    /// The direction under which `neighbor` is currently listed, if any.
    pub fn direction_of(&self, neighbor: FaceId) -> Option<Direction> {
        self.adjacents
            .iter()
            .position(|&a| a == neighbor)
            .and_then(Direction::from_index)
    }

    /// Whether `other` appears anywhere in the neighbour list.
    pub fn is_adjacent_to(&self, other: FaceId) -> bool {
        self.adjacents.contains(&other)
    }

    /// Rotate the neighbour array so that `neighbor` occupies `direction`.
    ///
    /// This synchronises the face's orientation with the faces around it as a
    /// traversal crosses into it. Requesting a face that is not currently a
    /// neighbour is a recoverable inconsistency: it is reported through
    /// `log::warn!`, the array is left untouched, and `false` is returned.
    /// On a correctly built graph this never happens, so a warning here
    /// points at a construction bug upstream.
    pub fn orient(&mut self, neighbor: FaceId, direction: Direction) -> bool {
        let Some(current) = self.direction_of(neighbor) else {
            log::warn!("failed to orient: face {neighbor} is not an adjacent face");
            return false;
        };
        let shift = (current.index() + Direction::COUNT - direction.index()) % Direction::COUNT;
        self.adjacents.rotate_left(shift);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_lookup_by_slot() {
        let face = Face::new([10, 11, 12, 13]);
        assert_eq!(face.neighbor(Direction::Up), 10);
        assert_eq!(face.neighbor(Direction::Right), 11);
        assert_eq!(face.neighbor(Direction::Down), 12);
        assert_eq!(face.neighbor(Direction::Left), 13);
    }

    #[test]
    fn direction_of_finds_each_neighbor() {
        let face = Face::new([10, 11, 12, 13]);
        assert_eq!(face.direction_of(10), Some(Direction::Up));
        assert_eq!(face.direction_of(13), Some(Direction::Left));
        assert_eq!(face.direction_of(99), None);
    }

    #[test]
    fn orient_rotates_south_to_up() {
        // [N, E, S, W] with S moved into slot 0 becomes [S, W, N, E].
        let (n, e, s, w) = (0, 1, 2, 3);
        let mut face = Face::new([n, e, s, w]);
        assert!(face.orient(s, Direction::Up));
        assert_eq!(face.adjacents(), &[s, w, n, e]);
    }

    #[test]
    fn orient_to_current_slot_is_a_no_op() {
        let mut face = Face::new([10, 11, 12, 13]);
        assert!(face.orient(11, Direction::Right));
        assert_eq!(face.adjacents(), &[10, 11, 12, 13]);
    }

    #[test]
    fn orient_non_adjacent_leaves_order_unchanged() {
        let mut face = Face::new([10, 11, 12, 13]);
        assert!(!face.orient(99, Direction::Up));
        assert_eq!(face.adjacents(), &[10, 11, 12, 13]);
    }

    #[test]
    fn orient_preserves_cyclic_order() {
        let mut face = Face::new([10, 11, 12, 13]);
        face.orient(13, Direction::Up);
        assert_eq!(face.adjacents(), &[13, 10, 11, 12]);
    }
}
