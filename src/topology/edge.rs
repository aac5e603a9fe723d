//! `Edge`: an undirected adjacency of the face graph.
//!
//! An edge carries two distinct identities. The `label` is the unordered face
//! pair fixed at construction time; it names the physical box edge and
//! survives contraction untouched. The `(start, end)` pair is the edge's
//! current endpoints, normalized `start < end`, and is rewritten as vertices
//! merge during the deletion–contraction recursion. Keeping the two apart
//! avoids overloading one field with both meanings.

use crate::topology::face::FaceId;

/// Stable name of a physical box edge: the unordered face pair `{a, b}` with
/// `a < b` from graph construction.
pub type EdgeLabel = (FaceId, FaceId);

/// An edge instance in a (possibly contracted) face graph.
///
/// Contraction can create parallel edges: distinct instances sharing the same
/// `(start, end)` pair but different labels. Edge containers in the
/// enumerator are therefore multisets (`Vec`), never deduplicating sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Original unordered face pair, unchanged by contraction.
    pub label: EdgeLabel,
    /// Current smaller endpoint.
    pub start: FaceId,
    /// Current larger endpoint.
    pub end: FaceId,
}

impl Edge {
    /// Create an edge between `a` and `b`, normalizing the endpoint order.
    pub fn new(label: EdgeLabel, a: FaceId, b: FaceId) -> Self {
        Self {
            label,
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// An edge fresh from graph construction, labelled by its own endpoints.
    pub fn between(a: FaceId, b: FaceId) -> Self {
        Self::new((a.min(b), a.max(b)), a, b)
    }

    /// Whether this edge currently joins `i` and `j` (with `i < j`).
    #[inline]
    pub fn joins(&self, i: FaceId, j: FaceId) -> bool {
        self.start == i && self.end == j
    }

    /// Whether `v` is one of the current endpoints.
    #[inline]
    pub fn touches(&self, v: FaceId) -> bool {
        self.start == v || self.end == v
    }

    /// The same physical edge with endpoint `from` replaced by `to`,
    /// re-normalized. The label is preserved.
    pub fn redirected(&self, from: FaceId, to: FaceId) -> Edge {
        let other = if self.start == from { self.end } else { self.start };
        Edge::new(self.label, to, other)
    }
}
