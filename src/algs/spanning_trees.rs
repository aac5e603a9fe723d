//! Exhaustive spanning-tree enumeration via Winter's algorithm.
//!
//! Starting from the input graph, the recursion repeatedly picks the lowest
//! vertex `i` and its lowest neighbour `j`, then explores two branches:
//! contract `{i, j}` (the tree uses one of those edges) and, when the pair is
//! not a bridge, delete every `i`–`j` edge (the tree uses none of them).
//! Each root-to-leaf path of that binary recursion fixes one contracted edge
//! group per step; choosing a single label from every group yields one
//! concrete spanning tree, so a leaf reports the multi-cartesian product of
//! its groups through the callback.
//!
//! Every branch owns its vertex and edge collections outright; nothing is
//! shared or unwound between branches. Edge collections are multisets:
//! contraction creates parallel instances that must stay distinct.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::topology::edge::{Edge, EdgeLabel};
use crate::topology::face::FaceId;

/// Verdict returned by a spanning-tree callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSearch {
    /// Keep enumerating.
    Continue,
    /// Halt the enumeration; propagated straight up the recursion.
    Stop,
}

impl TreeSearch {
    #[inline]
    pub fn is_stop(self) -> bool {
        matches!(self, TreeSearch::Stop)
    }
}

/// Enumerate every spanning tree of `(vertices, edges)`.
///
/// `on_tree` is invoked once per tree with the tree's edge labels, one chosen
/// from each contraction step, in step order (`|V| - 1` labels). Returning
/// [`TreeSearch::Stop`] terminates the whole enumeration early.
///
/// Empty or disconnected graphs produce no trees; a single-vertex graph
/// produces exactly one, the empty tree. `vertices` must be sorted ascending
/// and `edges` normalized (`start < end`), as produced by
/// [`crate::topology::box_builder::BoxGraph`].
pub fn enumerate_spanning_trees<F>(vertices: &[FaceId], edges: &[Edge], on_tree: &mut F) -> TreeSearch
where
    F: FnMut(&[EdgeLabel]) -> TreeSearch,
{
    if vertices.is_empty() {
        return TreeSearch::Continue;
    }
    let mut steps: Vec<Vec<EdgeLabel>> = Vec::with_capacity(vertices.len() - 1);
    recurse(vertices.to_vec(), edges.to_vec(), &mut steps, on_tree)
}

/// Collect all spanning trees eagerly. Convenience wrapper for tests and
/// small graphs; prefer the callback form when the tree count is large.
pub fn spanning_trees(vertices: &[FaceId], edges: &[Edge]) -> Vec<Vec<EdgeLabel>> {
    let mut trees = Vec::new();
    enumerate_spanning_trees(vertices, edges, &mut |tree| {
        trees.push(tree.to_vec());
        TreeSearch::Continue
    });
    trees
}

fn recurse<F>(
    vertices: Vec<FaceId>,
    edges: Vec<Edge>,
    steps: &mut Vec<Vec<EdgeLabel>>,
    on_tree: &mut F,
) -> TreeSearch
where
    F: FnMut(&[EdgeLabel]) -> TreeSearch,
{
    // Contraction repeats until the graph is reduced to a single vertex; the
    // accumulated steps then determine the trees along this path.
    if vertices.len() == 1 {
        return emit_trees(steps, on_tree);
    }

    // Vertex i is the lowest remaining vertex, j its lowest neighbour. With
    // normalized edges every edge at i has start == i. No neighbour means
    // the graph is disconnected and this branch yields nothing.
    let i = vertices[0];
    let Some(j) = edges
        .iter()
        .filter(|e| e.start == i)
        .map(|e| e.end)
        .min()
    else {
        return TreeSearch::Continue;
    };

    let (contracted_vertices, contracted_edges, step) = contract(i, j, &vertices, &edges);
    steps.push(step);
    if recurse(contracted_vertices, contracted_edges, steps, on_tree).is_stop() {
        return TreeSearch::Stop;
    }
    steps.pop();

    // Deleting the i-j edges is explored only when it cannot disconnect the
    // graph.
    if !is_bridge(i, j, &edges) {
        let remaining = delete(i, j, &edges);
        if recurse(vertices, remaining, steps, on_tree).is_stop() {
            return TreeSearch::Stop;
        }
    }

    TreeSearch::Continue
}

fn emit_trees<F>(steps: &[Vec<EdgeLabel>], on_tree: &mut F) -> TreeSearch
where
    F: FnMut(&[EdgeLabel]) -> TreeSearch,
{
    // Single-vertex input graph: the empty tree.
    if steps.is_empty() {
        return on_tree(&[]);
    }
    for tree in steps
        .iter()
        .map(|group| group.iter().copied())
        .multi_cartesian_product()
    {
        if on_tree(&tree).is_stop() {
            return TreeSearch::Stop;
        }
    }
    TreeSearch::Continue
}

/// Contract the pair `{i, j}`, `i < j`: vertex `i` disappears, the edges
/// joining it to `j` are stripped out and reported as one contraction step,
/// and every other edge at `i` is redirected to `j`.
pub fn contract(
    i: FaceId,
    j: FaceId,
    vertices: &[FaceId],
    edges: &[Edge],
) -> (Vec<FaceId>, Vec<Edge>, Vec<EdgeLabel>) {
    let new_vertices = vertices.iter().copied().filter(|&v| v != i).collect();

    let mut new_edges = Vec::with_capacity(edges.len());
    let mut contracted = Vec::new();
    for edge in edges {
        if edge.joins(i, j) {
            contracted.push(edge.label);
        } else if edge.start == i {
            new_edges.push(edge.redirected(i, j));
        } else {
            new_edges.push(*edge);
        }
    }

    (new_vertices, new_edges, contracted)
}

/// Delete every edge currently joining `i` and `j` (`i < j`).
pub fn delete(i: FaceId, j: FaceId, edges: &[Edge]) -> Vec<Edge> {
    edges.iter().filter(|e| !e.joins(i, j)).copied().collect()
}

/// Whether removing every edge between `i` and `j` disconnects the graph.
///
/// Depth-first reachability from `i` to `j` over an adjacency list built
/// fresh from the current edge multiset, with direct `i`–`j` hops barred.
/// Parallel `i`–`j` instances are deleted as a group by the deletion branch,
/// so none of them may serve as the alternate route.
pub fn is_bridge(i: FaceId, j: FaceId, edges: &[Edge]) -> bool {
    let mut adjacents: HashMap<FaceId, Vec<FaceId>> = HashMap::new();
    for edge in edges {
        adjacents.entry(edge.start).or_default().push(edge.end);
        adjacents.entry(edge.end).or_default().push(edge.start);
    }

    let mut visited: HashSet<FaceId> = HashSet::new();
    let mut stack = vec![i];
    while let Some(x) = stack.pop() {
        if x == j {
            return false;
        }
        if !visited.insert(x) {
            continue;
        }
        if let Some(neighbors) = adjacents.get(&x) {
            for &y in neighbors {
                let direct_hop = (x == i && y == j) || (x == j && y == i);
                if !direct_hop && !visited.contains(&y) {
                    stack.push(y);
                }
            }
        }
    }
    true
}
