//! Exhaustive spanning-tree enumeration against known counts.

use std::collections::HashSet;

use box_nets::algs::{TreeSearch, enumerate_spanning_trees, spanning_trees};
use box_nets::topology::{BoxDims, BoxGraph, EdgeLabel, FaceId};

fn cube() -> BoxGraph {
    BoxGraph::build(BoxDims::new(1, 1, 1).unwrap()).unwrap()
}

/// Union-find acyclicity and spanning check over the face indices.
fn is_spanning_tree(tree: &[EdgeLabel], vertex_count: usize) -> bool {
    if tree.len() + 1 != vertex_count {
        return false;
    }
    let mut parent: Vec<FaceId> = (0..vertex_count).collect();
    fn root(parent: &mut [FaceId], mut v: FaceId) -> FaceId {
        while parent[v] != v {
            parent[v] = parent[parent[v]];
            v = parent[v];
        }
        v
    }
    for &(a, b) in tree {
        let (ra, rb) = (root(&mut parent, a), root(&mut parent, b));
        if ra == rb {
            return false; // cycle
        }
        parent[ra] = rb;
    }
    true
}

#[test]
fn cube_face_graph_has_384_spanning_trees() {
    let graph = cube();
    let trees = spanning_trees(&graph.vertices(), graph.edges());
    assert_eq!(trees.len(), 384);
}

#[test]
fn every_cube_tree_spans_and_is_acyclic() {
    let graph = cube();
    let trees = spanning_trees(&graph.vertices(), graph.edges());
    for tree in &trees {
        assert!(is_spanning_tree(tree, graph.face_count()));
    }
}

#[test]
fn cube_trees_are_distinct() {
    let graph = cube();
    let trees = spanning_trees(&graph.vertices(), graph.edges());
    let unique: HashSet<Vec<EdgeLabel>> = trees
        .iter()
        .map(|tree| {
            let mut sorted = tree.clone();
            sorted.sort_unstable();
            sorted
        })
        .collect();
    assert_eq!(unique.len(), trees.len());
}

#[test]
fn tree_labels_are_graph_edges() {
    let graph = cube();
    let edge_set: HashSet<EdgeLabel> = graph
        .edges()
        .iter()
        .map(|edge| (edge.start, edge.end))
        .collect();
    for tree in spanning_trees(&graph.vertices(), graph.edges()) {
        for &(a, b) in &tree {
            assert!(edge_set.contains(&(a.min(b), a.max(b))));
        }
    }
}

#[test]
fn long_box_trees_have_the_right_edge_count() {
    let graph = BoxGraph::build(BoxDims::new(1, 1, 3).unwrap()).unwrap();
    let mut seen = 0usize;
    let verdict = enumerate_spanning_trees(&graph.vertices(), graph.edges(), &mut |tree| {
        assert_eq!(tree.len(), graph.face_count() - 1);
        seen += 1;
        if seen == 500 {
            TreeSearch::Stop
        } else {
            TreeSearch::Continue
        }
    });
    assert_eq!(verdict, TreeSearch::Stop);
    assert_eq!(seen, 500);
}

#[test]
fn stop_after_first_tree() {
    let graph = cube();
    let mut seen = 0usize;
    enumerate_spanning_trees(&graph.vertices(), graph.edges(), &mut |_| {
        seen += 1;
        TreeSearch::Stop
    });
    assert_eq!(seen, 1);
}

#[test]
fn enumeration_order_is_deterministic() {
    let graph = cube();
    let first = spanning_trees(&graph.vertices(), graph.edges());
    let second = spanning_trees(&graph.vertices(), graph.edges());
    assert_eq!(first, second);
}
