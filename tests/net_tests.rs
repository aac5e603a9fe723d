//! Net building, folding validation, and the classic cube counts.

use std::collections::BTreeSet;

use box_nets::algs::{TreeSearch, enumerate_spanning_trees, spanning_trees};
use box_nets::net::{Net, build_net, check_net};
use box_nets::topology::{BoxDims, BoxGraph};

fn graph(l: usize, h: usize, d: usize) -> BoxGraph {
    BoxGraph::build(BoxDims::new(l, h, d).unwrap()).unwrap()
}

fn net(rows: &[&[u8]]) -> Net {
    Net::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

#[test]
fn every_cube_tree_unfolds_to_a_valid_net() {
    let cube = graph(1, 1, 1);
    let trees = spanning_trees(&cube.vertices(), cube.edges());
    assert_eq!(trees.len(), 384);
    for tree in &trees {
        let candidate = build_net(tree, cube.faces());
        assert_eq!(candidate.filled_count(), 6);
        // The cube is small enough that no unfolding self-overlaps.
        assert!(!candidate.has_stacked_cells());
        assert!(check_net(&candidate, cube.faces()));
    }
}

#[test]
fn cube_has_eleven_canonical_nets() {
    let cube = graph(1, 1, 1);
    let trees = spanning_trees(&cube.vertices(), cube.edges());
    let canonical: BTreeSet<Net> = trees
        .iter()
        .map(|tree| build_net(tree, cube.faces()).canonical())
        .collect();
    assert_eq!(canonical.len(), 11);
}

#[test]
fn canonical_nets_stay_valid() {
    let cube = graph(1, 1, 1);
    let trees = spanning_trees(&cube.vertices(), cube.edges());
    for tree in trees.iter().take(30) {
        let canonical = build_net(tree, cube.faces()).canonical();
        assert!(check_net(&canonical, cube.faces()));
    }
}

#[test]
fn cube_cross_rejected_by_a_larger_box() {
    let cross = net(&[
        &[0, 1, 0],
        &[1, 1, 1],
        &[0, 1, 0],
        &[0, 1, 0],
    ]);
    let cube = graph(1, 1, 1);
    assert!(check_net(&cross, cube.faces()));

    // 46 faces against 6 cells: rejected before any folding is attempted.
    let long_box = graph(1, 1, 11);
    assert!(!check_net(&cross, long_box.faces()));
}

#[test]
fn one_by_one_by_two_round_trip() {
    let small = graph(1, 1, 2);
    let mut seen = 0usize;
    let mut validated = 0usize;
    enumerate_spanning_trees(&small.vertices(), small.edges(), &mut |tree| {
        let candidate = build_net(tree, small.faces());
        // Overlapping unfoldings are not nets and are skipped.
        if !candidate.has_stacked_cells() {
            assert!(check_net(&candidate, small.faces()));
            validated += 1;
        }
        seen += 1;
        if seen == 2_000 {
            TreeSearch::Stop
        } else {
            TreeSearch::Continue
        }
    });
    assert!(validated > 0);
}

#[test]
fn validation_is_orientation_independent() {
    let cube = graph(1, 1, 1);
    let trees = spanning_trees(&cube.vertices(), cube.edges());
    let candidate = build_net(&trees[0], cube.faces());
    assert!(check_net(&candidate.rotated(), cube.faces()));
    assert!(check_net(&candidate.mirrored(), cube.faces()));
    assert!(check_net(&candidate.rotated().rotated().rotated(), cube.faces()));
}
