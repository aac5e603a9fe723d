//! End-to-end tests of the common-net search driver.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use box_nets::net::check_net;
use box_nets::search::{CommonNetSearch, OffsetSearchConfig, Reporter};
use box_nets::topology::{BoxDims, BoxGraph};

fn dims(l: usize, h: usize, d: usize) -> BoxDims {
    BoxDims::new(l, h, d).unwrap()
}

#[test]
fn candidate_shape_tracks_the_face_count() {
    // 1x1x5 and 1x2x3 both have 22 faces: 5 strip rows plus two caps.
    let search = CommonNetSearch::new(
        &[dims(1, 1, 5), dims(1, 2, 3)],
        OffsetSearchConfig::default(),
    )
    .unwrap();
    assert_eq!(search.offset_rows(), 5);
    assert_eq!(search.candidate_count(), 7u64.pow(4));
}

#[test]
fn cube_search_returns_a_real_cube_net() {
    let search =
        CommonNetSearch::new(&[dims(1, 1, 1)], OffsetSearchConfig::default()).unwrap();
    let found = search.run(|_, _| {}).expect("a cube net exists");
    let cube = BoxGraph::build(dims(1, 1, 1)).unwrap();
    assert!(check_net(&found, cube.faces()));
}

#[test]
fn matches_report_the_boxes_they_fold_into() {
    let target = dims(1, 1, 2);
    let faces = BoxGraph::build(target).unwrap().faces().to_vec();
    let hits = AtomicUsize::new(0);

    let search = CommonNetSearch::new(
        &[target],
        OffsetSearchConfig {
            offset_range: 2,
            ..OffsetSearchConfig::default()
        },
    )
    .unwrap();
    let found = search.run(|net, matches| {
        assert_eq!(matches, &[target]);
        assert!(check_net(net, &faces));
        hits.fetch_add(1, Ordering::Relaxed);
    });
    assert!(found.is_some());
    assert!(hits.load(Ordering::Relaxed) >= 1);
}

#[test]
fn reporter_appends_in_the_results_format() {
    let path = std::env::temp_dir().join(format!("box-nets-report-{}.txt", std::process::id()));
    let _ = fs::remove_file(&path);

    let config = OffsetSearchConfig::default();
    let candidate = config.strip_net(&[0]);
    {
        let reporter = Reporter::append_to(&path).unwrap();
        reporter.record(&candidate, &[dims(1, 1, 1)]).unwrap();
    }

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("--------------------"));
    assert!(written.contains("[][][][]"));
    assert!(written.contains("Common development with 1x1x1"));
    fs::remove_file(&path).unwrap();
}
