use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use box_nets::algs::{TreeSearch, enumerate_spanning_trees};
use box_nets::net::{build_net, check_net};
use box_nets::topology::{BoxDims, BoxGraph};

fn graph(l: usize, h: usize, d: usize) -> BoxGraph {
    BoxGraph::build(BoxDims::new(l, h, d).unwrap()).unwrap()
}

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree_enumeration");
    for (label, dims) in [("1x1x1", (1, 1, 1)), ("1x1x2", (1, 1, 2))] {
        let g = graph(dims.0, dims.1, dims.2);
        group.bench_with_input(BenchmarkId::from_parameter(label), &g, |b, g| {
            b.iter(|| {
                let mut count = 0u64;
                enumerate_spanning_trees(&g.vertices(), g.edges(), &mut |tree| {
                    count += black_box(tree.len() as u64);
                    TreeSearch::Continue
                });
                count
            })
        });
    }
    group.finish();
}

fn bench_check_net(c: &mut Criterion) {
    let cube = graph(1, 1, 1);
    let mut nets = Vec::new();
    enumerate_spanning_trees(&cube.vertices(), cube.edges(), &mut |tree| {
        nets.push(build_net(tree, cube.faces()));
        if nets.len() == 64 {
            TreeSearch::Stop
        } else {
            TreeSearch::Continue
        }
    });

    c.bench_function("check_net_cube_64", |b| {
        b.iter(|| {
            nets.iter()
                .filter(|net| check_net(black_box(net), cube.faces()))
                .count()
        })
    });
}

criterion_group!(benches, bench_enumeration, bench_check_net);
criterion_main!(benches);
