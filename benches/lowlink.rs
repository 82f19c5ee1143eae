use arclink::flow::max_bipartite_matching;
use arclink::structure::{AnalysisMode, StructureReport};
use arclink::Graph;
use iai_callgrind::{black_box, library_benchmark, library_benchmark_group, main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Random multigraph with `nodes * degree` edges, drawn from a fixed seed.
fn setup_graph((nodes, degree, directed): (usize, usize, bool)) -> Graph<u32> {
    let mut rng = SmallRng::seed_from_u64(42);
    let edges: Vec<_> = (0..nodes * degree)
        .map(|_| {
            (
                rng.gen_range(0..nodes),
                rng.gen_range(0..nodes),
                rng.gen_range(1..100),
            )
        })
        .collect();
    Graph::build(nodes, edges, directed).unwrap()
}

// A single long path: the worst case for a recursive depth-first search.
fn setup_path(nodes: usize) -> Graph<u32> {
    Graph::unweighted(nodes, (1..nodes).map(|i| (i - 1, i)), false).unwrap()
}

fn setup_bipartite((side, degree): (usize, usize)) -> (usize, Vec<(usize, usize)>) {
    let mut rng = SmallRng::seed_from_u64(43);
    let pairs = (0..side)
        .flat_map(|l| (0..degree).map(move |_| l))
        .map(|l| (l, rng.gen_range(0..side)))
        .collect();
    (side, pairs)
}

#[library_benchmark]
#[bench::sparse_undirected(args = [(10_000, 2, false)], setup = setup_graph)]
#[bench::dense_undirected(args = [(1_000, 20, false)], setup = setup_graph)]
#[bench::sparse_directed(args = [(10_000, 2, true)], setup = setup_graph)]
fn bench_analyze_all(graph: Graph<u32>) -> StructureReport {
    black_box(graph.analyze_structure(AnalysisMode::All))
}

#[library_benchmark]
#[bench::long_path(args = [100_000], setup = setup_path)]
fn bench_deep_bridges(graph: Graph<u32>) -> usize {
    black_box(graph.bridges().len())
}

#[library_benchmark]
#[bench::sparse(args = [(10_000, 2, false)], setup = setup_graph)]
#[bench::dense(args = [(1_000, 20, false)], setup = setup_graph)]
fn bench_spanning_forest(graph: Graph<u32>) -> u32 {
    black_box(graph.spanning_forest().unwrap().total_weight)
}

#[library_benchmark]
#[bench::small(args = [(200, 4, true)], setup = setup_graph)]
#[bench::medium(args = [(1_000, 4, true)], setup = setup_graph)]
fn bench_max_flow(graph: Graph<u32>) -> u32 {
    let sink = graph.node_count() - 1;
    black_box(graph.max_flow(0, sink).unwrap().value)
}

#[library_benchmark]
#[bench::sparse(args = [(2_000, 3)], setup = setup_bipartite)]
fn bench_matching((side, pairs): (usize, Vec<(usize, usize)>)) -> usize {
    black_box(max_bipartite_matching(side, side, pairs).unwrap().len())
}

library_benchmark_group!(
    name = structure_group;
    benchmarks = bench_analyze_all, bench_deep_bridges
);

library_benchmark_group!(
    name = connectivity_group;
    benchmarks = bench_spanning_forest, bench_max_flow, bench_matching
);

main!(library_benchmark_groups = structure_group, connectivity_group);
