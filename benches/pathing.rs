use criterion::{
    BatchSize,
    Criterion,
    criterion_group,
    criterion_main
};
use mazes::generators::{MazeGenerator, ENTRANCE};
use mazes::grid::Grid;
use mazes::pathing;
use mazes::units::{Height, Width};

fn generated_grid(size: usize) -> Grid {
    let mut g = Grid::new(Width(size), Height(size));
    MazeGenerator::from_seed(size as u64).generate(&mut g).unwrap();
    g
}

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve", |b| {
        let g = generated_grid(351);
        b.iter_batched_ref(|| g.clone(),
                           |grid| pathing::solve(grid, ENTRANCE).unwrap(),
                           BatchSize::LargeInput)
    });
}

fn bench_passage_graph(c: &mut Criterion) {
    c.bench_function("passage_graph", |b| {
        let g = generated_grid(351);
        b.iter(|| g.passage_graph())
    });
}

criterion_group!(benches,
    bench_solve,
    bench_passage_graph
);
criterion_main!(benches);
