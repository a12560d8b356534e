use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_pathfinding_core::algorithms::{create, AlgorithmKind, Heuristic};
use grid_pathfinding_core::grid::Grid;
use grid_pathfinding_core::maze::{self, MazeKind, MazeOptions};

fn maze_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("valid dimensions");
    let options = MazeOptions {
        seed: Some(42),
        ..MazeOptions::default()
    };
    maze::create(MazeKind::RecursiveDivision, options)
        .run(&mut grid)
        .expect("maze generation");
    grid
}

fn search_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in [20, 50] {
        let grid = maze_grid(size);
        for kind in AlgorithmKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &grid, |b, grid| {
                let mut algorithm = create(kind, Heuristic::Manhattan);
                b.iter(|| algorithm.run(black_box(grid)).expect("search"));
            });
        }
    }
    group.finish();
}

fn maze_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze");
    for kind in MazeKind::ALL {
        group.bench_function(kind.to_string(), |b| {
            let mut grid = Grid::new(50, 50).expect("valid dimensions");
            let mut generator = maze::create(
                kind,
                MazeOptions {
                    seed: Some(7),
                    ..MazeOptions::default()
                },
            );
            b.iter(|| generator.run(black_box(&mut grid)).expect("maze generation"));
        });
    }
    group.finish();
}

criterion_group!(benches, search_algorithms, maze_generation);
criterion_main!(benches);
