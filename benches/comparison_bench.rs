use criterion::{criterion_group, criterion_main, Criterion};
use grid_pathviz::{
    maze::MazeKind, pathing_grid::PathingGrid, solver::Algorithm, GridConfig,
};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn maze_grids(kind: MazeKind, count: usize) -> Vec<PathingGrid> {
    let mut rng = StdRng::seed_from_u64(0);
    let config = GridConfig::default();
    (0..count)
        .filter_map(|_| {
            let mut grid = PathingGrid::from_config(&config).ok()?;
            kind.generate(&mut grid, &mut rng);
            Some(grid)
        })
        .collect()
}

fn open_grid_bench(c: &mut Criterion) {
    let grid = PathingGrid::default();
    for algorithm in Algorithm::ALL {
        c.bench_function(format!("open 20x50, {algorithm}").as_str(), |b| {
            b.iter(|| black_box(grid.search(algorithm)))
        });
    }
}

fn maze_bench(c: &mut Criterion) {
    for kind in MazeKind::ALL {
        let grids = maze_grids(kind, 16);
        for algorithm in Algorithm::ALL {
            c.bench_function(format!("{kind}, {algorithm}").as_str(), |b| {
                b.iter(|| {
                    for grid in &grids {
                        black_box(grid.search(algorithm).map(|outcome| outcome.path()));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, open_grid_bench, maze_bench);
criterion_main!(benches);
