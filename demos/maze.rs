use grid_pathviz::{maze::MazeKind, Algorithm, PathingGrid};
use rand::{rngs::StdRng, SeedableRng};
use std::env;

// Generates a maze on the default 20x50 grid and solves it.
//
//     cargo run --example maze -- [stair|division|random] [dijkstra|astar] [seed]

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let kind = match args.first().map(String::as_str) {
        Some("stair") => MazeKind::Stair,
        Some("random") => MazeKind::Random,
        _ => MazeKind::RecursiveDivision,
    };
    let algorithm = match args.get(1).map(|s| s.parse::<Algorithm>()) {
        Some(Ok(algorithm)) => algorithm,
        Some(Err(e)) => {
            eprintln!("{e}");
            return;
        }
        None => Algorithm::Astar,
    };
    let seed = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pathing_grid = PathingGrid::default();
    let walls = kind.generate(&mut pathing_grid, &mut rng);
    println!("{kind}: {} walls", walls.len());

    let outcome = pathing_grid.search(algorithm).unwrap();
    let path = outcome.path();
    print!("{}", outcome.render(&pathing_grid));
    if path.is_empty() {
        println!("{algorithm}: no path after visiting {} cells", outcome.visited.len());
    } else {
        println!(
            "{algorithm}: path of {} cells after visiting {} cells",
            path.len(),
            outcome.visited.len()
        );
    }
}
