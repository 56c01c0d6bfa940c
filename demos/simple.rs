use grid_pathviz::{cell, Algorithm, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |.S.|
// |.#.|
// |.F.|
//  ___
// where
// - # marks a wall
// - S marks the start
// - F marks the finish
//
// Both algorithms find a 5 cell path around the wall; the visiting order differs.

fn main() {
    let mut pathing_grid = PathingGrid::new(3, 3, cell(0, 1), cell(2, 1)).unwrap();
    pathing_grid.set_wall(cell(1, 1), true).unwrap();
    println!("{}", pathing_grid);
    for algorithm in Algorithm::ALL {
        let outcome = pathing_grid.search(algorithm).unwrap();
        println!("{algorithm}: visited {:?}", outcome.visited);
        println!("Path:");
        for p in outcome.path() {
            println!("{:?}", p);
        }
        println!("{}", outcome.render(&pathing_grid));
    }
}
