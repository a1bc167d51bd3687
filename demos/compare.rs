use grid_search::{search, Algorithm, GridGraph, Heuristic, SearchConfig};

// Runs every algorithm and heuristic on the same maze and prints the counters, which shows how
// much of the grid each setting explores.
fn main() {
    let grid: GridGraph = "
        S.......#..........
        .######.#.#######..
        .#......#.#.....#..
        .#.######.#.###.#..
        .#........#.#G#.#..
        .##########.#.#.#..
        ............#...#..
        .############.###..
        ...................
    "
    .parse()
    .unwrap();
    println!("{}", grid);
    for allow_diagonal in [false, true] {
        for (algorithm, heuristic) in [
            (Algorithm::AStar, Heuristic::Manhattan),
            (Algorithm::AStar, Heuristic::Chebyshev),
            (Algorithm::Dijkstra, Heuristic::Manhattan),
        ] {
            let config = SearchConfig {
                algorithm,
                allow_diagonal,
                heuristic,
            };
            let outcome = search(&grid, &config).unwrap();
            let name = match algorithm {
                Algorithm::AStar => format!("A* ({heuristic:?})"),
                Algorithm::Dijkstra => "Dijkstra".to_owned(),
            };
            let diag_str = if allow_diagonal { "8-grid" } else { "4-grid" };
            match outcome.total_cost() {
                Some(cost) => println!(
                    "{name}, {diag_str}: cost {cost}, {} cells, {} operations, {} visited",
                    outcome.cells().map_or(0, |c| c.len()),
                    outcome.total_operations(),
                    outcome.total_visited()
                ),
                None => println!(
                    "{name}, {diag_str}: no path, {} operations, {} visited",
                    outcome.total_operations(),
                    outcome.total_visited()
                ),
            }
        }
    }
}
