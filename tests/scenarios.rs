use grid_search::{
    route_cost, search, Algorithm, CellId, Direction, GridGraph, Heuristic, SearchConfig,
    SearchError, SearchOutcome,
};

fn open_grid(width: usize, height: usize, start: (usize, usize), goal: (usize, usize)) -> GridGraph {
    let mut grid = GridGraph::build(width, height);
    grid.set_start(grid.cell_id(start.0, start.1));
    grid.set_goal(grid.cell_id(goal.0, goal.1));
    grid
}

fn config(algorithm: Algorithm, allow_diagonal: bool, heuristic: Heuristic) -> SearchConfig {
    SearchConfig::new()
        .with_algorithm(algorithm)
        .with_diagonal(allow_diagonal)
        .with_heuristic(heuristic)
}

/// Checks adjacency, obstacle freedom and direction bookkeeping of a found route.
fn assert_valid_route(grid: &GridGraph, outcome: &SearchOutcome, allow_diagonal: bool) {
    let SearchOutcome::PathFound {
        ordered_cells,
        goal,
        goal_direction,
        total_cost,
        ..
    } = outcome
    else {
        panic!("expected a path, got {outcome:?}");
    };
    assert_eq!(Some(ordered_cells[0].0), grid.start());
    assert_eq!(ordered_cells[0].1, None);
    for pair in ordered_cells.windows(2) {
        let (from, _) = pair[0];
        let (to, dir) = pair[1];
        let dir = dir.expect("only the start has no arrival direction");
        assert_eq!(grid.neighbour(from, dir), Some(to));
        assert!(allow_diagonal || !dir.is_diagonal());
    }
    for (cell, _) in ordered_cells {
        assert!(!grid.is_obstacle(*cell));
    }
    let last = ordered_cells.last().unwrap().0;
    assert_eq!(grid.neighbour(last, *goal_direction), Some(*goal));
    let cells = outcome.cells().unwrap();
    assert_eq!(route_cost(grid, &cells), Some(*total_cost));
}

#[test]
fn diagonal_chebyshev_open_grid() {
    let grid = open_grid(5, 5, (0, 0), (4, 4));
    let outcome = search(
        &grid,
        &config(Algorithm::AStar, true, Heuristic::Chebyshev),
    )
    .unwrap();
    assert_valid_route(&grid, &outcome, true);
    assert_eq!(outcome.total_cost(), Some(56));
    match &outcome {
        SearchOutcome::PathFound {
            ordered_cells,
            goal_direction,
            ..
        } => {
            let expected: Vec<(CellId, Option<Direction>)> = (0..4)
                .map(|i| {
                    let dir = (i > 0).then_some(Direction::SouthEast);
                    (grid.cell_id(i, i), dir)
                })
                .collect();
            assert_eq!(ordered_cells, &expected);
            assert_eq!(*goal_direction, Direction::SouthEast);
        }
        SearchOutcome::NoPathExists { .. } => unreachable!(),
    }
}

#[test]
fn cardinal_manhattan_open_grid() {
    let grid = open_grid(5, 5, (0, 0), (4, 4));
    let outcome = search(
        &grid,
        &config(Algorithm::AStar, false, Heuristic::Manhattan),
    )
    .unwrap();
    assert_valid_route(&grid, &outcome, false);
    assert_eq!(outcome.cells().unwrap().len(), 9);
    assert_eq!(outcome.total_cost(), Some(80));
}

#[test]
fn dijkstra_open_grid() {
    let grid = open_grid(5, 5, (0, 0), (4, 4));
    let cardinal = search(
        &grid,
        &config(Algorithm::Dijkstra, false, Heuristic::Manhattan),
    )
    .unwrap();
    assert_valid_route(&grid, &cardinal, false);
    assert_eq!(cardinal.total_cost(), Some(80));

    let diagonal = search(
        &grid,
        &config(Algorithm::Dijkstra, true, Heuristic::Manhattan),
    )
    .unwrap();
    assert_valid_route(&grid, &diagonal, true);
    assert!(diagonal.total_cost().unwrap() >= 56);
}

#[test]
fn wall_separates_start_and_goal() {
    let grid: GridGraph = "S.#..\n..#..\n..#.G\n..#..".parse().unwrap();
    let components = grid.components(true);
    let start = grid.start().unwrap();
    let region = (0..grid.len())
        .map(|ix| grid.cell_id(ix % grid.width(), ix / grid.width()))
        .filter(|c| !grid.is_obstacle(*c) && components.reachable(start, *c))
        .count();
    assert_eq!(region, 8);
    for algorithm in [Algorithm::AStar, Algorithm::Dijkstra] {
        for allow_diagonal in [false, true] {
            for heuristic in [Heuristic::Manhattan, Heuristic::Chebyshev] {
                let outcome =
                    search(&grid, &config(algorithm, allow_diagonal, heuristic)).unwrap();
                assert!(!outcome.is_found());
                // Every reachable cell except the start is discovered once.
                assert_eq!(outcome.total_visited(), region as u64 - 1);
            }
        }
    }
}

#[test]
fn enclosed_goal() {
    let grid: GridGraph = "S....\n...#.\n..#G#\n...#.".parse().unwrap();
    for algorithm in [Algorithm::AStar, Algorithm::Dijkstra] {
        let cardinal = search(&grid, &config(algorithm, false, Heuristic::Manhattan)).unwrap();
        assert_eq!(
            cardinal,
            search(&grid, &config(algorithm, false, Heuristic::Manhattan)).unwrap()
        );
        assert!(!cardinal.is_found());
        // With diagonals the goal is seen from one of its free diagonal neighbours.
        let diagonal = search(&grid, &config(algorithm, true, Heuristic::Manhattan)).unwrap();
        assert_valid_route(&grid, &diagonal, true);
    }
}

/// On an open grid without diagonals A* with Manhattan distance is exact, for every pair of
/// distinct cells.
#[test]
fn admissibility_sanity() {
    let (w, h) = (4, 3);
    for start in 0..w * h {
        for goal in 0..w * h {
            if start == goal {
                continue;
            }
            let (sc, sr) = (start % w, start / w);
            let (gc, gr) = (goal % w, goal / w);
            let grid = open_grid(w, h, (sc, sr), (gc, gr));
            let outcome = search(
                &grid,
                &config(Algorithm::AStar, false, Heuristic::Manhattan),
            )
            .unwrap();
            assert_valid_route(&grid, &outcome, false);
            let steps = sc.abs_diff(gc) + sr.abs_diff(gr);
            assert_eq!(outcome.cells().unwrap().len(), steps + 1);
            assert_eq!(outcome.total_cost(), Some(10 * steps as i64));
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let grid: GridGraph = "S...#...\n.##.#.#.\n.#..#.#.\n.#.##.#.\n...#..#G".parse().unwrap();
    for algorithm in [Algorithm::AStar, Algorithm::Dijkstra] {
        for allow_diagonal in [false, true] {
            let config = config(algorithm, allow_diagonal, Heuristic::Chebyshev);
            let first = search(&grid, &config).unwrap();
            for _ in 0..3 {
                assert_eq!(search(&grid, &config).unwrap(), first);
            }
        }
    }
}

/// Moving the goal between runs leaves no trace of the previous run.
#[test]
fn moved_goal_matches_fresh_grid() {
    let mut grid = open_grid(6, 6, (0, 0), (5, 5));
    grid.mark_obstacle_rect(2, 1, 1, 4);
    let config = SearchConfig::default();
    search(&grid, &config).unwrap();
    grid.set_goal(grid.cell_id(5, 0));

    let mut fresh = open_grid(6, 6, (0, 0), (5, 0));
    fresh.mark_obstacle_rect(2, 1, 1, 4);
    assert_eq!(grid.goal(), fresh.goal());
    assert_eq!(
        search(&grid, &config).unwrap(),
        search(&fresh, &config).unwrap()
    );
}

#[test]
fn configuration_errors() {
    let mut grid = GridGraph::build(3, 3);
    assert_eq!(
        search(&grid, &SearchConfig::default()),
        Err(SearchError::MissingStart)
    );
    grid.set_goal(grid.cell_id(2, 2));
    assert_eq!(
        search(&grid, &SearchConfig::default()),
        Err(SearchError::MissingStart)
    );
    grid.set_start(grid.cell_id(0, 0));
    grid.clear(grid.cell_id(2, 2));
    assert_eq!(
        search(&grid, &SearchConfig::default()),
        Err(SearchError::MissingGoal)
    );
}

fn route(
    grid: &GridGraph,
    steps: &[((usize, usize), Option<Direction>)],
) -> Vec<(CellId, Option<Direction>)> {
    steps
        .iter()
        .map(|&((column, row), dir)| (grid.cell_id(column, row), dir))
        .collect()
}

/// Among equal-cost routes the one found follows the expansion order: east before north, east
/// before west, and north-east before north-west.
#[test]
fn expansion_order_breaks_ties() {
    use Direction::*;
    // Start bottom left, goal top right: east is expanded before north.
    let corner: GridGraph = "..G\n...\nS..".parse().unwrap();
    // Both sides of the wall cost the same.
    let wall: GridGraph = ".G.\n.#.\n.S.".parse().unwrap();
    for algorithm in [Algorithm::AStar, Algorithm::Dijkstra] {
        let outcome = search(&corner, &config(algorithm, false, Heuristic::Manhattan)).unwrap();
        let expected = SearchOutcome::PathFound {
            ordered_cells: route(
                &corner,
                &[
                    ((0, 2), None),
                    ((1, 2), Some(East)),
                    ((2, 2), Some(East)),
                    ((2, 1), Some(North)),
                ],
            ),
            goal: corner.cell_id(2, 0),
            goal_direction: North,
            total_cost: 40,
            total_operations: 7 * 4,
            total_visited: 7,
        };
        assert_eq!(outcome, expected, "{algorithm:?}");

        let outcome = search(&wall, &config(algorithm, false, Heuristic::Manhattan)).unwrap();
        let expected = SearchOutcome::PathFound {
            ordered_cells: route(
                &wall,
                &[
                    ((1, 2), None),
                    ((2, 2), Some(East)),
                    ((2, 1), Some(North)),
                    ((2, 0), Some(North)),
                ],
            ),
            goal: wall.cell_id(1, 0),
            goal_direction: West,
            total_cost: 40,
            total_operations: 6 * 4,
            total_visited: 6,
        };
        assert_eq!(outcome, expected, "{algorithm:?}");

        let outcome = search(&wall, &config(algorithm, true, Heuristic::Chebyshev)).unwrap();
        assert_eq!(
            outcome.cells(),
            Some(vec![wall.cell_id(1, 2), wall.cell_id(2, 1), wall.cell_id(1, 0)]),
            "{algorithm:?}"
        );
        match outcome {
            SearchOutcome::PathFound {
                ordered_cells,
                goal_direction,
                total_cost,
                total_visited,
                ..
            } => {
                assert_eq!(
                    ordered_cells,
                    route(&wall, &[((1, 2), None), ((2, 1), Some(NorthEast))])
                );
                assert_eq!(goal_direction, NorthWest);
                assert_eq!(total_cost, 28);
                assert_eq!(total_visited, 4);
            }
            SearchOutcome::NoPathExists { .. } => panic!("{algorithm:?} found no path"),
        }
    }
}

/// A* with diagonals stops as soon as the cheaper diagonal detour is popped; Dijkstra first pops
/// the two cardinal cells of cost 10.
#[test]
fn diagonal_wall_operation_counts() {
    let wall: GridGraph = ".G.\n.#.\n.S.".parse().unwrap();
    let astar = search(&wall, &config(Algorithm::AStar, true, Heuristic::Chebyshev)).unwrap();
    assert_eq!(astar.total_operations(), 2 * 8);
    let dijkstra = search(
        &wall,
        &config(Algorithm::Dijkstra, true, Heuristic::Chebyshev),
    )
    .unwrap();
    assert_eq!(dijkstra.total_operations(), 4 * 8);
}
