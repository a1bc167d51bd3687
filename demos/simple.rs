use grid_search::{search, GridGraph, SearchConfig, SearchOutcome};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have an 8-neighborhood

fn main() {
    let mut grid = GridGraph::build(3, 3);
    grid.mark_obstacle(grid.cell_id(1, 1));
    grid.set_start(grid.cell_id(0, 0));
    grid.set_goal(grid.cell_id(2, 2));
    println!("{}", grid);
    match search(&grid, &SearchConfig::default()).unwrap() {
        SearchOutcome::PathFound {
            ordered_cells,
            goal,
            goal_direction,
            total_cost,
            ..
        } => {
            println!("Path:");
            for (cell, dir) in ordered_cells {
                let dir = dir.map_or("start".to_owned(), |d| d.to_string());
                println!("{} ({})", grid.position(cell), dir);
            }
            println!("{} ({})", grid.position(goal), goal_direction);
            println!("Cost: {}", total_cost);
        }
        SearchOutcome::NoPathExists { .. } => println!("No path exists"),
    }
}
