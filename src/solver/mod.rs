use log::{debug, info, trace};

use crate::config::SearchConfig;
use crate::direction::{
    Direction, CARDINAL_EXPANSION, CARDINAL_GOAL_CHECK, DIAGONAL_EXPANSION, DIAGONAL_GOAL_CHECK,
};
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::grid_graph::{CellId, GridGraph};
use crate::observer::{ProgressObserver, RelaxEvent};
use crate::path::PathReconstructor;
use crate::search_state::{SearchState, SearchTable};

pub mod astar;
pub mod dijkstra;

/// Terminal result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was seen next to a popped node. `ordered_cells` runs from the start to that
    /// node; the final step onto the goal is described by `goal` and `goal_direction`.
    PathFound {
        ordered_cells: Vec<(CellId, Option<Direction>)>,
        goal: CellId,
        goal_direction: Direction,
        total_cost: i64,
        total_operations: u64,
        total_visited: u64,
    },
    /// The frontier ran empty before the goal was seen.
    NoPathExists {
        total_operations: u64,
        total_visited: u64,
    },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::PathFound { .. })
    }

    pub fn total_operations(&self) -> u64 {
        match self {
            SearchOutcome::PathFound {
                total_operations, ..
            }
            | SearchOutcome::NoPathExists {
                total_operations, ..
            } => *total_operations,
        }
    }

    pub fn total_visited(&self) -> u64 {
        match self {
            SearchOutcome::PathFound { total_visited, .. }
            | SearchOutcome::NoPathExists { total_visited, .. } => *total_visited,
        }
    }

    /// Cost of the whole route including the final step onto the goal.
    pub fn total_cost(&self) -> Option<i64> {
        match self {
            SearchOutcome::PathFound { total_cost, .. } => Some(*total_cost),
            SearchOutcome::NoPathExists { .. } => None,
        }
    }

    /// All cells of the route from the start up to and including the goal.
    pub fn cells(&self) -> Option<Vec<CellId>> {
        match self {
            SearchOutcome::PathFound {
                ordered_cells,
                goal,
                ..
            } => Some(
                ordered_cells
                    .iter()
                    .map(|(cell, _)| *cell)
                    .chain(std::iter::once(*goal))
                    .collect(),
            ),
            SearchOutcome::NoPathExists { .. } => None,
        }
    }
}

/// Operation and visited-node counters of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub operations: u64,
    pub visited: u64,
}

/// The policy a best-first grid search plugs into the shared driver in [search](Self::search).
pub trait GridSolver {
    /// Estimate of the remaining cost from `cell` to `goal`.
    fn heuristic(&self, grid: &GridGraph, config: &SearchConfig, cell: CellId, goal: CellId)
        -> i64;

    /// Key the frontier is ordered by.
    fn ordering_key(&self, state: &SearchState) -> i64;

    /// Whether an already discovered neighbour is skipped entirely.
    fn is_closed(&self, state: &SearchState) -> bool;

    /// Whether a neighbour still in the frontier is re-parented onto the node being expanded,
    /// which has cost `current_cost`.
    fn improves(&self, current_cost: i64, existing: &SearchState) -> bool;

    fn name(&self) -> &'static str;

    /// Runs a search from the grid's start cell to its goal cell. Every call uses a fresh
    /// [SearchTable], so repeated calls on an unchanged grid give identical outcomes.
    fn search<O: ProgressObserver>(
        &self,
        grid: &GridGraph,
        config: &SearchConfig,
        mut observer: O,
    ) -> Result<SearchOutcome, SearchError> {
        let (start, goal) = grid.endpoints()?;
        info!(
            "{}: searching from {} to {} (diagonal: {})",
            self.name(),
            grid.position(start),
            grid.position(goal),
            config.allow_diagonal
        );
        let mut table = SearchTable::new();
        let mut frontier = PriorityFrontier::new();
        let mut stats = SearchStats::default();

        let seq = table.insert_start(start);
        frontier.insert(start, 0, seq);

        while let Some(current) = frontier.pop_best(|cell| {
            table
                .get(cell)
                .filter(|s| !s.settled)
                .map(|s| self.ordering_key(s))
        }) {
            let current_cost = match table.get_mut(current) {
                Some(state) => {
                    state.settled = true;
                    state.visited = true;
                    state.cost_from_start
                }
                None => continue,
            };
            observer.node_settled(current, current_cost);

            stats.operations += 4;
            if config.allow_diagonal {
                stats.operations += 4;
            }
            if let Some(goal_direction) = goal_direction(grid, current, goal, config.allow_diagonal)
            {
                let ordered_cells = PathReconstructor::new(&table, current).into_forward();
                let total_cost = current_cost + goal_direction.step_cost();
                info!(
                    "{}: path found over {} cells with cost {} ({} operations, {} visited)",
                    self.name(),
                    ordered_cells.len() + 1,
                    total_cost,
                    stats.operations,
                    stats.visited
                );
                return Ok(SearchOutcome::PathFound {
                    ordered_cells,
                    goal,
                    goal_direction,
                    total_cost,
                    total_operations: stats.operations,
                    total_visited: stats.visited,
                });
            }

            let diagonals: &[Direction] = if config.allow_diagonal {
                &DIAGONAL_EXPANSION[..]
            } else {
                &[]
            };
            for &dir in CARDINAL_EXPANSION.iter().chain(diagonals) {
                let neighbour = match grid.neighbour(current, dir) {
                    Some(n) if !grid.is_obstacle(n) => n,
                    _ => continue,
                };
                let tentative = current_cost + dir.step_cost();
                let h = self.heuristic(grid, config, neighbour, goal);
                let queued = table.in_frontier(neighbour);
                let (seq, state, new) = table.discover(neighbour);
                if new {
                    state.visited = true;
                    state.relax(current, dir, tentative, h);
                    stats.visited += 1;
                    frontier.insert(neighbour, self.ordering_key(state), seq);
                } else if !queued
                    || self.is_closed(state)
                    || !self.improves(current_cost, state)
                {
                    continue;
                } else {
                    debug!(
                        "{}: re-parenting {} from g={} to g={}",
                        self.name(),
                        grid.position(neighbour),
                        state.cost_from_start,
                        tentative
                    );
                    state.relax(current, dir, tentative, h);
                    frontier.requeue(neighbour, self.ordering_key(state), seq);
                }
                trace!(
                    "{}: relaxed {} g={} h={} f={} ({} queued)",
                    self.name(),
                    grid.position(neighbour),
                    state.cost_from_start,
                    state.heuristic,
                    state.score,
                    frontier.len()
                );
                observer.node_relaxed(&RelaxEvent {
                    cell: neighbour,
                    cost_from_start: state.cost_from_start,
                    heuristic: state.heuristic,
                    score: state.score,
                    total_operations: stats.operations,
                    total_visited: stats.visited,
                });
            }
        }

        info!(
            "{}: no path exists ({} operations, {} visited, {} cells discovered)",
            self.name(),
            stats.operations,
            stats.visited,
            table.len()
        );
        Ok(SearchOutcome::NoPathExists {
            total_operations: stats.operations,
            total_visited: stats.visited,
        })
    }
}

/// Direction from `current` onto `goal` if they are adjacent. Cardinal neighbours are checked
/// first; diagonal ones only when diagonal movement is allowed.
fn goal_direction(
    grid: &GridGraph,
    current: CellId,
    goal: CellId,
    allow_diagonal: bool,
) -> Option<Direction> {
    let diagonals: &[Direction] = if allow_diagonal {
        &DIAGONAL_GOAL_CHECK[..]
    } else {
        &[]
    };
    CARDINAL_GOAL_CHECK
        .iter()
        .chain(diagonals)
        .copied()
        .find(|&dir| grid.neighbour(current, dir) == Some(goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_direction_respects_diagonal_switch() {
        let grid = GridGraph::build(3, 3);
        let centre = grid.cell_id(1, 1);
        let corner = grid.cell_id(2, 2);
        assert_eq!(goal_direction(&grid, centre, corner, false), None);
        assert_eq!(
            goal_direction(&grid, centre, corner, true),
            Some(Direction::SouthEast)
        );
        let below = grid.cell_id(1, 2);
        assert_eq!(
            goal_direction(&grid, centre, below, false),
            Some(Direction::South)
        );
        assert_eq!(goal_direction(&grid, centre, centre, true), None);
    }

    #[test]
    fn outcome_accessors() {
        let grid = GridGraph::build(3, 1);
        let (a, b, c) = (grid.cell_id(0, 0), grid.cell_id(1, 0), grid.cell_id(2, 0));
        let found = SearchOutcome::PathFound {
            ordered_cells: vec![(a, None), (b, Some(Direction::East))],
            goal: c,
            goal_direction: Direction::East,
            total_cost: 20,
            total_operations: 8,
            total_visited: 2,
        };
        assert!(found.is_found());
        assert_eq!(found.cells(), Some(vec![a, b, c]));
        assert_eq!(found.total_cost(), Some(20));
        assert_eq!(found.total_operations(), 8);
        let missing = SearchOutcome::NoPathExists {
            total_operations: 4,
            total_visited: 0,
        };
        assert!(!missing.is_found());
        assert_eq!(missing.cells(), None);
        assert_eq!(missing.total_visited(), 0);
    }
}
