use crate::config::SearchConfig;
use crate::grid_graph::{CellId, GridGraph};
use crate::search_state::SearchState;
use crate::solver::GridSolver;

/// Dijkstra ordered by `cost_from_start` alone. A cell is marked visited as soon as it receives
/// a cost and is never updated afterwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &GridGraph, _: &SearchConfig, _: CellId, _: CellId) -> i64 {
        0
    }

    fn ordering_key(&self, state: &SearchState) -> i64 {
        state.cost_from_start
    }

    fn is_closed(&self, state: &SearchState) -> bool {
        state.visited
    }

    fn improves(&self, _: i64, _: &SearchState) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
