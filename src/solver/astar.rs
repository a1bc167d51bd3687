use crate::config::SearchConfig;
use crate::grid_graph::{CellId, GridGraph};
use crate::search_state::SearchState;
use crate::solver::GridSolver;
use crate::{D, HEURISTIC_SCALE};

/// A* ordered by `cost_from_start + heuristic`, with the heuristic taken from the run's
/// [SearchConfig].
///
/// A node already in the frontier is only re-parented when the node being expanded is cheaper
/// than it by more than a full diagonal step ([D]). This is stricter than plain relaxation, so
/// on grids with several near-equal routes a node may keep a slightly worse parent.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(
        &self,
        grid: &GridGraph,
        config: &SearchConfig,
        cell: CellId,
        goal: CellId,
    ) -> i64 {
        config
            .heuristic
            .estimate(grid.position(cell), grid.position(goal), HEURISTIC_SCALE)
    }

    fn ordering_key(&self, state: &SearchState) -> i64 {
        state.score
    }

    fn is_closed(&self, state: &SearchState) -> bool {
        state.settled
    }

    fn improves(&self, current_cost: i64, existing: &SearchState) -> bool {
        current_cost < existing.cost_from_start - D
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
