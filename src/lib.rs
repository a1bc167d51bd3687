//! # grid_search
//!
//! Deterministic shortest-path search on a fixed-size grid with blocked cells, using either
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) or
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm). Cells are
//! 8-connected; cardinal steps cost [C] and diagonal steps cost [D]. Expansion order and
//! tie-breaking are fixed, so the same grid and [SearchConfig] always yield the same route and
//! the same operation counts.
//!
//! ```
//! use grid_search::{search, SearchConfig, GridGraph};
//!
//! let grid: GridGraph = "S..\n.#.\n..G".parse().unwrap();
//! let outcome = search(&grid, &SearchConfig::default()).unwrap();
//! assert_eq!(outcome.total_cost(), Some(34));
//! ```
pub mod config;
pub mod direction;
pub mod error;
pub mod frontier;
pub mod grid_graph;
pub mod heuristic;
pub mod observer;
pub mod path;
pub mod search_state;
pub mod solver;

pub use config::{Algorithm, SearchConfig};
pub use direction::Direction;
pub use error::{GridParseError, SearchError};
pub use grid_graph::{CellId, CellRole, Components, GridGraph};
pub use heuristic::Heuristic;
pub use observer::{LogObserver, NoopObserver, ProgressObserver, RelaxEvent};
pub use path::{route_cost, PathReconstructor};
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, SearchOutcome};

/// Cost of a cardinal (straight) step.
pub const C: i64 = 10;
/// Cost of a diagonal step, the integer stand-in for `C * sqrt(2)`.
pub const D: i64 = 14;
/// Factor the heuristic distances are multiplied by, equal to [C] so they stay admissible.
pub const HEURISTIC_SCALE: i64 = 10;

pub const N_SMALLVEC_SIZE: usize = 8;

/// Searches from the grid's start cell to its goal cell with the algorithm named in `config`.
pub fn search(grid: &GridGraph, config: &SearchConfig) -> Result<SearchOutcome, SearchError> {
    search_with_observer(grid, config, NoopObserver)
}

/// Like [search], reporting progress to `observer`.
pub fn search_with_observer<O: ProgressObserver>(
    grid: &GridGraph,
    config: &SearchConfig,
    observer: O,
) -> Result<SearchOutcome, SearchError> {
    match config.algorithm {
        Algorithm::AStar => AstarSolver.search(grid, config, observer),
        Algorithm::Dijkstra => DijkstraSolver.search(grid, config, observer),
    }
}
