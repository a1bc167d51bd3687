use fxhash::FxBuildHasher;
use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::direction::Direction;
use crate::grid_graph::CellId;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Bookkeeping for one cell during one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Set once the cell has been handed a cost, or for the start once it is popped.
    pub visited: bool,
    /// Set when the cell is popped from the frontier. Settled cells are never updated again.
    pub settled: bool,
    pub parent: Option<CellId>,
    /// Direction of the move from `parent` onto this cell.
    pub arrival_direction: Option<Direction>,
    pub cost_from_start: i64,
    pub heuristic: i64,
    pub score: i64,
}

impl SearchState {
    /// Records a new parent and the costs derived from it.
    pub fn relax(&mut self, parent: CellId, direction: Direction, cost_from_start: i64, heuristic: i64) {
        self.parent = Some(parent);
        self.arrival_direction = Some(direction);
        self.cost_from_start = cost_from_start;
        self.heuristic = heuristic;
        self.score = cost_from_start + heuristic;
    }
}

/// The [SearchState] of every cell a single run has touched, in discovery order.
///
/// A table is created fresh for every search and dropped with it, so no parent link can leak
/// from one run into the next. A cell is in the frontier exactly when it has an entry that is
/// not settled.
#[derive(Clone, Debug, Default)]
pub struct SearchTable {
    states: FxIndexMap<CellId, SearchState>,
}

impl SearchTable {
    pub fn new() -> SearchTable {
        SearchTable::default()
    }

    /// Inserts the start cell with zero cost and no parent. Returns its discovery sequence.
    pub fn insert_start(&mut self, start: CellId) -> usize {
        let (seq, _) = self.states.insert_full(start, SearchState::default());
        seq
    }

    /// Returns the discovery sequence of `cell` and its state, creating a default entry if the
    /// cell was not discovered yet. The flag tells whether the entry is new.
    pub fn discover(&mut self, cell: CellId) -> (usize, &mut SearchState, bool) {
        match self.states.entry(cell) {
            Entry::Occupied(e) => {
                let seq = e.index();
                (seq, e.into_mut(), false)
            }
            Entry::Vacant(e) => {
                let seq = e.index();
                (seq, e.insert(SearchState::default()), true)
            }
        }
    }

    pub fn get(&self, cell: CellId) -> Option<&SearchState> {
        self.states.get(&cell)
    }

    pub fn get_mut(&mut self, cell: CellId) -> Option<&mut SearchState> {
        self.states.get_mut(&cell)
    }

    /// Whether `cell` has been discovered and not settled yet.
    pub fn in_frontier(&self, cell: CellId) -> bool {
        self.get(cell).map_or(false, |s| !s.settled)
    }

    /// Number of cells discovered so far, the start included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
