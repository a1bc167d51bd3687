use itertools::Itertools;

use crate::direction::Direction;
use crate::grid_graph::{CellId, GridGraph};
use crate::search_state::SearchTable;

/// Walks parent links backwards from a cell until it reaches the cell without a parent, which is
/// the start. Yields each cell together with the direction it was entered from.
///
/// The walk is lazy and single-use; [into_forward](Self::into_forward) collects it in start to
/// end order.
pub struct PathReconstructor<'a> {
    table: &'a SearchTable,
    next: Option<CellId>,
}

impl<'a> PathReconstructor<'a> {
    pub fn new(table: &'a SearchTable, from: CellId) -> PathReconstructor<'a> {
        PathReconstructor {
            table,
            next: Some(from),
        }
    }

    pub fn into_forward(self) -> Vec<(CellId, Option<Direction>)> {
        let mut path: Vec<_> = self.collect();
        path.reverse();
        path
    }
}

impl Iterator for PathReconstructor<'_> {
    type Item = (CellId, Option<Direction>);

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.next.take()?;
        let state = self.table.get(cell)?;
        self.next = state.parent;
        Some((cell, state.arrival_direction))
    }
}

/// Sums the step costs along `cells`, or [None] if two consecutive cells are not 8-adjacent.
pub fn route_cost(grid: &GridGraph, cells: &[CellId]) -> Option<i64> {
    cells
        .iter()
        .tuple_windows()
        .map(|(a, b)| {
            let (pa, pb) = (grid.position(*a), grid.position(*b));
            Direction::from_offset(pb.x - pa.x, pb.y - pa.y).map(Direction::step_cost)
        })
        .sum()
}
