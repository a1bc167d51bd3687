use log::trace;

use crate::grid_graph::CellId;

/// A node received a new cost, either on first discovery or when A* re-parents it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelaxEvent {
    pub cell: CellId,
    pub cost_from_start: i64,
    pub heuristic: i64,
    pub score: i64,
    pub total_operations: u64,
    pub total_visited: u64,
}

/// Receives progress facts from a running search, e.g. to animate it. Observers cannot change
/// the course of the search.
pub trait ProgressObserver {
    fn node_relaxed(&mut self, _event: &RelaxEvent) {}
    /// A node was popped from the frontier.
    fn node_settled(&mut self, _cell: CellId, _cost_from_start: i64) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

/// Forwards every event to the `trace` log level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn node_relaxed(&mut self, event: &RelaxEvent) {
        trace!(
            "relaxed {}: g={} h={} f={} (operations {}, visited {})",
            event.cell,
            event.cost_from_start,
            event.heuristic,
            event.score,
            event.total_operations,
            event.total_visited
        );
    }
    fn node_settled(&mut self, cell: CellId, cost_from_start: i64) {
        trace!("settled {cell} at g={cost_from_start}");
    }
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for &mut O {
    fn node_relaxed(&mut self, event: &RelaxEvent) {
        (**self).node_relaxed(event)
    }
    fn node_settled(&mut self, cell: CellId, cost_from_start: i64) {
        (**self).node_settled(cell, cost_from_start)
    }
}
