//! Open list shared by both solvers.
//!
//! Entries live in a [BinaryHeap] keyed by the caller-supplied ordering key, with ties broken by
//! the sequence number under which the cell was first discovered. Lowering the key of a cell
//! already in the frontier pushes a second entry under the same sequence number; the outdated
//! one is skipped when it surfaces.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid_graph::CellId;

#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    key: i64,
    seq: usize,
    cell: CellId,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest key, and among equal keys the
        // earliest discovered cell.
        match other.key.cmp(&self.key) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    live: usize,
}

impl PriorityFrontier {
    pub fn new() -> PriorityFrontier {
        PriorityFrontier::default()
    }

    /// Adds a cell that is not in the frontier yet.
    pub fn insert(&mut self, cell: CellId, key: i64, seq: usize) {
        self.live += 1;
        self.heap.push(FrontierEntry { key, seq, cell });
    }

    /// Gives a cell that is already in the frontier a new key. It keeps its place among equal
    /// keys.
    pub fn requeue(&mut self, cell: CellId, key: i64, seq: usize) {
        self.heap.push(FrontierEntry { key, seq, cell });
    }

    /// Removes and returns the cell with the minimum key, earliest discovered first on ties.
    /// `current_key` reports the key a cell holds now, or [None] once it left the frontier;
    /// entries that disagree with it are outdated and dropped.
    pub fn pop_best<F>(&mut self, mut current_key: F) -> Option<CellId>
    where
        F: FnMut(CellId) -> Option<i64>,
    {
        while let Some(FrontierEntry { key, cell, .. }) = self.heap.pop() {
            if current_key(cell) == Some(key) {
                self.live -= 1;
                return Some(cell);
            }
        }
        None
    }

    /// Number of cells in the frontier. Outdated heap entries are not counted.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}
