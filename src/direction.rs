use core::fmt;

use crate::{C, D};

/// One of the 8 moves between adjacent cells. North is towards row 0, west is towards column 0.
///
/// The discriminants index the adjacency table of [GridGraph](crate::GridGraph), running clockwise
/// from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

/// Order in which cardinal neighbours are checked for being the goal.
pub const CARDINAL_GOAL_CHECK: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::North,
    Direction::South,
];

/// Order in which diagonal neighbours are checked for being the goal.
pub const DIAGONAL_GOAL_CHECK: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

/// Order in which cardinal neighbours are expanded.
pub const CARDINAL_EXPANSION: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::North,
    Direction::West,
];

/// Order in which diagonal neighbours are expanded, always after the cardinal ones.
pub const DIAGONAL_EXPANSION: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::NorthWest,
    Direction::SouthWest,
];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn num(self) -> usize {
        self as usize
    }

    pub fn is_diagonal(self) -> bool {
        self.num() % 2 == 1
    }

    /// Uses C as cost for cardinal (straight) moves and D for diagonal moves.
    pub fn step_cost(self) -> i64 {
        if self.is_diagonal() {
            D
        } else {
            C
        }
    }

    /// Column and row delta of a move in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        Direction::ALL[(self.num() + 4) % 8]
    }

    /// Direction of the move from one cell to an 8-adjacent one, if the offset is such a move.
    pub fn from_offset(dx: i32, dy: i32) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.offset() == (dx, dy))
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::NorthEast => "n-e",
            Direction::East => "e",
            Direction::SouthEast => "s-e",
            Direction::South => "s",
            Direction::SouthWest => "s-w",
            Direction::West => "w",
            Direction::NorthWest => "n-w",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
