use core::fmt;
use std::str::FromStr;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use grid_util::rect::Rect;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::direction::{Direction, CARDINAL_EXPANSION, DIAGONAL_EXPANSION};
use crate::error::{GridParseError, SearchError};
use crate::N_SMALLVEC_SIZE;

/// Index of a cell in its [GridGraph]. Only valid for the grid that handed it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The flag a cell carries. A cell holds at most one role, so a start or goal can never also be
/// an obstacle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellRole {
    #[default]
    Free,
    Obstacle,
    Start,
    Goal,
}

impl CellRole {
    fn tile(self) -> char {
        match self {
            CellRole::Free => '.',
            CellRole::Obstacle => '#',
            CellRole::Start => 'S',
            CellRole::Goal => 'G',
        }
    }
}

/// [GridGraph] owns the cells of a fixed `width` x `height` grid together with their
/// precomputed 8-directional adjacency. Topology never changes after [build](Self::build);
/// only the cell roles do. Searches borrow the graph immutably.
#[derive(Clone, Debug)]
pub struct GridGraph {
    roles: SimpleGrid<CellRole>,
    neighbours: SimpleGrid<[Option<CellId>; 8]>,
    start: Option<CellId>,
    goal: Option<CellId>,
}

impl GridGraph {
    /// Creates all cells and wires up their neighbours. Neighbours outside the grid are [None],
    /// the grid never wraps.
    pub fn build(width: usize, height: usize) -> GridGraph {
        let roles: SimpleGrid<CellRole> = SimpleGrid::new(width, height, CellRole::Free);
        let mut neighbours: SimpleGrid<[Option<CellId>; 8]> =
            SimpleGrid::new(width, height, [None; 8]);
        for y in 0..height {
            for x in 0..width {
                let point = Point::new(x as i32, y as i32);
                let mut adjacent = [None; 8];
                for dir in Direction::ALL {
                    let (dx, dy) = dir.offset();
                    let n = Point::new(point.x + dx, point.y + dy);
                    if roles.point_in_bounds(n) {
                        adjacent[dir.num()] = Some(CellId(roles.get_ix_point(&n)));
                    }
                }
                neighbours.set(x, y, adjacent);
            }
        }
        GridGraph {
            roles,
            neighbours,
            start: None,
            goal: None,
        }
    }

    pub fn width(&self) -> usize {
        self.roles.width()
    }
    pub fn height(&self) -> usize {
        self.roles.height()
    }
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id of the cell at `column`, `row`. Panics if the position lies outside the grid.
    pub fn cell_id(&self, column: usize, row: usize) -> CellId {
        assert!(
            self.roles.index_in_bounds(column, row),
            "cell ({column}, {row}) is outside the {}x{} grid",
            self.width(),
            self.height()
        );
        CellId(self.roles.get_ix(column, row))
    }

    /// Id of the cell at `point`, or [None] if it lies outside the grid.
    pub fn try_cell_id(&self, point: Point) -> Option<CellId> {
        self.roles
            .point_in_bounds(point)
            .then(|| CellId(self.roles.get_ix_point(&point)))
    }

    /// Position of a cell, with `x` the column and `y` the row.
    pub fn position(&self, id: CellId) -> Point {
        self.check(id);
        let width = self.width();
        Point::new((id.0 % width) as i32, (id.0 / width) as i32)
    }

    fn check(&self, id: CellId) {
        assert!(
            id.0 < self.len(),
            "cell {id} is outside the {}x{} grid",
            self.width(),
            self.height()
        );
    }

    /// The neighbour of `id` in direction `dir`, or [None] at the grid edge.
    pub fn neighbour(&self, id: CellId, dir: Direction) -> Option<CellId> {
        self.neighbours.get_point(self.position(id))[dir.num()]
    }

    /// All existing neighbours of `id` that are not obstacles, in expansion order: cardinal ones
    /// first, then diagonal ones if allowed.
    pub fn passable_neighbours(
        &self,
        id: CellId,
        allow_diagonal: bool,
    ) -> SmallVec<[(CellId, Direction); N_SMALLVEC_SIZE]> {
        let diagonals: &[Direction] = if allow_diagonal {
            &DIAGONAL_EXPANSION[..]
        } else {
            &[]
        };
        CARDINAL_EXPANSION
            .iter()
            .chain(diagonals)
            .filter_map(|&d| self.neighbour(id, d).map(|n| (n, d)))
            .filter(|(n, _)| !self.is_obstacle(*n))
            .collect()
    }

    pub fn role(&self, id: CellId) -> CellRole {
        self.roles.get_point(self.position(id))
    }
    pub fn is_obstacle(&self, id: CellId) -> bool {
        self.role(id) == CellRole::Obstacle
    }
    pub fn start(&self) -> Option<CellId> {
        self.start
    }
    pub fn goal(&self) -> Option<CellId> {
        self.goal
    }

    /// The start and goal cells, or the configuration error naming whichever is missing.
    pub fn endpoints(&self) -> Result<(CellId, CellId), SearchError> {
        let start = self.start.ok_or(SearchError::MissingStart)?;
        let goal = self.goal.ok_or(SearchError::MissingGoal)?;
        Ok((start, goal))
    }

    fn assign(&mut self, id: CellId, role: CellRole) {
        let point = self.position(id);
        if self.start == Some(id) {
            self.start = None;
        }
        if self.goal == Some(id) {
            self.goal = None;
        }
        let previous = match role {
            CellRole::Start => self.start.replace(id),
            CellRole::Goal => self.goal.replace(id),
            CellRole::Free | CellRole::Obstacle => None,
        };
        if let Some(previous) = previous {
            let previous = self.position(previous);
            self.roles.set_point(previous, CellRole::Free);
        }
        self.roles.set_point(point, role);
    }

    /// Blocks a cell. If it was the start or goal, that role is dropped.
    pub fn mark_obstacle(&mut self, id: CellId) {
        self.assign(id, CellRole::Obstacle);
    }
    /// Makes `id` the start cell. The previous start, if any, becomes free.
    pub fn set_start(&mut self, id: CellId) {
        self.assign(id, CellRole::Start);
    }
    /// Makes `id` the goal cell. The previous goal, if any, becomes free.
    pub fn set_goal(&mut self, id: CellId) {
        self.assign(id, CellRole::Goal);
    }
    /// Resets a cell to free.
    pub fn clear(&mut self, id: CellId) {
        self.assign(id, CellRole::Free);
    }

    /// Blocks every cell of the rectangle with top-left corner `column`, `row`. A start or goal
    /// inside it loses its role. Panics if the rectangle does not fit in the grid.
    pub fn mark_obstacle_rect(&mut self, column: usize, row: usize, width: usize, height: usize) {
        assert!(
            column + width <= self.width() && row + height <= self.height(),
            "rectangle {width}x{height} at ({column}, {row}) exceeds the {}x{} grid",
            self.width(),
            self.height()
        );
        let rect = Rect::new(column as i32, row as i32, width as i32, height as i32);
        // Rect::contains includes the far edges, the filled area does not.
        let covers =
            |p: Point| rect.x1 <= p.x && p.x < rect.x2 && rect.y1 <= p.y && p.y < rect.y2;
        if self.start.map_or(false, |id| covers(self.position(id))) {
            self.start = None;
        }
        if self.goal.map_or(false, |id| covers(self.position(id))) {
            self.goal = None;
        }
        self.roles.set_rectangle(&rect, CellRole::Obstacle);
    }

    /// Generates a [UnionFind] structure linking up passable grid neighbours into components.
    pub fn components(&self, allow_diagonal: bool) -> Components {
        info!(
            "Generating connected components for {}x{} grid",
            self.width(),
            self.height()
        );
        let mut components = UnionFind::new(self.len());
        for ix in 0..self.len() {
            let id = CellId(ix);
            if self.is_obstacle(id) {
                continue;
            }
            for (n, _) in self.passable_neighbours(id, allow_diagonal) {
                components.union(ix, n.0);
            }
        }
        Components { components }
    }
}

/// Connected components of the passable cells, see [GridGraph::components].
#[derive(Clone, Debug)]
pub struct Components {
    components: UnionFind<usize>,
}

impl Components {
    /// Checks if `a` and `b` are on the same component.
    pub fn reachable(&self, a: CellId, b: CellId) -> bool {
        self.components.equiv(a.0, b.0)
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            let line: String = (0..self.width())
                .map(|x| self.roles.get(x, y).tile())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Reads one row per non-blank line: `.` free, `#` obstacle, `S` start, `G` goal.
impl FromStr for GridGraph {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<GridGraph, GridParseError> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        let width = rows.first().map(Vec::len).ok_or(GridParseError::Empty)?;
        let mut grid = GridGraph::build(width, rows.len());
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != width {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
            for (column, &tile) in tiles.iter().enumerate() {
                let id = grid.cell_id(column, row);
                match tile {
                    '.' => {}
                    '#' => grid.mark_obstacle(id),
                    'S' if grid.start.is_some() => return Err(GridParseError::DuplicateStart),
                    'S' => grid.set_start(id),
                    'G' if grid.goal.is_some() => return Err(GridParseError::DuplicateGoal),
                    'G' => grid.set_goal(id),
                    tile => return Err(GridParseError::UnknownTile { column, row, tile }),
                }
            }
        }
        Ok(grid)
    }
}
