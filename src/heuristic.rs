use grid_util::point::Point;

/// Distance estimate used by A* to order its frontier. Dijkstra ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Sum of the row and column deltas.
    #[default]
    Manhattan,
    /// Largest of the row and column deltas.
    Chebyshev,
}

impl Heuristic {
    pub fn estimate(self, from: Point, to: Point, scale: i64) -> i64 {
        match self {
            Heuristic::Manhattan => manhattan(from, to, scale),
            Heuristic::Chebyshev => chebyshev(from, to, scale),
        }
    }
}

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) times `scale`.
pub fn manhattan(a: Point, b: Point, scale: i64) -> i64 {
    let delta_x = (a.x - b.x).abs() as i64;
    let delta_y = (a.y - b.y).abs() as i64;
    (delta_x + delta_y) * scale
}

/// [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance) times `scale`.
pub fn chebyshev(a: Point, b: Point, scale: i64) -> i64 {
    let delta_x = (a.x - b.x).abs() as i64;
    let delta_y = (a.y - b.y).abs() as i64;
    scale * delta_x.max(delta_y)
}
