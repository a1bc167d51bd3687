use crate::heuristic::Heuristic;

/// Search algorithm selected for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
}

/// Per-run search settings. Owned by the caller and passed into every search; nothing is kept
/// between runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub allow_diagonal: bool,
    /// Only consulted by A*.
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            algorithm: Algorithm::AStar,
            allow_diagonal: true,
            heuristic: Heuristic::Manhattan,
        }
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }
    pub fn with_algorithm(self, algorithm: Algorithm) -> SearchConfig {
        SearchConfig { algorithm, ..self }
    }
    pub fn with_diagonal(self, allow_diagonal: bool) -> SearchConfig {
        SearchConfig {
            allow_diagonal,
            ..self
        }
    }
    pub fn with_heuristic(self, heuristic: Heuristic) -> SearchConfig {
        SearchConfig { heuristic, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_application_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.algorithm, Algorithm::AStar);
        assert!(config.allow_diagonal);
        assert_eq!(config.heuristic, Heuristic::Manhattan);
    }

    #[test]
    fn builders_only_touch_their_field() {
        let config = SearchConfig::new()
            .with_algorithm(Algorithm::Dijkstra)
            .with_diagonal(false);
        assert_eq!(config.algorithm, Algorithm::Dijkstra);
        assert!(!config.allow_diagonal);
        assert_eq!(config.heuristic, Heuristic::Manhattan);
        let config = config.with_heuristic(Heuristic::Chebyshev);
        assert_eq!(config.heuristic, Heuristic::Chebyshev);
        assert_eq!(config.algorithm, Algorithm::Dijkstra);
    }
}
