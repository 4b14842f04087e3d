use crate::heuristic::Heuristic;

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    #[default]
    BreadthFirst,
    DepthFirst,
    AStar(Heuristic),
}

/// A strategy chosen from a mode token, and whether the token had to fall back
/// to the default.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selection {
    pub strategy: Strategy,
    pub defaulted: bool,
}

impl Strategy {
    pub const TOKENS: [&'static str; 4] = ["bfs", "dfs", "astar1", "astar2"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "bfs" => Some(Strategy::BreadthFirst),
            "dfs" => Some(Strategy::DepthFirst),
            "astar1" => Some(Strategy::AStar(Heuristic::Manhattan)),
            "astar2" => Some(Strategy::AStar(Heuristic::MisplacedTiles)),
            _ => None,
        }
    }

    /// Resolves a mode token. Unknown or missing tokens select breadth-first.
    pub fn select(token: Option<&str>) -> Selection {
        match token.and_then(Self::from_token) {
            Some(strategy) => Selection {
                strategy,
                defaulted: false,
            },
            None => Selection {
                strategy: Strategy::default(),
                defaulted: true,
            },
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::AStar(Heuristic::Manhattan) => "astar1",
            Strategy::AStar(Heuristic::MisplacedTiles) => "astar2",
        }
    }

    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Strategy::AStar(heuristic) => Some(heuristic),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => f.write_str("BFS"),
            Strategy::DepthFirst => f.write_str("DFS"),
            Strategy::AStar(heuristic) => write!(f, "A* Search - {heuristic}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        for token in Strategy::TOKENS {
            let strategy = Strategy::from_token(token).unwrap();
            assert_eq!(strategy.token(), token);
        }
        assert_eq!(Strategy::from_token("BFS"), None);
    }

    #[test]
    fn test_select_falls_back_to_bfs() {
        assert_eq!(
            Strategy::select(Some("astar2")),
            Selection {
                strategy: Strategy::AStar(Heuristic::MisplacedTiles),
                defaulted: false,
            }
        );
        for token in [None, Some(""), Some("astar3"), Some("greedy")] {
            let selection = Strategy::select(token);
            assert_eq!(selection.strategy, Strategy::BreadthFirst);
            assert!(selection.defaulted);
        }
        assert!(!Strategy::select(Some("bfs")).defaulted);
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::BreadthFirst.to_string(), "BFS");
        assert_eq!(Strategy::DepthFirst.to_string(), "DFS");
        assert_eq!(
            Strategy::AStar(Heuristic::Manhattan).to_string(),
            "A* Search - Manhattan Distance"
        );
        assert_eq!(Strategy::AStar(Heuristic::MisplacedTiles).heuristic(), Some(Heuristic::MisplacedTiles));
        assert_eq!(Strategy::DepthFirst.heuristic(), None);
    }
}
