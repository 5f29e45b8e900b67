use core::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::info;

use crate::coordinate::Coordinate;
use crate::maze::Maze;
use crate::search::SearchOutcome;

pub mod astar;
pub mod dfs;

use astar::AstarSolver;
use dfs::DfsSolver;

/// Result of solving a maze: the path from the cell after the start up to the exit, and the cells
/// in the order the search took them off its frontier.
pub type Solution = SearchOutcome<Coordinate>;

/// A search strategy from a maze's start to its exit. Every call runs a fresh search; solvers keep
/// no state between calls.
pub trait MazeSolver {
    fn solve(&self, maze: &Maze) -> Solution;

    /// Number of unit steps along `path`, counting the step onto its first cell.
    fn path_cost(&self, path: &[Coordinate]) -> usize {
        path.len()
    }
}

/// Checks that `path` is a walk of orthogonal unit steps through passable cells that starts next
/// to the maze's start and ends on its exit. The empty path is valid only when start and exit
/// coincide.
pub fn is_valid_path(maze: &Maze, path: &[Coordinate]) -> bool {
    let Some(last) = path.last() else {
        return maze.start() == maze.exit();
    };
    *last == maze.exit()
        && path.iter().all(|p| maze.is_passable(*p))
        && std::iter::once(&maze.start())
            .chain(path)
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b))
}

fn log_outcome(name: &str, solution: &Solution) {
    match solution.path_len() {
        Some(len) => info!(
            "{}: path of {} steps, {} cells visited",
            name,
            len,
            solution.visited.len()
        ),
        None => info!(
            "{}: no path found, {} cells visited",
            name,
            solution.visited.len()
        ),
    }
}

/// The available strategies, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Dfs,
    Astar,
}

impl Algorithm {
    pub fn solve(self, maze: &Maze) -> Solution {
        match self {
            Algorithm::Dfs => DfsSolver.solve(maze),
            Algorithm::Astar => AstarSolver::new().solve(maze),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Astar => write!(f, "astar"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}', expected 'dfs' or 'astar'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "astar" | "a*" => Ok(Algorithm::Astar),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}
