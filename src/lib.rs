//! # maze_pathfinding
//!
//! Solves text mazes and records how the solution was found. A maze is a grid of `0` (open) and
//! `1` (wall) characters with one `S` start and one `E` exit. Two strategies are provided:
//! [depth-first search](solver::dfs::DfsSolver), which stops at the first route it stumbles on,
//! and [A*](solver::astar::AstarSolver) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) heuristic, which finds a
//! shortest route. Movement is 4-directional with unit step cost.
//!
//! Besides the path, every solve returns the cells in the order they were explored, so that a
//! front end can replay the search with [playback](search::SearchOutcome::playback).
//!
//! ```
//! let maze = maze_pathfinding::parse(["S00", "010", "00E"]).unwrap();
//! let solution = maze_pathfinding::solve_astar(&maze);
//! assert_eq!(solution.path_len(), Some(4));
//! ```
pub mod coordinate;
pub mod error;
pub mod maze;
pub mod playback;
pub mod search;
pub mod solver;

pub use coordinate::{Coordinate, Direction};
pub use error::{LoadError, ParseError};
pub use maze::{Cell, Maze};
pub use playback::{CancelToken, Frame, Playback};
pub use search::SearchOutcome;
pub use solver::{astar::AstarSolver, dfs::DfsSolver, Algorithm, MazeSolver, Solution};

/// Inline capacity for neighbourhoods; a cell has at most four orthogonal neighbours.
const N_SMALLVEC_SIZE: usize = 4;

/// Parses maze rows, see [Maze::parse].
pub fn parse<I, S>(lines: I) -> Result<Maze, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Maze::parse(lines)
}

/// Depth-first search from start to exit.
pub fn solve_dfs(maze: &Maze) -> Solution {
    DfsSolver.solve(maze)
}

/// Shortest path from start to exit using A*.
pub fn solve_astar(maze: &Maze) -> Solution {
    AstarSolver::new().solve(maze)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_solvers_on_scenarios() {
        let maze = parse(["S00", "010", "00E"]).unwrap();
        for solution in [solve_dfs(&maze), solve_astar(&maze)] {
            let path = solution.path.unwrap();
            assert_eq!(path.len(), 4);
            assert_eq!(path.last(), Some(&Coordinate::new(2, 2)));
            assert!(!path.contains(&maze.start()));
        }

        let maze = parse(["SE"]).unwrap();
        for solution in [solve_dfs(&maze), solve_astar(&maze)] {
            assert_eq!(solution.path, Some(vec![Coordinate::new(0, 1)]));
            assert_eq!(solution.visited.first(), Some(&Coordinate::new(0, 0)));
        }

        let maze = parse(["S0", "11", "0E"]).unwrap();
        for solution in [solve_dfs(&maze), solve_astar(&maze)] {
            assert!(solution.path.is_none());
        }
    }

    /// Each call starts from scratch.
    #[test]
    fn solving_is_repeatable() {
        let maze = parse(["S0000", "01010", "0000E"]).unwrap();
        assert_eq!(solve_dfs(&maze), solve_dfs(&maze));
        assert_eq!(solve_astar(&maze), solve_astar(&maze));
    }

    #[test]
    fn playback_of_solution() {
        let maze = parse(["SE"]).unwrap();
        let solution = solve_dfs(&maze);
        let frames: Vec<Frame<Coordinate>> = solution.playback().collect();
        assert_eq!(
            frames,
            vec![
                Frame::Visited(Coordinate::new(0, 0)),
                Frame::Visited(Coordinate::new(0, 1)),
                Frame::Path(Coordinate::new(0, 1)),
            ]
        );
    }
}
