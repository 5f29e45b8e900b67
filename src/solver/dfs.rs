use crate::maze::Maze;
use crate::search::dfs;
use crate::solver::{log_outcome, MazeSolver, Solution};

/// Depth-first search. Stops at the first time the exit is popped, so the path is whichever route
/// the East, South, West, North priority order happens to find, not necessarily the shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl MazeSolver for DfsSolver {
    fn solve(&self, maze: &Maze) -> Solution {
        let exit = maze.exit();
        let solution = dfs(
            &maze.start(),
            |node| maze.passable_neighbours(node),
            |node| *node == exit,
        );
        log_outcome("DFS", &solution);
        solution
    }
}
