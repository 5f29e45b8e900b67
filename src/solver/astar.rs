use crate::coordinate::Coordinate;
use crate::maze::Maze;
use crate::search::astar;
use crate::solver::{log_outcome, MazeSolver, Solution};

/// Cost of one orthogonal step.
const STEP_COST: usize = 1;

/// A* over the 4-neighbourhood with unit step cost and the Manhattan distance to the exit as
/// heuristic. With the default `heuristic_factor` of 1.0 the path is a shortest one.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 give weighted A*, which expands fewer cells but no
    /// longer guarantees a shortest path.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> usize {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as usize
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl MazeSolver for AstarSolver {
    fn solve(&self, maze: &Maze) -> Solution {
        let exit = maze.exit();
        let solution = astar(
            &maze.start(),
            |node| {
                maze.passable_neighbours(node)
                    .into_iter()
                    .map(|n| (n, STEP_COST))
            },
            |node| self.heuristic(node, &exit),
            |node| *node == exit,
        );
        log_outcome("A*", &solution);
        solution
    }
}
