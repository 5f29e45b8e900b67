use maze_pathfinding::{Algorithm, Frame, Maze};
use std::process::ExitCode;
use std::thread;

// Loads a maze file and solves it, e.g.
//
//     cargo run --example solve -- demos/maze.txt astar --animate
//
// where the file holds rows such as
//  S0010
//  01110
//  0000E
// with
// - 1 marking a wall
// - S marking the start
// - E marking the exit
//
// Set RUST_LOG=debug to see what the parser and solvers report.

fn main() -> ExitCode {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: solve <maze file> [dfs|astar] [--animate]");
        return ExitCode::FAILURE;
    };
    let mut algorithm = Algorithm::Dfs;
    let mut animate = false;
    for arg in args {
        if arg == "--animate" {
            animate = true;
            continue;
        }
        match arg.parse() {
            Ok(a) => algorithm = a,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let maze = match Maze::from_file(&path) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Could not load maze: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}\n", maze);

    let solution = algorithm.solve(&maze);
    if animate {
        for frame in solution.playback() {
            match frame {
                Frame::Visited(p) => println!("visit {p}"),
                Frame::Path(p) => println!("step  {p}"),
            }
            thread::sleep(frame.delay());
        }
    } else {
        println!("Visited ({}):", solution.visited.len());
        for p in &solution.visited {
            println!("{p}");
        }
    }
    match &solution.path {
        Some(path) => {
            println!("Path found by {algorithm} ({} steps):", path.len());
            for p in path {
                println!("{p}");
            }
        }
        None => println!("No path found by {algorithm}"),
    }
    ExitCode::SUCCESS
}
