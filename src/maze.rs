use core::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coordinate::Coordinate;
use crate::error::{LoadError, ParseError};
use crate::N_SMALLVEC_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Passable,
    Blocked,
}

/// A rectangular grid of [Cell]s with one start and one exit, both on passable cells. Built once
/// by [Maze::parse] and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Coordinate,
    exit: Coordinate,
}

impl Maze {
    /// Builds a maze from text rows using `1` for walls, `0` for open cells, `S` for the start and
    /// `E` for the exit. Lines are trimmed and blank lines skipped, so row indices count non-blank
    /// lines only.
    ///
    /// Characters and duplicate markers are checked while scanning, row lengths at the end of each
    /// row, and missing markers once every row has been read.
    pub fn parse<I, S>(lines: I) -> Result<Maze, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;
        let mut start: Option<Coordinate> = None;
        let mut exit: Option<Coordinate> = None;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            let row = height;
            let mut found = 0;
            for (col, character) in line.chars().enumerate() {
                let position = Coordinate::new(row, col);
                let cell = match character {
                    '1' => Cell::Blocked,
                    '0' => Cell::Passable,
                    'S' => {
                        if start.replace(position).is_some() {
                            return Err(ParseError::MultipleStarts { position });
                        }
                        Cell::Passable
                    }
                    'E' => {
                        if exit.replace(position).is_some() {
                            return Err(ParseError::MultipleExits { position });
                        }
                        Cell::Passable
                    }
                    character => {
                        return Err(ParseError::InvalidCharacter {
                            character,
                            position,
                        })
                    }
                };
                cells.push(cell);
                found += 1;
            }
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(ParseError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        let start = start.ok_or(ParseError::MissingStart)?;
        let exit = exit.ok_or(ParseError::MissingExit)?;
        let width = width.unwrap_or(0);
        debug!(
            "Parsed {}x{} maze with start {} and exit {}",
            height, width, start, exit
        );
        Ok(Maze {
            width,
            height,
            cells,
            start,
            exit,
        })
    }

    /// Reads a UTF-8 maze file and parses it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Maze, LoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        info!("Loading maze from {}", path.display());
        Ok(contents.parse()?)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }
    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn start(&self) -> Coordinate {
        self.start
    }
    pub fn exit(&self) -> Coordinate {
        self.exit
    }

    pub fn in_bounds(&self, pos: Coordinate) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn get_ix(&self, pos: Coordinate) -> usize {
        pos.row * self.width + pos.col
    }

    /// The cell at `pos`, or [None] outside the grid.
    pub fn cell(&self, pos: Coordinate) -> Option<Cell> {
        if self.in_bounds(pos) {
            self.cells.get(self.get_ix(pos)).copied()
        } else {
            None
        }
    }

    /// Out-of-bounds positions are not passable.
    pub fn is_passable(&self, pos: Coordinate) -> bool {
        self.cell(pos) == Some(Cell::Passable)
    }

    /// In-bounds passable neighbours in East, South, West, North order.
    pub fn passable_neighbours(&self, pos: &Coordinate) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        pos.neumann_neighbourhood()
            .into_iter()
            .filter(|n| self.is_passable(*n))
            .collect()
    }

    /// Links every pair of orthogonally adjacent passable cells into a [UnionFind] keyed by
    /// row-major cell index.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let point = Coordinate::new(row, col);
                if !self.is_passable(point) {
                    continue;
                }
                let parent_ix = self.get_ix(point);
                for n in [Coordinate::new(row, col + 1), Coordinate::new(row + 1, col)] {
                    if self.is_passable(n) {
                        components.union(parent_ix, self.get_ix(n));
                    }
                }
            }
        }
        components
    }

    /// Checks if `a` and `b` are passable and on the same connected component.
    pub fn reachable(&self, a: &Coordinate, b: &Coordinate) -> bool {
        if !self.is_passable(*a) || !self.is_passable(*b) {
            return false;
        }
        let reachable = self
            .components()
            .equiv(self.get_ix(*a), self.get_ix(*b));
        if !reachable {
            info!("{} is not reachable from {}", b, a);
        }
        reachable
    }

    /// Checks if the exit lies on the same component as the start.
    pub fn exit_reachable(&self) -> bool {
        self.reachable(&self.start, &self.exit)
    }

    fn symbol(&self, pos: Coordinate) -> char {
        if pos == self.start {
            'S'
        } else if pos == self.exit {
            'E'
        } else if self.is_passable(pos) {
            '0'
        } else {
            '1'
        }
    }
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s.lines())
    }
}

/// Writes the maze back in the text format accepted by [Maze::parse].
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| self.symbol(Coordinate::new(row, col)))
                    .collect::<String>()
            })
            .join("\n");
        write!(f, "{}", rows)
    }
}
