//! Errors raised while loading a maze. Searching has no error channel: an unreachable exit is
//! reported as an absent path.

use std::io;

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Reasons a maze description is rejected. No partial maze is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid character '{character}' at {position}")]
    InvalidCharacter {
        character: char,
        position: Coordinate,
    },

    #[error("more than one start (S) found, the second one at {position}")]
    MultipleStarts { position: Coordinate },

    #[error("more than one exit (E) found, the second one at {position}")]
    MultipleExits { position: Coordinate },

    #[error("no start (S) found")]
    MissingStart,

    #[error("no exit (E) found")]
    MissingExit,

    /// Every row must be as long as the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read maze file: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
