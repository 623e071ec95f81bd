//! Board Topology
//!
//! The fixed 10×10 track: which squares hold a ladder or a snake, and how
//! square numbers are laid out on the serpentine grid.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A square on the track. 0 is the off-board start, 100 the finish.
pub type Square = u8;

/// Squares per row and rows per board.
pub const BOARD_SIDE: u8 = 10;

/// The finishing square. Must be reached exactly.
pub const FINAL_SQUARE: Square = 100;

/// Position of a token that has not entered the board yet.
pub const START_SQUARE: Square = 0;

/// Every special square as `(source, destination)`.
///
/// Ladders first, then snakes. No destination is itself a source.
pub const SPECIAL_SQUARES: [(Square, Square); 14] = [
    // Ladders
    (4, 14),
    (9, 31),
    (20, 38),
    (28, 84),
    (40, 59),
    (51, 67),
    (63, 81),
    // Snakes
    (17, 7),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (99, 78),
];

/// What happens when a token lands on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SquareKind {
    /// Nothing happens.
    Plain,
    /// Climb up to `to`.
    Ladder {
        /// Ladder top.
        to: Square,
    },
    /// Slide down to `to`.
    Snake {
        /// Snake tail.
        to: Square,
    },
}

/// Where a special square sends a token, if anywhere.
pub fn destination_of(square: Square) -> Option<Square> {
    SPECIAL_SQUARES
        .iter()
        .find(|(from, _)| *from == square)
        .map(|(_, to)| *to)
}

/// Classify a square for rendering and rule resolution.
pub fn square_kind(square: Square) -> SquareKind {
    match destination_of(square) {
        Some(to) if to > square => SquareKind::Ladder { to },
        Some(to) => SquareKind::Snake { to },
        None => SquareKind::Plain,
    }
}

/// All ladders as `(foot, top)`.
pub fn ladders() -> impl Iterator<Item = (Square, Square)> {
    SPECIAL_SQUARES.iter().copied().filter(|(from, to)| to > from)
}

/// All snakes as `(head, tail)`.
pub fn snakes() -> impl Iterator<Item = (Square, Square)> {
    SPECIAL_SQUARES.iter().copied().filter(|(from, to)| to < from)
}

// =============================================================================
// GRID LAYOUT
// =============================================================================

/// Square number shown at zero-based `(row, col)`, row 0 being the top.
///
/// Even rows run right-to-left from 100, odd rows left-to-right, so row 0
/// holds 91–100 and row 9 holds 1–10. Both `row` and `col` must be below
/// [`BOARD_SIDE`].
pub fn cell_number(row: u8, col: u8) -> Square {
    debug_assert!(
        row < BOARD_SIDE && col < BOARD_SIDE,
        "cell ({row}, {col}) is off the grid"
    );
    if row % 2 == 0 {
        FINAL_SQUARE - row * BOARD_SIDE - col
    } else {
        FINAL_SQUARE - row * BOARD_SIDE - (BOARD_SIDE - 1) + col
    }
}

/// Inverse of [`cell_number`]: where a square is drawn.
///
/// Returns `None` for the off-board start square and anything past 100.
pub fn cell_coords(square: Square) -> Option<(u8, u8)> {
    if square == START_SQUARE || square > FINAL_SQUARE {
        return None;
    }
    let from_top = FINAL_SQUARE - square;
    let row = from_top / BOARD_SIDE;
    let offset = from_top % BOARD_SIDE;
    let col = if row % 2 == 0 { offset } else { BOARD_SIDE - 1 - offset };
    Some((row, col))
}

/// The board as display rows, top row first, each in left-to-right order.
pub fn rows() -> impl Iterator<Item = [Square; BOARD_SIDE as usize]> {
    (0..BOARD_SIDE).map(|row| {
        let mut squares = [0; BOARD_SIDE as usize];
        for (col, square) in (0..BOARD_SIDE).zip(squares.iter_mut()) {
            *square = cell_number(row, col);
        }
        squares
    })
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Problems the special-square table can have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// A source or destination lies outside 1..=100.
    #[error("square {0} is off the board")]
    OffBoard(Square),

    /// A square maps to itself.
    #[error("square {0} maps to itself")]
    SelfLoop(Square),

    /// A source appears twice.
    #[error("square {0} has more than one destination")]
    DuplicateSource(Square),

    /// Landing on a destination would trigger another jump.
    #[error("destination {to} of square {from} is itself special")]
    Chained {
        /// Special square.
        from: Square,
        /// Its destination, also special.
        to: Square,
    },
}

/// Check the fixed table against the topology invariants.
pub fn validate_topology() -> Result<(), TopologyError> {
    validate_table(&SPECIAL_SQUARES)
}

fn validate_table(table: &[(Square, Square)]) -> Result<(), TopologyError> {
    for (i, &(from, to)) in table.iter().enumerate() {
        for square in [from, to] {
            if square == START_SQUARE || square > FINAL_SQUARE {
                return Err(TopologyError::OffBoard(square));
            }
        }
        if from == to {
            return Err(TopologyError::SelfLoop(from));
        }
        if table[..i].iter().any(|(other, _)| *other == from) {
            return Err(TopologyError::DuplicateSource(from));
        }
        if table.iter().any(|(other, _)| *other == to) {
            return Err(TopologyError::Chained { from, to });
        }
    }
    Ok(())
}
