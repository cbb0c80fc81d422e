//! Common types for the targeting engine: coordinates, cell states, attack
//! outcomes and the error enums shared by the engine and the reference board.

use core::fmt;
use core::str::FromStr;

use crate::config::GRID_SIZE;

/// A cell on the 10×10 grid. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Validating constructor; out-of-range input is a caller defect.
    pub fn new(row: usize, col: usize) -> Result<Self, TargetingError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(TargetingError::CoordinateOutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Packed key `row * N + col`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= GRID_SIZE * GRID_SIZE {
            return None;
        }
        Some(Self {
            row: (index / GRID_SIZE) as u8,
            col: (index % GRID_SIZE) as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.row() * GRID_SIZE + self.col()
    }

    /// The cell `(row + dr, col + dc)` if it lies on the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize).ok()
    }

    /// Orthogonal neighbours that stay on the board: up, down, left, right.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE * GRID_SIZE).filter_map(Coordinate::from_index)
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row().abs_diff(other.row()) + self.col().abs_diff(other.col())
    }
}

/// Classic label: column letter then 1-based row, e.g. `(4, 1)` is `B5`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Coordinate {
    type Err = TargetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or(TargetingError::InvalidLabel)?;
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| TargetingError::InvalidLabel)?;
        if row == 0 {
            return Err(TargetingError::InvalidLabel);
        }
        Coordinate::new(row - 1, col)
    }
}

/// Publicly visible state of a cell as reported by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellState {
    #[default]
    Empty,
    /// Un-hit ship segment. Treated exactly like `Empty` by the engine.
    Ship,
    Hit,
    Miss,
    Sunk,
}

impl CellState {
    /// Hit, Miss or Sunk: there is nothing left to learn by firing here.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::Sunk)
    }

    /// Cells no remaining ship can occupy.
    pub fn blocks_placement(self) -> bool {
        matches!(self, CellState::Miss | CellState::Sunk)
    }
}

/// Outcome of an attack, the only channel from the board to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackResult {
    Miss,
    Hit,
    /// The shot completed a ship. `length` is `None` when the board does not
    /// disclose which ship went down.
    Sunk { length: Option<usize> },
}

/// Errors raised by the engine for contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingError {
    /// Row or column outside `[0, BOARD_SIZE)`.
    CoordinateOutOfBounds { row: usize, col: usize },
    /// Fleet entry of length zero or longer than the board.
    InvalidShipLength(usize),
    /// Text is not a classic coordinate label such as `B7`.
    InvalidLabel,
    /// Unknown difficulty name.
    UnknownDifficulty,
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::CoordinateOutOfBounds { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
            TargetingError::InvalidShipLength(len) => {
                write!(f, "Invalid ship length {} for a {}x{} board", len, GRID_SIZE, GRID_SIZE)
            }
            TargetingError::InvalidLabel => write!(f, "Expected a label like B7"),
            TargetingError::UnknownDifficulty => {
                write!(f, "Unknown difficulty (expected easy, normal, hard or probability)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}

/// Errors returned by the reference board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Cell was already attacked.
    AlreadyAttacked,
    /// Unable to place ship (random placement gave up).
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyAttacked => write!(f, "Cell was already attacked"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
