//! Ship definitions and placement geometry.

use core::fmt;

use crate::bitboard::GridBits;
use crate::common::{BoardError, Coordinate};
use crate::config::GRID_SIZE;

/// Orientation of a ship on the board, also the axis of an inferred hit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Row/column delta of one step along the axis.
    #[inline]
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// Position of `coord` along this axis.
    #[inline]
    pub fn position(self, coord: Coordinate) -> usize {
        match self {
            Orientation::Horizontal => coord.col(),
            Orientation::Vertical => coord.row(),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A run of `length` consecutive cells starting at `start`. Only in-bounds
/// placements can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    start: Coordinate,
    orientation: Orientation,
    length: usize,
}

impl Placement {
    pub fn new(
        start: Coordinate,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 || orientation.position(start) + length > GRID_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Self {
            start,
            orientation,
            length,
        })
    }

    /// Every in-bounds placement of `length` along `orientation`.
    pub fn along(orientation: Orientation, length: usize) -> impl Iterator<Item = Placement> {
        Coordinate::all().filter_map(move |start| Placement::new(start, orientation, length).ok())
    }

    /// In-bounds placements along `orientation` whose span includes `cell`.
    pub fn through(
        cell: Coordinate,
        orientation: Orientation,
        length: usize,
    ) -> impl Iterator<Item = Placement> {
        let (dr, dc) = orientation.step();
        let back = orientation.position(cell).min(length.saturating_sub(1));
        (0..=back).rev().filter_map(move |k| {
            let k = k as isize;
            cell.offset(-dr * k, -dc * k)
                .and_then(|start| Placement::new(start, orientation, length).ok())
        })
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells covered, from `start` along the axis.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let start = self.start;
        (0..self.length as isize).filter_map(move |k| start.offset(dr * k, dc * k))
    }

    pub fn mask(&self) -> GridBits {
        let mut mask = GridBits::new();
        for cell in self.cells() {
            mask.mark(cell);
        }
        mask
    }
}

/// A ship placed on the reference board, with hits tracked in a bitboard.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    placement: Placement,
    mask: GridBits,
    hits: GridBits,
}

impl Ship {
    pub fn new(ship_type: ShipType, placement: Placement) -> Result<Self, BoardError> {
        if placement.length() != ship_type.length() {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            ship_type,
            placement,
            mask: placement.mask(),
            hits: GridBits::new(),
        })
    }

    /// Register a hit if `coord` belongs to this ship.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        if self.mask.contains(coord) {
            self.hits.mark(coord);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.mask.contains(coord)
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn mask(&self) -> GridBits {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.placement.start(),
            self.placement.orientation(),
            self.hits.count_ones(),
        )
    }
}
