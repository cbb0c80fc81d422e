//! Board query capability and the reference board used by tests and the
//! simulator.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::bitboard::GridBits;
use crate::common::{AttackResult, BoardError, CellState, Coordinate};
use crate::config::{GRID_SIZE, SHIPS};
use crate::ship::{Orientation, Placement, Ship, ShipType};

/// Plain grid of cell states, row-major.
pub type CellGrid = [[CellState; GRID_SIZE]; GRID_SIZE];

/// Read-only view of the opponent grid.
pub trait BoardQuery {
    fn cell_state(&self, coord: Coordinate) -> CellState;

    /// The whole grid, one `cell_state` call per cell.
    fn snapshot(&self) -> CellGrid {
        let mut grid = [[CellState::Empty; GRID_SIZE]; GRID_SIZE];
        for coord in Coordinate::all() {
            grid[coord.row()][coord.col()] = self.cell_state(coord);
        }
        grid
    }
}

impl BoardQuery for CellGrid {
    fn cell_state(&self, coord: Coordinate) -> CellState {
        self[coord.row()][coord.col()]
    }

    fn snapshot(&self) -> CellGrid {
        *self
    }
}

/// Board owning real ship positions. Answers attacks the way a game host
/// would and exposes cell states through [`BoardQuery`].
#[derive(Clone)]
pub struct OceanBoard {
    ship_types: Vec<ShipType>,
    ships: Vec<Option<Ship>>,
    ship_map: GridBits,
    hits: GridBits,
    misses: GridBits,
    sunk: GridBits,
}

impl OceanBoard {
    /// Empty board expecting the standard fleet.
    pub fn new() -> Self {
        Self::with_ships(&SHIPS)
    }

    pub fn with_ships(ship_types: &[ShipType]) -> Self {
        OceanBoard {
            ship_types: ship_types.to_vec(),
            ships: ship_types.iter().map(|_| None).collect(),
            ship_map: GridBits::new(),
            hits: GridBits::new(),
            misses: GridBits::new(),
            sunk: GridBits::new(),
        }
    }

    /// Place a single ship by index.
    pub fn place(
        &mut self,
        ship_index: usize,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let def = *self.ship_types.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(def, Placement::new(start, orientation, def.length())?)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random non-overlapping placement for `ship_index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<Placement, BoardError> {
        let def = *self.ship_types.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        let len = def.length();
        if len == 0 || len > GRID_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..100 {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - len),
                Orientation::Vertical => (GRID_SIZE - len, GRID_SIZE - 1),
            };
            let start = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c))
                .map_err(|_| BoardError::ShipOutOfBounds)?;
            let placement = Placement::new(start, orient, len)?;
            if (self.ship_map & placement.mask()).is_empty() {
                return Ok(placement);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Randomly place every ship that is not yet on the board.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..self.ship_types.len() {
            if self.ships[i].is_some() {
                continue;
            }
            let placement = self.random_placement(rng, i)?;
            self.place(i, placement.start(), placement.orientation())?;
        }
        Ok(())
    }

    /// Process an attack. A sinking shot turns the whole ship to `Sunk` and
    /// reports its length.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<AttackResult, BoardError> {
        if self.cell_state(coord).is_resolved() {
            return Err(BoardError::AlreadyAttacked);
        }
        if !self.ship_map.contains(coord) {
            self.misses.mark(coord);
            return Ok(AttackResult::Miss);
        }
        self.hits.mark(coord);
        let ship = self
            .ships
            .iter_mut()
            .flatten()
            .find(|s| s.contains(coord))
            .ok_or(BoardError::InvalidIndex)?;
        ship.register_hit(coord);
        if ship.is_sunk() {
            self.sunk |= ship.mask();
            return Ok(AttackResult::Sunk {
                length: Some(ship.ship_type().length()),
            });
        }
        Ok(AttackResult::Hit)
    }

    /// `true` once at least one ship is placed and every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        let mut placed = self.ships.iter().flatten().peekable();
        placed.peek().is_some() && placed.all(|s| s.is_sunk())
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn ship_map(&self) -> GridBits {
        self.ship_map
    }
}

impl Default for OceanBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardQuery for OceanBoard {
    fn cell_state(&self, coord: Coordinate) -> CellState {
        if self.sunk.contains(coord) {
            CellState::Sunk
        } else if self.hits.contains(coord) {
            CellState::Hit
        } else if self.misses.contains(coord) {
            CellState::Miss
        } else if self.ship_map.contains(coord) {
            CellState::Ship
        } else {
            CellState::Empty
        }
    }
}

impl fmt::Display for OceanBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..GRID_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        for coord in Coordinate::all() {
            if coord.col() == 0 {
                write!(f, "\n{:2} ", coord.row() + 1)?;
            }
            let ch = match self.cell_state(coord) {
                CellState::Empty => '.',
                CellState::Ship => 'S',
                CellState::Hit => 'X',
                CellState::Miss => 'o',
                CellState::Sunk => '#',
            };
            write!(f, " {}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for OceanBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OceanBoard")
            .field("ships", &self.ships)
            .field("hits", &self.hits.count_ones())
            .field("misses", &self.misses.count_ones())
            .finish()
    }
}
