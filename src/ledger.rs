//! Record of every coordinate this engine has fired at.

use crate::bitboard::GridBits;
use crate::common::Coordinate;
use crate::config::GRID_SIZE;

/// Packed `N*N` bitset; grows monotonically until [`ShotLedger::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotLedger {
    fired: GridBits,
}

impl ShotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_fired(&self, coord: Coordinate) -> bool {
        self.fired.contains(coord)
    }

    /// Idempotent; returns `true` when the coordinate was not recorded before.
    pub fn record(&mut self, coord: Coordinate) -> bool {
        self.fired.mark(coord)
    }

    pub fn fired_count(&self) -> usize {
        self.fired.count_ones()
    }

    /// Cells not yet fired upon.
    pub fn remaining_count(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.fired_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.fired.coordinates()
    }

    pub fn clear(&mut self) {
        self.fired.clear_all();
    }
}
