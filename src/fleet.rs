//! Lengths of enemy ships not yet confirmed sunk.

use alloc::vec::Vec;

use crate::common::TargetingError;
use crate::config::{FLEET_LENGTHS, GRID_SIZE};

/// Ordered multiset of remaining ship lengths. Only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetInventory {
    lengths: Vec<usize>,
}

impl FleetInventory {
    /// The standard five-ship fleet.
    pub fn standard() -> Self {
        Self {
            lengths: FLEET_LENGTHS.to_vec(),
        }
    }

    /// Custom fleet; every length must fit on the board.
    pub fn from_lengths(lengths: &[usize]) -> Result<Self, TargetingError> {
        if let Some(&bad) = lengths.iter().find(|&&l| l == 0 || l > GRID_SIZE) {
            return Err(TargetingError::InvalidShipLength(bad));
        }
        Ok(Self {
            lengths: lengths.to_vec(),
        })
    }

    /// Removes the first entry equal to `length`.
    pub fn remove_if_present(&mut self, length: usize) -> bool {
        match self.lengths.iter().position(|&l| l == length) {
            Some(idx) => {
                self.lengths.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn smallest(&self) -> Option<usize> {
        self.lengths.iter().copied().min()
    }

    pub fn as_multiset(&self) -> &[usize] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl Default for FleetInventory {
    fn default() -> Self {
        Self::standard()
    }
}
