//! Placement-density scoring for the probability-driven tier.
//!
//! Scores are integer placement counts. Cells next to unresolved hits get an
//! extra [`HIT_BOOST`] per placement that could still contain the hit ship.

use alloc::vec::Vec;
use core::fmt;

use crate::board::{BoardQuery, CellGrid};
use crate::common::{CellState, Coordinate};
use crate::config::GRID_SIZE;
use crate::fleet::FleetInventory;
use crate::ledger::ShotLedger;
use crate::ship::{Orientation, Placement};

/// Added per unfired cell of every legal placement through an unresolved
/// hit. Large enough to dominate raw density counts.
pub const HIT_BOOST: u32 = 10;

/// Per-cell score grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatMap {
    scores: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl HeatMap {
    /// Count, for every cell, the legal remaining-ship placements covering it,
    /// then boost cells around unresolved hits. Cells in `ledger` score zero
    /// before the boost and never receive it.
    pub fn compute<B: BoardQuery + ?Sized>(
        board: &B,
        ledger: &ShotLedger,
        fleet: &FleetInventory,
    ) -> Self {
        let grid = board.snapshot();
        let mut scores = [[0u32; GRID_SIZE]; GRID_SIZE];

        for &len in fleet.as_multiset() {
            for orient in Orientation::BOTH {
                for placement in Placement::along(orient, len) {
                    if !is_open(&grid, &placement) {
                        continue;
                    }
                    for cell in placement.cells() {
                        scores[cell.row()][cell.col()] += 1;
                    }
                }
            }
        }

        for cell in ledger.iter() {
            scores[cell.row()][cell.col()] = 0;
        }

        let hits: Vec<Coordinate> = Coordinate::all()
            .filter(|c| grid[c.row()][c.col()] == CellState::Hit)
            .collect();
        if !hits.is_empty() {
            let hint = detect_hit_direction(&hits);
            for &len in fleet.as_multiset() {
                for &hit in &hits {
                    for orient in Orientation::BOTH {
                        if hint.is_some_and(|h| h != orient) {
                            continue;
                        }
                        // every placement from `through` already covers `hit`
                        for placement in Placement::through(hit, orient, len) {
                            if !is_open(&grid, &placement) {
                                continue;
                            }
                            for cell in placement.cells() {
                                if !ledger.has_fired(cell) {
                                    scores[cell.row()][cell.col()] += HIT_BOOST;
                                }
                            }
                        }
                    }
                }
            }
        }

        log::trace!("heat map computed for fleet {:?}", fleet.as_multiset());
        HeatMap { scores }
    }

    #[inline]
    pub fn score(&self, coord: Coordinate) -> u32 {
        self.scores[coord.row()][coord.col()]
    }

    pub fn rows(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.scores
    }

    /// Highest score among `cells` and every cell sharing it, in input order.
    pub fn hottest(&self, cells: &[Coordinate]) -> (u32, Vec<Coordinate>) {
        let max = cells.iter().map(|&c| self.score(c)).max().unwrap_or(0);
        let best = cells.iter().copied().filter(|&c| self.score(c) == max).collect();
        (max, best)
    }
}

/// Shared axis of a set of hits: `None` for fewer than two hits or when they
/// do not all lie on one row or one column.
pub fn detect_hit_direction(hits: &[Coordinate]) -> Option<Orientation> {
    let (first, rest) = hits.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let same_row = rest.iter().all(|h| h.row() == first.row());
    let same_col = rest.iter().all(|h| h.col() == first.col());
    match (same_row, same_col) {
        (true, false) => Some(Orientation::Horizontal),
        (false, true) => Some(Orientation::Vertical),
        _ => None,
    }
}

fn is_open(grid: &CellGrid, placement: &Placement) -> bool {
    placement
        .cells()
        .all(|c| !grid[c.row()][c.col()].blocks_placement())
}

impl fmt::Display for HeatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..GRID_SIZE {
            write!(f, " {:>4}", (b'A' + c as u8) as char)?;
        }
        for (r, row) in self.scores.iter().enumerate() {
            write!(f, "\n{:2} ", r + 1)?;
            for v in row {
                write!(f, " {:>4}", v)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn hit_direction() {
        assert_eq!(
            detect_hit_direction(&[at(5, 3), at(5, 4), at(5, 5)]),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            detect_hit_direction(&[at(3, 5), at(4, 5), at(5, 5)]),
            Some(Orientation::Vertical)
        );
        assert_eq!(detect_hit_direction(&[at(5, 5)]), None);
        assert_eq!(detect_hit_direction(&[at(2, 3), at(5, 7)]), None);
        assert_eq!(detect_hit_direction(&[]), None);
    }

    #[test]
    fn lone_destroyer_density() {
        let grid: CellGrid = [[CellState::Empty; GRID_SIZE]; GRID_SIZE];
        let fleet = FleetInventory::from_lengths(&[2]).unwrap();
        let map = HeatMap::compute(&grid, &ShotLedger::new(), &fleet);
        // corner: one horizontal, one vertical placement
        assert_eq!(map.score(at(0, 0)), 2);
        assert_eq!(map.score(at(5, 5)), 4);
    }

    #[test]
    fn empty_fleet_scores_zero() {
        let grid: CellGrid = [[CellState::Empty; GRID_SIZE]; GRID_SIZE];
        let fleet = FleetInventory::from_lengths(&[]).unwrap();
        let map = HeatMap::compute(&grid, &ShotLedger::new(), &fleet);
        assert!(map.rows().iter().flatten().all(|&v| v == 0));
    }
}
