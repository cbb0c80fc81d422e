//! Hunt/target mode tracking and colinear-hit line inference.
//!
//! The tracker owns the unresolved hit cluster and the candidate stack built
//! from it. Mode is derived from the cluster, so `Target` holds exactly while
//! `active_hits` is non-empty.

use alloc::vec::Vec;

use crate::common::Coordinate;
use crate::ledger::ShotLedger;
use crate::ship::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No unresolved hits; search is exploratory.
    Hunt,
    /// Finishing off a partially hit ship.
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Orthogonal neighbour of a lone hit.
    Normal,
    /// Extension of an inferred hit line.
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub coord: Coordinate,
    pub priority: Priority,
}

/// Cluster state consumed by the targeting strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetTracker {
    active_hits: Vec<Coordinate>,
    line_direction: Option<Orientation>,
    candidates: Vec<Candidate>,
}

impl TargetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        if self.active_hits.is_empty() {
            Mode::Hunt
        } else {
            Mode::Target
        }
    }

    pub fn active_hits(&self) -> &[Coordinate] {
        &self.active_hits
    }

    pub fn line_direction(&self) -> Option<Orientation> {
        self.line_direction
    }

    /// Candidate stack, bottom first; the last entry is tried next.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Add a hit to the cluster. `ledger` must already contain `coord`.
    pub fn on_hit(&mut self, coord: Coordinate, ledger: &ShotLedger) {
        self.active_hits.push(coord);
        if self.active_hits.len() >= 2 {
            self.infer_line(coord, ledger);
        } else {
            self.push_neighbors(coord, ledger);
        }
    }

    /// Drop the cluster, its direction and every pending candidate.
    pub fn clear(&mut self) {
        self.active_hits.clear();
        self.line_direction = None;
        self.candidates.clear();
    }

    /// Pop candidates last-in-first-out until one satisfies `is_legal`.
    /// Rejected candidates are discarded.
    pub fn pop_legal<F>(&mut self, mut is_legal: F) -> Option<Candidate>
    where
        F: FnMut(Coordinate) -> bool,
    {
        while let Some(candidate) = self.candidates.pop() {
            if is_legal(candidate.coord) {
                return Some(candidate);
            }
        }
        None
    }

    /// Stable ascending sort by `score`, so the best candidate pops first.
    pub fn rank_by<F>(&mut self, mut score: F)
    where
        F: FnMut(Coordinate) -> u32,
    {
        self.candidates.sort_by_key(|c| score(c.coord));
    }

    fn push_neighbors(&mut self, coord: Coordinate, ledger: &ShotLedger) {
        for next in coord.neighbors() {
            if ledger.has_fired(next) || self.candidates.iter().any(|c| c.coord == next) {
                continue;
            }
            self.candidates.push(Candidate {
                coord: next,
                priority: Priority::Normal,
            });
        }
    }

    /// Orientation comes from the first two hits. The stack is rebuilt as the
    /// two cells just beyond the extreme hits along that axis.
    fn infer_line(&mut self, latest: Coordinate, ledger: &ShotLedger) {
        let (first, second) = (self.active_hits[0], self.active_hits[1]);
        let direction = if first.row() == second.row() {
            Orientation::Horizontal
        } else if first.col() == second.col() {
            Orientation::Vertical
        } else {
            // not a line; keep probing around the newest hit
            self.push_neighbors(latest, ledger);
            return;
        };
        self.line_direction = Some(direction);
        self.candidates.clear();

        let lo = self.active_hits.iter().copied().min_by_key(|&c| direction.position(c));
        let hi = self.active_hits.iter().copied().max_by_key(|&c| direction.position(c));
        let (dr, dc) = direction.step();
        let ends = [
            lo.and_then(|c| c.offset(-dr, -dc)),
            hi.and_then(|c| c.offset(dr, dc)),
        ];
        for end in ends.into_iter().flatten() {
            if !ledger.has_fired(end) {
                self.candidates.push(Candidate {
                    coord: end,
                    priority: Priority::High,
                });
            }
        }
    }
}
