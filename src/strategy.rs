//! Per-difficulty move selection.
//!
//! Every tier shares the ledger, fleet and target tracker; they differ only
//! in how a cell is chosen.
//!
//! - `Easy` ignores the mode and fires uniformly at random.
//! - `Normal` consumes the candidate stack in target mode and otherwise fires
//!   at random.
//! - `Hard` targets like `Normal` and hunts on the parity lattice
//!   `(row + col) % smallest == 0`.
//! - `Probability` hunts on the placement heat map and ranks the candidate
//!   stack by heat before consuming it.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::board::BoardQuery;
use crate::common::{Coordinate, TargetingError};
use crate::engine::TargetingState;
use crate::heatmap::HeatMap;
use crate::target::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Probability,
}

/// Why a cell was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    Random,
    FollowUp,
    HuntRandom,
    Parity { smallest: usize },
    ParityFallback,
    Density { score: u32 },
    DensityFallback,
}

impl fmt::Display for MoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveReason::Random => write!(f, "Random shot"),
            MoveReason::FollowUp => write!(f, "Target mode: following up on hit"),
            MoveReason::HuntRandom => write!(f, "Hunt mode: random search"),
            MoveReason::Parity { smallest } => {
                write!(f, "Hunt mode: parity pattern (smallest ship: {})", smallest)
            }
            MoveReason::ParityFallback => write!(f, "Hunt mode: fallback to available cell"),
            MoveReason::Density { score } => write!(f, "Hunt mode: placement density {}", score),
            MoveReason::DensityFallback => write!(f, "Hunt mode: no placement fits, random search"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub coord: Coordinate,
    pub reason: MoveReason,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Probability,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Probability => "probability",
        }
    }

    /// Choose the next cell, or `None` when nothing is left to fire at.
    pub(crate) fn select_move<B: BoardQuery + ?Sized>(
        self,
        state: &mut TargetingState,
        board: &B,
    ) -> Option<Move> {
        match self {
            Difficulty::Easy => random_move(state, board, MoveReason::Random),
            Difficulty::Normal => follow_up(state, board)
                .or_else(|| random_move(state, board, MoveReason::HuntRandom)),
            Difficulty::Hard => follow_up(state, board).or_else(|| parity_hunt(state, board)),
            Difficulty::Probability => {
                ranked_follow_up(state, board).or_else(|| density_hunt(state, board))
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = TargetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(TargetingError::UnknownDifficulty)
    }
}

/// Not fired by us and not already resolved on the board.
fn is_available<B: BoardQuery + ?Sized>(
    state: &TargetingState,
    board: &B,
    coord: Coordinate,
) -> bool {
    !state.ledger.has_fired(coord) && !board.cell_state(coord).is_resolved()
}

fn available_cells<B: BoardQuery + ?Sized>(
    state: &TargetingState,
    board: &B,
) -> Vec<Coordinate> {
    Coordinate::all()
        .filter(|&c| is_available(state, board, c))
        .collect()
}

fn random_move<B: BoardQuery + ?Sized>(
    state: &mut TargetingState,
    board: &B,
    reason: MoveReason,
) -> Option<Move> {
    let cells = available_cells(state, board);
    let coord = *state.rng.pick(&cells)?;
    Some(Move { coord, reason })
}

fn follow_up<B: BoardQuery + ?Sized>(state: &mut TargetingState, board: &B) -> Option<Move> {
    if state.tracker.mode() != Mode::Target {
        return None;
    }
    let TargetingState { ledger, tracker, .. } = state;
    let candidate =
        tracker.pop_legal(|c| !ledger.has_fired(c) && !board.cell_state(c).is_resolved())?;
    Some(Move {
        coord: candidate.coord,
        reason: MoveReason::FollowUp,
    })
}

fn ranked_follow_up<B: BoardQuery + ?Sized>(
    state: &mut TargetingState,
    board: &B,
) -> Option<Move> {
    if state.tracker.mode() != Mode::Target || state.tracker.candidates().is_empty() {
        return None;
    }
    let heat = HeatMap::compute(board, &state.ledger, &state.fleet);
    state.tracker.rank_by(|c| heat.score(c));
    follow_up(state, board)
}

fn parity_hunt<B: BoardQuery + ?Sized>(state: &mut TargetingState, board: &B) -> Option<Move> {
    let cells = available_cells(state, board);
    if let Some(smallest) = state.fleet.smallest() {
        let lattice: Vec<Coordinate> = cells
            .iter()
            .copied()
            .filter(|c| (c.row() + c.col()) % smallest == 0)
            .collect();
        if let Some(&coord) = state.rng.pick(&lattice) {
            return Some(Move {
                coord,
                reason: MoveReason::Parity { smallest },
            });
        }
    }
    let coord = *state.rng.pick(&cells)?;
    Some(Move {
        coord,
        reason: MoveReason::ParityFallback,
    })
}

fn density_hunt<B: BoardQuery + ?Sized>(state: &mut TargetingState, board: &B) -> Option<Move> {
    let cells = available_cells(state, board);
    let heat = HeatMap::compute(board, &state.ledger, &state.fleet);
    log::trace!("heat map:\n{}", heat);
    let (score, best) = heat.hottest(&cells);
    if score > 0 {
        let coord = *state.rng.pick(&best)?;
        return Some(Move {
            coord,
            reason: MoveReason::Density { score },
        });
    }
    let coord = *state.rng.pick(&cells)?;
    Some(Move {
        coord,
        reason: MoveReason::DensityFallback,
    })
}
