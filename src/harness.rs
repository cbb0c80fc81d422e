//! Self-play loop pitting an engine against a reference board.

use alloc::vec::Vec;

use crate::board::OceanBoard;
use crate::common::{AttackResult, BoardError, Coordinate};
use crate::engine::TargetingEngine;
use crate::strategy::Difficulty;

/// Summary of one played-out game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameReport {
    pub difficulty: Difficulty,
    pub shots: usize,
    pub hits: usize,
    pub ships_sunk: usize,
    /// Every ship went down within the turn limit.
    pub completed: bool,
    pub moves: Vec<Coordinate>,
}

/// Alternate `get_next_move`, `receive_attack` and `record_attack` until the
/// fleet is sunk, the engine runs out of cells, or `max_turns` shots.
pub fn play_out(
    engine: &mut TargetingEngine,
    board: &mut OceanBoard,
    max_turns: usize,
) -> Result<GameReport, BoardError> {
    let mut report = GameReport {
        difficulty: engine.difficulty(),
        shots: 0,
        hits: 0,
        ships_sunk: 0,
        completed: false,
        moves: Vec::new(),
    };
    while report.shots < max_turns && !board.all_sunk() {
        let Some(coord) = engine.get_next_move(&*board) else {
            break;
        };
        let result = board.receive_attack(coord)?;
        engine.record_attack(coord, result);
        report.shots += 1;
        report.moves.push(coord);
        match result {
            AttackResult::Hit => report.hits += 1,
            AttackResult::Sunk { .. } => {
                report.hits += 1;
                report.ships_sunk += 1;
            }
            AttackResult::Miss => {}
        }
    }
    report.completed = board.all_sunk();
    log::debug!(
        "[{}] game over after {} shots, completed={}",
        report.difficulty,
        report.shots,
        report.completed
    );
    Ok(report)
}
