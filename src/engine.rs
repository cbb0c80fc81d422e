//! The targeting engine: chooses the next coordinate to attack and learns
//! from each outcome.
//!
//! The engine never sees ship positions. It reads public cell states through
//! [`BoardQuery`] and is told the result of each attack through
//! [`TargetingEngine::record_attack`]. Callers must record exactly the move
//! they fired before asking for the next one.

use log::debug;

use crate::board::BoardQuery;
use crate::common::{AttackResult, Coordinate, TargetingError};
use crate::fleet::FleetInventory;
use crate::heatmap::HeatMap;
use crate::ledger::ShotLedger;
use crate::rng::RandomSource;
use crate::ship::Orientation;
use crate::strategy::{Difficulty, Move};
use crate::target::{Candidate, Mode, TargetTracker};

/// Mutable knowledge shared by every difficulty tier.
#[derive(Debug, Clone)]
pub(crate) struct TargetingState {
    pub(crate) ledger: ShotLedger,
    pub(crate) fleet: FleetInventory,
    pub(crate) tracker: TargetTracker,
    pub(crate) rng: RandomSource,
}

impl TargetingState {
    fn new(fleet: FleetInventory, rng: RandomSource) -> Self {
        Self {
            ledger: ShotLedger::new(),
            fleet,
            tracker: TargetTracker::new(),
            rng,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TargetingEngine {
    difficulty: Difficulty,
    state: TargetingState,
    full_fleet: FleetInventory,
    fixed_seed: Option<u64>,
}

impl TargetingEngine {
    /// Engine for the standard fleet, seeded from entropy.
    #[cfg(feature = "std")]
    pub fn new(difficulty: Difficulty) -> Self {
        let fleet = FleetInventory::standard();
        Self {
            difficulty,
            state: TargetingState::new(fleet.clone(), RandomSource::from_entropy()),
            full_fleet: fleet,
            fixed_seed: None,
        }
    }

    /// Deterministic engine for the standard fleet.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        let fleet = FleetInventory::standard();
        Self {
            difficulty,
            state: TargetingState::new(fleet.clone(), RandomSource::new(seed)),
            full_fleet: fleet,
            fixed_seed: Some(seed),
        }
    }

    /// Deterministic engine hunting a custom fleet.
    pub fn with_fleet(
        difficulty: Difficulty,
        seed: u64,
        lengths: &[usize],
    ) -> Result<Self, TargetingError> {
        let fleet = FleetInventory::from_lengths(lengths)?;
        Ok(Self {
            difficulty,
            state: TargetingState::new(fleet.clone(), RandomSource::new(seed)),
            full_fleet: fleet,
            fixed_seed: Some(seed),
        })
    }

    /// Next coordinate to attack, or `None` once every cell is resolved.
    pub fn get_next_move<B: BoardQuery + ?Sized>(&mut self, board: &B) -> Option<Coordinate> {
        self.next_move(board).map(|m| m.coord)
    }

    /// Like [`get_next_move`](Self::get_next_move), with the reason for the
    /// choice.
    pub fn next_move<B: BoardQuery + ?Sized>(&mut self, board: &B) -> Option<Move> {
        let chosen = self.difficulty.select_move(&mut self.state, board);
        match chosen {
            Some(mv) => debug!("[{}] {} ({})", self.difficulty, mv.coord, mv.reason),
            None => debug!("[{}] no cells left", self.difficulty),
        }
        chosen
    }

    /// Learn from the outcome of firing at `coord`.
    pub fn record_attack(&mut self, coord: Coordinate, result: AttackResult) {
        let state = &mut self.state;
        if !state.ledger.record(coord) {
            debug!("{} recorded twice", coord);
        }
        match result {
            AttackResult::Miss => {}
            AttackResult::Hit => {
                let was = state.tracker.mode();
                state.tracker.on_hit(coord, &state.ledger);
                if was == Mode::Hunt {
                    debug!("hit at {}, entering target mode", coord);
                }
            }
            AttackResult::Sunk { length } => {
                if let Some(len) = length {
                    if !state.fleet.remove_if_present(len) {
                        debug!("sunk ship of length {} was not in the inventory", len);
                    }
                }
                state.tracker.clear();
                debug!(
                    "ship sunk at {}, back to hunt mode; remaining {:?}",
                    coord,
                    state.fleet.as_multiset()
                );
            }
        }
    }

    /// Fresh hunt state with the full fleet and an empty ledger. The RNG
    /// restarts from the fixed seed if one was set, otherwise from entropy.
    pub fn reset(&mut self) {
        let rng = match self.fixed_seed {
            Some(seed) => RandomSource::new(seed),
            None => Self::fresh_rng(&mut self.state.rng),
        };
        self.state = TargetingState::new(self.full_fleet.clone(), rng);
    }

    #[cfg(feature = "std")]
    fn fresh_rng(_current: &mut RandomSource) -> RandomSource {
        RandomSource::from_entropy()
    }

    #[cfg(not(feature = "std"))]
    fn fresh_rng(current: &mut RandomSource) -> RandomSource {
        use rand::RngCore;
        RandomSource::new(current.next_u32() as u64)
    }

    /// Switch tiers; accumulated knowledge is kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Reseed now and on every later [`reset`](Self::reset).
    pub fn set_seed(&mut self, seed: u64) {
        self.fixed_seed = Some(seed);
        self.state.rng.reseed(seed);
    }

    pub fn mode(&self) -> Mode {
        self.state.tracker.mode()
    }

    pub fn active_hits(&self) -> &[Coordinate] {
        self.state.tracker.active_hits()
    }

    pub fn line_direction(&self) -> Option<Orientation> {
        self.state.tracker.line_direction()
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.state.tracker.candidates()
    }

    pub fn ledger(&self) -> &ShotLedger {
        &self.state.ledger
    }

    pub fn fleet(&self) -> &FleetInventory {
        &self.state.fleet
    }

    /// Heat map as the probability tier would see `board` right now.
    pub fn heat_map<B: BoardQuery + ?Sized>(&self, board: &B) -> HeatMap {
        HeatMap::compute(board, &self.state.ledger, &self.state.fleet)
    }
}
