#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod engine;
mod fleet;
mod harness;
mod heatmap;
mod ledger;
#[cfg(feature = "std")]
mod logging;
mod rng;
mod ship;
mod strategy;
mod target;

pub use bitboard::{BitBoard, GridBits, Word};
pub use board::*;
pub use common::*;
pub use config::*;
pub use engine::TargetingEngine;
pub use fleet::FleetInventory;
pub use harness::{play_out, GameReport};
pub use heatmap::{detect_hit_direction, HeatMap, HIT_BOOST};
pub use ledger::ShotLedger;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use rng::RandomSource;
pub use ship::*;
pub use strategy::{Difficulty, Move, MoveReason};
pub use target::{Candidate, Mode, Priority, TargetTracker};
