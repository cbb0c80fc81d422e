use std::collections::HashSet;

use battleship_targeting::{
    AttackResult, CellGrid, CellState, Coordinate, Difficulty, Mode, MoveReason, OceanBoard,
    Orientation, Priority, TargetingEngine, GRID_SIZE,
};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

fn empty_grid() -> CellGrid {
    [[CellState::Empty; GRID_SIZE]; GRID_SIZE]
}

fn candidate_set(engine: &TargetingEngine) -> HashSet<Coordinate> {
    engine.candidates().iter().map(|c| c.coord).collect()
}

#[test]
fn starts_in_hunt_mode() {
    let engine = TargetingEngine::with_seed(Difficulty::Normal, 12345);
    assert_eq!(engine.mode(), Mode::Hunt);
    assert!(engine.active_hits().is_empty());
    assert_eq!(engine.fleet().as_multiset(), &[5, 4, 3, 3, 2]);
    assert_eq!(engine.ledger().fired_count(), 0);
}

#[test]
fn never_repeats_on_a_full_sweep() {
    for difficulty in Difficulty::ALL {
        let mut engine = TargetingEngine::with_seed(difficulty, 99);
        let mut board = OceanBoard::with_ships(&[]);
        let mut seen = HashSet::new();
        for _ in 0..GRID_SIZE * GRID_SIZE {
            let coord = engine.get_next_move(&board).expect("cells remain");
            assert!(seen.insert(coord), "{} repeated {}", difficulty, coord);
            let result = board.receive_attack(coord).unwrap();
            engine.record_attack(coord, result);
        }
        assert_eq!(engine.get_next_move(&board), None);
        assert_eq!(engine.ledger().remaining_count(), 0);
    }
}

#[test]
fn hit_switches_to_target_and_seeds_neighbors() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Normal, 12345);
    engine.record_attack(at(0, 0), AttackResult::Hit);
    assert_eq!(engine.mode(), Mode::Target);
    assert_eq!(candidate_set(&engine), HashSet::from([at(1, 0), at(0, 1)]));
    assert!(engine.candidates().iter().all(|c| c.priority == Priority::Normal));
}

#[test]
fn line_endpoint_extension() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Normal, 1);
    engine.record_attack(at(5, 5), AttackResult::Hit);
    engine.record_attack(at(5, 6), AttackResult::Hit);
    assert_eq!(engine.line_direction(), Some(Orientation::Horizontal));
    assert_eq!(candidate_set(&engine), HashSet::from([at(5, 4), at(5, 7)]));
    assert!(engine.candidates().iter().all(|c| c.priority == Priority::High));

    // the most recently pushed extension is tried first
    let grid = empty_grid();
    let mv = engine.next_move(&grid).unwrap();
    assert_eq!(mv.coord, at(5, 7));
    assert_eq!(mv.reason, MoveReason::FollowUp);
}

#[test]
fn line_extension_skips_fired_cells() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Hard, 1);
    engine.record_attack(at(2, 4), AttackResult::Miss);
    engine.record_attack(at(3, 4), AttackResult::Hit);
    engine.record_attack(at(4, 4), AttackResult::Hit);
    assert_eq!(engine.line_direction(), Some(Orientation::Vertical));
    assert_eq!(candidate_set(&engine), HashSet::from([at(5, 4)]));
}

#[test]
fn sunk_resets_cluster() {
    let mut engine = TargetingEngine::with_fleet(Difficulty::Normal, 3, &[2]).unwrap();
    engine.record_attack(at(0, 0), AttackResult::Hit);
    engine.record_attack(at(0, 1), AttackResult::Sunk { length: Some(2) });
    assert_eq!(engine.mode(), Mode::Hunt);
    assert!(engine.active_hits().is_empty());
    assert_eq!(engine.line_direction(), None);
    assert!(engine.candidates().is_empty());
    assert!(engine.fleet().as_multiset().is_empty());
}

#[test]
fn inventory_shrinks_only_on_known_sinks() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Normal, 5);
    engine.record_attack(at(0, 0), AttackResult::Miss);
    engine.record_attack(at(1, 1), AttackResult::Hit);
    assert_eq!(engine.fleet().len(), 5);
    engine.record_attack(at(1, 2), AttackResult::Sunk { length: Some(3) });
    assert_eq!(engine.fleet().len(), 4);
    engine.record_attack(at(3, 3), AttackResult::Sunk { length: Some(3) });
    assert_eq!(engine.fleet().as_multiset(), &[5, 4, 2]);
    engine.record_attack(at(5, 5), AttackResult::Sunk { length: Some(3) });
    assert_eq!(engine.fleet().len(), 3);
    engine.record_attack(at(7, 7), AttackResult::Sunk { length: None });
    assert_eq!(engine.fleet().len(), 3);
    assert_eq!(engine.mode(), Mode::Hunt);
}

#[test]
fn exhausted_candidates_fall_back_without_clearing_cluster() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Normal, 8);
    engine.record_attack(at(5, 5), AttackResult::Hit);
    for n in [at(4, 5), at(6, 5), at(5, 4), at(5, 6)] {
        engine.record_attack(n, AttackResult::Miss);
    }
    let mv = engine.next_move(&empty_grid()).unwrap();
    assert_eq!(mv.reason, MoveReason::HuntRandom);
    assert_eq!(engine.mode(), Mode::Target);
    assert_eq!(engine.active_hits(), &[at(5, 5)]);
}

#[test]
fn candidates_resolved_on_the_board_are_discarded() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Normal, 8);
    engine.record_attack(at(0, 0), AttackResult::Hit);
    let mut grid = empty_grid();
    grid[0][1] = CellState::Miss;
    let mv = engine.next_move(&grid).unwrap();
    assert_eq!(mv.coord, at(1, 0));
    assert!(engine.candidates().is_empty());
}

#[test]
fn easy_ignores_target_mode() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Easy, 12345);
    engine.record_attack(at(0, 0), AttackResult::Hit);
    let mv = engine.next_move(&empty_grid()).unwrap();
    assert_eq!(mv.reason, MoveReason::Random);
    assert_eq!(mv.reason.to_string(), "Random shot");
}

#[test]
fn hard_hunts_on_parity_lattice() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Hard, 12345);
    let mut board = OceanBoard::with_ships(&[]);
    let even = (GRID_SIZE * GRID_SIZE) / 2;
    for i in 0..GRID_SIZE * GRID_SIZE {
        let mv = engine.next_move(&board).unwrap();
        let parity = (mv.coord.row() + mv.coord.col()) % 2;
        if i < even {
            assert_eq!(parity, 0, "shot {} at {}", i, mv.coord);
            assert_eq!(mv.reason, MoveReason::Parity { smallest: 2 });
        } else {
            assert_eq!(parity, 1, "shot {} at {}", i, mv.coord);
            assert_eq!(mv.reason, MoveReason::ParityFallback);
        }
        let result = board.receive_attack(mv.coord).unwrap();
        engine.record_attack(mv.coord, result);
    }
}

#[test]
fn hard_parity_follows_smallest_remaining_ship() {
    let mut engine = TargetingEngine::with_fleet(Difficulty::Hard, 4, &[3, 2]).unwrap();
    engine.record_attack(at(9, 9), AttackResult::Sunk { length: Some(2) });
    let grid = empty_grid();
    for _ in 0..20 {
        let mv = engine.next_move(&grid).unwrap();
        assert_eq!((mv.coord.row() + mv.coord.col()) % 3, 0);
        assert_eq!(
            mv.reason.to_string(),
            "Hunt mode: parity pattern (smallest ship: 3)"
        );
        engine.record_attack(mv.coord, AttackResult::Miss);
    }
}

#[test]
fn probability_hunt_picks_hottest_cell() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Probability, 77);
    let grid = empty_grid();
    let heat = engine.heat_map(&grid);
    let max = heat.rows().iter().flatten().copied().max().unwrap();
    let mv = engine.next_move(&grid).unwrap();
    assert_eq!(heat.score(mv.coord), max);
    assert_eq!(mv.reason, MoveReason::Density { score: max });
}

#[test]
fn probability_target_consumes_hottest_candidate() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Probability, 77);
    let mut grid = empty_grid();
    grid[2][3] = CellState::Hit;
    grid[2][5] = CellState::Miss;
    engine.record_attack(at(2, 5), AttackResult::Miss);
    engine.record_attack(at(2, 3), AttackResult::Hit);

    let heat = engine.heat_map(&grid);
    let best = engine
        .candidates()
        .iter()
        .map(|c| heat.score(c.coord))
        .max()
        .unwrap();
    let mv = engine.next_move(&grid).unwrap();
    assert_eq!(mv.reason, MoveReason::FollowUp);
    assert_eq!(heat.score(mv.coord), best);
}

#[test]
fn probability_falls_back_when_no_placement_fits() {
    let mut engine = TargetingEngine::with_fleet(Difficulty::Probability, 8, &[5]).unwrap();
    let mut grid = empty_grid();
    for coord in Coordinate::all() {
        if (coord.row() + coord.col()) % 2 == 0 {
            grid[coord.row()][coord.col()] = CellState::Miss;
        }
    }
    assert!(engine.heat_map(&grid).rows().iter().flatten().all(|&v| v == 0));
    let mv = engine.next_move(&grid).unwrap();
    assert_eq!(mv.reason, MoveReason::DensityFallback);
    assert_eq!(grid[mv.coord.row()][mv.coord.col()], CellState::Empty);
    assert!(!engine.ledger().has_fired(mv.coord));
}

#[test]
fn fully_resolved_board_yields_none() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Probability, 2);
    let grid = [[CellState::Miss; GRID_SIZE]; GRID_SIZE];
    assert_eq!(engine.get_next_move(&grid), None);
}

#[test]
fn identical_seeds_replay_identically() {
    for difficulty in Difficulty::ALL {
        let mut rng = battleship_targeting::RandomSource::new(2024);
        let mut board = OceanBoard::new();
        board.place_fleet_randomly(&mut rng).unwrap();

        let mut a = TargetingEngine::with_seed(difficulty, 31337);
        let mut b = TargetingEngine::with_seed(difficulty, 31337);
        let ra = battleship_targeting::play_out(&mut a, &mut board.clone(), 100).unwrap();
        let rb = battleship_targeting::play_out(&mut b, &mut board.clone(), 100).unwrap();
        assert_eq!(ra.moves, rb.moves);
        assert!(ra.completed);
    }
}

#[test]
fn reset_restores_fresh_state_and_replays_fixed_seed() {
    let grid = empty_grid();
    let mut engine = TargetingEngine::with_fleet(Difficulty::Normal, 10, &[4, 2]).unwrap();
    let first = engine.get_next_move(&grid).unwrap();
    engine.record_attack(first, AttackResult::Hit);
    engine.record_attack(at(9, 9), AttackResult::Sunk { length: Some(2) });

    engine.reset();
    assert_eq!(engine.mode(), Mode::Hunt);
    assert_eq!(engine.ledger().fired_count(), 0);
    assert_eq!(engine.fleet().as_multiset(), &[4, 2]);
    assert_eq!(engine.get_next_move(&grid), Some(first));
}

#[test]
fn set_seed_matches_seeded_constructor() {
    let grid = empty_grid();
    let mut a = TargetingEngine::with_seed(Difficulty::Easy, 1);
    a.set_seed(4242);
    let mut b = TargetingEngine::with_seed(Difficulty::Easy, 4242);
    for _ in 0..10 {
        let ma = a.get_next_move(&grid).unwrap();
        let mb = b.get_next_move(&grid).unwrap();
        assert_eq!(ma, mb);
        a.record_attack(ma, AttackResult::Miss);
        b.record_attack(mb, AttackResult::Miss);
    }
}

#[test]
fn set_difficulty_keeps_knowledge() {
    let mut engine = TargetingEngine::with_seed(Difficulty::Easy, 6);
    engine.record_attack(at(4, 4), AttackResult::Hit);
    engine.set_difficulty(Difficulty::Hard);
    assert_eq!(engine.difficulty(), Difficulty::Hard);
    let mv = engine.next_move(&empty_grid()).unwrap();
    assert_eq!(mv.reason, MoveReason::FollowUp);
    assert_eq!(mv.coord.manhattan_distance(&at(4, 4)), 1);
}

#[test]
fn difficulty_names_round_trip() {
    for d in Difficulty::ALL {
        assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
    }
    assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert!("impossible".parse::<Difficulty>().is_err());
}
