use battleship_targeting::{
    init_logging, play_out, AttackResult, Difficulty, OceanBoard, TargetingEngine, GRID_SIZE,
};

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Tier {
    Easy,
    Normal,
    Hard,
    Probability,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Normal => Difficulty::Normal,
            Tier::Hard => Difficulty::Hard,
            Tier::Probability => Difficulty::Probability,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Watch the engine sink a randomly placed fleet, move by move.
    Play {
        #[arg(long, value_enum, default_value_t = Tier::Hard)]
        difficulty: Tier,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Print the board (and heat map for the probability tier) every turn.
        #[arg(long)]
        verbose: bool,
    },
    /// Play many games and report shot statistics.
    Bench {
        #[arg(long, value_enum, default_value_t = Tier::Hard)]
        difficulty: Tier,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            verbose,
        } => {
            let difficulty = Difficulty::from(difficulty);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut placement_rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let mut engine = match seed {
                Some(s) => TargetingEngine::with_seed(difficulty, s),
                None => TargetingEngine::new(difficulty),
            };
            let mut board = OceanBoard::new();
            board
                .place_fleet_randomly(&mut placement_rng)
                .map_err(|e| anyhow::anyhow!(e))?;

            let mut shots = 0;
            while !board.all_sunk() {
                if verbose {
                    println!("\n{}", board);
                    if difficulty == Difficulty::Probability {
                        println!("\nHeat map:\n{}", engine.heat_map(&board));
                    }
                }
                let Some(mv) = engine.next_move(&board) else {
                    return Err(anyhow::anyhow!("engine ran out of cells before the fleet sank"));
                };
                let result = board
                    .receive_attack(mv.coord)
                    .map_err(|e| anyhow::anyhow!(e))?;
                engine.record_attack(mv.coord, result);
                shots += 1;
                let outcome = match result {
                    AttackResult::Miss => "miss".to_string(),
                    AttackResult::Hit => "HIT".to_string(),
                    AttackResult::Sunk { length: Some(len) } => format!("SUNK (length {})", len),
                    AttackResult::Sunk { length: None } => "SUNK".to_string(),
                };
                println!("{:3}. {:>3}  {:<18} {}", shots, mv.coord.to_string(), outcome, mv.reason);
            }
            println!("\n{}", board);
            println!(
                "\nFleet sunk in {} shots ({} difficulty, {} cells on the board).",
                shots,
                difficulty,
                GRID_SIZE * GRID_SIZE
            );
        }
        Commands::Bench {
            difficulty,
            games,
            seed,
        } => {
            let difficulty = Difficulty::from(difficulty);
            let mut shots = Vec::with_capacity(games);
            for game in 0..games as u64 {
                let game_seed = seed.wrapping_add(game);
                let mut placement_rng = SmallRng::seed_from_u64(game_seed);
                let mut board = OceanBoard::new();
                board
                    .place_fleet_randomly(&mut placement_rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                let mut engine = TargetingEngine::with_seed(difficulty, game_seed);
                let report = play_out(&mut engine, &mut board, GRID_SIZE * GRID_SIZE)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if !report.completed {
                    return Err(anyhow::anyhow!("game {} did not finish", game));
                }
                shots.push(report.shots);
            }
            if shots.is_empty() {
                println!("No games played.");
                return Ok(());
            }
            let total: usize = shots.iter().sum();
            let min = shots.iter().min().copied().unwrap_or(0);
            let max = shots.iter().max().copied().unwrap_or(0);
            println!(
                "{} games at {} difficulty: mean {:.1} shots, best {}, worst {}",
                shots.len(),
                difficulty,
                total as f64 / shots.len() as f64,
                min,
                max
            );
        }
    }
    Ok(())
}
