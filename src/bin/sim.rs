use battleship_targeting::{
    init_logging, play_out, Difficulty, OceanBoard, TargetingEngine, GRID_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program = args.first().map(String::as_str).unwrap_or("sim");
        eprintln!("Usage: {} <easy|normal|hard|probability> <seed>", program);
        std::process::exit(1);
    }
    let difficulty: Difficulty = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = OceanBoard::new();
    board
        .place_fleet_randomly(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut engine = TargetingEngine::with_seed(difficulty, seed);
    let report = play_out(&mut engine, &mut board, GRID_SIZE * GRID_SIZE)
        .map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "seed": seed,
        "report": report,
        "moves": report.moves.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
