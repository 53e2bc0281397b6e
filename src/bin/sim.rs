use rand::{rngs::SmallRng, SeedableRng};
use salvo::{create_player, init_logging, play_match, GameConfig, NullObserver, PlayerKind};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [p1] [p2]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let kind = |i: usize, default: PlayerKind| -> anyhow::Result<PlayerKind> {
        match args.get(i) {
            Some(s) => s.parse().map_err(|e| anyhow::anyhow!("{}", e)),
            None => Ok(default),
        }
    };
    let k1 = kind(2, PlayerKind::Mediocre)?;
    let k2 = kind(3, PlayerKind::Good)?;
    if k1 == PlayerKind::Human || k2 == PlayerKind::Human {
        anyhow::bail!("sim only runs AI players");
    }

    let config = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut p1 = create_player(k1, "player1", &config)
        .ok_or_else(|| anyhow::anyhow!("{} is not available", k1))?;
    let mut p2 = create_player(k2, "player2", &config)
        .ok_or_else(|| anyhow::anyhow!("{} is not available", k2))?;

    let outcome = play_match(&config, &mut *p1, &mut *p2, &mut rng, &mut NullObserver)
        .map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "seed": seed,
        "player1": {"kind": k1.as_str(), "tally": outcome.tallies[0]},
        "player2": {"kind": k2.as_str(), "tally": outcome.tallies[1]},
        "turns": outcome.turns,
        "winner": outcome.winner_name,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
