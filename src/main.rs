use anyhow::{anyhow, bail};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use salvo::{
    cli::ConsoleObserver, create_player, init_logging, play_match, GameConfig, NullObserver,
    PlayerKind, Seat,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BoardArgs {
    #[arg(long, default_value_t = 10, help = "Board rows (1-10)")]
    rows: usize,
    #[arg(long, default_value_t = 10, help = "Board columns (1-10)")]
    cols: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match on the console.
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
        p1: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
        p2: PlayerKind,
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, help = "Wait for Enter after every turn")]
        pause: bool,
    },
    /// Play a series of AI matches and report the win counts.
    Series {
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        p1: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
        p2: PlayerKind,
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[command(flatten)]
        board: BoardArgs,
    },
}

impl BoardArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        GameConfig::with_standard_fleet(self.rows, self.cols).map_err(|e| anyhow!(e))
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { p1, p2, board, pause } => {
            let config = board.config()?;
            let mut rng = board.rng();
            let mut first = create_player(p1, format!("{} player 1", p1), &config)
                .ok_or_else(|| anyhow!("{} players are not available", p1))?;
            let mut second = create_player(p2, format!("{} player 2", p2), &config)
                .ok_or_else(|| anyhow!("{} players are not available", p2))?;
            let mut observer = ConsoleObserver::stdout(pause);
            play_match(&config, &mut *first, &mut *second, &mut rng, &mut observer)
                .map_err(|e| anyhow!(e))?;
        }
        Commands::Series {
            p1,
            p2,
            games,
            board,
        } => {
            if p1 == PlayerKind::Human || p2 == PlayerKind::Human {
                bail!("a series needs two AI players");
            }
            let config = board.config()?;
            let mut rng = board.rng();
            let mut wins = [0usize; 2];
            let mut turns = 0;
            for _ in 0..games {
                let mut first = create_player(p1, format!("{} player 1", p1), &config)
                    .ok_or_else(|| anyhow!("{} players are not available", p1))?;
                let mut second = create_player(p2, format!("{} player 2", p2), &config)
                    .ok_or_else(|| anyhow!("{} players are not available", p2))?;
                let outcome =
                    play_match(&config, &mut *first, &mut *second, &mut rng, &mut NullObserver)
                        .map_err(|e| anyhow!(e))?;
                match outcome.winner {
                    Seat::First => wins[0] += 1,
                    Seat::Second => wins[1] += 1,
                }
                turns += outcome.turns;
            }
            println!("{} player 1 won {} of {} games", p1, wins[0], games);
            println!("{} player 2 won {} of {} games", p2, wins[1], games);
            if games > 0 {
                println!("average match length: {:.1} turns", turns as f64 / games as f64);
            }
        }
    }
    Ok(())
}
