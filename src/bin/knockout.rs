//! Command-line simulator for knock-out dice games.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use knockout_dice::{GameConfig, GameResult, GameRng, KnockoutGameBuilder, PlayerMap, TurnTracker};
use tracing::debug;

/// Simulate one or more knock-out dice games
#[derive(Parser, Debug)]
#[command(name = "knockout")]
#[command(about = "Simulate knock-out dice games", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of players
    #[arg(short, long)]
    players: Option<usize>,

    /// Seed for the first game; later games fork from it
    #[arg(short, long)]
    seed: Option<u64>,

    /// Sides on the shared die
    #[arg(long)]
    sides: Option<i64>,

    /// Score that wins the game
    #[arg(long)]
    threshold: Option<i64>,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: usize,

    /// JSON file with a game configuration; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print each game summary as JSON
    #[arg(long)]
    json: bool,

    /// Log every turn
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => GameConfig::default(),
        };
        if let Some(players) = self.players {
            config.player_count = players;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(sides) = self.sides {
            config.die_sides = sides;
        }
        if let Some(threshold) = self.threshold {
            config.win_threshold = threshold;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.game_config()?;
    debug!(?config, games = cli.games, "configuration loaded");

    // Every game after the first gets its own forked stream.
    let mut master = GameRng::new(config.seed);
    let mut wins: PlayerMap<usize> = PlayerMap::with_default(config.player_count);
    let mut wipeouts = 0usize;

    for index in 0..cli.games {
        let seed = if index == 0 { config.seed } else { master.fork().seed() };

        let mut tracker = TurnTracker::new();
        let mut game = KnockoutGameBuilder::new()
            .config(config.clone().with_seed(seed))
            .build()?;
        game.attach_observer(&mut tracker);
        let result = game.play()?;

        match result {
            GameResult::Winner(player) => wins[player] += 1,
            GameResult::AllEliminated { .. } => wipeouts += 1,
        }

        if cli.json {
            println!("{}", serde_json::to_string(&game.summary())?);
        } else {
            println!(
                "game {} (seed {}): {} after {} rounds, {} turns",
                index + 1,
                seed,
                result,
                game.round(),
                game.turns()
            );
            for player in game.players() {
                let status = if player.is_eliminated() { "out" } else { "in" };
                println!(
                    "  {}: score {:>3}, knock-out {}, {}",
                    player.id(),
                    player.score(),
                    player.knock_out_number(),
                    status
                );
            }
        }
    }

    if cli.games > 1 && !cli.json {
        println!("tally over {} games:", cli.games);
        for (player, count) in wins.iter() {
            println!("  {}: {} wins", player, count);
        }
        println!("  nobody: {}", wipeouts);
    }

    Ok(())
}
