use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use niya::ai::StrategyKind;
use niya::config::MatchConfig;
use niya::game::{random_seed, Board, Color, Game, GameState, Outcome};

/// Play one match of Niya between two configured strategies.
#[derive(Parser)]
#[command(name = "niya", about = "Play a match of the Niya board game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "niya.toml")]
    config: PathBuf,

    /// Hex-encoded board layout seed (overrides config)
    #[arg(long)]
    seed: Option<String>,

    /// Strategy for Red, the first mover: random or smart
    #[arg(long)]
    red: Option<StrategyKind>,

    /// Strategy for Black: random or smart
    #[arg(long)]
    black: Option<StrategyKind>,

    /// Suppress the per-turn board dump
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(red) = cli.red {
        config.red = red;
    }
    if let Some(black) = cli.black {
        config.black = black;
    }

    let seed = match &config.seed {
        Some(raw) => MatchConfig::parse_seed(raw)?,
        None => random_seed(&mut rand::rng()),
    };
    let board = Board::from_seed(seed).context("decoding board layout")?;

    if config.show_tiles && !cli.quiet {
        println!("board {seed:#018x}");
        println!("{board}");
    }

    let state = GameState::new(board);
    let mut game = Game::new(
        state,
        config.red.build(Color::Red),
        config.black.build(Color::Black),
    );

    if !cli.quiet {
        loop {
            let more = game.step();
            print!("{}", game.state());
            println!("---");
            if !more {
                break;
            }
        }
    } else {
        game.run();
    }

    match game.state().outcome().context("match ended without an outcome")? {
        Outcome::Winner(color) => println!(
            "winner: {} after {} moves",
            color.name(),
            game.state().moves_made()
        ),
        Outcome::Draw => println!("draw after 16 moves"),
    }

    Ok(())
}
