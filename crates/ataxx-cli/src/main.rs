//! Ataxx command-line tools.
//!
//! Lists layouts, plays seeded random games, verifies recorded games, builds
//! bot move requests and applies bot responses.

mod config;
mod selfplay;

use anyhow::{bail, Context, Result};
use ataxx_engine::movegen::perft::perft_divide;
use ataxx_engine::{perft, Board, BotMoveResponse, GameRecord, GameState, LayoutId};
use clap::{Parser, Subcommand};
use config::AtaxxConfig;
use std::path::{Path, PathBuf};

/// Ataxx rules engine tools.
#[derive(Parser)]
#[command(name = "ataxx")]
#[command(about = "Ataxx rules engine tools")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = AtaxxConfig::config_path())]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available starting layouts
    Layouts,

    /// Play seeded random games and print each record and the scoreboard as JSON
    Play {
        /// Layout id (defaults to the configured layout)
        #[arg(long)]
        layout: Option<LayoutId>,

        /// Random seed; game i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Number of games (defaults to the configured count)
        #[arg(long)]
        games: Option<u32>,

        /// Stop after this many moves
        #[arg(long)]
        max_plies: Option<usize>,
    },

    /// Verify a recorded game against its starting layout
    Replay {
        /// JSON game record
        file: PathBuf,

        #[arg(long)]
        layout: Option<LayoutId>,
    },

    /// Print the bot move request for the side to move
    Request {
        #[arg(long)]
        layout: Option<LayoutId>,

        /// Continue from the final position of this game record
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Apply a bot response to a game record and print the extended record
    Apply {
        /// JSON bot response (`{ move, current_player }` or `{ error }`)
        response: PathBuf,

        /// Record to extend; a fresh game when omitted
        #[arg(long)]
        record: Option<PathBuf>,

        #[arg(long)]
        layout: Option<LayoutId>,
    },

    /// Count move-tree leaves from a layout
    Perft {
        depth: u32,

        #[arg(long)]
        layout: Option<LayoutId>,

        /// Print the count below each first move
        #[arg(long)]
        divide: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = AtaxxConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let registry = config.registry()?;

    match cli.command {
        Command::Layouts => {
            for layout in registry.iter() {
                println!(
                    "{:>3}  {:<16} {}",
                    layout.id(),
                    layout.name(),
                    layout.board().to_notation()
                );
            }
        }

        Command::Play {
            layout,
            seed,
            games,
            max_plies,
        } => {
            let id = layout.unwrap_or(config.layout);
            let games = games.unwrap_or(config.games);
            let start = registry.create_board(id)?;
            tracing::info!(layout = id, seed, games, "starting random series");

            let series = selfplay::play_series(start, seed, games, max_plies)?;
            for record in &series.games {
                println!("{}", record.to_json()?);
            }
            println!("{}", serde_json::to_string(&series.scoreboard)?);
        }

        Command::Replay { file, layout } => {
            let id = layout.unwrap_or(config.layout);
            let start = registry.create_board(id)?;
            let record = read_record(&file)?;

            record
                .verify(&start)
                .with_context(|| {
                    format!("{} does not match layout {}", file.display(), id)
                })?;
            println!(
                "{}: {} moves verified, winner {:?}",
                file.display(),
                record.moves.len(),
                record.winner
            );
        }

        Command::Request { layout, record } => {
            let id = layout.unwrap_or(config.layout);
            let start = registry.create_board(id)?;
            let state = match record {
                Some(path) => final_state(&start, &read_record(&path)?)?,
                None => GameState::new(start),
            };

            let Some(side) = state.side_to_move() else {
                let result = state.result().map_or_else(String::new, |r| r.to_string());
                bail!("game is over: {}", result);
            };
            let request = config.request(*state.board(), side);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }

        Command::Apply {
            response,
            record,
            layout,
        } => {
            let id = layout.unwrap_or(config.layout);
            let start = registry.create_board(id)?;
            let record = match record {
                Some(path) => read_record(&path)?,
                None => GameRecord::from_moves(&start, &[])?,
            };

            let json = std::fs::read_to_string(&response)
                .with_context(|| format!("reading {}", response.display()))?;
            let reply: BotMoveResponse = serde_json::from_str(&json)
                .with_context(|| format!("parsing {}", response.display()))?;

            let extended = record.apply_response(&start, reply)?;
            tracing::info!(plies = extended.moves.len(), "bot move applied");
            println!("{}", extended.to_json()?);
        }

        Command::Perft {
            depth,
            layout,
            divide,
        } => {
            let id = layout.unwrap_or(config.layout);
            let start = GameState::from_layout(&registry, id)?;
            let Some(side) = start.side_to_move() else {
                bail!("layout {} starts in a finished position", id);
            };

            if divide {
                for (mv, count) in perft_divide(start.board(), side, depth) {
                    println!("{}: {}", mv, count);
                }
            }
            println!("perft({}) = {}", depth, perft(start.board(), side, depth));
        }
    }

    Ok(())
}

fn read_record(path: &Path) -> Result<GameRecord> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    GameRecord::from_json(&json)
        .with_context(|| format!("parsing {}", path.display()))
}

/// Replays a record from `start` and returns the state after its last move.
fn final_state(start: &Board, record: &GameRecord) -> Result<GameState> {
    let mut state = GameState::new(*start);
    for mv in record.moves() {
        state = state.play(mv)?;
    }
    Ok(state)
}
