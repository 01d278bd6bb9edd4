//! Random self-play.

use ataxx_core::Side;
use ataxx_engine::{Board, Game, GameError, GameRecord};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Plays random legal moves from `start` until the game ends or `max_plies`
/// moves have been made. The same seed always yields the same game.
pub fn play_random(start: Board, seed: u64, max_plies: Option<usize>) -> Result<Game, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(start);

    while max_plies.map_or(true, |max| game.ply_count() < max) {
        let legal = game.legal_moves();
        let Some(&mv) = legal.as_slice().choose(&mut rng) else {
            break;
        };
        game.make_move(mv)?;
    }

    Ok(game)
}

/// Running totals over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub yellow_wins: u32,
    pub red_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    /// Records one game's outcome; `None` is a draw.
    pub fn record(&mut self, winner: Option<Side>) {
        match winner {
            Some(Side::Yellow) => self.yellow_wins += 1,
            Some(Side::Red) => self.red_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.yellow_wins + self.red_wins + self.draws
    }
}

/// A finished series: every game's record plus the tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub games: Vec<GameRecord>,
    pub scoreboard: Scoreboard,
}

/// Plays `games` random games back to back from `start`. Game `i` is seeded
/// with `seed + i`.
///
/// A game cut short by `max_plies` counts for the side ahead at that point.
pub fn play_series(
    start: Board,
    seed: u64,
    games: u32,
    max_plies: Option<usize>,
) -> Result<Series, GameError> {
    let mut series = Series {
        games: Vec::with_capacity(games as usize),
        scoreboard: Scoreboard::default(),
    };

    for i in 0..games {
        let game = play_random(start, seed.wrapping_add(u64::from(i)), max_plies)?;
        let record = game.to_record();
        series.scoreboard.record(record.winner.side());
        tracing::info!(
            game = i + 1,
            plies = game.ply_count(),
            winner = ?record.winner,
            "series game finished"
        );
        series.games.push(record);
    }

    Ok(series)
}
