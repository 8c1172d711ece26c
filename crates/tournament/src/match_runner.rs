//! Match runner for playing games between engines

use othello_core::{legal_moves, Board, Cell, Color, Engine, Move, SearchLimits, Side};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::time::Duration;

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Random plies played before the engines take over, so repeated
    /// games between deterministic engines are not identical
    pub opening_plies: u32,
    /// Maximum plies per game before calling it a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 2,
            time_per_move: None,
            opening_plies: 2,
            max_plies: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is white
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let color = if engine1_black { "B" } else { "W" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game; the result is from the Black player's
    /// perspective. `Side::Own` anchors the Black player throughout.
    fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        let mut board = Board::start(Color::Black);
        black.new_game();
        white.new_game();

        let mut side = Side::Own;
        let mut rng = thread_rng();

        for ply in 0..self.config.max_plies {
            if board.game_over() {
                break;
            }

            let mv = if ply < self.config.opening_plies {
                legal_moves(&board, side)
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(Move::Pass)
            } else {
                // Fresh limits per move so the clock restarts
                let limits = self.config.search_limits();
                limits.start();
                let result = if side == Side::Own {
                    black.search(&board, side, limits)
                } else {
                    white.search(&board, side, limits)
                };
                result.best_move
            };

            board.apply_move(side, mv);
            side = side.other();
        }

        let black_discs = board.count(Cell::Own);
        let white_discs = board.count(Cell::Rival);
        if black_discs > white_discs {
            GameResult::Win
        } else if white_discs > black_discs {
            GameResult::Loss
        } else {
            GameResult::Draw
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}
