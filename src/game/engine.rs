use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use crate::board::{Board, BoardError, Coord, MoveList};
use crate::evaluate::{self, GameEnding};
use crate::input_handler::MoveInput;
use crate::search::{alpha_beta, depth_limited, minimax, SearchContext, SearchError};

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub board_size: usize,
    pub win_length: usize,
    pub search_depth: u8,
    pub strategy: StrategyChoice,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            win_length: 3,
            search_depth: 3, // Default search depth for bounded search
            strategy: StrategyChoice::Auto,
        }
    }
}

/// Which search strategy drives the engine's moves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrategyChoice {
    /// Exhaustive alpha-beta on 3x3 boards, depth-limited on anything
    /// bigger.
    Auto,
    Minimax,
    AlphaBeta,
    DepthLimited,
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for StrategyChoice {
    type Err = ParseError;
    fn from_str(strategy: &str) -> Result<Self, Self::Err> {
        match strategy {
            "auto" => Ok(StrategyChoice::Auto),
            "minimax" => Ok(StrategyChoice::Minimax),
            "alpha-beta" => Ok(StrategyChoice::AlphaBeta),
            "depth-limited" => Ok(StrategyChoice::DepthLimited),
            _ => Err("invalid strategy; options are: auto, minimax, alpha-beta, depth-limited"),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move")]
    InvalidMove,
    #[error("Board error: {error:?}")]
    BoardError { error: BoardError },
    #[error("Search error: {error:?}")]
    SearchError { error: SearchError },
}

/// Search statistics from the engine's most recent move calculation.
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub last_score: Option<f64>,
    pub last_search_duration: Option<Duration>,
}

/// The main engine: owns the game state and computes moves with the
/// configured search strategy.
pub struct Engine {
    board: Board,
    move_history: Vec<Coord>,
    strategy: StrategyChoice,
    search_depth: u8,
    search_context: SearchContext,
    last_score: Option<f64>,
    last_search_duration: Option<Duration>,
}

impl Engine {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let board = Board::new(config.board_size, config.win_length)
            .map_err(|error| EngineError::BoardError { error })?;
        Ok(Self::with_board(board, config.search_depth, config.strategy))
    }

    /// Builds an engine over an existing position instead of an empty
    /// board. Used by analysis commands.
    pub fn with_board(board: Board, search_depth: u8, strategy: StrategyChoice) -> Self {
        Self {
            board,
            move_history: Vec::new(),
            strategy,
            search_depth,
            search_context: SearchContext::new(),
            last_score: None,
            last_search_duration: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves()
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.move_history.last().copied()
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.board)
    }

    /// Applies a caller-supplied move. Anything outside the enumerated
    /// legal set is rejected before the board is touched.
    pub fn make_move(&mut self, coord: Coord) -> Result<(), EngineError> {
        if !self.board.legal_moves().contains(&coord) {
            return Err(EngineError::InvalidMove);
        }
        self.board = self
            .board
            .apply_move(coord)
            .map_err(|error| EngineError::BoardError { error })?;
        self.move_history.push(coord);
        Ok(())
    }

    /// Runs the configured search and returns the move it found,
    /// without applying it.
    pub fn get_best_move(&mut self) -> Result<Coord, EngineError> {
        self.search_context.reset_stats();
        let start = Instant::now();

        let (score, best_move) = match self.resolve_strategy() {
            ResolvedStrategy::Minimax => {
                let result = minimax(&mut self.search_context, &self.board);
                (f64::from(result.value), result.best_move)
            }
            ResolvedStrategy::AlphaBeta => {
                let result = alpha_beta(&mut self.search_context, &self.board, true);
                (f64::from(result.value), result.best_move)
            }
            ResolvedStrategy::DepthLimited { depth } => {
                let result = depth_limited(&mut self.search_context, &self.board, depth);
                (result.value, result.best_move)
            }
        };

        self.last_score = Some(score);
        self.last_search_duration = Some(start.elapsed());
        debug!("engine chose {:?} with score {}", best_move, score);

        best_move.ok_or(EngineError::SearchError {
            error: SearchError::NoAvailableMoves,
        })
    }

    pub fn make_best_move(&mut self) -> Result<Coord, EngineError> {
        let best_move = self.get_best_move()?;
        self.make_move(best_move)?;
        Ok(best_move)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<Coord, EngineError> {
        match input {
            MoveInput::Coordinate(coord) => {
                self.make_move(coord)?;
                Ok(coord)
            }
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            last_score: self.last_score,
            last_search_duration: self.last_search_duration,
        }
    }

    fn resolve_strategy(&self) -> ResolvedStrategy {
        match self.strategy {
            StrategyChoice::Minimax => ResolvedStrategy::Minimax,
            StrategyChoice::AlphaBeta => ResolvedStrategy::AlphaBeta,
            StrategyChoice::DepthLimited => ResolvedStrategy::DepthLimited {
                depth: self.search_depth,
            },
            // Exhaustive search stays tractable on the classic board;
            // anything bigger falls back to the bounded search.
            StrategyChoice::Auto => {
                if self.board.size() == 3 {
                    ResolvedStrategy::AlphaBeta
                } else {
                    ResolvedStrategy::DepthLimited {
                        depth: self.search_depth,
                    }
                }
            }
        }
    }
}

enum ResolvedStrategy {
    Minimax,
    AlphaBeta,
    DepthLimited { depth: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_rejects_moves_outside_the_legal_set() {
        let mut engine = Engine::new().unwrap();
        engine.make_move(Coord::new(1, 1)).unwrap();

        assert!(matches!(
            engine.make_move(Coord::new(1, 1)),
            Err(EngineError::InvalidMove)
        ));
        assert!(matches!(
            engine.make_move(Coord::new(5, 5)),
            Err(EngineError::InvalidMove)
        ));
        // The failed attempts must not have touched the board.
        assert_eq!(engine.board().move_count(), 1);
    }

    #[test]
    fn test_engine_takes_the_winning_move() {
        let mut engine = Engine::new().unwrap();
        for &(row, col) in &[(0, 0), (1, 0), (0, 1), (1, 1)] {
            engine.make_move(Coord::new(row, col)).unwrap();
        }

        let best_move = engine.make_best_move().unwrap();
        assert_eq!(best_move, Coord::new(0, 2));
        assert_eq!(
            engine.check_game_over(),
            Some(GameEnding::Win(Mark::X))
        );
    }

    #[test]
    fn test_stats_reflect_the_last_search() {
        let mut engine = Engine::new().unwrap();
        engine.make_best_move().unwrap();

        let stats = engine.get_search_stats();
        assert!(stats.positions_searched > 0);
        assert!(stats.last_score.is_some());
        assert!(stats.last_search_duration.is_some());
    }

    #[test]
    fn test_auto_strategy_plays_a_full_3x3_game_to_a_draw() {
        let mut engine = Engine::new().unwrap();
        while engine.check_game_over().is_none() {
            engine.make_best_move().unwrap();
        }
        assert_eq!(engine.check_game_over(), Some(GameEnding::Draw));
    }
}
