//! CalculateBestMove command - print the engine's move for a position.

use structopt::StructOpt;

use crate::board::Board;
use crate::game::engine::{Engine, StrategyChoice};

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short = "p", long = "position")]
    pub position: String,
    #[structopt(short = "w", long = "win", default_value = "3")]
    pub win_length: usize,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short = "s", long = "strategy", default_value = "auto")]
    pub strategy: StrategyChoice,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let board = match Board::from_notation(&self.position, self.win_length) {
            Ok(board) => board,
            Err(error) => {
                eprintln!("error: {}", error);
                return;
            }
        };

        println!("{}", board);

        if board.is_terminal() {
            println!("The game is already over.");
            return;
        }

        let mut engine = Engine::with_board(board, self.depth, self.strategy);
        match engine.get_best_move() {
            Ok(best_move) => {
                let stats = engine.get_search_stats();
                println!("Best move: {}", best_move);
                println!(
                    "Score: {}",
                    stats.last_score.map_or("-".to_string(), |s| s.to_string())
                );
                println!(
                    "Positions searched: {} (cutoffs: {}) in {:?}",
                    stats.positions_searched,
                    stats.cutoffs,
                    stats.last_search_duration.unwrap_or_default()
                );
            }
            Err(error) => eprintln!("error: {}", error),
        }
    }
}
