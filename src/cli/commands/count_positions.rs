//! CountPositions command - compare node counts across strategies.

use std::time::Instant;

use structopt::StructOpt;

use crate::board::Board;
use crate::search::{alpha_beta, minimax, SearchContext};

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short = "b", long = "board", default_value = "3")]
    pub board_size: usize,
    #[structopt(short = "w", long = "win", default_value = "3")]
    pub win_length: usize,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = match Board::new(self.board_size, self.win_length) {
            Ok(board) => board,
            Err(error) => {
                eprintln!("error: {}", error);
                return;
            }
        };

        if self.board_size > 3 {
            eprintln!(
                "warning: exhaustive search on a {0}x{0} board may take a very long time",
                self.board_size
            );
        }

        let mut context = SearchContext::new();

        let start = Instant::now();
        let result = minimax(&mut context, &board);
        let minimax_nodes = context.searched_position_count();
        println!(
            "minimax: {} positions in {:?} (value: {})",
            minimax_nodes,
            start.elapsed(),
            result.value
        );

        context.reset_stats();
        let start = Instant::now();
        let result = alpha_beta(&mut context, &board, false);
        let unordered_nodes = context.searched_position_count();
        println!(
            "alpha-beta: {} positions, {} cutoffs in {:?} (value: {}, {:.1}% of minimax)",
            unordered_nodes,
            context.cutoff_count(),
            start.elapsed(),
            result.value,
            100.0 * unordered_nodes as f64 / minimax_nodes as f64
        );

        context.reset_stats();
        let start = Instant::now();
        let result = alpha_beta(&mut context, &board, true);
        let ordered_nodes = context.searched_position_count();
        println!(
            "alpha-beta + ordering: {} positions, {} cutoffs in {:?} (value: {}, {:.1}% of minimax)",
            ordered_nodes,
            context.cutoff_count(),
            start.elapsed(),
            result.value,
            100.0 * ordered_nodes as f64 / minimax_nodes as f64
        );
    }
}
