use log::debug;

use super::{update_best, SearchContext, SearchResult};
use crate::board::Board;

/// Plain minimax: exhaustive search of the entire game tree.
///
/// Guaranteed optimal. Children are visited in lexicographic move order
/// and ties go to the first move examined, so results are
/// deterministic. No pruning: every reachable position is visited.
#[must_use = "search returns the best move found"]
pub fn minimax(context: &mut SearchContext, board: &Board) -> SearchResult {
    debug!("minimax search from move {}", board.move_count());
    minimax_value(context, board)
}

fn minimax_value(context: &mut SearchContext, board: &Board) -> SearchResult {
    context.increment_position_count();

    if let Some(utility) = board.utility() {
        return SearchResult {
            value: utility,
            best_move: None,
        };
    }

    let maximizing_player = board.current_player().maximize_score();
    let mut best_score = if maximizing_player { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for &candidate in board.legal_moves().iter() {
        let successor = board
            .apply_move(candidate)
            .expect("moves enumerated by the board should apply cleanly");
        let result = minimax_value(context, &successor);

        update_best(
            result.value,
            candidate,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );
    }

    SearchResult {
        value: best_score,
        best_move,
    }
}
