use std::cmp::{max, min};

use log::debug;

use super::{order_moves, update_best, SearchContext, SearchResult};
use crate::board::Board;

/// Minimax with alpha-beta pruning.
///
/// Returns exactly the values (and, with ordering disabled, the moves)
/// that [`minimax`](super::minimax) returns, while skipping siblings
/// that cannot change the decision. The window [alpha, beta] tracks the
/// best score each side can already guarantee; once `beta <= alpha` the
/// remaining siblings are irrelevant.
///
/// `use_ordering` switches on the heuristic move orderer. It affects
/// how quickly cutoffs happen, and which of several equally good moves
/// is discovered first, but never the value.
#[must_use = "search returns the best move found"]
pub fn alpha_beta(context: &mut SearchContext, board: &Board, use_ordering: bool) -> SearchResult {
    debug!(
        "alpha-beta search from move {} (ordering: {})",
        board.move_count(),
        use_ordering
    );
    alpha_beta_value(context, board, i32::MIN, i32::MAX, use_ordering)
}

fn alpha_beta_value(
    context: &mut SearchContext,
    board: &Board,
    mut alpha: i32,
    mut beta: i32,
    use_ordering: bool,
) -> SearchResult {
    context.increment_position_count();

    if let Some(utility) = board.utility() {
        return SearchResult {
            value: utility,
            best_move: None,
        };
    }

    let maximizing_player = board.current_player().maximize_score();
    let mut moves = board.legal_moves();
    if use_ordering {
        order_moves(board, &mut moves, true);
    }

    let mut best_score = if maximizing_player { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for &candidate in moves.iter() {
        let successor = board
            .apply_move(candidate)
            .expect("moves enumerated by the board should apply cleanly");
        let result = alpha_beta_value(context, &successor, alpha, beta, use_ordering);

        update_best(
            result.value,
            candidate,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );

        if maximizing_player {
            alpha = max(alpha, best_score);
        } else {
            beta = min(beta, best_score);
        }
        if beta <= alpha {
            // Remaining siblings cannot change the parent's decision.
            context.increment_cutoff_count();
            break;
        }
    }

    SearchResult {
        value: best_score,
        best_move,
    }
}
