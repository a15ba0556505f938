use log::debug;

use super::{
    order_moves, update_best, BoundedSearchResult, Evaluator, HeuristicEvaluator, SearchContext,
    WIN_SCORE,
};
use crate::board::Board;

/// Depth-limited alpha-beta using the standard heuristic evaluator.
#[must_use = "search returns the best move found"]
pub fn depth_limited(context: &mut SearchContext, board: &Board, depth: u8) -> BoundedSearchResult {
    depth_limited_with_evaluator(context, board, depth, &HeuristicEvaluator)
}

/// Depth-limited alpha-beta with a caller-supplied evaluator.
///
/// Terminal positions return sentinel scores (±[`WIN_SCORE`], 0 for a
/// draw) so decided games always dominate heuristic estimates. At the
/// depth horizon a non-terminal position is scored by the evaluator and
/// carries no move. Children are always visited in heuristic order.
#[must_use = "search returns the best move found"]
pub fn depth_limited_with_evaluator<E: Evaluator>(
    context: &mut SearchContext,
    board: &Board,
    depth: u8,
    evaluator: &E,
) -> BoundedSearchResult {
    debug!(
        "depth-limited search from move {} (depth: {})",
        board.move_count(),
        depth
    );
    bounded_value(
        context,
        board,
        depth,
        evaluator,
        f64::NEG_INFINITY,
        f64::INFINITY,
    )
}

fn bounded_value<E: Evaluator>(
    context: &mut SearchContext,
    board: &Board,
    depth: u8,
    evaluator: &E,
    mut alpha: f64,
    mut beta: f64,
) -> BoundedSearchResult {
    context.increment_position_count();

    if let Some(utility) = board.utility() {
        return BoundedSearchResult {
            value: f64::from(utility) * WIN_SCORE,
            best_move: None,
        };
    }

    if depth == 0 {
        return BoundedSearchResult {
            value: evaluator.evaluate(board),
            best_move: None,
        };
    }

    let maximizing_player = board.current_player().maximize_score();
    let mut moves = board.legal_moves();
    order_moves(board, &mut moves, true);

    let mut best_score = if maximizing_player {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_move = None;

    for &candidate in moves.iter() {
        let successor = board
            .apply_move(candidate)
            .expect("moves enumerated by the board should apply cleanly");
        let result = bounded_value(context, &successor, depth - 1, evaluator, alpha, beta);

        update_best(
            result.value,
            candidate,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );

        if maximizing_player {
            alpha = alpha.max(best_score);
        } else {
            beta = beta.min(best_score);
        }
        if beta <= alpha {
            context.increment_cutoff_count();
            break;
        }
    }

    BoundedSearchResult {
        value: best_score,
        best_move,
    }
}
