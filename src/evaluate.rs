//! Heuristic evaluation of positions.
//!
//! Scores are X-positive: positive favors X, negative favors O. The
//! score is a sum over every k-cell window of every line, plus a small
//! center-control term. It is symmetric but not normalized to any fixed
//! range.

use crate::board::{Board, Mark};

/// Bonus for holding the center cell.
const CENTER_CONTROL_BONUS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Win(Mark),
    Draw,
}

/// Returns the game ending state if the game has ended, otherwise returns None.
#[inline]
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    if let Some(mark) = board.winner() {
        return Some(GameEnding::Win(mark));
    }
    if board.is_full() {
        return Some(GameEnding::Draw);
    }
    None
}

/// Heuristic score for a position.
///
/// Terminal positions short-circuit to their exact utility, so a decided
/// game is never scored heuristically. Otherwise every k-cell window
/// that only one player has marked contributes the square of that
/// player's mark count to that player's side, and holding the center is
/// worth ±0.5.
pub fn evaluate(board: &Board) -> f64 {
    if let Some(utility) = board.utility() {
        return f64::from(utility);
    }

    let win_length = board.win_length();
    let mut score = 0.0;
    for line in board.lines() {
        let (x_windows, o_windows) = count_open_windows(&line, win_length);
        score += f64::from(x_windows - o_windows);
    }

    score + center_control_bonus(board)
}

/// Sliding-window potential for both players over one line. A window
/// containing marks from both players is blocked and contributes
/// nothing to either side.
fn count_open_windows(line: &[Option<Mark>], win_length: usize) -> (i32, i32) {
    let mut x_score = 0;
    let mut o_score = 0;

    if line.len() < win_length {
        return (x_score, o_score);
    }

    for window in line.windows(win_length) {
        let x_count = window.iter().filter(|&&cell| cell == Some(Mark::X)).count() as i32;
        let o_count = window.iter().filter(|&&cell| cell == Some(Mark::O)).count() as i32;

        if x_count > 0 && o_count == 0 {
            // Quadratic weighting: longer partial runs are worth
            // disproportionately more.
            x_score += x_count * x_count;
        } else if o_count > 0 && x_count == 0 {
            o_score += o_count * o_count;
        }
    }

    (x_score, o_score)
}

fn center_control_bonus(board: &Board) -> f64 {
    match board.get(board.center()) {
        Some(Mark::X) => CENTER_CONTROL_BONUS,
        Some(Mark::O) => -CENTER_CONTROL_BONUS,
        None => 0.0,
    }
}
