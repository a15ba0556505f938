use crate::game::display::GameDisplay;

use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ui = GameDisplay::new();
        ui.render_board(self);
        write!(f, "{}", ui.buffer())
    }
}

/// Builds a board from a literal grid of `X`, `O` and `.` tokens, with
/// the win length given up front:
///
/// ```ignore
/// let board = mnk_position! {
///     k = 3;
///     X X .
///     O O .
///     . . .
/// };
/// ```
#[macro_export]
macro_rules! mnk_position {
    (k = $win_length:expr; $($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        let size = (cells.len() as f64).sqrt() as usize;
        assert_eq!(
            size * size,
            cells.len(),
            "Invalid number of cells. Expected a square grid, got {}",
            cells.len()
        );
        let mut board = $crate::board::Board::new(size, $win_length)
            .expect("position dimensions should be valid");
        for (i, &c) in cells.iter().enumerate() {
            let coord = $crate::board::Coord::new(i / size, i % size);
            match c {
                'X' => board.put(coord, $crate::board::Mark::X).unwrap(),
                'O' => board.put(coord, $crate::board::Mark::O).unwrap(),
                '.' => (),
                _ => panic!("Invalid character in mnk position"),
            }
        }
        board
    }};
}
