use crate::board::{Board, Coord, Mark};

pub struct GameDisplay {
    buffer: String,
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Writes the board grid into the buffer with row and column
    /// indices, `.` for empty cells.
    pub fn render_board(&mut self, board: &Board) {
        self.buffer.push('\n');
        self.buffer.push_str("  ");
        for col in 0..board.size() {
            self.buffer.push_str(&format!(" {}", col));
        }
        self.buffer.push('\n');

        for row in 0..board.size() {
            self.buffer.push_str(&format!("{} ", row));
            for col in 0..board.size() {
                match board.get(Coord::new(row, col)) {
                    Some(mark) => self.buffer.push_str(&format!(" {}", mark)),
                    None => self.buffer.push_str(" ."),
                }
            }
            self.buffer.push('\n');
        }
        self.buffer.push('\n');
    }

    /// Renders a full game frame to stdout: board, turn, last move and
    /// optional search stats.
    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Coord>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.render_board(board);

        self.buffer.push_str(&format!("Turn: {}\n", current_turn));

        if let Some(coord) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", coord));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnk_position;

    #[test]
    fn test_render_board() {
        let board = mnk_position! {
            k = 3;
            X . O
            . X .
            . . .
        };
        let mut ui = GameDisplay::new();
        ui.render_board(&board);
        let rendered = ui.buffer();

        assert!(rendered.contains("0  X . O"));
        assert!(rendered.contains("1  . X ."));
        assert!(rendered.contains("2  . . ."));
    }
}
