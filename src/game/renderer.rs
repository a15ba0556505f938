use std::time::Duration;

use crate::board::{Coord, Mark};
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        last_move: Option<Coord>,
    );
    fn frame_delay(&self) -> Option<Duration>;
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (cutoffs: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.cutoffs,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        last_move: Option<Coord>,
    ) {
        ui.render_game_state(
            engine.board(),
            current_turn,
            last_move,
            Some(&format_stats(engine)),
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_mark: Mark,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        last_move: Option<Coord>,
    ) {
        ui.render_game_state(
            engine.board(),
            current_turn,
            last_move,
            Some(&format_stats(engine)),
        );
        if current_turn == self.human_mark {
            println!("Enter your move (row, col):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
