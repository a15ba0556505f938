//! Watch command - the computer plays against itself.

use std::time::Duration;

use structopt::StructOpt;

use crate::game::engine::StrategyChoice;
use crate::game::input_source::EngineInput;
use crate::game::renderer::StatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short = "b", long = "board", default_value = "3")]
    pub board_size: usize,
    #[structopt(short = "w", long = "win", default_value = "3")]
    pub win_length: usize,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short = "s", long = "strategy", default_value = "auto")]
    pub strategy: StrategyChoice,
    /// The engine calculates moves very quickly, so a slight delay
    /// between moves makes the game easier to observe.
    #[structopt(long = "delay-ms", default_value = "750")]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.board_size, self.win_length, self.depth, self.strategy);
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
