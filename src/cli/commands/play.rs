//! Play command - play a game against the computer.

use structopt::StructOpt;

use crate::board::Mark;
use crate::game::engine::StrategyChoice;
use crate::game::input_source::ConditionalInput;
use crate::game::renderer::ConditionalStatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "b", long = "board", default_value = "3")]
    pub board_size: usize,
    #[structopt(short = "w", long = "win", default_value = "3")]
    pub win_length: usize,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short = "m", long = "mark", default_value = "random")]
    pub mark: Mark,
    #[structopt(short = "s", long = "strategy", default_value = "auto")]
    pub strategy: StrategyChoice,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.board_size, self.win_length, self.depth, self.strategy);
        run_game_loop(
            ConditionalInput {
                human_mark: self.mark,
            },
            ConditionalStatsRenderer {
                human_mark: self.mark,
            },
            config,
        );
    }
}
