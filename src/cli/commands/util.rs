//! Shared utilities for CLI commands.

use crate::game::engine::{EngineConfig, StrategyChoice};
use crate::game::game_loop::GameLoop;
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    match GameLoop::new(input_source, renderer, config) {
        Ok(mut game) => game.run(),
        Err(error) => eprintln!("error: {}", error),
    }
}

pub(crate) fn create_config(
    board_size: usize,
    win_length: usize,
    depth: u8,
    strategy: StrategyChoice,
) -> EngineConfig {
    EngineConfig {
        board_size,
        win_length,
        search_depth: depth,
        strategy,
    }
}
