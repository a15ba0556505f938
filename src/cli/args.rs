//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "mnk",
    about = "A generalized m,n,k tic-tac-toe engine implemented in Rust"
)]
pub enum Mnk {
    #[structopt(
        name = "play",
        about = "Play a game against the computer on a `--board`-sized grid with `--win`-in-a-row to win. Your mark will be chosen at random unless you specify it with `--mark`. The computer searches exhaustively on 3x3 boards and to `--depth` plies otherwise; override with `--strategy`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself with the same board and search options as `play`."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move from a given position, provided in row notation with `--position` (e.g. `X.O/.X./...`). You can optionally specify the win length with `--win` and the search settings with `--strategy` and `--depth`."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Search the empty board with each strategy (minimax, alpha-beta, alpha-beta with move ordering) and report how many positions each one visits, with timings. Demonstrates how much work pruning and ordering save."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Mnk {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
