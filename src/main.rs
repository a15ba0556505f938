use structopt::StructOpt;

use mnk::cli::commands::Command;
use mnk::cli::Mnk;

fn main() {
    env_logger::init();
    Mnk::from_args().execute();
}
