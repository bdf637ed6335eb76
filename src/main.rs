mod cli;
mod editor;
mod input;
mod models;
mod registry;
mod seed;
mod session;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    cli::run(cli);
}
