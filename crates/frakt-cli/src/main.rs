//! fraktquote - Multi-mode freight quoting
//!
//! A CLI tool that prices shipments across road, rail and ocean from a
//! tariff file and plans the earliest feasible pickup date.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
