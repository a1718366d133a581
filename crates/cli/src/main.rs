use std::io;

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.log_json {
        gildedrose_observability::init_json();
    } else {
        gildedrose_observability::init();
    }

    let mut out = io::stdout().lock();
    match cli::run(&args, &mut out) {
        Err(err) if cli::is_broken_pipe(&err) => {
            tracing::debug!("output closed early");
            Ok(())
        }
        result => result,
    }
}
