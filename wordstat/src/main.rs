// src/main.rs
use anyhow::Result;
use clap::Parser;

use wordstat::{Args, logging};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;
    wordstat::run(args)
}
