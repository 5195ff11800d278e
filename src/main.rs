// src/main.rs
use anyhow::Result;
use clap::Parser;

use kus::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    kus::logging::init(args.verbose);
    run(&args)
}
