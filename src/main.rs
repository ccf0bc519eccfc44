// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use pagegen::Args;

fn main() -> Result<()> {
    pagegen::run(Args::parse())
}
