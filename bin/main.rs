use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod build;
mod cli;
mod config;
mod io;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
