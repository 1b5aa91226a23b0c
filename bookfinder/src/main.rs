mod catalog;
mod cli_args;
mod config;
mod error;
mod finder;
mod search;
mod utils;

use crate::{cli_args::CliArgs, error::Error, utils::any::Any};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Error> {
    CliArgs::parse().run().await?.ok()
}
