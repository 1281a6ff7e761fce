use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod migrate;

#[derive(Parser)]
#[command(about = "job board web service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
enum SubCommandType {
    /// Initialise the job store and serve http (default)
    Listen,
    /// Create the jobs table if it is missing, then exit
    Migrate,
}

impl Cmd {
    fn subcommand(&self) -> SubCommandType {
        self.command.unwrap_or(SubCommandType::Listen)
    }
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.subcommand() {
        SubCommandType::Listen => listen().await,
        SubCommandType::Migrate => migrate::apply().await,
    }
}
