mod generate;
mod inspect;

use anyhow::Result;
use clap::Subcommand;

use crate::args::Args;
use crate::exit::Exit;

pub trait Command {
    fn execute(&self, args: &Args) -> Result<Exit>;
}

#[derive(Debug, Subcommand)]
pub enum SpecsyncCommand {
    /// Print the structural model extracted from a spec class
    Inspect(self::inspect::Inspect),
    /// Replay spec class snapshots through the generation service
    Generate(self::generate::Generate),
}

impl Command for SpecsyncCommand {
    fn execute(&self, args: &Args) -> Result<Exit> {
        match self {
            Self::Inspect(cmd) => cmd.execute(args),
            Self::Generate(cmd) => cmd.execute(args),
        }
    }
}
