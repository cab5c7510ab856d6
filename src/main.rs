use anyhow::Result;
use clap::Parser;
use cliout::cli::{self, Cli};

fn main() -> Result<()> {
    // Errors are reported by anyhow on stderr with exit status 1.
    let cli = Cli::parse();
    cli::run(cli)
}
