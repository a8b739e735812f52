use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::Level;

#[cfg(test)]
#[macro_use]
mod testutil;

mod classify;
mod cmd;
mod filespec;
mod importers;
mod normalize;
mod qif;

#[derive(Debug, Parser)]
#[command(name = "ing2qif", version)]
/// Converts an ING (Netherlands) CSV transaction export to QIF, and writes it
/// to stdout.
struct Command {
    #[command(flatten)]
    convert: cmd::Cmd,
    /// Log progress to stderr. Repeat for more detail.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cmd = Command::parse();
    init_logging(cmd.verbose);
    cmd.convert.run()
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
