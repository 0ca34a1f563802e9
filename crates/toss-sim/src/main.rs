use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    binary::{self, BinaryArgs},
    element::{self, ElementArgs},
    extend::{self, ExtendArgs},
    frequencies::{self, FrequenciesArgs},
    replace::{self, ReplaceArgs},
    summary::{self, SummaryArgs},
    toss::{self, TossArgs},
};

mod chart;
mod commands;
mod config;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "toss-sim", version, about = "Coin toss simulator CLI")]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Toss a configured coin and print a description of each batch.
    Toss(TossArgs),
    /// Print counts and proportions of a serialized series.
    Summary(SummaryArgs),
    /// Append more tosses of the same coin to a serialized series.
    Extend(ExtendArgs),
    /// Replace one outcome of a serialized series.
    Replace(ReplaceArgs),
    /// Print one outcome of a serialized series.
    Element(ElementArgs),
    /// Export running frequencies of one side for charting.
    Frequencies(FrequenciesArgs),
    /// Build a series from raw values holding two distinct entries.
    Binary(BinaryArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_json);
    match cli.command {
        Command::Toss(args) => toss::run(&args),
        Command::Summary(args) => summary::run(&args),
        Command::Extend(args) => extend::run(&args),
        Command::Replace(args) => replace::run(&args),
        Command::Element(args) => element::run(&args),
        Command::Frequencies(args) => frequencies::run(&args),
        Command::Binary(args) => binary::run(&args),
    }
}
