use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Args;
use toss_core::{plot, Side};

use super::load_series;
use crate::chart::sink_for;
use crate::config::ChartFormat;

#[derive(Args, Debug)]
pub struct FrequenciesArgs {
    /// Serialized toss series.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Side to track: a coin label, heads, tails, 1 or 2.
    #[arg(long, default_value = "heads")]
    pub side: String,
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = ChartFormat::Csv)]
    pub format: ChartFormat,
    /// Output file; stdout when absent.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &FrequenciesArgs) -> Result<(), Box<dyn Error>> {
    let series = load_series(&args.input)?;
    let side = Side::parse(&args.side, series.coin())?;
    match &args.out {
        Some(path) => {
            let mut sink = sink_for(args.format, BufWriter::new(File::create(path)?));
            plot(&series, side, sink.as_mut())?;
        }
        None => {
            let stdout = io::stdout();
            let mut sink = sink_for(args.format, stdout.lock());
            plot(&series, side, sink.as_mut())?;
        }
    }
    Ok(())
}
