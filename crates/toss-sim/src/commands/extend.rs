use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::{load_series, rng_for, write_json};

#[derive(Args, Debug)]
pub struct ExtendArgs {
    /// Serialized toss series.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Number of additional tosses.
    #[arg(long, allow_negative_numbers = true)]
    pub times: i64,
    /// Seed for the additional tosses.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Where to write the extended series.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &ExtendArgs) -> Result<(), Box<dyn Error>> {
    let series = load_series(&args.input)?;
    let extended = series.extend(args.times, &mut rng_for(args.seed))?;
    info!(from = series.total(), to = extended.total(), "extended series");
    print!("{extended}");
    if let Some(out) = &args.out {
        write_json(out, &extended)?;
    }
    Ok(())
}
