use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use toss_core::to_canonical_json_bytes;

use super::load_series;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Serialized toss series.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Emit the summary as canonical JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &SummaryArgs) -> Result<(), Box<dyn Error>> {
    let series = load_series(&args.input)?;
    let summary = series.summarize()?;
    if args.json {
        let json = to_canonical_json_bytes(&summary)?;
        println!("{}", String::from_utf8(json)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}
