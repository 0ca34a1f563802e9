use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use super::{load_series, write_json};

#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// Serialized toss series.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// 1-based position to replace.
    #[arg(long)]
    pub index: usize,
    /// New outcome; must be one of the coin sides.
    #[arg(long)]
    pub value: String,
    /// Where to write the updated series.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &ReplaceArgs) -> Result<(), Box<dyn Error>> {
    let series = load_series(&args.input)?;
    let replaced = series.replace_at(args.index, &args.value)?;
    print!("{replaced}");
    if let Some(out) = &args.out {
        write_json(out, &replaced)?;
    }
    Ok(())
}
