use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use super::load_series;

#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Serialized toss series.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// 1-based position to read.
    #[arg(long)]
    pub index: usize,
}

pub fn run(args: &ElementArgs) -> Result<(), Box<dyn Error>> {
    let series = load_series(&args.input)?;
    println!("{}", series.element_at(args.index)?);
    Ok(())
}
