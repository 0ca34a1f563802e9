use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use toss_core::from_binary;

use super::write_json;

#[derive(Args, Debug)]
pub struct BinaryArgs {
    /// Comma separated raw values holding exactly two distinct entries.
    #[arg(long, value_delimiter = ',', required = true)]
    pub bits: Vec<String>,
    /// Where to write the resulting series.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &BinaryArgs) -> Result<(), Box<dyn Error>> {
    let bits: Vec<&str> = args.bits.iter().map(|bit| bit.trim()).collect();
    let series = from_binary(&bits)?;
    print!("{series}");
    if let Some(out) = &args.out {
        write_json(out, &series)?;
    }
    Ok(())
}
