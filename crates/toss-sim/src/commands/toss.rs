use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use toss_core::{plot, toss, RngHandle, Side};
use tracing::info;

use super::{rng_for, write_json};
use crate::chart::sink_for;
use crate::config::{ChartFormat, RunConfig};

#[derive(Args, Debug)]
pub struct TossArgs {
    /// YAML configuration describing the coin and the run.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed overriding the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Tosses per batch overriding the configuration.
    #[arg(long, allow_negative_numbers = true)]
    pub times: Option<i64>,
    /// Output directory for per-batch series and running frequency artefacts.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &TossArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(times) = args.times {
        config.times = times;
    }

    let coin = Arc::new(config.coin.clone());
    let chart_side = Side::parse(&config.chart.side, &coin)?;
    info!(
        times = config.times,
        batches = config.batches,
        seed = ?config.seed,
        "starting toss run"
    );
    for batch in 0..config.batches {
        let mut rng = match config.seed {
            Some(seed) if config.batches > 1 => RngHandle::substream(seed, batch),
            seed => rng_for(seed),
        };
        let series = toss(&coin, config.times, &mut rng)?;
        if config.batches > 1 {
            println!("batch {batch}");
        }
        print!("{series}");
        if let Some(out) = &args.out {
            write_json(&out.join(format!("series_{batch}.json")), &series)?;
            let extension = match config.chart.format {
                ChartFormat::Csv => "csv",
                ChartFormat::Json => "json",
            };
            let chart_path = out.join(format!("frequencies_{batch}.{extension}"));
            let writer = BufWriter::new(File::create(chart_path)?);
            let mut sink = sink_for(config.chart.format, writer);
            plot(&series, chart_side, sink.as_mut())?;
        }
    }

    if let (Some(out), Some(config_path)) = (&args.out, &args.config) {
        // Keep the configuration next to the artefacts it produced.
        fs::copy(config_path, out.join("config.yaml")).ok();
    }
    Ok(())
}
