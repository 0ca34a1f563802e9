use std::error::Error;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use toss_core::Coin;

/// YAML-configurable parameters of a toss run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Master seed; absent means entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Coin to toss.
    #[serde(default)]
    pub coin: Coin,
    /// Tosses per batch.
    #[serde(default = "default_times")]
    pub times: i64,
    /// Independent batches, each seeded from its own substream.
    #[serde(default = "default_batches")]
    pub batches: u64,
    /// Running frequency export settings.
    #[serde(default)]
    pub chart: ChartConfig,
}

fn default_times() -> i64 {
    10
}

fn default_batches() -> u64 {
    1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            coin: Coin::default(),
            times: default_times(),
            batches: default_batches(),
            chart: ChartConfig::default(),
        }
    }
}

impl RunConfig {
    /// Reads a configuration file, falling back to defaults for absent keys.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let config: RunConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

/// Side tracked and format written when exporting running frequencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_side")]
    pub side: String,
    #[serde(default)]
    pub format: ChartFormat,
}

fn default_side() -> String {
    "heads".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            format: ChartFormat::default(),
        }
    }
}

/// Encodings understood by the chart sinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    /// `position,frequency` rows after a header.
    #[default]
    Csv,
    /// One JSON document with the frame and all points.
    Json,
}
