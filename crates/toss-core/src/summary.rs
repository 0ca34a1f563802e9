use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, TossError};
use crate::series::TossSeries;
use crate::TwoSided;

/// Per-side counts and proportions of a non-empty series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TossSummary {
    /// Coin sides in order.
    pub sides: [String; 2],
    /// Number of tosses.
    pub total: usize,
    /// Outcomes equal to each side.
    pub counts: [usize; 2],
    /// `counts[i] / total`.
    pub proportions: [f64; 2],
}

impl TossSummary {
    /// Builds the summary, failing for an empty series.
    pub fn from_series(series: &TossSeries) -> Result<Self, TossError> {
        let total = series.total();
        if total == 0 {
            return Err(TossError::DivisionUndefined(
                ErrorInfo::new(
                    "division-undefined",
                    "proportions are undefined for a series without tosses",
                )
                .with_context("total", "0"),
            ));
        }
        let counts = [series.heads_count(), series.tails_count()];
        Ok(Self {
            sides: series.coin().sides().clone(),
            total,
            counts,
            proportions: counts.map(|count| count as f64 / total as f64),
        })
    }
}

impl fmt::Display for TossSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "summary \"toss\"")?;
        writeln!(f)?;
        let width = self
            .sides
            .iter()
            .map(|side| side.chars().count())
            .max()
            .unwrap_or(0)
            .max("total".len());
        writeln!(f, "{:<width$}  {:>6}  {:>6}", "side", "count", "prop")?;
        for idx in 0..2 {
            writeln!(
                f,
                "{:<width$}  {:>6}  {:>6.4}",
                self.sides[idx], self.counts[idx], self.proportions[idx]
            )?;
        }
        writeln!(f, "{:<width$}  {:>6}  {:>6.4}", "total", self.total, 1.0)
    }
}
