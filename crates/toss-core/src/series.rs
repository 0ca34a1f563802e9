//! Immutable toss series and the operations deriving new series from it.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::coin::Coin;
use crate::errors::{checked_index, positive_count, ErrorInfo, TossError};
use crate::frequency::RunningFrequencies;
use crate::rng::RngHandle;
use crate::side::Side;
use crate::summary::TossSummary;
use crate::TwoSided;

/// Record of one sampling run together with its derived counts.
///
/// Counts are computed once in [`make_series`] and every operation that
/// changes the outcomes goes back through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeriesRecord")]
pub struct TossSeries {
    coin: Arc<Coin>,
    outcomes: Vec<String>,
    total: usize,
    heads_count: usize,
    tails_count: usize,
}

#[derive(Debug, Deserialize)]
struct SeriesRecord {
    coin: Coin,
    outcomes: Vec<String>,
}

impl From<SeriesRecord> for TossSeries {
    fn from(record: SeriesRecord) -> Self {
        make_series(Arc::new(record.coin), record.outcomes)
    }
}

/// Builds a series from raw outcomes, counting each side of `coin`.
///
/// Outcomes are not checked against the coin's sides; an outcome matching
/// neither side counts toward `total` only.
pub fn make_series(coin: Arc<Coin>, outcomes: Vec<String>) -> TossSeries {
    let [first, second] = coin.sides();
    let heads_count = outcomes.iter().filter(|outcome| *outcome == first).count();
    let tails_count = outcomes.iter().filter(|outcome| *outcome == second).count();
    let total = outcomes.len();
    if heads_count + tails_count != total {
        debug!(
            total,
            heads_count, tails_count, "series holds outcomes outside the coin sides"
        );
    }
    TossSeries {
        coin,
        outcomes,
        total,
        heads_count,
        tails_count,
    }
}

/// Tosses `coin` `times` times.
pub fn toss(coin: &Arc<Coin>, times: i64, rng: &mut RngHandle) -> Result<TossSeries, TossError> {
    positive_count("times", times)?;
    let outcomes = coin.sample(times, rng)?;
    let series = make_series(Arc::clone(coin), outcomes);
    debug!(
        total = series.total,
        heads = series.heads_count,
        tails = series.tails_count,
        "tossed coin"
    );
    Ok(series)
}

/// Converts a sequence holding exactly two distinct values into a series.
///
/// Values are compared by their rendered text; the two distinct labels, in
/// order of first occurrence, become the sides of a fair coin.
pub fn from_binary<T: ToString>(bits: &[T]) -> Result<TossSeries, TossError> {
    let outcomes: Vec<String> = bits.iter().map(ToString::to_string).collect();
    let mut distinct: Vec<&str> = Vec::with_capacity(2);
    for outcome in &outcomes {
        if distinct.contains(&outcome.as_str()) {
            continue;
        }
        if distinct.len() == 2 {
            return Err(binary_sides_error("more than 2"));
        }
        distinct.push(outcome.as_str());
    }
    if distinct.len() != 2 {
        return Err(binary_sides_error(&distinct.len().to_string()));
    }
    let coin = Coin::with_sides(&distinct)?;
    Ok(make_series(Arc::new(coin), outcomes))
}

fn binary_sides_error(distinct: &str) -> TossError {
    TossError::InvalidSides(
        ErrorInfo::new(
            "invalid-sides",
            "`bits` must contain exactly two distinct values",
        )
        .with_context("distinct", distinct),
    )
}

impl TossSeries {
    /// Returns the coin the series was drawn from.
    pub fn coin(&self) -> &Arc<Coin> {
        &self.coin
    }

    /// Returns the outcomes in toss order.
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    /// Number of tosses recorded.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of outcomes equal to the first side.
    pub fn heads_count(&self) -> usize {
        self.heads_count
    }

    /// Number of outcomes equal to the second side.
    pub fn tails_count(&self) -> usize {
        self.tails_count
    }

    /// Number of outcomes equal to the selected side.
    pub fn count(&self, side: Side) -> usize {
        match side {
            Side::First => self.heads_count,
            Side::Second => self.tails_count,
        }
    }

    /// Short multi-line description: sides, total and per-side counts.
    pub fn describe(&self) -> String {
        let [first, second] = self.coin.sides();
        format!(
            "object \"toss\"\ncoin: \"{first}\", \"{second}\"\ntotal tosses: {}\nnum of {first}: {}\nnum of {second}: {}\n",
            self.total, self.heads_count, self.tails_count
        )
    }

    /// Extended summary including the proportion of each side.
    pub fn summarize(&self) -> Result<TossSummary, TossError> {
        TossSummary::from_series(self)
    }

    /// Cumulative proportion of `side` after each toss.
    pub fn running_frequencies(&self, side: Side) -> RunningFrequencies<'_> {
        RunningFrequencies::new(&self.outcomes, self.coin.side(side))
    }

    /// Like [`TossSeries::running_frequencies`], resolving a textual selector.
    pub fn running_frequencies_for(
        &self,
        selector: &str,
    ) -> Result<RunningFrequencies<'_>, TossError> {
        let side = Side::parse(selector, &self.coin)?;
        Ok(self.running_frequencies(side))
    }

    /// Returns the outcome at 1-based `index`.
    pub fn element_at(&self, index: usize) -> Result<&str, TossError> {
        let offset = checked_index(index, self.total)?;
        Ok(self.outcomes[offset].as_str())
    }

    /// Returns a new series with the outcome at 1-based `index` replaced.
    pub fn replace_at(&self, index: usize, value: &str) -> Result<TossSeries, TossError> {
        let offset = checked_index(index, self.total)?;
        if self.coin.side_of(value).is_none() {
            let [first, second] = self.coin.sides();
            return Err(TossError::InvalidValue(
                ErrorInfo::new("invalid-value", "`value` must be one of the coin sides")
                    .with_context("value", value)
                    .with_hint(format!("expected \"{first}\" or \"{second}\"")),
            ));
        }
        let mut outcomes = self.outcomes.clone();
        outcomes[offset] = value.to_string();
        trace!(index, value, "replaced outcome");
        Ok(make_series(Arc::clone(&self.coin), outcomes))
    }

    /// Tosses the same coin `additional` more times and appends the outcomes.
    pub fn extend(&self, additional: i64, rng: &mut RngHandle) -> Result<TossSeries, TossError> {
        positive_count("additional", additional)?;
        let fresh = self.coin.sample(additional, rng)?;
        let mut outcomes = Vec::with_capacity(self.total + fresh.len());
        outcomes.extend_from_slice(&self.outcomes);
        outcomes.extend(fresh);
        let series = make_series(Arc::clone(&self.coin), outcomes);
        debug!(from = self.total, to = series.total, "extended series");
        Ok(series)
    }
}

impl fmt::Display for TossSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
