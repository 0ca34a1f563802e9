#![deny(missing_docs)]
#![doc = "Coin and toss series types for the toss simulator."]

use std::any::Any;

use tracing::debug;

pub mod coin;
pub mod errors;
pub mod frequency;
pub mod rng;
pub mod serde;
pub mod series;
mod side;
mod summary;

pub use crate::serde::{from_json_slice, to_canonical_json_bytes};
pub use coin::{check_probabilities, Coin, PROBABILITY_TOLERANCE};
pub use errors::{ErrorInfo, TossError};
pub use frequency::{plot, ChartFrame, ChartSink, FrequencyPoint, RunningFrequencies};
pub use rng::{derive_substream_seed, RngHandle};
pub use series::{from_binary, make_series, toss, TossSeries};
pub use side::Side;
pub use summary::TossSummary;

/// Capability set of a weighted two-sided entity that can be sampled.
pub trait TwoSided: Send + Sync {
    /// Returns both side labels in order.
    fn sides(&self) -> &[String; 2];

    /// Returns the probability of each side, aligned with [`TwoSided::sides`].
    fn probabilities(&self) -> [f64; 2];

    /// Draws `count` independent outcomes with replacement.
    ///
    /// `count` must be positive; draws below the first side's probability
    /// select the first side.
    fn sample(&self, count: i64, rng: &mut RngHandle) -> Result<Vec<String>, TossError> {
        let count = errors::positive_count("count", count)?;
        let [first, second] = self.sides();
        let threshold = self.probabilities()[0];
        let outcomes = (0..count)
            .map(|_| {
                if rng.uniform() < threshold {
                    first.clone()
                } else {
                    second.clone()
                }
            })
            .collect();
        debug!(count, first = %first, second = %second, "sampled outcomes");
        Ok(outcomes)
    }
}

/// Capability set for values that tally outcomes per side.
///
/// Implementors without per-side counts keep the defaults, which fail with
/// [`TossError::UnsupportedType`].
pub trait Tally {
    /// Short name of the implementing type, used in error messages.
    fn type_name(&self) -> &'static str;

    /// Number of outcomes equal to the first side.
    fn heads_count(&self) -> Result<usize, TossError> {
        Err(unsupported(self.type_name(), "heads_count"))
    }

    /// Number of outcomes equal to the second side.
    fn tails_count(&self) -> Result<usize, TossError> {
        Err(unsupported(self.type_name(), "tails_count"))
    }
}

fn unsupported(type_name: &str, operation: &str) -> TossError {
    TossError::UnsupportedType(
        ErrorInfo::new(
            "unsupported-type",
            format!("`{operation}` is not defined for {type_name}"),
        )
        .with_context("type", type_name)
        .with_hint("pass a toss series"),
    )
}

impl Tally for TossSeries {
    fn type_name(&self) -> &'static str {
        "toss series"
    }

    fn heads_count(&self) -> Result<usize, TossError> {
        Ok(TossSeries::heads_count(self))
    }

    fn tails_count(&self) -> Result<usize, TossError> {
        Ok(TossSeries::tails_count(self))
    }
}

impl Tally for Coin {
    fn type_name(&self) -> &'static str {
        "coin"
    }
}

impl Tally for [String] {
    fn type_name(&self) -> &'static str {
        "raw outcomes"
    }
}

impl Tally for Vec<String> {
    fn type_name(&self) -> &'static str {
        "raw outcomes"
    }
}

/// Generic accessor for the first side's count.
pub fn heads_count<T: Tally + ?Sized>(value: &T) -> Result<usize, TossError> {
    value.heads_count()
}

/// Generic accessor for the second side's count.
pub fn tails_count<T: Tally + ?Sized>(value: &T) -> Result<usize, TossError> {
    value.tails_count()
}

/// Returns whether `value` is a [`TossSeries`].
pub fn is_toss_series(value: &dyn Any) -> bool {
    value.is::<TossSeries>()
}
