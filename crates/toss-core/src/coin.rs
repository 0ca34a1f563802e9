//! Validated two-sided coin.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, TossError};
use crate::side::Side;
use crate::TwoSided;

/// Absolute tolerance applied when checking that probabilities sum to one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Side labels of the default coin.
pub const DEFAULT_SIDES: [&str; 2] = ["heads", "tails"];

/// Probabilities of the default coin.
pub const DEFAULT_PROBABILITIES: [f64; 2] = [0.5, 0.5];

/// Immutable two-sided coin with per-side probabilities.
///
/// Construction always goes through [`Coin::new`] (or the deserializer, which
/// calls it), so an existing value satisfies every invariant: two distinct
/// labels and two probabilities in `[0, 1]` summing to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoinSpec")]
pub struct Coin {
    sides: [String; 2],
    probabilities: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct CoinSpec {
    #[serde(default = "default_sides")]
    sides: Vec<String>,
    #[serde(default = "default_probabilities")]
    probabilities: Vec<f64>,
}

fn default_sides() -> Vec<String> {
    DEFAULT_SIDES.iter().map(|side| side.to_string()).collect()
}

fn default_probabilities() -> Vec<f64> {
    DEFAULT_PROBABILITIES.to_vec()
}

impl TryFrom<CoinSpec> for Coin {
    type Error = TossError;

    fn try_from(spec: CoinSpec) -> Result<Self, Self::Error> {
        Coin::new(&spec.sides, &spec.probabilities)
    }
}

impl Coin {
    /// Creates a coin after validating the sides and probabilities.
    pub fn new<S: AsRef<str>>(sides: &[S], probabilities: &[f64]) -> Result<Self, TossError> {
        if sides.len() != 2 {
            return Err(TossError::InvalidSides(
                ErrorInfo::new("invalid-sides", "`sides` must contain exactly two labels")
                    .with_context("sides", sides.len().to_string()),
            ));
        }
        let first = sides[0].as_ref();
        let second = sides[1].as_ref();
        if first == second {
            return Err(TossError::InvalidSides(
                ErrorInfo::new("invalid-sides", "`sides` must contain two distinct labels")
                    .with_context("side", first),
            ));
        }
        check_probabilities(probabilities)?;
        Ok(Self {
            sides: [first.to_string(), second.to_string()],
            probabilities: [probabilities[0], probabilities[1]],
        })
    }

    /// Creates a fair coin with the given labels.
    pub fn with_sides<S: AsRef<str>>(sides: &[S]) -> Result<Self, TossError> {
        Self::new(sides, &DEFAULT_PROBABILITIES)
    }

    /// Returns the label of the selected side.
    pub fn side(&self, side: Side) -> &str {
        &self.sides[side.index()]
    }

    /// Returns the probability of the selected side.
    pub fn probability(&self, side: Side) -> f64 {
        self.probabilities[side.index()]
    }

    /// Looks up which side carries `label`.
    pub fn side_of(&self, label: &str) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.sides[side.index()] == label)
    }
}

impl TwoSided for Coin {
    fn sides(&self) -> &[String; 2] {
        &self.sides
    }

    fn probabilities(&self) -> [f64; 2] {
        self.probabilities
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self {
            sides: [DEFAULT_SIDES[0].to_string(), DEFAULT_SIDES[1].to_string()],
            probabilities: DEFAULT_PROBABILITIES,
        }
    }
}

/// Checks that `probabilities` describes a valid two-sided distribution.
///
/// Succeeds when there are exactly two finite values, each in `[0, 1]`, whose
/// sum differs from one by at most [`PROBABILITY_TOLERANCE`].
pub fn check_probabilities(probabilities: &[f64]) -> Result<(), TossError> {
    if probabilities.len() != 2 {
        return Err(TossError::InvalidProbability(
            invalid_probability("`probabilities` must contain exactly two values")
                .with_context("probabilities", probabilities.len().to_string()),
        ));
    }
    for (idx, value) in probabilities.iter().enumerate() {
        if !value.is_finite() {
            return Err(TossError::InvalidProbability(
                invalid_probability("`probabilities` must be numeric")
                    .with_context(format!("probabilities[{}]", idx + 1), value.to_string()),
            ));
        }
        if !(0.0..=1.0).contains(value) {
            return Err(TossError::InvalidProbability(
                invalid_probability("`probabilities` must lie within [0, 1]")
                    .with_context(format!("probabilities[{}]", idx + 1), value.to_string()),
            ));
        }
    }
    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(TossError::InvalidProbability(
            invalid_probability("`probabilities` must add up to 1")
                .with_context("sum", sum.to_string())
                .with_hint(format!("tolerance is {PROBABILITY_TOLERANCE:e}")),
        ));
    }
    Ok(())
}

fn invalid_probability(message: &str) -> ErrorInfo {
    ErrorInfo::new("invalid-probability", message)
}
