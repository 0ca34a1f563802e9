use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::errors::{ErrorInfo, TossError};
use crate::TwoSided;

/// Selects one of the two sides of a coin by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// `sides[0]`, the "heads" position.
    First,
    /// `sides[1]`, the "tails" position.
    Second,
}

impl Side {
    /// Both selectors in side order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// Returns the 0-based position of the side.
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Resolves a textual selector against `coin`.
    ///
    /// A label of the coin wins over the positional keywords, so a coin with
    /// sides `["tails", "heads"]` resolves `"heads"` to [`Side::Second`].
    pub fn parse(selector: &str, coin: &Coin) -> Result<Side, TossError> {
        if let Some(side) = coin.side_of(selector) {
            return Ok(side);
        }
        match selector.trim().to_ascii_lowercase().as_str() {
            "heads" | "first" | "1" => Ok(Side::First),
            "tails" | "second" | "2" => Ok(Side::Second),
            _ => Err(TossError::InvalidSide(
                ErrorInfo::new("invalid-side", "`side` must select one of the two coin sides")
                    .with_context("side", selector)
                    .with_hint(format!(
                        "use \"{}\", \"{}\", heads, tails, 1 or 2",
                        coin.sides()[0],
                        coin.sides()[1]
                    )),
            )),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}
