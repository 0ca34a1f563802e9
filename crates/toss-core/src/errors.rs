//! Structured error types for coin and toss series operations.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`TossError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Offending arguments and the values they carried.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint describing the expected constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the toss simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum TossError {
    /// A coin needs exactly two distinct sides.
    #[error("invalid sides: {0}")]
    InvalidSides(ErrorInfo),
    /// Probabilities must be two finite values in [0, 1] summing to one.
    #[error("invalid probability: {0}")]
    InvalidProbability(ErrorInfo),
    /// Repetition counts must be positive integers.
    #[error("invalid count: {0}")]
    InvalidCount(ErrorInfo),
    /// Side selector did not name either side of the coin.
    #[error("invalid side: {0}")]
    InvalidSide(ErrorInfo),
    /// Replacement value is not one of the coin's sides.
    #[error("invalid value: {0}")]
    InvalidValue(ErrorInfo),
    /// Index lies outside `[1, total]`.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(ErrorInfo),
    /// Generic operation invoked on a value lacking the capability.
    #[error("unsupported type: {0}")]
    UnsupportedType(ErrorInfo),
    /// Proportions requested for an empty series.
    #[error("division undefined: {0}")]
    DivisionUndefined(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl TossError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TossError::InvalidSides(info)
            | TossError::InvalidProbability(info)
            | TossError::InvalidCount(info)
            | TossError::InvalidSide(info)
            | TossError::InvalidValue(info)
            | TossError::IndexOutOfBounds(info)
            | TossError::UnsupportedType(info)
            | TossError::DivisionUndefined(info)
            | TossError::Serde(info) => info,
        }
    }
}

/// Validates a repetition count, returning it as `usize` when positive.
pub(crate) fn positive_count(argument: &str, count: i64) -> Result<usize, TossError> {
    if count <= 0 {
        return Err(TossError::InvalidCount(
            ErrorInfo::new("invalid-count", format!("`{argument}` must be a positive integer"))
                .with_context(argument, count.to_string())
                .with_hint("pass a count of at least 1"),
        ));
    }
    usize::try_from(count).map_err(|_| {
        TossError::InvalidCount(
            ErrorInfo::new("invalid-count", format!("`{argument}` exceeds the addressable range"))
                .with_context(argument, count.to_string()),
        )
    })
}

/// Validates a 1-based index against `total`, returning the 0-based offset.
pub(crate) fn checked_index(index: usize, total: usize) -> Result<usize, TossError> {
    if index == 0 || index > total {
        return Err(TossError::IndexOutOfBounds(
            ErrorInfo::new("index-out-of-bounds", "`index` must lie within [1, total]")
                .with_context("index", index.to_string())
                .with_context("total", total.to_string()),
        ));
    }
    Ok(index - 1)
}
