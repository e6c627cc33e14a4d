//! Error types for loading and validating knapsack instances.

use std::fmt;

/// Details about a token that is not a valid integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The offending token.
    pub token: String,
    /// What the token was expected to be (e.g. "capacity").
    pub field: &'static str,
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse '{}' as {}", self.token, self.field)
    }
}

impl std::error::Error for ParseTokenError {}

/// A numeric field that parsed but is outside the admissible range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The item count is negative.
    NegativeItemCount(i64),
    /// The knapsack capacity is negative.
    NegativeCapacity(i64),
    /// An item weight is negative.
    NegativeWeight { item: usize, value: i64 },
    /// An item profit is negative.
    NegativeProfit { item: usize, value: i64 },
    /// The summed weight of all items does not fit in a `u64`.
    TotalWeightOverflow,
    /// The summed profit of all items does not fit in a `u64`.
    TotalProfitOverflow,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeItemCount(n) => write!(f, "item count must be non-negative, got {n}"),
            Self::NegativeCapacity(w) => write!(f, "capacity must be non-negative, got {w}"),
            Self::NegativeWeight { item, value } => {
                write!(f, "item {item} has negative weight {value}")
            }
            Self::NegativeProfit { item, value } => {
                write!(f, "item {item} has negative profit {value}")
            }
            Self::TotalWeightOverflow => write!(f, "total item weight overflows u64"),
            Self::TotalProfitOverflow => write!(f, "total item profit overflows u64"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The error type for everything that can go wrong before a search starts.
#[derive(Debug)]
pub enum KnapsackError {
    /// Reading the input stream failed.
    Io(std::io::Error),
    /// The input ended while `expected` was still missing.
    UnexpectedEof { expected: &'static str },
    /// A token could not be parsed as an integer.
    Parse(ParseTokenError),
    /// A parsed value is out of range.
    Validation(ValidationError),
    /// A configuration file could not be decoded.
    Config(serde_json::Error),
}

impl KnapsackError {
    /// True for malformed or truncated input, as opposed to out-of-range values.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::UnexpectedEof { .. } | Self::Parse(_)
        )
    }
}

impl fmt::Display for KnapsackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input while reading {expected}")
            }
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Validation(e) => write!(f, "invalid instance: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for KnapsackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::UnexpectedEof { .. } => None,
        }
    }
}

impl From<std::io::Error> for KnapsackError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for KnapsackError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ValidationError> for KnapsackError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<serde_json::Error> for KnapsackError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
