//! Input limits and the typed errors a caller of the parser branches on.

use passbook_core::{ParseBatch, ParseMethod};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("input too short: {len} characters (minimum {min})")]
    TooShort { len: usize, min: usize },

    #[error("input too long: {len} characters (maximum {max})")]
    TooLong { len: usize, max: usize },

    #[error("could not extract any transactions")]
    NothingExtracted,
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Character bounds applied before text reaches the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_chars: 5,
            max_chars: 10_000,
        }
    }
}

/// Reject text that is clearly not worth parsing. Counts chars, not bytes.
pub fn check_input(text: &str, limits: &InputLimits) -> Result<()> {
    let len = text.chars().count();
    if len > limits.max_chars {
        return Err(IngestError::TooLong {
            len,
            max: limits.max_chars,
        });
    }

    let trimmed = text.trim().chars().count();
    if trimmed < limits.min_chars {
        return Err(IngestError::TooShort {
            len: trimmed,
            min: limits.min_chars,
        });
    }

    Ok(())
}

/// Turn a `failed` batch into `IngestError::NothingExtracted`.
pub fn require_transactions(batch: ParseBatch) -> Result<ParseBatch> {
    if batch.parse_method == ParseMethod::Failed || batch.is_empty() {
        return Err(IngestError::NothingExtracted);
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        let limits = InputLimits::default();
        assert_eq!(check_input("Amount: 10.00", &limits), Ok(()));
        assert_eq!(
            check_input("  ab  ", &limits),
            Err(IngestError::TooShort { len: 2, min: 5 })
        );
        assert_eq!(
            check_input(&"x".repeat(10_001), &limits),
            Err(IngestError::TooLong { len: 10_001, max: 10_000 })
        );
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let limits = InputLimits { min_chars: 5, max_chars: 5 };
        // five chars, fifteen bytes
        assert_eq!(check_input("₹₹₹₹₹", &limits), Ok(()));
    }

    #[test]
    fn test_require_transactions() {
        assert_eq!(
            require_transactions(ParseBatch::failed()),
            Err(IngestError::NothingExtracted)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IngestError::NothingExtracted.to_string(),
            "could not extract any transactions"
        );
        assert_eq!(
            IngestError::TooShort { len: 2, min: 5 }.to_string(),
            "input too short: 2 characters (minimum 5)"
        );
    }
}
