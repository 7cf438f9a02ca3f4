//! Record types produced by the statement text parser

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Direction of money movement. The amount itself is always a magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "debit")]
    Debit,
    #[serde(rename = "credit")]
    Credit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
        }
    }

    /// Signed value of `amount` under this direction (debits are negative)
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionType::Debit => -amount,
            TransactionType::Credit => amount,
        }
    }
}

/// One transaction recovered from free-form statement text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedTransaction {
    /// Calendar date of the transaction
    pub date: NaiveDate,
    /// Cleaned merchant / narrative text, never empty
    pub description: String,
    /// Non-negative magnitude; direction lives in `kind`
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Stated account balance, may be negative for overdrafts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    /// Extraction reliability in [0, 1]
    pub confidence: f64,
}

impl ParsedTransaction {
    pub fn is_debit(&self) -> bool {
        self.kind == TransactionType::Debit
    }

    /// Amount with the direction applied (debits negative)
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }
}

/// Which strategy produced a batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ParseMethod {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "csv_fallback")]
    CsvFallback,
    #[serde(rename = "failed")]
    Failed,
}

impl ParseMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMethod::Standard => "standard",
            ParseMethod::CsvFallback => "csv_fallback",
            ParseMethod::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ParseMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything recovered from one parser invocation, in block order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParseBatch {
    pub transactions: Vec<ParsedTransaction>,
    /// Aggregate confidence in [0, 1]; 0 for an empty batch
    pub confidence: f64,
    pub parse_method: ParseMethod,
}

impl ParseBatch {
    /// The terminal "nothing found" outcome
    pub fn failed() -> Self {
        Self {
            transactions: Vec::new(),
            confidence: 0.0,
            parse_method: ParseMethod::Failed,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
