//! Persistence-shaped records: parsed transactions tagged with the batch
//! they came from.

use chrono::NaiveDate;
use passbook_core::{Category, ParseBatch, ParseMethod, ParsedTransaction, TransactionType};
use serde::{Deserialize, Serialize};

/// A parsed transaction ready to be stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTransaction {
    /// `{account}-{index:04}`, index in block order
    pub id: String,
    pub account: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Option<Category>,
    pub balance: Option<f64>,
    /// Confidence of this record
    pub confidence: f64,
    /// Aggregate confidence of the batch it was parsed in
    pub batch_confidence: f64,
    pub parse_method: ParseMethod,
    /// The raw text the batch was parsed from
    pub source_text: String,
}

impl StoredTransaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Debit
    }
}

/// Converts parser output into stored records
pub struct RecordEmitter;

impl RecordEmitter {
    /// Tag every transaction of `batch` with its source and batch metadata.
    pub fn to_records(batch: &ParseBatch, source_text: &str, account: &str) -> Vec<StoredTransaction> {
        batch
            .transactions
            .iter()
            .enumerate()
            .map(|(i, txn)| Self::record(i, txn, batch, source_text, account))
            .collect()
    }

    fn record(
        index: usize,
        txn: &ParsedTransaction,
        batch: &ParseBatch,
        source_text: &str,
        account: &str,
    ) -> StoredTransaction {
        StoredTransaction {
            id: format!("{}-{:04}", account, index),
            account: account.to_string(),
            date: txn.date,
            description: txn.description.clone(),
            amount: txn.amount,
            kind: txn.kind,
            category: txn.category,
            balance: txn.balance,
            confidence: txn.confidence,
            batch_confidence: batch.confidence,
            parse_method: batch.parse_method,
            source_text: source_text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> ParseBatch {
        let txn = |day, amount, kind| ParsedTransaction {
            date: NaiveDate::from_ymd_opt(2025, 12, day).unwrap(),
            description: "Coffee".to_string(),
            amount,
            kind,
            category: Some(Category::Food),
            balance: None,
            confidence: 0.95,
        };
        ParseBatch {
            transactions: vec![
                txn(1, 120.0, TransactionType::Debit),
                txn(2, 500.0, TransactionType::Credit),
            ],
            confidence: 0.95,
            parse_method: ParseMethod::Standard,
        }
    }

    #[test]
    fn test_ids_and_metadata() {
        let records = RecordEmitter::to_records(&batch(), "raw text", "hdfc");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "hdfc-0000");
        assert_eq!(records[1].id, "hdfc-0001");
        assert!(records.iter().all(|r| r.source_text == "raw text"));
        assert!(records.iter().all(|r| r.batch_confidence == 0.95));
        assert!(records.iter().all(|r| r.parse_method == ParseMethod::Standard));
    }

    #[test]
    fn test_expense_flag() {
        let records = RecordEmitter::to_records(&batch(), "", "a");
        assert!(records[0].is_expense());
        assert!(!records[1].is_expense());
    }

    #[test]
    fn test_failed_batch_has_no_records() {
        assert!(RecordEmitter::to_records(&ParseBatch::failed(), "x", "a").is_empty());
    }
}
