//! Free-form statement text parser.
//!
//! Handles pasted SMS / email / PDF excerpts such as:
//!   Date: 11 Dec 2025
//!   Description: STARBUCKS COFFEE MUMBAI
//!   Amount: -420.00
//!
//!   Uber Ride * Airport Drop
//!   12/11/2025 → ₹1,250.00 debited
//!
//! Strategies run in order and the first non-empty one wins: per-block
//! pattern extraction, then the comma-separated fallback.

use passbook_core::{categorize, ParseBatch, ParseMethod, ParsedTransaction};
use tracing::{debug, info};

use super::amount::{extract_amount, extract_balance};
use super::blocks::split_blocks;
use super::classify::{classify_type, clean_description};
use super::date::extract_date;
use super::fallback::parse_csv_lines;

/// Penalty applied when a batch holds a single record
const SINGLE_RECORD_PENALTY: f64 = 0.9;

/// Extract one transaction from a block, or nothing if either the date or
/// the amount is missing.
pub fn parse_block(block: &str) -> Option<ParsedTransaction> {
    let date = extract_date(block)?;
    let amount = extract_amount(block)?;
    let description = clean_description(block);
    let category = categorize(&description);

    Some(ParsedTransaction {
        date,
        description,
        amount: amount.value,
        kind: classify_type(block),
        category,
        balance: extract_balance(block),
        confidence: amount.confidence,
    })
}

/// Aggregate confidence: the mean, penalised for single-record batches,
/// clamped to [0, 1]. Zero for an empty batch.
pub fn batch_confidence(txns: &[ParsedTransaction]) -> f64 {
    if txns.is_empty() {
        return 0.0;
    }
    let mean = txns.iter().map(|t| t.confidence).sum::<f64>() / txns.len() as f64;
    let score = if txns.len() == 1 { mean * SINGLE_RECORD_PENALTY } else { mean };
    score.clamp(0.0, 1.0)
}

fn parse_standard(text: &str) -> Vec<ParsedTransaction> {
    split_blocks(text)
        .into_iter()
        .enumerate()
        .filter_map(|(i, block)| {
            let parsed = parse_block(block);
            if parsed.is_none() {
                debug!(block = i, "no date/amount pair in block");
            }
            parsed
        })
        .collect()
}

/// Parse pasted statement text into transactions.
///
/// Never fails: unreadable input yields an empty batch tagged `failed`.
pub fn parse_statement_text(text: &str) -> ParseBatch {
    let mut txns = parse_standard(text);
    let mut method = ParseMethod::Standard;

    if txns.is_empty() && text.contains(',') {
        debug!("standard extraction found nothing; trying comma-separated rows");
        txns = parse_csv_lines(text);
        method = ParseMethod::CsvFallback;
    }

    if txns.is_empty() {
        info!(chars = text.chars().count(), "no transactions extracted");
        return ParseBatch::failed();
    }

    let confidence = batch_confidence(&txns);
    info!(
        count = txns.len(),
        method = method.as_str(),
        confidence,
        "parsed statement text"
    );

    ParseBatch {
        transactions: txns,
        confidence,
        parse_method: method,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_core::{Category, TransactionType};

    #[test]
    fn test_block_needs_date_and_amount() {
        assert!(parse_block("STARBUCKS ₹420.00").is_none());
        assert!(parse_block("STARBUCKS 11 Dec 2025").is_none());
        assert!(parse_block("STARBUCKS 11 Dec 2025 ₹420.00").is_some());
    }

    #[test]
    fn test_block_fields() {
        let txn = parse_block("Refund credited from Flipkart\n05/01/2026 Rs 1,499.00\nAvl Bal: Rs 9,000.00").unwrap();
        assert_eq!(txn.kind, TransactionType::Credit);
        assert_eq!(txn.amount, 1499.0);
        assert_eq!(txn.balance, Some(9000.0));
        assert_eq!(txn.category, Some(Category::Shopping));
        assert_eq!(txn.confidence, 0.95);
    }

    #[test]
    fn test_batch_confidence() {
        let one = parse_block("11 Dec 2025 ₹420.00").unwrap();
        assert_eq!(batch_confidence(&[]), 0.0);
        assert!((batch_confidence(std::slice::from_ref(&one)) - 0.855).abs() < 1e-9);
        assert!((batch_confidence(&[one.clone(), one]) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_multiple_blocks_keep_order() {
        let text = "11 Dec 2025 Coffee ₹120.00\n\nnoise without numbers\n\n12 Dec 2025 Pizza ₹480.00";
        let batch = parse_statement_text(text);
        assert_eq!(batch.parse_method, ParseMethod::Standard);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.transactions[0].amount, 120.0);
        assert_eq!(batch.transactions[1].amount, 480.0);
    }

    #[test]
    fn test_fallback_needs_comma() {
        let batch = parse_statement_text("2025-12-11 -420 STARBUCKS");
        assert_eq!(batch.parse_method, ParseMethod::Failed);
    }
}
