use chrono::NaiveDate;
use passbook_core::{Category, ParseMethod, TransactionType};
use passbook_finance::{BatchSummary, RecordEmitter};
use passbook_ingest::parse_statement_text;
use std::path::PathBuf;

fn statement_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join("sample_statement.txt")
}

fn statement_text() -> String {
    std::fs::read_to_string(statement_path()).expect("should read sample_statement.txt")
}

/// Regression over a mixed statement: every block with a date and amount
/// becomes a record, in block order.
#[test]
fn test_parse_sample_statement() {
    let batch = parse_statement_text(&statement_text());
    assert_eq!(batch.parse_method, ParseMethod::Standard);
    assert_eq!(batch.len(), 5);
    assert!((batch.confidence - 0.95).abs() < 1e-9);

    let amounts: Vec<f64> = batch.transactions.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![420.0, 1250.0, 2999.0, 25000.0, 299.0]);

    let salary = &batch.transactions[3];
    assert_eq!(salary.kind, TransactionType::Credit);
    assert_eq!(salary.date, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
    assert_eq!(salary.balance, Some(39171.50));
    assert_eq!(salary.category, None);

    let recharge = &batch.transactions[4];
    assert_eq!(recharge.category, Some(Category::Utilities));
    assert_eq!(recharge.kind, TransactionType::Debit);
}

#[test]
fn test_records_carry_batch_metadata() {
    let text = statement_text();
    let batch = parse_statement_text(&text);
    let records = RecordEmitter::to_records(&batch, &text, "hdfc");

    assert_eq!(records.len(), batch.len());
    assert_eq!(records[4].id, "hdfc-0004");
    for r in &records {
        assert_eq!(r.source_text, text);
        assert_eq!(r.batch_confidence, batch.confidence);
        assert_eq!(r.parse_method, ParseMethod::Standard);
    }

    let expenses = records.iter().filter(|r| r.is_expense()).count();
    assert_eq!(expenses, 4);
}

#[test]
fn test_summary_of_sample_statement() {
    let batch = parse_statement_text(&statement_text());
    let summary = BatchSummary::from_batch(&batch);

    assert_eq!(summary.transaction_count, 5);
    assert!((summary.total_debits - 4968.0).abs() < 1e-9);
    assert!((summary.total_credits - 25000.0).abs() < 1e-9);
    assert!((summary.net_flow - 20032.0).abs() < 1e-9);
    assert_eq!(summary.latest_balance, Some(39171.50));
    assert_eq!(summary.first_date, NaiveDate::from_ymd_opt(2025, 12, 11));
    assert_eq!(summary.last_date, NaiveDate::from_ymd_opt(2025, 12, 16));

    let labels: Vec<_> = summary.categories.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec!["shopping", "transport", "food", "utilities", "uncategorized"]
    );
}

#[test]
fn test_summary_serializes() {
    let batch = parse_statement_text("2025-12-11, -420, STARBUCKS");
    let summary = BatchSummary::from_batch(&batch);
    let v = serde_json::to_value(&summary).unwrap();
    assert_eq!(v["transaction_count"], 1);
    assert_eq!(v["categories"][0]["category"], serde_json::Value::Null);
}
