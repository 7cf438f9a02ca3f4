use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use passbook_core::ParseBatch;
use passbook_finance::{BatchSummary, StoredTransaction};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Flat row for CSV export (no source text)
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    date: NaiveDate,
    description: &'a str,
    amount: f64,
    #[serde(rename = "type")]
    kind: &'static str,
    category: &'static str,
    balance: Option<f64>,
    confidence: f64,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    confidence: f64,
    parse_method: &'static str,
    transactions: &'a [StoredTransaction],
}

pub fn print_records<W: Write>(
    out: &mut W,
    batch: &ParseBatch,
    records: &[StoredTransaction],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(out, batch, records),
        OutputFormat::Json => {
            let doc = JsonOutput {
                confidence: batch.confidence,
                parse_method: batch.parse_method.as_str(),
                transactions: records,
            };
            serde_json::to_writer_pretty(&mut *out, &doc).context("write json")?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(out, records),
    }
}

fn print_table<W: Write>(out: &mut W, batch: &ParseBatch, records: &[StoredTransaction]) -> Result<()> {
    writeln!(
        out,
        "Parsed {} transactions, {} expenses (method={}, confidence={:.2})\n",
        records.len(),
        records.iter().filter(|r| r.is_expense()).count(),
        batch.parse_method,
        batch.confidence
    )?;
    for r in records {
        let balance = r
            .balance
            .map(|b| format!(" | bal={:.2}", b))
            .unwrap_or_default();
        writeln!(
            out,
            "{} | {} | {:<6} | {:>12.2} | {:<12} | {}{}",
            r.id,
            r.date,
            r.kind.as_str(),
            r.amount,
            r.category.map(|c| c.as_str()).unwrap_or("-"),
            r.description,
            balance
        )?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, records: &[StoredTransaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for r in records {
        wtr.serialize(CsvRow {
            id: &r.id,
            date: r.date,
            description: &r.description,
            amount: r.amount,
            kind: r.kind.as_str(),
            category: r.category.map(|c| c.as_str()).unwrap_or(""),
            balance: r.balance,
            confidence: r.confidence,
        })
        .context("write csv row")?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}

pub fn print_summary<W: Write>(out: &mut W, summary: &BatchSummary) -> Result<()> {
    writeln!(out, "Transactions: {}", summary.transaction_count)?;
    if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
        writeln!(out, "Period:       {} .. {}", first, last)?;
    }
    writeln!(out, "Debits:       {:.2}", summary.total_debits)?;
    writeln!(out, "Credits:      {:.2}", summary.total_credits)?;
    writeln!(out, "Net flow:     {:.2}", summary.net_flow)?;
    if let Some(b) = summary.latest_balance {
        writeln!(out, "Last balance: {:.2}", b)?;
    }

    writeln!(out, "\nBy category:")?;
    for c in &summary.categories {
        writeln!(
            out,
            "- {:<14} spent={:>12.2} received={:>12.2} count={}",
            c.label(),
            c.spent,
            c.received,
            c.transaction_count
        )?;
    }
    Ok(())
}
