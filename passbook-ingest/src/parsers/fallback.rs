//! Comma-separated fallback for text the standard patterns could not read.
//!
//! Expected rows:
//!   2025-12-11, -420, STARBUCKS
//!   date,       amount, description[, ...]

use passbook_core::ParsedTransaction;

use super::amount::parse_number;
use super::classify::classify_type;
use super::date::extract_date;

/// Confidence of any record recovered by the fallback
pub const CSV_FALLBACK_CONFIDENCE: f64 = 0.75;

const FALLBACK_DESCRIPTION: &str = "Parsed Transaction";

/// Read a loosely formatted amount cell: keep digits, `.` and `-`, then take
/// the magnitude.
fn parse_cell_amount(cell: &str) -> Option<f64> {
    let kept: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if kept.is_empty() {
        return None;
    }
    parse_number(&kept).map(f64::abs)
}

/// Parse every comma-bearing line that starts with a date and an amount.
pub fn parse_csv_lines(text: &str) -> Vec<ParsedTransaction> {
    let mut out = Vec::new();

    for line in text.lines().filter(|l| l.contains(',')) {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 3 {
            continue;
        }

        let Some(date) = extract_date(parts[0].trim()) else {
            continue;
        };
        let Some(amount) = parse_cell_amount(parts[1]) else {
            continue;
        };

        let description = match parts[2].trim() {
            "" => FALLBACK_DESCRIPTION.to_string(),
            d => d.to_string(),
        };

        out.push(ParsedTransaction {
            date,
            description,
            amount,
            kind: classify_type(line),
            category: None,
            balance: None,
            confidence: CSV_FALLBACK_CONFIDENCE,
        });
    }

    out
}
