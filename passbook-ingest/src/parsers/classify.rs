//! Debit/credit classification and description cleaning.

use std::sync::LazyLock;

use passbook_core::TransactionType;
use regex::Regex;

const DEBIT_KEYWORDS: &[&str] = &["debit", "paid", "spent", "charges", "debited", "withdrawn", "dr", "-"];
const CREDIT_KEYWORDS: &[&str] = &["credit", "deposited", "received", "refund", "credited", "cr", "+"];

/// Placeholder used when nothing readable is left of a description
pub const PLACEHOLDER_DESCRIPTION: &str = "Transaction";

// An explicit negative amount settles the direction before keyword voting.
static EXPLICIT_NEGATIVE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)amount\s*:\s*-",
        r"(?:^|[\s:(])-\s?\d[\d,]*\.\d{2}",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("invalid negative amount regex"))
    .collect()
});

/// Classify a block (or CSV line) as debit or credit.
///
/// Credit needs strictly more keyword hits than debit; ties go to debit.
pub fn classify_type(text: &str) -> TransactionType {
    if EXPLICIT_NEGATIVE.iter().any(|re| re.is_match(text)) {
        return TransactionType::Debit;
    }

    let lower = text.to_lowercase();
    let hits = |keywords: &[&str]| keywords.iter().filter(|k| lower.contains(*k)).count();

    if hits(CREDIT_KEYWORDS) > hits(DEBIT_KEYWORDS) {
        TransactionType::Credit
    } else {
        TransactionType::Debit
    }
}

static BARE_SLASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("invalid bare date regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("invalid ws regex"));

/// Substitutions applied, in order, to the joined description lines
static DESCRIPTION_SCRUBS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // transaction ids
        (r"(?i)\btxn\d+\b", ""),
        // ISO dates
        (r"\d{4}-\d{2}-\d{2}", ""),
        // balance mentions, before bare currency so the figure goes with the label
        (
            r"(?i)\b(?:available\s+)?(?:balance|bal)\b\.?\s*[:→]?\s*(?:₹|rs\.?)?\s*-?\d[\d,]*(?:\.\d+)?",
            "",
        ),
        // currency amounts
        (r"(?i)(?:₹|\brs\.?)\s*-?\d[\d,]*(?:\.\d+)?", ""),
        // debit/credit markers
        (r"(?i)\b(?:debited|credited|debit|credit|dr|cr)\b", ""),
        // order numbers, keeping the word itself
        (r"(?i)\b(order)\s*(?:#\s*[\w-]+|\d[\d-]{4,})", "$1"),
        (r"[*→]", " "),
    ]
    .into_iter()
    .map(|(pattern, rep)| (Regex::new(pattern).expect("invalid scrub regex"), rep))
    .collect()
});

/// Reduce a block to the merchant/narrative part.
pub fn clean_description(block: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();
        if ["date:", "amount:", "balance", "available balance"]
            .iter()
            .any(|prefix| lower.starts_with(prefix))
            || BARE_SLASH_DATE.is_match(line)
        {
            continue;
        }
        if lower.starts_with("description:") {
            kept.push(line.get("description:".len()..).unwrap_or_default().trim());
            continue;
        }
        kept.push(line);
    }

    let mut desc = kept.join(" ");
    for (re, rep) in DESCRIPTION_SCRUBS.iter() {
        desc = re.replace_all(&desc, *rep).into_owned();
    }
    let desc = WHITESPACE.replace_all(&desc, " ").trim().to_string();

    if desc.chars().count() < 2 {
        PLACEHOLDER_DESCRIPTION.to_string()
    } else {
        desc
    }
}
