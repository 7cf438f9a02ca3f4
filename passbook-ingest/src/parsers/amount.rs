//! Amount and balance extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Confidence assigned to any amount found through an explicit pattern
pub const EXPLICIT_AMOUNT_CONFIDENCE: f64 = 0.95;

/// A monetary magnitude together with how much we trust it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountMatch {
    pub value: f64,
    pub confidence: f64,
}

struct AmountPattern {
    name: &'static str,
    re: Regex,
}

// Each pattern captures the number in group 1.
static AMOUNT_PATTERNS: LazyLock<Vec<AmountPattern>> = LazyLock::new(|| {
    [
        ("amount-label", r"(?i)amount\s*:\s*(-?\s*\d[\d,]*\.\d{2})"),
        ("rupee", r"₹\s*(\d[\d,]*(?:\.\d+)?)"),
        ("rs", r"(?i)\brs\.?\s*(\d[\d,]*(?:\.\d+)?)"),
        ("dollar", r"\$\s*(\d[\d,]*(?:\.\d+)?)"),
        ("marker", r"(?i)(\d[\d,]*\.\d{2})\s*(?:debited|credited|debit|credit|dr|cr)\b"),
    ]
    .into_iter()
    .map(|(name, pattern)| AmountPattern {
        name,
        re: Regex::new(pattern).expect("invalid amount regex"),
    })
    .collect()
});

// Order: "Balance ...", "Available [Balance] ...", "Bal ...".
static BALANCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bbalance\b(?:\s+after\s+\w+)?\s*[:→]?\s*(?:₹|rs\.?|\$)?\s*(-?\d[\d,]*(?:\.\d+)?)",
        r"(?i)\bavailable\s*(?:balance)?\s*[:→]?\s*(?:₹|rs\.?|\$)?\s*(-?\d[\d,]*(?:\.\d+)?)",
        r"(?i)\bbal\b\.?\s*[:→]?\s*(?:₹|rs\.?|\$)?\s*(-?\d[\d,]*(?:\.\d+)?)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("invalid balance regex"))
    .collect()
});

// A balance label sitting right before a figure; such figures are never amounts.
static BALANCE_LABEL_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bbalance\b(?:\s+after\s+\w+)?|\bavailable\b|\bbal\b\.?)\s*[:→]?\s*(?:₹|rs\.?|\$)?\s*$")
        .expect("invalid balance label regex")
});

/// Parse a captured number, dropping thousands separators and inner spaces.
/// Rejects anything that is not a finite number.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let value: f64 = cleaned.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Locate the transaction amount. Always returns a magnitude.
///
/// Figures labelled as a balance are skipped so the same number is never
/// read as both amount and balance.
pub fn extract_amount(text: &str) -> Option<AmountMatch> {
    AMOUNT_PATTERNS.iter().find_map(|p| {
        p.re.captures_iter(text).find_map(|caps| {
            let start = caps.get(0)?.start();
            if BALANCE_LABEL_TAIL.is_match(&text[..start]) {
                return None;
            }
            let value = parse_number(&caps[1]);
            if value.is_none() {
                tracing::debug!(pattern = p.name, matched = &caps[0], "amount pattern matched but did not parse");
            }
            Some(AmountMatch {
                value: value?.abs(),
                confidence: EXPLICIT_AMOUNT_CONFIDENCE,
            })
        })
    })
}

/// Locate a stated account balance. The sign is preserved.
pub fn extract_balance(text: &str) -> Option<f64> {
    BALANCE_PATTERNS
        .iter()
        .find_map(|re| parse_number(&re.captures(text)?[1]))
}
