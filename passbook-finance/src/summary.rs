//! Batch summary: totals grouped by category, money in/out and the last
//! stated balance.

use chrono::NaiveDate;
use passbook_core::{Category, ParseBatch};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Totals for one category (`None` collects uncategorized records)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Option<Category>,
    pub spent: f64,
    pub received: f64,
    pub transaction_count: usize,
}

impl CategoryTotal {
    pub fn label(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("uncategorized")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchSummary {
    pub transaction_count: usize,
    pub total_debits: f64,
    pub total_credits: f64,
    /// credits − debits
    pub net_flow: f64,
    /// Balance of the last record (block order) that states one
    pub latest_balance: Option<f64>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Sorted by amount spent, largest first
    pub categories: Vec<CategoryTotal>,
}

impl BatchSummary {
    pub fn from_batch(batch: &ParseBatch) -> Self {
        let txns = &batch.transactions;

        let mut groups: HashMap<Option<Category>, CategoryTotal> = HashMap::new();
        let mut total_debits = 0.0;
        let mut total_credits = 0.0;

        for t in txns {
            let entry = groups.entry(t.category).or_insert_with(|| CategoryTotal {
                category: t.category,
                spent: 0.0,
                received: 0.0,
                transaction_count: 0,
            });
            entry.transaction_count += 1;
            if t.is_debit() {
                entry.spent += t.amount;
                total_debits += t.amount;
            } else {
                entry.received += t.amount;
                total_credits += t.amount;
            }
        }

        let mut categories: Vec<CategoryTotal> = groups.into_values().collect();
        // Spend descending; ties keep a stable order by category token
        categories.sort_by(|a, b| {
            b.spent
                .total_cmp(&a.spent)
                .then_with(|| a.label().cmp(b.label()))
        });

        let summary = Self {
            transaction_count: txns.len(),
            total_debits,
            total_credits,
            net_flow: txns.iter().fold(0.0, |acc, t| acc + t.signed_amount()),
            latest_balance: txns.iter().rev().find_map(|t| t.balance),
            first_date: txns.iter().map(|t| t.date).min(),
            last_date: txns.iter().map(|t| t.date).max(),
            categories,
        };
        debug!(
            count = summary.transaction_count,
            groups = summary.categories.len(),
            "summarized batch"
        );
        summary
    }
}
