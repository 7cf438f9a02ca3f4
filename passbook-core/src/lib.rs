//! passbook-core: record types and category rules shared by the Passbook crates

pub mod category;
pub mod transaction;

pub use category::{categorize, Category, CATEGORY_KEYWORDS};
pub use transaction::{ParseBatch, ParseMethod, ParsedTransaction, TransactionType};
