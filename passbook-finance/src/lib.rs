//! passbook-finance: storage-ready records and batch summaries built from
//! parser output

pub mod records;
pub mod summary;

pub use records::{RecordEmitter, StoredTransaction};
pub use summary::{BatchSummary, CategoryTotal};
