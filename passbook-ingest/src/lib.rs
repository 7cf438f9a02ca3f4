//! passbook-ingest: turn pasted statement text (SMS, email, PDF excerpts)
//! into structured transactions.

pub mod error;
pub mod parsers;

pub use error::{check_input, require_transactions, IngestError, InputLimits};
pub use parsers::statement::{batch_confidence, parse_block, parse_statement_text};
