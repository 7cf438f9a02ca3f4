pub mod amount;
pub mod blocks;
pub mod classify;
pub mod date;
pub mod fallback;
pub mod statement;
