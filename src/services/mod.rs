//! Service layer
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and cross-store rules.

pub mod transaction;

pub use transaction::{MonthSummary, TransactionService};
