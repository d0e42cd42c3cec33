//! Core data models
//!
//! This module contains the data structures of the ledger domain:
//! transactions, their ids and amounts, and calendar months.

pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use month::Month;
pub use transaction::{NewTransaction, Transaction, TransactionKind};
