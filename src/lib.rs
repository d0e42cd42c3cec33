//! Gagyebu - household ledger for the terminal
//!
//! Records income and expense transactions by day and category, and
//! summarises them per month as a calendar of daily totals and an expense
//! breakdown by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, amounts, months and ids
//! - `storage`: Key-value persistence port and the stores built on it
//! - `reports`: Pure aggregations (totals, per-day, per-category)
//! - `calendar`: Month grid and compact cell labels
//! - `services`: Business rules over the stores
//! - `display`: Text renderers
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use gagyebu::config::{LedgerPaths, Settings};
//! use gagyebu::storage::Ledger;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::open_in(&paths)?;
//! ```

pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
