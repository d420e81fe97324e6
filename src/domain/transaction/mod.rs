//! Transaction domain — read-only projections for dashboard and history.

pub mod client;
pub mod wire;

pub use client::Transactions;
pub use wire::{Transaction, TransactionStats, TransactionSummary, TransactionsResponse};
