//! Wallet domain — balance, ledger, transfers.

pub mod client;
pub mod wire;

pub use client::Wallet;
pub use wire::{TransferRequest, TransferResponse, WalletBalance};
