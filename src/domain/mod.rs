//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — domain types
//! - `wire.rs` — raw serde structs matching backend payloads
//! - `client.rs` — sub-client with one method per endpoint

pub mod payment;
pub mod recharge;
pub mod transaction;
pub mod user;
pub mod wallet;
