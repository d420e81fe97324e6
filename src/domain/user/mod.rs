//! User domain — profile and preferences.

pub mod client;
pub mod wire;

pub use client::Users;
pub use wire::{Preferences, UpdateProfileRequest};
