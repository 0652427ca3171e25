//! # Utilities Library
//!
//! Shared helpers for chain-id encoding, network names, expiry arithmetic, and validation.

pub mod chain;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use chain::{chain_id_to_hex, network_name, parse_chain_id};
pub use time::{expiry_after_hours, is_expired, now_millis, now_utc};
pub use validation::{validate_not_empty, validate_range};
