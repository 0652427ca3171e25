//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the auxiliary data services (currency catalog,
//! wallet balances, live rates).
//!
//! ## Module Organization
//!
//! - [`currency`] - Currency catalog, balances, exchange rates, and the merged row
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod currency;

pub use currency::*;
