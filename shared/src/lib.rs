//! # Shared Data Transfer Objects Library
//!
//! Types exchanged between the wallet front end and the auxiliary data
//! services, plus small display helpers.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::currency`]**: Currency catalog, balances, exchange rates, merged rows
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::truncate_address`]**: Shorten EVM addresses for display
//!   - **[`utils::format_fiat`]**: Convert balances through a rate for display
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::currency::{merge_currencies, Asset, Currency};
//!
//! let catalog = vec![Currency {
//!     coin_id: "ETH".to_string(),
//!     name: "Ether".to_string(),
//!     symbol: "ETH".to_string(),
//! }];
//! let balances = vec![Asset { currency: "ETH".to_string(), amount: 2.0 }];
//!
//! let rows = merge_currencies(&catalog, &balances, &[]);
//! assert_eq!(rows[0].amount, Some(2.0));
//! assert!(rows[0].rates.is_none());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
