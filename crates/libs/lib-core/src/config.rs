//! # Session Configuration
//!
//! Host-supplied knobs for the wallet session. There is no environment to
//! read in a browser, so the host builds a [`SessionConfig`] (usually
//! `SessionConfig::default()`) and passes it to [`Session::new`].
//!
//! ```rust
//! use lib_core::config::SessionConfig;
//!
//! let config = SessionConfig {
//!     auto_connect: false,
//!     ..SessionConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```
//!
//! [`Session::new`]: crate::session::Session::new

use lib_utils::{validate_not_empty, validate_range};

/// Preference key the last connected wallet id is stored under.
pub const DEFAULT_LAST_WALLET_KEY: &str = "lastConnectedWallet";

/// How long the remembered wallet stays eligible for auto-connect.
pub const DEFAULT_REMEMBER_HOURS: u32 = 24;

/// Upper bound on `remember_hours` (30 days).
pub const MAX_REMEMBER_HOURS: u32 = 720;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Reconnect to the remembered wallet when the session starts.
    pub auto_connect: bool,

    /// Preference key holding the remembered wallet id.
    pub last_wallet_key: String,

    /// Expiry written alongside the remembered wallet id.
    ///
    /// Valid range: 1-720 hours
    pub remember_hours: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_connect: true,
            last_wallet_key: DEFAULT_LAST_WALLET_KEY.to_string(),
            remember_hours: DEFAULT_REMEMBER_HOURS,
        }
    }
}

impl SessionConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        validate_not_empty(&self.last_wallet_key, "last_wallet_key")?;
        validate_range(self.remember_hours, 1, MAX_REMEMBER_HOURS, "remember_hours")?;
        Ok(())
    }
}
