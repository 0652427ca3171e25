//! # Session State
//!
//! [`ConnectionState`] is the snapshot presentation layers render from.
//!
//! ## Invariants
//!
//! - `is_connected` is true exactly when `address` is present
//! - `is_connecting` and `is_connected` are never both true
//! - `provider` is present only while connected

use crate::error::SessionError;
use crate::provider::ProviderHandle;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionState {
    pub address: Option<String>,
    pub chain_id: Option<u64>,
    pub is_connecting: bool,
    pub is_connected: bool,
    pub error: Option<SessionError>,
    pub provider: Option<ProviderHandle>,
}

impl ConnectionState {
    /// True for the all-default snapshot.
    pub fn is_idle(&self) -> bool {
        *self == ConnectionState::default()
    }
}

/// Wallet picker visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
}

/// Everything the session publishes to listeners.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub connection: ConnectionState,
    pub modal: ModalState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = ConnectionState::default();
        assert!(state.is_idle());
        assert!(!state.is_connected && !state.is_connecting);

        let failed = ConnectionState {
            error: Some(SessionError::NoProviderAvailable),
            ..ConnectionState::default()
        };
        assert!(!failed.is_idle());
    }
}
