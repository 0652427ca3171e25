//! # Connection Session
//!
//! One [`Session`] per application root. It owns the [`ConnectionState`]
//! and the picker [`ModalState`], and it is their only writer:
//!
//! - [`Session::connect`] / [`Session::disconnect`] / [`Session::switch_chain`]
//! - the wallet event handlers (`AccountsChanged`, `ChainChanged`, `Disconnected`)
//! - [`Session::open_modal`] / [`Session::close_modal`]
//!
//! ## State machine
//!
//! ```text
//!   Idle ──connect──▶ Connecting ──ok──▶ Connected
//!    ▲                    │                  │
//!    └──────failure───────┘                  │
//!    └──────────────disconnect───────────────┘
//! ```
//!
//! Failures never escape as `Err`; they land in [`ConnectionState::error`].
//!
//! ## Stale results
//!
//! A connect attempt remembers the session generation it started in.
//! `disconnect`, a wallet-originated disconnect and `AccountsChanged([])`
//! advance the generation, and a connector result arriving for an older
//! generation is dropped.
//!
//! ## Listeners
//!
//! Every committed mutation that changes the snapshot is published to
//! [`Session::subscribe`] listeners after the state borrow is released, so
//! listeners may call back into the session.

use crate::bus::{EventBus, Subscription, WalletEvent};
use crate::config::SessionConfig;
use crate::connector::ConnectOutcome;
use crate::error::{ProviderRpcError, SessionError};
use crate::model::{
    ChainCatalog, ChainDescriptor, ConnectionState, ModalState, NativeCurrency, SessionSnapshot,
    WalletRegistry,
};
use crate::prefs::Preferences;
use crate::provider::{Eip1193Provider, Environment, ProviderHandle};
use lib_utils::chain_id_to_hex;
use serde::Serialize;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[cfg(test)]
pub(crate) mod tests;

const SWITCH_CHAIN: &str = "wallet_switchEthereumChain";
const ADD_CHAIN: &str = "wallet_addEthereumChain";

struct SessionInner {
    config: SessionConfig,
    wallets: WalletRegistry,
    chains: ChainCatalog,
    preferences: Preferences,
    environment: Rc<dyn Environment>,
    state: RefCell<SessionSnapshot>,
    generation: Cell<u64>,
    started: Cell<bool>,
    listeners: EventBus<SessionSnapshot>,
    wallet_events: RefCell<Option<Subscription>>,
}

/// Cloneable handle to the session. Dropping the last clone unsubscribes it
/// from the wallet event bus.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    pub fn new(
        config: SessionConfig,
        wallets: WalletRegistry,
        chains: ChainCatalog,
        preferences: Preferences,
        environment: Rc<dyn Environment>,
        events: &EventBus<WalletEvent>,
    ) -> Self {
        let inner = Rc::new(SessionInner {
            config,
            wallets,
            chains,
            preferences,
            environment,
            state: RefCell::new(SessionSnapshot::default()),
            generation: Cell::new(0),
            started: Cell::new(false),
            listeners: EventBus::new(),
            wallet_events: RefCell::new(None),
        });

        let weak: Weak<SessionInner> = Rc::downgrade(&inner);
        let subscription = events.subscribe(move |event| {
            if let Some(inner) = weak.upgrade() {
                Session { inner }.handle_wallet_event(event);
            }
        });
        *inner.wallet_events.borrow_mut() = Some(subscription);

        Self { inner }
    }

    // region: --- Accessors

    pub fn state(&self) -> ConnectionState {
        self.inner.state.borrow().connection.clone()
    }

    pub fn modal(&self) -> ModalState {
        self.inner.state.borrow().modal
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn wallets(&self) -> &WalletRegistry {
        &self.inner.wallets
    }

    pub fn chains(&self) -> &ChainCatalog {
        &self.inner.chains
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// Notify `listener` with the new snapshot after every change.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    // endregion: --- Accessors

    // region: --- Lifecycle

    /// Auto-connect to the remembered wallet. Only the first call does anything.
    pub async fn start(&self) {
        if self.inner.started.replace(true) {
            tracing::debug!("Session already started");
            return;
        }
        if !self.inner.config.auto_connect {
            return;
        }

        let key = &self.inner.config.last_wallet_key;
        let Some(wallet_id) = self.inner.preferences.get::<String>(key) else {
            return;
        };
        if !self.inner.wallets.contains(&wallet_id) {
            tracing::debug!("Remembered wallet {} is no longer registered", wallet_id);
            return;
        }

        tracing::info!("Auto-connecting to {}", wallet_id);
        self.connect(&wallet_id).await;
    }

    /// Stop listening to wallet events. Dropping the last handle does the same.
    pub fn shutdown(&self) {
        if let Some(subscription) = self.inner.wallet_events.borrow_mut().take() {
            subscription.cancel();
        }
    }

    // endregion: --- Lifecycle

    // region: --- Operations

    pub async fn connect(&self, wallet_id: &str) {
        if self.inner.state.borrow().connection.is_connecting {
            tracing::debug!("Connect to {} ignored: a connection attempt is in progress", wallet_id);
            return;
        }

        let Some(wallet) = self.inner.wallets.resolve(wallet_id).cloned() else {
            let error = SessionError::UnknownWallet(wallet_id.to_string());
            tracing::warn!("{}", error);
            self.mutate(|s| s.connection.error = Some(error));
            return;
        };

        let generation = self.advance_generation();
        self.mutate(|s| {
            let conn = &mut s.connection;
            if conn.is_connected {
                conn.address = None;
                conn.chain_id = None;
                conn.provider = None;
            }
            conn.is_connecting = true;
            conn.is_connected = false;
            conn.error = None;
        });

        tracing::info!("Connecting to {}", wallet.name);
        let result = wallet
            .connector
            .connect()
            .await
            .and_then(ConnectOutcome::validate);

        if self.inner.generation.get() != generation {
            tracing::debug!("Discarding stale connect result for {}", wallet_id);
            return;
        }

        match result {
            Ok(outcome) => {
                let config = &self.inner.config;
                if let Err(e) = self.inner.preferences.set(
                    &config.last_wallet_key,
                    &wallet_id,
                    Some(config.remember_hours),
                ) {
                    tracing::warn!("Failed to remember wallet {}: {}", wallet_id, e);
                }

                tracing::info!(
                    "Connected to {} as {} on chain {}",
                    wallet.name,
                    outcome.address,
                    outcome.chain_id
                );
                self.mutate(|s| {
                    s.connection = ConnectionState {
                        address: Some(outcome.address),
                        chain_id: Some(outcome.chain_id),
                        is_connecting: false,
                        is_connected: true,
                        error: None,
                        provider: Some(outcome.provider),
                    };
                    s.modal.is_open = false;
                });
            }
            Err(e) => {
                tracing::warn!("Connection to {} failed: {}", wallet.name, e);
                self.mutate(|s| {
                    let conn = &mut s.connection;
                    conn.is_connecting = false;
                    conn.is_connected = conn.address.is_some();
                    conn.error = Some(e.into());
                });
            }
        }
    }

    /// Reset to the idle snapshot. Leaves the remembered wallet in place.
    pub fn disconnect(&self) {
        self.advance_generation();
        self.mutate(|s| s.connection = ConnectionState::default());
        tracing::info!("Disconnected");
    }

    pub async fn switch_chain(&self, chain_id: u64) {
        let Some(chain) = self.inner.chains.get(chain_id).cloned() else {
            let error = SessionError::UnsupportedChain(chain_id);
            tracing::warn!("{}", error);
            self.mutate(|s| s.connection.error = Some(error));
            return;
        };

        let Some(provider) = self.inner.environment.injected_provider() else {
            tracing::warn!("Cannot switch to {}: no injected provider", chain.name);
            self.mutate(|s| s.connection.error = Some(SessionError::NoProviderAvailable));
            return;
        };

        let generation = self.inner.generation.get();
        let result = request_chain_switch(provider.as_ref(), &chain).await;

        if self.inner.generation.get() != generation {
            tracing::debug!("Discarding stale chain switch to {}", chain_id);
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!("Switched to {} ({})", chain.name, chain_id);
                self.mutate(|s| s.connection.chain_id = Some(chain_id));
            }
            Err(e) => {
                tracing::warn!("Chain switch to {} rejected: {}", chain_id, e);
                self.mutate(|s| s.connection.error = Some(e.into()));
            }
        }
    }

    pub fn open_modal(&self) {
        self.mutate(|s| s.modal.is_open = true);
    }

    pub fn close_modal(&self) {
        self.mutate(|s| s.modal.is_open = false);
    }

    // endregion: --- Operations

    // region: --- Wallet events

    fn handle_wallet_event(&self, event: &WalletEvent) {
        match event {
            WalletEvent::AccountsChanged(accounts) => match accounts.first() {
                None => self.forget_wallet("accounts cleared"),
                Some(address) => {
                    tracing::debug!("Account changed to {}", address);
                    let address = address.clone();
                    self.mutate(|s| {
                        let conn = &mut s.connection;
                        conn.address = Some(address);
                        conn.is_connected = true;
                        conn.is_connecting = false;
                    });
                }
            },
            WalletEvent::ChainChanged(chain_id) => {
                tracing::debug!("Chain changed to {}", chain_id);
                let refreshed = if self.inner.state.borrow().connection.is_connected {
                    self.inner.environment.injected_provider().map(ProviderHandle::new)
                } else {
                    None
                };
                self.mutate(|s| {
                    s.connection.chain_id = Some(*chain_id);
                    if let Some(provider) = refreshed {
                        s.connection.provider = Some(provider);
                    }
                });
            }
            WalletEvent::Disconnected => self.forget_wallet("wallet disconnected"),
        }
    }

    /// Wallet-originated disconnect: reset and drop the remembered wallet.
    fn forget_wallet(&self, reason: &str) {
        tracing::info!("Disconnecting: {}", reason);
        self.advance_generation();
        self.inner.preferences.remove(&self.inner.config.last_wallet_key);
        self.mutate(|s| s.connection = ConnectionState::default());
    }

    // endregion: --- Wallet events

    fn advance_generation(&self) -> u64 {
        let next = self.inner.generation.get() + 1;
        self.inner.generation.set(next);
        next
    }

    /// Apply `f` atomically; notify listeners if the snapshot changed.
    fn mutate(&self, f: impl FnOnce(&mut SessionSnapshot)) {
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            let before = state.clone();
            f(&mut state);
            (*state != before).then(|| state.clone())
        };
        if let Some(snapshot) = changed {
            self.inner.listeners.publish(&snapshot);
        }
    }
}

// region: --- Chain switching

/// `wallet_addEthereumChain` parameter object (EIP-3085).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddChainParams<'a> {
    chain_id: String,
    chain_name: &'a str,
    rpc_urls: Vec<&'a str>,
    native_currency: &'a NativeCurrency,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_explorer_urls: Option<Vec<&'a str>>,
}

impl<'a> From<&'a ChainDescriptor> for AddChainParams<'a> {
    fn from(chain: &'a ChainDescriptor) -> Self {
        Self {
            chain_id: chain_id_to_hex(chain.id),
            chain_name: &chain.name,
            rpc_urls: vec![chain.rpc_url.as_str()],
            native_currency: &chain.native_currency,
            block_explorer_urls: chain
                .block_explorer
                .as_ref()
                .map(|explorer| vec![explorer.url.as_str()]),
        }
    }
}

/// Switch, and on "unrecognized chain" add the chain once and retry once.
async fn request_chain_switch(
    provider: &dyn Eip1193Provider,
    chain: &ChainDescriptor,
) -> Result<(), ProviderRpcError> {
    let switch_params = json!([{ "chainId": chain_id_to_hex(chain.id) }]);

    match provider.request(SWITCH_CHAIN, Some(switch_params.clone())).await {
        Ok(_) => Ok(()),
        Err(e) if e.is_unrecognized_chain() => {
            tracing::info!("Wallet does not know chain {}, adding it", chain.id);
            let add_params = json!([AddChainParams::from(chain)]);
            provider.request(ADD_CHAIN, Some(add_params)).await?;
            provider.request(SWITCH_CHAIN, Some(switch_params)).await?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

// endregion: --- Chain switching
