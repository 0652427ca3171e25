//! # Provider Abstractions
//!
//! The session never talks to `window.ethereum` directly. It sees:
//!
//! - [`Eip1193Provider`] - anything with an EIP-1193 `request` method
//! - [`ProviderHandle`] - an opaque, identity-carrying handle to a live provider
//! - [`Environment`] - where the currently injected provider (if any) comes from
//!
//! Browser implementations live in the `wallet-web` crate; tests use fakes.

use crate::error::ProviderRpcError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// EIP-1193 request interface.
#[async_trait(?Send)]
pub trait Eip1193Provider {
    /// Send `{method, params}` to the provider.
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ProviderRpcError>;
}

/// The execution environment's wallet injection point.
pub trait Environment {
    /// The provider the wallet currently injects, if any.
    fn injected_provider(&self) -> Option<Rc<dyn Eip1193Provider>>;
}

/// Identity of a [`ProviderHandle`]; every constructed handle gets a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderId(u64);

static NEXT_PROVIDER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle to a live provider connection.
///
/// Cloning keeps the identity; [`ProviderHandle::new`] always mints a fresh
/// one, even for the same underlying provider. Equality is identity.
#[derive(Clone)]
pub struct ProviderHandle {
    id: ProviderId,
    inner: Rc<dyn Eip1193Provider>,
}

impl ProviderHandle {
    pub fn new(inner: Rc<dyn Eip1193Provider>) -> Self {
        let id = ProviderId(NEXT_PROVIDER_ID.fetch_add(1, Ordering::Relaxed));
        Self { id, inner }
    }

    pub fn id(&self) -> ProviderId {
        self.id
    }

    pub fn provider(&self) -> &Rc<dyn Eip1193Provider> {
        &self.inner
    }

    pub async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ProviderRpcError> {
        self.inner.request(method, params).await
    }
}

impl PartialEq for ProviderHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ProviderHandle {}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle").field("id", &self.id).finish()
    }
}
