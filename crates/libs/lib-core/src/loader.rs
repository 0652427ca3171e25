//! # Auxiliary Data Loader
//!
//! Fetches the currency catalog, wallet balances and live rates once a
//! provider is available, and keeps a coarse [`DataStatus`].
//!
//! ## Loading rules
//!
//! - A load starts only when the session's provider handle changes to a new,
//!   present identity ([`DataLoader::track`]). Unrelated state changes do
//!   not refetch.
//! - The three fetches run concurrently. `Success` is set, with all three
//!   collections, only when every fetch succeeds. Any failure yields `Empty`
//!   with all collections cleared.
//! - A newer load supersedes an older one still in flight.
//!
//! Rows for display come from [`AuxiliaryData::merged`], a left join on the
//! currency catalog.

use crate::bus::{EventBus, Subscription};
use crate::error::SessionError;
use crate::provider::{ProviderHandle, ProviderId};
use crate::session::Session;
use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use shared::dto::currency::{merge_currencies, Asset, Currency, CurrencyMerged, ExchangeRate};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The three independent data sources.
#[async_trait(?Send)]
pub trait MarketData {
    async fn currencies(&self) -> Result<Vec<Currency>, String>;
    async fn balances(&self) -> Result<Vec<Asset>, String>;
    async fn rates(&self) -> Result<Vec<ExchangeRate>, String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataStatus {
    #[default]
    Idle,
    Loading,
    Empty,
    Success,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxiliaryData {
    pub currencies: Vec<Currency>,
    pub balances: Vec<Asset>,
    pub rates: Vec<ExchangeRate>,
    pub status: DataStatus,
}

impl AuxiliaryData {
    pub fn merged(&self) -> Vec<CurrencyMerged> {
        merge_currencies(&self.currencies, &self.balances, &self.rates)
    }
}

struct LoaderInner {
    source: Rc<dyn MarketData>,
    data: RefCell<AuxiliaryData>,
    generation: Cell<u64>,
    last_provider: Cell<Option<ProviderId>>,
    listeners: EventBus<AuxiliaryData>,
}

#[derive(Clone)]
pub struct DataLoader {
    inner: Rc<LoaderInner>,
}

impl DataLoader {
    pub fn new(source: Rc<dyn MarketData>) -> Self {
        Self {
            inner: Rc::new(LoaderInner {
                source,
                data: RefCell::new(AuxiliaryData::default()),
                generation: Cell::new(0),
                last_provider: Cell::new(None),
                listeners: EventBus::new(),
            }),
        }
    }

    pub fn data(&self) -> AuxiliaryData {
        self.inner.data.borrow().clone()
    }

    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&AuxiliaryData) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    /// Observe the session's current provider.
    ///
    /// Returns the load to run when the provider identity changed to a present
    /// one. A `None` provider only resets the identity seen; loaded data stays.
    pub fn track(&self, provider: Option<&ProviderHandle>) -> Option<LocalBoxFuture<'static, ()>> {
        let id = provider.map(ProviderHandle::id);
        if self.inner.last_provider.get() == id {
            return None;
        }
        self.inner.last_provider.set(id);
        if id.is_none() {
            return None;
        }

        let loader = self.clone();
        Some(async move { loader.load().await }.boxed_local())
    }

    /// Fetch all three collections; all-or-nothing.
    pub async fn load(&self) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        self.update(|data| data.status = DataStatus::Loading);

        let source = self.inner.source.clone();
        let result = futures::try_join!(source.currencies(), source.balances(), source.rates());

        if self.inner.generation.get() != generation {
            tracing::debug!("Discarding superseded data load");
            return;
        }

        match result {
            Ok((currencies, balances, rates)) => {
                tracing::debug!(
                    "Loaded {} currencies, {} balances, {} rates",
                    currencies.len(),
                    balances.len(),
                    rates.len()
                );
                self.update(|data| {
                    *data = AuxiliaryData {
                        currencies,
                        balances,
                        rates,
                        status: DataStatus::Success,
                    }
                });
            }
            Err(message) => {
                tracing::warn!("{}", SessionError::DataLoadFailure(message));
                self.update(|data| {
                    *data = AuxiliaryData {
                        status: DataStatus::Empty,
                        ..AuxiliaryData::default()
                    }
                });
            }
        }
    }

    /// Follow `session`'s provider, handing each load to `spawn`.
    #[must_use = "dropping the Subscription stops tracking the session"]
    pub fn attach(
        &self,
        session: &Session,
        spawn: impl Fn(LocalBoxFuture<'static, ()>) + 'static,
    ) -> Subscription {
        if let Some(load) = self.track(session.state().provider.as_ref()) {
            spawn(load);
        }

        let loader = self.clone();
        session.subscribe(move |snapshot| {
            if let Some(load) = loader.track(snapshot.connection.provider.as_ref()) {
                spawn(load);
            }
        })
    }

    fn update(&self, f: impl FnOnce(&mut AuxiliaryData)) {
        let snapshot = {
            let mut data = self.inner.data.borrow_mut();
            f(&mut data);
            data.clone()
        };
        self.inner.listeners.publish(&snapshot);
    }
}
