//! # Persisted Preferences
//!
//! Small key-value preferences with optional expiry, used to remember the
//! last connected wallet between page loads.
//!
//! Storage mechanics are pluggable through [`KeyValueBackend`] (raw strings,
//! e.g. `window.localStorage`). [`Preferences`] layers the entry format on
//! top of it:
//!
//! ```json
//! { "value": "metamask", "expiry": 1704153600000 }
//! ```
//!
//! `expiry` is milliseconds since the Unix epoch, or `null` for no expiry.
//! Reads are expiry-aware and evict expired entries. Entries that fail to
//! parse read as absent.

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use lib_utils::{expiry_after_hours, is_expired, now_utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Raw string storage.
pub trait KeyValueBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str);
}

/// In-memory backend, for native hosts and tests.
#[derive(Clone, Default, Debug)]
pub struct MemoryBackend {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Source of "now" for expiry checks.
pub type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

#[derive(Serialize, Deserialize)]
struct StoredItem<T> {
    value: T,
    expiry: Option<i64>,
}

/// Expiry-aware preferences over a [`KeyValueBackend`].
#[derive(Clone)]
pub struct Preferences {
    backend: Rc<dyn KeyValueBackend>,
    clock: Clock,
}

impl Preferences {
    pub fn new(backend: Rc<dyn KeyValueBackend>) -> Self {
        Self {
            backend,
            clock: Rc::new(now_utc),
        }
    }

    /// Replace the wall clock (tests pin time with this).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Read `key`, evicting it first if its expiry has passed.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get_item(key)?;
        let item: StoredItem<Value> = match serde_json::from_str(&raw) {
            Ok(item) => item,
            Err(e) => {
                tracing::debug!("Ignoring unreadable preference {}: {}", key, e);
                return None;
            }
        };

        if let Some(expiry) = item.expiry {
            if is_expired(expiry, (self.clock)()) {
                tracing::debug!("Preference {} expired, evicting", key);
                self.backend.remove_item(key);
                return None;
            }
        }

        serde_json::from_value(item.value).ok()
    }

    /// Write `value` under `key`, expiring `expiry_hours` from now when given.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, expiry_hours: Option<u32>) -> Result<(), StoreError> {
        let item = StoredItem {
            value,
            expiry: expiry_hours.map(|hours| expiry_after_hours((self.clock)(), hours)),
        };
        let raw = serde_json::to_string(&item)?;
        self.backend.set_item(key, &raw)
    }

    pub fn remove(&self, key: &str) {
        self.backend.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::cell::Cell;

    fn pinned() -> (Preferences, MemoryBackend, Rc<Cell<DateTime<Utc>>>) {
        let backend = MemoryBackend::new();
        let now = Rc::new(Cell::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()));
        let clock_now = now.clone();
        let prefs = Preferences::new(Rc::new(backend.clone())).with_clock(Rc::new(move || clock_now.get()));
        (prefs, backend, now)
    }

    #[test]
    fn test_roundtrip_without_expiry() {
        let (prefs, backend, _) = pinned();
        prefs.set("theme", &"dark", None).unwrap();

        assert_eq!(prefs.get::<String>("theme").as_deref(), Some("dark"));
        assert_eq!(
            backend.get_item("theme").as_deref(),
            Some(r#"{"value":"dark","expiry":null}"#)
        );
    }

    #[test]
    fn test_expiry_evicts() {
        let (prefs, backend, now) = pinned();
        prefs.set("lastConnectedWallet", &"meta", Some(24)).unwrap();

        now.set(now.get() + Duration::hours(23));
        assert_eq!(prefs.get::<String>("lastConnectedWallet").as_deref(), Some("meta"));

        now.set(now.get() + Duration::hours(2));
        assert_eq!(prefs.get::<String>("lastConnectedWallet"), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_unreadable_entries_are_absent_but_kept() {
        let (prefs, backend, _) = pinned();
        backend.set_item("lastConnectedWallet", "metamask").unwrap();

        assert_eq!(prefs.get::<String>("lastConnectedWallet"), None);
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_wrong_type_is_absent() {
        let (prefs, _, _) = pinned();
        prefs.set("count", &3u32, None).unwrap();
        assert_eq!(prefs.get::<String>("count"), None);
        assert_eq!(prefs.get::<u32>("count"), Some(3));
    }

    #[test]
    fn test_remove() {
        let (prefs, backend, _) = pinned();
        prefs.set("k", &"v", Some(1)).unwrap();
        prefs.remove("k");
        assert!(backend.is_empty());
        prefs.remove("k");
    }
}
