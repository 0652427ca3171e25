//! # Event Bus
//!
//! Typed, single-threaded publish/subscribe.
//!
//! The session owns two kinds of traffic:
//! - **Wallet events** ([`WalletEvent`]) published by connectors when the
//!   wallet reports account/chain changes or a disconnect.
//! - **State notifications** published by the session after each mutation.
//!
//! Handlers run synchronously, in subscription order, in the order events are
//! published. [`Subscription`] is a guard: dropping it unsubscribes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Unsolicited notification from the connected wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// The wallet's exposed accounts changed; empty means the wallet disconnected us.
    AccountsChanged(Vec<String>),
    /// The wallet moved to another chain (already decoded from hex).
    ChainChanged(u64),
    /// The wallet dropped the connection.
    Disconnected,
}

type Handler<T> = Rc<dyn Fn(&T)>;

struct BusInner<T> {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler<T>)>>,
}

/// Cloneable handle to a shared bus.
pub struct EventBus<T> {
    inner: Rc<BusInner<T>>,
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> EventBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(BusInner {
                next_id: Cell::new(0),
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register `handler`; it stays registered until the returned guard drops.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .handlers
            .borrow_mut()
            .push((id, Rc::new(handler)));

        let weak: Weak<BusInner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handlers.borrow_mut().retain(|(sid, _)| *sid != id);
            }
        })
    }

    /// Deliver `event` to every current subscriber. Returns how many ran.
    ///
    /// Handlers may publish or (un)subscribe re-entrantly; a handler added
    /// during delivery first sees the next event.
    pub fn publish(&self, event: &T) -> usize {
        let handlers: Vec<Handler<T>> = self
            .inner
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

/// Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unsubscribe now.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_in_subscription_order() {
        let bus: EventBus<u32> = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = seen.clone();
        let _a = bus.subscribe(move |n| first.borrow_mut().push(("a", *n)));
        let second = seen.clone();
        let _b = bus.subscribe(move |n| second.borrow_mut().push(("b", *n)));

        assert_eq!(bus.publish(&1), 2);
        bus.publish(&2);

        assert_eq!(
            *seen.borrow(),
            vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]
        );
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus: EventBus<WalletEvent> = EventBus::new();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let sub = bus.subscribe(move |_| counter.set(counter.get() + 1));
        bus.publish(&WalletEvent::Disconnected);
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        bus.publish(&WalletEvent::Disconnected);

        assert_eq!(hits.get(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_reentrant_publish() {
        let bus: EventBus<u32> = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let inner_bus = bus.clone();
        let log = seen.clone();
        let _sub = bus.subscribe(move |n| {
            log.borrow_mut().push(*n);
            if *n == 1 {
                inner_bus.publish(&2);
            }
        });

        bus.publish(&1);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_cancel_after_bus_dropped() {
        let bus: EventBus<u32> = EventBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        sub.cancel();
    }
}
