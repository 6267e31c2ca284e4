//! Identity change notification.
//!
//! An explicit callback interface replacing provider-side realtime auth
//! subscriptions: callers register a handler with
//! [`IdentityEvents::on_identity_change`] and receive an unsubscribe handle.
//! The transport behind `notify` is interchangeable (here it is in-process;
//! polling or websockets would fit the same interface).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

/// An identity whose session state changed (signed out or invalidated).
/// Subscribers should drop any per-identity state they hold.
#[derive(Debug, Clone)]
pub struct IdentityChange {
    pub sub: String,
}

type Handler = Box<dyn Fn(&IdentityChange) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    handlers: RwLock<HashMap<u64, Handler>>,
}

#[derive(Default)]
pub struct IdentityEvents {
    registry: Arc<Registry>,
}

impl IdentityEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for identity changes. The returned subscription
    /// keeps the handler active until `unsubscribe` is called.
    pub fn on_identity_change<F>(&self, handler: F) -> IdentitySubscription
    where
        F: Fn(&IdentityChange) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry
            .handlers
            .write()
            .expect("identity handler lock poisoned")
            .insert(id, Box::new(handler));

        IdentitySubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Notify all registered handlers of an identity change
    pub fn notify(&self, change: IdentityChange) {
        let handlers = self
            .registry
            .handlers
            .read()
            .expect("identity handler lock poisoned");
        for handler in handlers.values() {
            handler(&change);
        }
        tracing::debug!(
            "Notified {} identity handler(s) for subject {}",
            handlers.len(),
            change.sub
        );
    }
}

/// Unsubscribe handle returned by [`IdentityEvents::on_identity_change`]
pub struct IdentitySubscription {
    id: u64,
    registry: Weak<Registry>,
}

impl IdentitySubscription {
    /// Remove the handler; subsequent notifications no longer reach it
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .handlers
                .write()
                .expect("identity handler lock poisoned")
                .remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn handlers_receive_notifications() {
        let events = IdentityEvents::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_clone = Arc::clone(&seen);
        let _sub = events.on_identity_change(move |change| {
            assert_eq!(change.sub, "user-1");
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        events.notify(IdentityChange {
            sub: "user-1".to_string(),
        });
        events.notify(IdentityChange {
            sub: "user-1".to_string(),
        });

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let events = IdentityEvents::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_clone = Arc::clone(&seen);
        let sub = events.on_identity_change(move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        events.notify(IdentityChange {
            sub: "user-1".to_string(),
        });
        sub.unsubscribe();
        events.notify(IdentityChange {
            sub: "user-1".to_string(),
        });

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn multiple_subscribers_are_independent() {
        let events = IdentityEvents::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let first_clone = Arc::clone(&first);
        let sub_a = events.on_identity_change(move |_| {
            first_clone.fetch_add(1, Ordering::SeqCst);
        });
        let second_clone = Arc::clone(&second);
        let _sub_b = events.on_identity_change(move |_| {
            second_clone.fetch_add(1, Ordering::SeqCst);
        });

        sub_a.unsubscribe();
        events.notify(IdentityChange {
            sub: "user-2".to_string(),
        });

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
