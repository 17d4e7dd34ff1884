//! Browser-session state for the current identity-provider user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider pushes sign-in/sign-out notifications into a
//! `SessionContext`; UI pieces that care about the current user register a
//! `SessionObserver`. The context is an injectable handle provided through
//! Leptos context rather than a module-level global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::{RwSignal, Set};

use crate::net::types::UserRecord;

/// Receives every session change, in the order the provider emits them.
pub trait SessionObserver: Send + Sync {
    fn on_session_changed(&self, user: Option<&UserRecord>);
}

/// Handle returned by `subscribe`, used to detach the observer again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct SessionInner {
    /// `None` until the provider reports its first state.
    current: Option<Option<UserRecord>>,
    next_id: u64,
    observers: Vec<(SubscriptionId, Arc<dyn SessionObserver>)>,
}

/// Shared handle to the page's session state and its observers.
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<Mutex<SessionInner>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an observer.
    ///
    /// If the provider has already reported a state, the observer receives it
    /// immediately so late subscribers never miss the current session.
    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) -> SubscriptionId {
        let (id, replay) = {
            let mut inner = self.lock();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.observers.push((id, Arc::clone(&observer)));
            (id, inner.current.clone())
        };
        if let Some(user) = replay {
            observer.on_session_changed(user.as_ref());
        }
        id
    }

    /// Detach an observer; later notifications skip it.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock().observers.retain(|(observer_id, _)| *observer_id != id);
    }

    /// Record a new session state and notify observers in registration order.
    pub fn publish(&self, user: Option<UserRecord>) {
        // Observers run without the lock held so they may read the context.
        let observers: Vec<_> = {
            let mut inner = self.lock();
            inner.current = Some(user.clone());
            inner.observers.iter().map(|(_, observer)| Arc::clone(observer)).collect()
        };
        for observer in &observers {
            observer.on_session_changed(user.as_ref());
        }
    }

    /// The signed-in user, if the provider reported an authenticated one.
    pub fn current_user(&self) -> Option<UserRecord> {
        self.lock()
            .current
            .clone()
            .flatten()
            .filter(|user| user.authenticated)
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionContext")
            .field("current", &inner.current)
            .field("observers", &inner.observers.len())
            .finish()
    }
}

/// Observer mirroring the signed-in user into a reactive signal.
pub struct UserSignal(RwSignal<Option<UserRecord>>);

impl UserSignal {
    pub fn new(signal: RwSignal<Option<UserRecord>>) -> Self {
        Self(signal)
    }
}

impl SessionObserver for UserSignal {
    fn on_session_changed(&self, user: Option<&UserRecord>) {
        self.0.set(user.filter(|u| u.authenticated).cloned());
    }
}
