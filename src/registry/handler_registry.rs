//! # Handler Registry
//!
//! Per-command record of the host event subscriptions attached for the
//! current dialog session.
//!
//! Entries are attached only during the Idle -> Active transition, once per
//! detected capability plus the mandatory destroy subscription. `detach_all`
//! releases every token back to the host and is idempotent: the guaranteed
//! cleanup in the destroy path may run even when no hooks were ever attached.

use crate::capability::HookSet;
use crate::events::HookKind;
use crate::host::{HostEvents, SubscriptionToken};
use tracing::debug;

/// Live subscriptions for one command's dialog session
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    entries: Vec<(HookKind, SubscriptionToken)>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one live subscription
    pub fn attach(&mut self, hook: HookKind, token: SubscriptionToken) {
        debug!(hook = %hook, token = %token, "attached handler");
        self.entries.push((hook, token));
    }

    /// Release every recorded subscription back to the host and clear the
    /// registry. A no-op on an empty registry.
    pub fn detach_all(&mut self, host: &mut dyn HostEvents) -> usize {
        let released = self.entries.len();
        for (hook, token) in self.entries.drain(..) {
            host.unsubscribe(token);
            debug!(hook = %hook, token = %token, "released handler");
        }
        released
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The hook kinds currently subscribed
    pub fn subscribed(&self) -> HookSet {
        self.entries.iter().map(|(hook, _)| *hook).collect()
    }
}
