//! # Host Boundaries
//!
//! Traits the host CAD application (or a test double) implements.
//!
//! The framework subscribes to host events through [`HostEvents`] and attaches
//! icon controls through [`UiShell`]. Both boundaries are deliberately narrow:
//! the framework hands over only its own value types and receives opaque
//! subscription tokens back, so the host's object model never leaks into the
//! core.

use crate::command::{CommandId, CommandInfo};
use crate::events::HookKind;
use crate::placement::PlacementDescriptor;
use std::fmt;

/// Opaque handle for one live event subscription, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The host's event subscription mechanism.
///
/// Subscriptions are made during the Idle -> Active transition and released by
/// the handler registry during destroy teardown.
pub trait HostEvents {
    /// Subscribe the given command to one host event kind
    fn subscribe(&mut self, command_id: &CommandId, hook: HookKind) -> SubscriptionToken;

    /// Release a previously issued subscription
    fn unsubscribe(&mut self, token: SubscriptionToken);
}

/// The host's UI shell: icon controls in workspaces and panels.
pub trait UiShell {
    /// Add a command control at the given placement.
    ///
    /// Errors carry the host's reason string (for example an unknown panel
    /// name); the framework wraps them into `PlacementAttachFailure`.
    fn attach_control(
        &mut self,
        info: &CommandInfo,
        placement: &PlacementDescriptor,
    ) -> std::result::Result<(), String>;

    /// Remove the command control at the given placement, if present
    fn detach_control(&mut self, command_id: &CommandId, placement: &PlacementDescriptor);
}
