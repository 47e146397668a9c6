//! # Capability Detection
//!
//! Determines which optional lifecycle hooks a command type provides.
//!
//! The [`Command`](crate::command::Command) trait declares every hook with a
//! default no-op body; a command type declares the hooks it actually provides
//! via `capabilities()`. [`CapabilityProbe`] consults that declaration once per
//! concrete type and caches the result keyed by `TypeId`, so the probe cost is
//! paid once for the add-in session rather than once per event. Detection is
//! side-effect-free and safe to repeat.

use crate::command::Command;
use crate::events::HookKind;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// A small set of hook kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HookSet(u8);

impl HookSet {
    /// The empty set: a command with no optional hooks (non-interactive).
    pub const EMPTY: HookSet = HookSet(0);

    fn bit(hook: HookKind) -> u8 {
        1 << hook as u8
    }

    /// Build a set from a slice of hook kinds
    pub fn of(hooks: &[HookKind]) -> Self {
        let mut set = Self::EMPTY;
        for hook in hooks {
            set.insert(*hook);
        }
        set
    }

    /// Add a hook kind, returning the updated set (builder form)
    pub fn with(mut self, hook: HookKind) -> Self {
        self.insert(hook);
        self
    }

    pub fn insert(&mut self, hook: HookKind) {
        self.0 |= Self::bit(hook);
    }

    pub fn contains(&self, hook: HookKind) -> bool {
        self.0 & Self::bit(hook) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the contained hook kinds in lifecycle order
    pub fn iter(&self) -> impl Iterator<Item = HookKind> + '_ {
        HookKind::ALL
            .into_iter()
            .filter(move |hook| self.contains(*hook))
    }
}

impl fmt::Display for HookSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, hook) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{hook}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<HookKind> for HookSet {
    fn from_iter<I: IntoIterator<Item = HookKind>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for hook in iter {
            set.insert(hook);
        }
        set
    }
}

/// Per-type hook capability probe with a `TypeId`-keyed cache.
///
/// Capability is a property of the command type, not the instance, so the
/// declaration is consulted once and the cached set served afterwards.
pub struct CapabilityProbe {
    cache: RwLock<HashMap<TypeId, HookSet>>,
}

impl CapabilityProbe {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Detect the hook set for the given command, serving from cache when the
    /// concrete type has been probed before.
    pub fn detect(&self, command: &dyn Command) -> HookSet {
        let any: &dyn Any = command;
        let type_id = any.type_id();

        if let Some(set) = self.cache.read().get(&type_id) {
            return *set;
        }

        let set = command.capabilities();
        self.cache.write().insert(type_id, set);
        tracing::debug!(capabilities = %set, "probed command capabilities");
        set
    }

    /// Number of distinct command types probed so far
    pub fn cached_types(&self) -> usize {
        self.cache.read().len()
    }
}

impl Default for CapabilityProbe {
    fn default() -> Self {
        Self::new()
    }
}
