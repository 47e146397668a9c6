//! # Command Registry
//!
//! Process-wide mapping from command identifier to the single live command
//! instance.
//!
//! Registration happens at add-in startup, a phase with no concurrent host
//! events; afterwards the registry is only read by the dispatcher and mutated
//! through the defined session transitions. The registry is an owned value
//! threaded explicitly from [`Addin`](crate::addin::Addin) into the
//! dispatcher, not a global.

use crate::command::{CommandCell, CommandId};
use crate::error::{AddinError, Result};
use std::collections::HashMap;
use tracing::info;

/// Identifier -> live command mapping with uniqueness enforcement
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<CommandId, CommandCell>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command cell. Fails with `DuplicateIdentifier` if the
    /// identifier is already present; the new cell is not inserted.
    pub fn register(&mut self, cell: CommandCell) -> Result<()> {
        let id = cell.info().id().clone();
        if self.commands.contains_key(&id) {
            return Err(AddinError::duplicate_identifier(id.as_str()));
        }

        info!(command = %id, name = cell.info().name(), "registered command");
        self.commands.insert(id, cell);
        Ok(())
    }

    /// Look up a command by identifier
    pub fn lookup(&self, id: &CommandId) -> Result<&CommandCell> {
        self.commands
            .get(id)
            .ok_or_else(|| AddinError::unknown_identifier(id.as_str()))
    }

    /// Look up a command by identifier for a session transition
    pub fn lookup_mut(&mut self, id: &CommandId) -> Result<&mut CommandCell> {
        self.commands
            .get_mut(id)
            .ok_or_else(|| AddinError::unknown_identifier(id.as_str()))
    }

    /// Remove a command. Not part of normal operation; identifiers persist
    /// for the add-in session. Used at add-in teardown.
    pub fn unregister(&mut self, id: &CommandId) -> Option<CommandCell> {
        self.commands.remove(id)
    }

    pub fn contains(&self, id: &CommandId) -> bool {
        self.commands.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &CommandCell> {
        self.commands.values()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut CommandCell> {
        self.commands.values_mut()
    }

    /// Drop every registration at add-in teardown
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
