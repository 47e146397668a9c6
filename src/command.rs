//! # Commands
//!
//! The public surface a developer implements: the [`Command`] trait with its
//! optional lifecycle hooks, the [`CommandInfo`] construction data, and the
//! framework-owned [`CommandCell`] that binds them to session state.
//!
//! ## Hook contract
//!
//! Every hook has a default no-op body; a command implements only the hooks it
//! needs and declares them via [`Command::capabilities`]. The dispatcher
//! subscribes exactly the declared set — a hook that is implemented but not
//! declared is never invoked through a subscription. Hooks are synchronous and
//! run on the host's event loop; blocking belongs to the developer, not the
//! framework.
//!
//! Teardown is framework-owned: the `on_destroy` hook is an optional callback
//! whose failure is caught and reported, and handler release runs
//! unconditionally afterwards. There is no cleanup chaining to forget.

use crate::capability::HookSet;
use crate::error::HookResult;
use crate::events::{DestroyReason, DialogInput, DialogInputs};
use crate::lifecycle::Session;
use crate::placement::PlacementDescriptor;
use crate::registry::HandlerRegistry;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Opaque unique identifier for one command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(String);

impl CommandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommandId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CommandId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Developer-implemented lifecycle hooks for one command.
///
/// The `Any` supertrait lets the capability probe cache per concrete type.
pub trait Command: Any {
    /// Declare which hooks this command provides. Defaults to none
    /// (a non-interactive command: its icon triggers default behavior with no
    /// dialog). Only declared hooks are subscribed to host events.
    fn capabilities(&self) -> HookSet {
        HookSet::EMPTY
    }

    /// Populate the dialog input model when the command is invoked
    fn on_created(&mut self, dialog: &mut DialogInputs) -> HookResult {
        let _ = dialog;
        Ok(())
    }

    /// React to a single changed dialog input
    fn on_input_changed(&mut self, changed: &DialogInput) -> HookResult {
        let _ = changed;
        Ok(())
    }

    /// Decide whether the current inputs permit execution.
    /// Defaults to always-valid when not provided.
    fn on_validate(&self, inputs: &DialogInputs) -> HookResult<bool> {
        let _ = inputs;
        Ok(true)
    }

    /// Produce a graphics preview of the pending result
    fn on_preview(&mut self, inputs: &DialogInputs) -> HookResult {
        let _ = inputs;
        Ok(())
    }

    /// The user confirmed the dialog; read the final input snapshot and
    /// persist result state
    fn on_execute(&mut self, inputs: &DialogInputs) -> HookResult {
        let _ = inputs;
        Ok(())
    }

    /// The dialog session ended, confirmed or cancelled. Handler release runs
    /// unconditionally after this hook returns, whatever the outcome.
    fn on_destroy(&mut self, reason: DestroyReason) -> HookResult {
        let _ = reason;
        Ok(())
    }
}

/// Construction data for one command: identity, presentation, placements.
#[derive(Debug, Clone)]
pub struct CommandInfo {
    id: CommandId,
    name: String,
    description: String,
    icon_folder: Option<String>,
    placements: Vec<PlacementDescriptor>,
}

impl CommandInfo {
    pub fn new(
        id: impl Into<CommandId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon_folder: None,
            placements: Vec::new(),
        }
    }

    /// Resource location for the command's icons
    pub fn with_icon_folder(mut self, folder: impl Into<String>) -> Self {
        self.icon_folder = Some(folder.into());
        self
    }

    /// Add one UI placement for the command's icon
    pub fn with_placement(mut self, placement: PlacementDescriptor) -> Self {
        self.placements.push(placement);
        self
    }

    pub fn id(&self) -> &CommandId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon_folder(&self) -> Option<&str> {
        self.icon_folder.as_deref()
    }

    pub fn placements(&self) -> &[PlacementDescriptor] {
        &self.placements
    }
}

/// One registered command: hooks, construction data, and live session state.
///
/// Cells are owned by the command registry; the dispatcher drives their
/// session transitions.
pub struct CommandCell {
    pub(crate) info: CommandInfo,
    pub(crate) hooks: Box<dyn Command>,
    pub(crate) session: Session,
    pub(crate) handlers: HandlerRegistry,
    pub(crate) dialog: Option<DialogInputs>,
}

impl CommandCell {
    pub fn new(info: CommandInfo, hooks: Box<dyn Command>) -> Self {
        Self {
            info,
            hooks,
            session: Session::new(),
            handlers: HandlerRegistry::new(),
            dialog: None,
        }
    }

    pub fn info(&self) -> &CommandInfo {
        &self.info
    }

    pub fn session_state(&self) -> crate::lifecycle::SessionState {
        self.session.state()
    }

    /// Completed dialog invocations since add-in startup
    pub fn invocations(&self) -> u64 {
        self.session.invocations()
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// The input model of the active dialog session, if one is open
    pub fn dialog(&self) -> Option<&DialogInputs> {
        self.dialog.as_ref()
    }
}

impl fmt::Debug for CommandCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandCell")
            .field("id", &self.info.id)
            .field("state", &self.session.state())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
