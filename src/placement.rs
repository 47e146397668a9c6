//! # Placement Descriptors
//!
//! Declarative UI-placement values describing where a command's icon lives.
//!
//! A placement names a workspace and a toolbar panel inside it, optionally the
//! command the icon should sit beside, and whether the icon is promoted to the
//! main toolbar. Placements are pure values: they are handed to the host's
//! UI-attachment call at startup and carry no behavior of their own. One
//! command may have several placements (one command logic, several UI entry
//! points); each is applied independently.

use crate::error::{AddinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One UI location for a command's icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDescriptor {
    workspace: String,
    panel: String,
    beside: Option<String>,
    promoted: bool,
}

impl PlacementDescriptor {
    /// Create a placement in the given workspace and panel.
    ///
    /// Rejects empty workspace or panel names; a blank name can never resolve
    /// to a host container.
    pub fn new(workspace: impl Into<String>, panel: impl Into<String>) -> Result<Self> {
        let workspace = workspace.into();
        let panel = panel.into();

        if workspace.trim().is_empty() {
            return Err(AddinError::invalid_placement("workspace name is empty"));
        }
        if panel.trim().is_empty() {
            return Err(AddinError::invalid_placement("panel name is empty"));
        }

        Ok(Self {
            workspace,
            panel,
            beside: None,
            promoted: false,
        })
    }

    /// Place the icon beside an existing command control.
    pub fn beside(mut self, command_id: impl Into<String>) -> Self {
        self.beside = Some(command_id.into());
        self
    }

    /// Promote the icon to the main toolbar.
    pub fn promoted(mut self) -> Self {
        self.promoted = true;
        self
    }

    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    pub fn panel(&self) -> &str {
        &self.panel
    }

    pub fn beside_id(&self) -> Option<&str> {
        self.beside.as_deref()
    }

    pub fn is_promoted(&self) -> bool {
        self.promoted
    }
}

impl fmt::Display for PlacementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.workspace, self.panel)
    }
}
