//! # Lifecycle Events
//!
//! Host event payloads and the dialog input model.
//!
//! The host application raises opaque events; the framework extracts only the
//! fields it needs into the payload types here. The dialog input model
//! ([`DialogInputs`]) is owned by the framework for the duration of one dialog
//! session: the `created` hook populates it, input-changed events mutate it,
//! and validate/execute hooks read it.

use crate::command::CommandId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle hook kinds a command may provide.
///
/// `Created` is the subscription made at definition level; the remaining kinds
/// are dialog-session subscriptions recorded in the handler registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    /// Dialog configuration: populate inputs when the command is invoked
    Created,
    /// One dialog input changed value
    InputChanged,
    /// Pre-execute validation of the current inputs
    ValidateInputs,
    /// Graphics preview of the pending result
    ExecutePreview,
    /// The user confirmed the dialog
    Execute,
    /// The dialog session ended (confirmed or cancelled)
    Destroy,
}

impl HookKind {
    /// All hook kinds, in lifecycle order.
    pub const ALL: [HookKind; 6] = [
        HookKind::Created,
        HookKind::InputChanged,
        HookKind::ValidateInputs,
        HookKind::ExecutePreview,
        HookKind::Execute,
        HookKind::Destroy,
    ];

    /// The optional hook kinds subscribed per dialog session, capability permitting.
    /// `Destroy` is not listed because it is always subscribed.
    pub const SESSION_HOOKS: [HookKind; 4] = [
        HookKind::InputChanged,
        HookKind::ValidateInputs,
        HookKind::ExecutePreview,
        HookKind::Execute,
    ];

    /// Get a string representation of the hook kind for logging
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::InputChanged => "input_changed",
            Self::ValidateInputs => "validate_inputs",
            Self::ExecutePreview => "execute_preview",
            Self::Execute => "execute",
            Self::Destroy => "destroy",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.event_name())
    }
}

/// Why a dialog session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestroyReason {
    /// The user confirmed the dialog; an execute event preceded this one
    Completed,
    /// The user dismissed the dialog; no execute event was delivered
    Cancelled,
}

impl DestroyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for DestroyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dialog input value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InputValue {
    Bool(bool),
    Text(String),
    Integer(i64),
    Float(f64),
}

impl InputValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// One named input in a command dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogInput {
    pub id: String,
    pub label: String,
    pub value: InputValue,
}

/// The input model for one dialog session.
///
/// Insertion order is preserved; the host renders inputs in the order the
/// `created` hook added them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogInputs {
    inputs: Vec<DialogInput>,
}

impl DialogInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input to the dialog. Called from the `created` hook.
    pub fn add(&mut self, id: impl Into<String>, label: impl Into<String>, value: InputValue) {
        self.inputs.push(DialogInput {
            id: id.into(),
            label: label.into(),
            value,
        });
    }

    /// Look up an input by id
    pub fn get(&self, id: &str) -> Option<&DialogInput> {
        self.inputs.iter().find(|input| input.id == id)
    }

    /// Replace the value of an existing input, returning the changed input.
    /// Returns `None` if no input with that id exists.
    pub fn set_value(&mut self, id: &str, value: InputValue) -> Option<&DialogInput> {
        let input = self.inputs.iter_mut().find(|input| input.id == id)?;
        input.value = value;
        Some(&*input)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DialogInput> {
        self.inputs.iter()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// The host invoked a command definition (icon click).
#[derive(Debug, Clone)]
pub struct CreationEvent {
    pub command_id: CommandId,
}

/// One dialog input changed value.
#[derive(Debug, Clone)]
pub struct InputChangedEvent {
    pub command_id: CommandId,
    pub input_id: String,
    pub value: InputValue,
}

/// The host is asking whether the current inputs permit execution.
#[derive(Debug, Clone)]
pub struct ValidationEvent {
    pub command_id: CommandId,
}

/// The host is asking for a graphics preview of the pending result.
#[derive(Debug, Clone)]
pub struct PreviewEvent {
    pub command_id: CommandId,
}

/// The user confirmed the dialog.
#[derive(Debug, Clone)]
pub struct ExecuteEvent {
    pub command_id: CommandId,
}

/// The dialog session ended.
#[derive(Debug, Clone)]
pub struct DestroyEvent {
    pub command_id: CommandId,
    pub reason: DestroyReason,
}
