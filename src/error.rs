//! # Error Types
//!
//! Structured error handling for the add-in framework using thiserror.
//!
//! Every failure in the core is either terminal at startup (duplicate identifiers,
//! invalid placements) or a reported-and-dropped event (unknown identifiers,
//! out-of-order events, failing developer hooks). No retries are performed anywhere.

use crate::events::HookKind;
use crate::lifecycle::SessionState;
use thiserror::Error;

/// Framework error taxonomy
#[derive(Debug, Error)]
pub enum AddinError {
    /// A second command was registered under an identifier already in use.
    /// Fatal at add-in startup.
    #[error("duplicate command identifier '{id}'")]
    DuplicateIdentifier { id: String },

    /// A host event referenced an identifier with no registered command.
    /// Host misconfiguration; the event is dropped.
    #[error("no command registered for identifier '{id}'")]
    UnknownIdentifier { id: String },

    /// An event arrived out of the defined session-state order. The event is
    /// rejected and the session state is left unchanged.
    #[error("protocol violation for '{id}': {hook} event received in {state} state")]
    ProtocolViolation {
        id: String,
        hook: HookKind,
        state: SessionState,
    },

    /// A developer-supplied hook returned an error. Reported at the dispatcher
    /// boundary; never prevents the guaranteed teardown in the destroy path.
    #[error("hook {hook} failed for '{id}': {source}")]
    HookFailure {
        id: String,
        hook: HookKind,
        #[source]
        source: HookError,
    },

    /// A single placement could not be attached. Remaining placements are
    /// still attempted.
    #[error("failed to attach '{id}' at {workspace}/{panel}: {reason}")]
    PlacementAttachFailure {
        id: String,
        workspace: String,
        panel: String,
        reason: String,
    },

    /// A placement descriptor was constructed with invalid fields.
    #[error("invalid placement: {reason}")]
    InvalidPlacement { reason: String },
}

impl AddinError {
    /// Create a duplicate identifier error
    pub fn duplicate_identifier(id: impl Into<String>) -> Self {
        Self::DuplicateIdentifier { id: id.into() }
    }

    /// Create an unknown identifier error
    pub fn unknown_identifier(id: impl Into<String>) -> Self {
        Self::UnknownIdentifier { id: id.into() }
    }

    /// Create a protocol violation error
    pub fn protocol_violation(id: impl Into<String>, hook: HookKind, state: SessionState) -> Self {
        Self::ProtocolViolation {
            id: id.into(),
            hook,
            state,
        }
    }

    /// Create a hook failure error
    pub fn hook_failure(id: impl Into<String>, hook: HookKind, source: HookError) -> Self {
        Self::HookFailure {
            id: id.into(),
            hook,
            source,
        }
    }

    /// Create a placement attach failure error
    pub fn placement_attach_failure(
        id: impl Into<String>,
        workspace: impl Into<String>,
        panel: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::PlacementAttachFailure {
            id: id.into(),
            workspace: workspace.into(),
            panel: panel.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid placement error
    pub fn invalid_placement(reason: impl Into<String>) -> Self {
        Self::InvalidPlacement {
            reason: reason.into(),
        }
    }

    /// True for errors that must abort add-in startup rather than be
    /// reported and dropped.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Self::DuplicateIdentifier { .. } | Self::InvalidPlacement { .. }
        )
    }
}

/// Error returned by a developer-supplied lifecycle hook
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HookError {
    message: String,
}

impl HookError {
    /// Create a hook error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for HookError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for HookError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Result type for framework operations
pub type Result<T> = std::result::Result<T, AddinError>;

/// Result type for developer-supplied hooks
pub type HookResult<T = ()> = std::result::Result<T, HookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddinError::duplicate_identifier("sketch_notes");
        assert_eq!(
            err.to_string(),
            "duplicate command identifier 'sketch_notes'"
        );

        let err = AddinError::protocol_violation(
            "sketch_notes",
            HookKind::InputChanged,
            SessionState::Idle,
        );
        assert_eq!(
            err.to_string(),
            "protocol violation for 'sketch_notes': input_changed event received in idle state"
        );
    }

    #[test]
    fn test_startup_fatal_classification() {
        assert!(AddinError::duplicate_identifier("a").is_startup_fatal());
        assert!(AddinError::invalid_placement("empty panel").is_startup_fatal());
        assert!(!AddinError::unknown_identifier("a").is_startup_fatal());
        assert!(
            !AddinError::placement_attach_failure("a", "ws", "panel", "gone").is_startup_fatal()
        );
    }

    #[test]
    fn test_hook_error_source_is_preserved() {
        let err = AddinError::hook_failure("a", HookKind::Execute, HookError::new("boom"));
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "boom");
    }
}
