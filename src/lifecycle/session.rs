//! Dialog session states and the per-command transition guard.
//!
//! One session corresponds to one user invocation of a command:
//! `Idle -> Active` on the creation event, `Active` self-loops for
//! input-changed/validate/preview/execute, `Active -> Destroyed` on the destroy
//! event. `Destroyed` is terminal for that session; the command then begins a
//! fresh session in `Idle`. Out-of-order transitions are rejected, never
//! silently absorbed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dialog session state for a single command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No dialog open; waiting for a creation event
    Idle,
    /// Dialog open; session hooks subscribed
    Active,
    /// Session ended; terminal until the next invocation resets to Idle
    Destroyed,
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if this is a terminal state for the current session
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Destroyed)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Active => write!(f, "active"),
            Self::Destroyed => write!(f, "destroyed"),
        }
    }
}

impl std::str::FromStr for SessionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "active" => Ok(Self::Active),
            "destroyed" => Ok(Self::Destroyed),
            _ => Err(format!("Invalid session state: {s}")),
        }
    }
}

/// Transition guard for one command's dialog sessions.
///
/// Rejected transitions return the state the session was in, leaving it
/// unchanged; the dispatcher turns that into a `ProtocolViolation`.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    invocations: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Completed `Idle -> Active` transitions since add-in startup
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    /// `Idle -> Active`. Rejected while a dialog is already open; at most one
    /// concurrent dialog exists per command.
    pub fn activate(&mut self) -> Result<(), SessionState> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Active;
                self.invocations += 1;
                Ok(())
            }
            other => Err(other),
        }
    }

    /// Guard for the `Active` self-loop events
    pub fn require_active(&self) -> Result<(), SessionState> {
        match self.state {
            SessionState::Active => Ok(()),
            other => Err(other),
        }
    }

    /// `Active -> Destroyed`
    pub fn destroy(&mut self) -> Result<(), SessionState> {
        match self.state {
            SessionState::Active => {
                self.state = SessionState::Destroyed;
                Ok(())
            }
            other => Err(other),
        }
    }

    /// Begin a fresh session in `Idle` after teardown completes
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }
}
