#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Addin Core
//!
//! Command lifecycle and UI-placement framework for CAD add-ins.
//!
//! ## Overview
//!
//! A developer defines one UI command for the host CAD application by
//! implementing only the lifecycle hooks they need. The framework detects
//! which hooks a command provides, wires the matching host event
//! subscriptions when the user invokes the command, tracks their lifetime,
//! and guarantees their release when the dialog session ends — including the
//! cancel path and the path where a developer hook fails.
//!
//! ## Architecture
//!
//! - [`placement`] — declarative UI-placement descriptors for command icons
//! - [`capability`] — per-type hook detection with a `TypeId`-keyed cache
//! - [`registry`] — command identity registry and per-session handler registry
//! - [`lifecycle`] — the session state machine and the host-event dispatcher
//! - [`command`] — the `Command` trait a developer implements, plus
//!   construction data
//! - [`addin`] — the explicit startup context that owns the command registry
//! - [`host`] — the narrow traits the host application implements
//! - [`appdata`] — JSON-file persistence for developer add-in state
//! - [`error`] — structured error handling
//! - [`logging`] — console + file tracing setup
//!
//! The host drives one event at a time on its own loop; every hook invocation
//! is synchronous and the framework spawns no threads. Ordering is enforced by
//! a per-command session state machine (`Idle -> Active -> Destroyed`);
//! out-of-order events are rejected, logged, and dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use addin_core::error::HookResult;
//! use addin_core::events::{DialogInputs, HookKind, InputValue};
//! use addin_core::{Addin, Command, CommandInfo, HookSet, PlacementDescriptor};
//!
//! struct ToggleNotes {
//!     enabled: bool,
//! }
//!
//! impl Command for ToggleNotes {
//!     fn capabilities(&self) -> HookSet {
//!         HookSet::of(&[HookKind::Created, HookKind::Execute])
//!     }
//!
//!     fn on_created(&mut self, dialog: &mut DialogInputs) -> HookResult {
//!         dialog.add("enabled", "Show notes", InputValue::Bool(self.enabled));
//!         Ok(())
//!     }
//!
//!     fn on_execute(&mut self, inputs: &DialogInputs) -> HookResult {
//!         self.enabled = inputs
//!             .get("enabled")
//!             .and_then(|input| input.value.as_bool())
//!             .unwrap_or(false);
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> addin_core::Result<()> {
//!     let mut addin = Addin::new();
//!     let info = CommandInfo::new("toggle_notes", "Toggle Notes", "Show or hide sketch notes")
//!         .with_icon_folder("resources/toggle_notes")
//!         .with_placement(PlacementDescriptor::new(
//!             "FusionSolidEnvironment",
//!             "SolidCreatePanel",
//!         )?);
//!     addin.register(info, Box::new(ToggleNotes { enabled: false }))?;
//!
//!     // At this point the host's UI shell would attach the icon controls via
//!     // `addin.startup(&mut ui)`, and the host event callbacks would drive
//!     // the dispatcher.
//!     let _dispatcher = addin.into_dispatcher();
//!     Ok(())
//! }
//! ```

pub mod addin;
pub mod appdata;
pub mod capability;
pub mod command;
pub mod error;
pub mod events;
pub mod host;
pub mod lifecycle;
pub mod logging;
pub mod placement;
pub mod registry;

pub use addin::{Addin, StartupReport};
pub use appdata::{AppData, AppDataError};
pub use capability::{CapabilityProbe, HookSet};
pub use command::{Command, CommandCell, CommandId, CommandInfo};
pub use error::{AddinError, HookError, HookResult, Result};
pub use events::{
    CreationEvent, DestroyEvent, DestroyReason, DialogInput, DialogInputs, ExecuteEvent, HookKind,
    InputChangedEvent, InputValue, PreviewEvent, ValidationEvent,
};
pub use host::{HostEvents, SubscriptionToken, UiShell};
pub use lifecycle::{LifecycleDispatcher, SessionState};
pub use placement::PlacementDescriptor;
pub use registry::{CommandRegistry, HandlerRegistry};
