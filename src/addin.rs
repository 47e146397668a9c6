//! # Add-in Context
//!
//! The explicit context object for one add-in session.
//!
//! [`Addin`] owns the command registry through the startup phase: commands are
//! registered (identifier uniqueness enforced), icon controls are attached for
//! every placement, and the populated registry is then handed to the
//! [`LifecycleDispatcher`](crate::lifecycle::LifecycleDispatcher) that the
//! host's event callbacks drive. No event handlers are attached at startup;
//! those are wired lazily on each command's first creation event.

use crate::command::{Command, CommandCell, CommandInfo};
use crate::error::{AddinError, Result};
use crate::host::UiShell;
use crate::lifecycle::LifecycleDispatcher;
use crate::registry::CommandRegistry;
use tracing::{debug, info, warn};

/// Startup-phase owner of the command registry
#[derive(Debug, Default)]
pub struct Addin {
    registry: CommandRegistry,
}

/// Outcome of the placement-attachment pass at startup.
///
/// A failed placement never aborts the pass; every placement of every command
/// is attempted and the failures are collected for reporting.
#[derive(Debug, Default)]
pub struct StartupReport {
    pub attached: usize,
    pub failures: Vec<AddinError>,
}

impl StartupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Addin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Fatal if the identifier is already taken.
    pub fn register(&mut self, info: CommandInfo, hooks: Box<dyn Command>) -> Result<()> {
        self.registry.register(CommandCell::new(info, hooks))
    }

    /// Attach every command's icon controls to the host UI.
    ///
    /// Placements are applied independently and in no particular order; a
    /// placement naming an unknown container is reported in the returned
    /// report while the rest are still attempted.
    pub fn startup(&mut self, ui: &mut dyn UiShell) -> StartupReport {
        let mut report = StartupReport::default();

        for cell in self.registry.cells() {
            let info = cell.info();
            for placement in info.placements() {
                match ui.attach_control(info, placement) {
                    Ok(()) => {
                        debug!(command = %info.id(), placement = %placement, "control attached");
                        report.attached += 1;
                    }
                    Err(reason) => {
                        let failure = AddinError::placement_attach_failure(
                            info.id().as_str(),
                            placement.workspace(),
                            placement.panel(),
                            reason,
                        );
                        warn!(command = %info.id(), error = %failure, "placement attach failed");
                        report.failures.push(failure);
                    }
                }
            }
        }

        info!(
            commands = self.registry.len(),
            attached = report.attached,
            failed = report.failures.len(),
            "add-in startup complete"
        );
        report
    }

    /// Hand the populated registry to the event dispatch phase
    pub fn into_dispatcher(self) -> LifecycleDispatcher {
        LifecycleDispatcher::new(self.registry)
    }

    pub fn commands(&self) -> usize {
        self.registry.len()
    }
}
