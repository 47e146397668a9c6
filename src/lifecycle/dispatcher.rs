//! # Lifecycle Dispatcher
//!
//! Routes raw host events to the hooks a command actually provides.
//!
//! One entry point exists per host event kind. Each resolves the target
//! command through the registry, checks the session-state ordering, and
//! invokes the matching hook. Hook failures are caught here and surfaced as
//! `HookFailure`; they never interrupt the teardown guarantees of the destroy
//! path. Out-of-order events are rejected with `ProtocolViolation` and leave
//! session state untouched.

use crate::capability::CapabilityProbe;
use crate::command::CommandId;
use crate::error::{AddinError, Result};
use crate::events::{
    CreationEvent, DestroyEvent, DialogInputs, ExecuteEvent, HookKind, InputChangedEvent,
    PreviewEvent, ValidationEvent,
};
use crate::host::{HostEvents, UiShell};
use crate::registry::CommandRegistry;
use tracing::{debug, error, info, warn};

/// Binds host events to the hooks each registered command provides.
///
/// Owns the command registry for the dispatch phase of the add-in session;
/// construction takes the registry the startup phase populated.
pub struct LifecycleDispatcher {
    registry: CommandRegistry,
    probe: CapabilityProbe,
}

impl LifecycleDispatcher {
    /// Create a dispatcher over a populated command registry
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            probe: CapabilityProbe::new(),
        }
    }

    /// Read access to the registry, for inspection and tests
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    fn lookup(&mut self, id: &CommandId, hook: HookKind) -> Result<&mut crate::command::CommandCell> {
        self.registry.lookup_mut(id).map_err(|err| {
            warn!(command = %id, hook = %hook, "event for unregistered command dropped");
            err
        })
    }

    /// Host fired the definition's creation event: the user invoked the
    /// command. Builds the dialog input model, subscribes exactly the detected
    /// capability set plus the mandatory destroy handler, and activates the
    /// session.
    pub fn on_definition_created(
        &mut self,
        host: &mut dyn HostEvents,
        event: &CreationEvent,
    ) -> Result<()> {
        let probe = &self.probe;
        let cell = self.registry.lookup_mut(&event.command_id).map_err(|err| {
            warn!(command = %event.command_id, "creation event for unregistered command dropped");
            err
        })?;

        if let Err(state) = cell.session.activate() {
            warn!(command = %event.command_id, state = %state, "creation event rejected");
            return Err(AddinError::protocol_violation(
                event.command_id.as_str(),
                HookKind::Created,
                state,
            ));
        }

        let capabilities = probe.detect(cell.hooks.as_ref());

        // Session subscriptions first, so the subscribed set is complete even
        // if the creation hook fails below.
        for hook in HookKind::SESSION_HOOKS {
            if capabilities.contains(hook) {
                let token = host.subscribe(&event.command_id, hook);
                cell.handlers.attach(hook, token);
            }
        }
        // Destroy is subscribed unconditionally to guarantee cleanup.
        let token = host.subscribe(&event.command_id, HookKind::Destroy);
        cell.handlers.attach(HookKind::Destroy, token);

        let mut dialog = DialogInputs::new();
        let outcome = if capabilities.contains(HookKind::Created) {
            cell.hooks.on_created(&mut dialog).map_err(|err| {
                error!(command = %event.command_id, error = %err, "created hook failed");
                AddinError::hook_failure(event.command_id.as_str(), HookKind::Created, err)
            })
        } else {
            debug!(command = %event.command_id, "non-interactive command, no dialog configured");
            Ok(())
        };
        cell.dialog = Some(dialog);

        info!(
            command = %event.command_id,
            invocation = cell.session.invocations(),
            capabilities = %capabilities,
            subscribed = cell.handlers.len(),
            "dialog session activated"
        );
        outcome
    }

    /// One dialog input changed. Applies the new value to the dialog model and
    /// invokes the hook with the changed input only.
    pub fn on_input_changed(&mut self, event: &InputChangedEvent) -> Result<()> {
        let cell = self.lookup(&event.command_id, HookKind::InputChanged)?;

        if let Err(state) = cell.session.require_active() {
            warn!(command = %event.command_id, state = %state, "input-changed event rejected");
            return Err(AddinError::protocol_violation(
                event.command_id.as_str(),
                HookKind::InputChanged,
                state,
            ));
        }

        let Some(dialog) = cell.dialog.as_mut() else {
            warn!(command = %event.command_id, "input-changed with no dialog model, dropped");
            return Ok(());
        };
        let Some(changed) = dialog.set_value(&event.input_id, event.value.clone()) else {
            // The host referenced an input the dialog never defined. Stale
            // payload, not an ordering fault; drop it.
            warn!(
                command = %event.command_id,
                input = %event.input_id,
                "input-changed for unknown input dropped"
            );
            return Ok(());
        };

        cell.hooks.on_input_changed(changed).map_err(|err| {
            error!(command = %event.command_id, error = %err, "input-changed hook failed");
            AddinError::hook_failure(event.command_id.as_str(), HookKind::InputChanged, err)
        })
    }

    /// The host is deciding whether to enable execution. Returns the hook's
    /// verdict; a command without a validate hook is always valid.
    pub fn on_validate(&mut self, event: &ValidationEvent) -> Result<bool> {
        let cell = self.lookup(&event.command_id, HookKind::ValidateInputs)?;

        if let Err(state) = cell.session.require_active() {
            warn!(command = %event.command_id, state = %state, "validate event rejected");
            return Err(AddinError::protocol_violation(
                event.command_id.as_str(),
                HookKind::ValidateInputs,
                state,
            ));
        }

        let empty = DialogInputs::new();
        let inputs = cell.dialog.as_ref().unwrap_or(&empty);
        cell.hooks.on_validate(inputs).map_err(|err| {
            error!(command = %event.command_id, error = %err, "validate hook failed");
            AddinError::hook_failure(event.command_id.as_str(), HookKind::ValidateInputs, err)
        })
    }

    /// The host wants a graphics preview of the pending result.
    pub fn on_preview(&mut self, event: &PreviewEvent) -> Result<()> {
        let cell = self.lookup(&event.command_id, HookKind::ExecutePreview)?;

        if let Err(state) = cell.session.require_active() {
            warn!(command = %event.command_id, state = %state, "preview event rejected");
            return Err(AddinError::protocol_violation(
                event.command_id.as_str(),
                HookKind::ExecutePreview,
                state,
            ));
        }

        let empty = DialogInputs::new();
        let inputs = cell.dialog.as_ref().unwrap_or(&empty);
        cell.hooks.on_preview(inputs).map_err(|err| {
            error!(command = %event.command_id, error = %err, "preview hook failed");
            AddinError::hook_failure(event.command_id.as_str(), HookKind::ExecutePreview, err)
        })
    }

    /// The user confirmed the dialog. Invoked once per session with the final
    /// input snapshot; a destroy event follows.
    pub fn on_execute(&mut self, event: &ExecuteEvent) -> Result<()> {
        let cell = self.lookup(&event.command_id, HookKind::Execute)?;

        if let Err(state) = cell.session.require_active() {
            warn!(command = %event.command_id, state = %state, "execute event rejected");
            return Err(AddinError::protocol_violation(
                event.command_id.as_str(),
                HookKind::Execute,
                state,
            ));
        }

        let empty = DialogInputs::new();
        let inputs = cell.dialog.as_ref().unwrap_or(&empty);
        let outcome = cell.hooks.on_execute(inputs).map_err(|err| {
            error!(command = %event.command_id, error = %err, "execute hook failed");
            AddinError::hook_failure(event.command_id.as_str(), HookKind::Execute, err)
        });

        if outcome.is_ok() {
            debug!(command = %event.command_id, inputs = inputs.len(), "command executed");
        }
        outcome
    }

    /// The dialog session ended, confirmed or cancelled. Runs the developer's
    /// destroy hook best-effort, then unconditionally releases every handler
    /// subscription and clears the dialog model. The session returns to Idle,
    /// ready for the next invocation.
    pub fn on_destroy(&mut self, host: &mut dyn HostEvents, event: &DestroyEvent) -> Result<()> {
        let cell = self.lookup(&event.command_id, HookKind::Destroy)?;

        if let Err(state) = cell.session.destroy() {
            warn!(command = %event.command_id, state = %state, "destroy event rejected");
            return Err(AddinError::protocol_violation(
                event.command_id.as_str(),
                HookKind::Destroy,
                state,
            ));
        }

        // Developer callback first, best-effort.
        let hook_outcome = cell.hooks.on_destroy(event.reason).map_err(|err| {
            error!(command = %event.command_id, error = %err, "destroy hook failed");
            AddinError::hook_failure(event.command_id.as_str(), HookKind::Destroy, err)
        });

        // Teardown runs regardless of the hook outcome.
        let released = cell.handlers.detach_all(host);
        cell.dialog = None;
        cell.session.reset();

        info!(
            command = %event.command_id,
            reason = %event.reason,
            released = released,
            "dialog session destroyed"
        );
        hook_outcome
    }

    /// Add-in teardown: release any live subscriptions, remove every attached
    /// control, and drop all registrations.
    pub fn shutdown(&mut self, host: &mut dyn HostEvents, ui: &mut dyn UiShell) {
        for cell in self.registry.cells_mut() {
            let released = cell.handlers.detach_all(host);
            if released > 0 {
                warn!(
                    command = %cell.info().id(),
                    released = released,
                    "session still active at shutdown, handlers released"
                );
            }
            cell.dialog = None;
            cell.session.reset();

            let id = cell.info().id().clone();
            for placement in cell.info().placements().to_vec() {
                ui.detach_control(&id, &placement);
            }
        }

        let dropped = self.registry.len();
        self.registry.clear();
        info!(commands = dropped, "add-in shut down");
    }
}
