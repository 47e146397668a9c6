//! Shared test doubles: a mock host and instrumented test commands.
#![allow(dead_code)] // not every test binary exercises every helper

use addin_core::error::{HookError, HookResult};
use addin_core::events::{DestroyReason, DialogInput, DialogInputs, HookKind, InputValue};
use addin_core::{
    Command, CommandId, CommandInfo, HookSet, HostEvents, PlacementDescriptor, SubscriptionToken,
    UiShell,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Mock host event source. Issues sequential tokens and tracks which
/// subscriptions are currently live.
#[derive(Default)]
pub struct MockHost {
    next_token: u64,
    live: HashMap<SubscriptionToken, (CommandId, HookKind)>,
    pub subscribe_log: Vec<(CommandId, HookKind)>,
    pub released: Vec<SubscriptionToken>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook kinds with a live subscription for the given command
    pub fn live_hooks(&self, id: &CommandId) -> HookSet {
        self.live
            .values()
            .filter(|(command_id, _)| command_id == id)
            .map(|(_, hook)| *hook)
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl HostEvents for MockHost {
    fn subscribe(&mut self, command_id: &CommandId, hook: HookKind) -> SubscriptionToken {
        self.next_token += 1;
        let token = SubscriptionToken::new(self.next_token);
        self.live.insert(token, (command_id.clone(), hook));
        self.subscribe_log.push((command_id.clone(), hook));
        token
    }

    fn unsubscribe(&mut self, token: SubscriptionToken) {
        self.live.remove(&token);
        self.released.push(token);
    }
}

/// Mock UI shell. Attachment succeeds only for panels the mock knows about.
pub struct MockUi {
    known_panels: Vec<String>,
    pub attached: Vec<(CommandId, PlacementDescriptor)>,
    pub detached: Vec<(CommandId, PlacementDescriptor)>,
}

impl MockUi {
    pub fn with_panels(panels: &[&str]) -> Self {
        Self {
            known_panels: panels.iter().map(|p| p.to_string()).collect(),
            attached: Vec::new(),
            detached: Vec::new(),
        }
    }
}

impl UiShell for MockUi {
    fn attach_control(
        &mut self,
        info: &CommandInfo,
        placement: &PlacementDescriptor,
    ) -> Result<(), String> {
        if !self.known_panels.iter().any(|p| p == placement.panel()) {
            return Err(format!("no panel named '{}'", placement.panel()));
        }
        self.attached.push((info.id().clone(), placement.clone()));
        Ok(())
    }

    fn detach_control(&mut self, command_id: &CommandId, placement: &PlacementDescriptor) {
        self.detached.push((command_id.clone(), placement.clone()));
    }
}

/// Call counts recorded by [`InstrumentedCommand`], shared with the test body.
#[derive(Debug, Default)]
pub struct CallLog {
    pub created: usize,
    pub input_changed: usize,
    pub validated: usize,
    pub previewed: usize,
    pub executed: usize,
    pub destroyed: usize,
    pub last_changed_input: Option<DialogInput>,
    pub last_snapshot: Option<DialogInputs>,
    pub last_destroy_reason: Option<DestroyReason>,
}

pub type SharedLog = Rc<RefCell<CallLog>>;

pub fn shared_log() -> SharedLog {
    Rc::new(RefCell::new(CallLog::default()))
}

/// A command whose hooks record into a shared log. Capabilities and failure
/// injection are configured per test.
pub struct InstrumentedCommand {
    pub log: SharedLog,
    pub caps: HookSet,
    pub fail_execute: bool,
    pub fail_destroy: bool,
}

impl InstrumentedCommand {
    pub fn new(log: SharedLog, caps: HookSet) -> Self {
        Self {
            log,
            caps,
            fail_execute: false,
            fail_destroy: false,
        }
    }
}

impl Command for InstrumentedCommand {
    fn capabilities(&self) -> HookSet {
        self.caps
    }

    fn on_created(&mut self, dialog: &mut DialogInputs) -> HookResult {
        self.log.borrow_mut().created += 1;
        dialog.add("thickness", "Thickness", InputValue::Float(2.5));
        dialog.add("mirror", "Mirror", InputValue::Bool(false));
        Ok(())
    }

    fn on_input_changed(&mut self, changed: &DialogInput) -> HookResult {
        let mut log = self.log.borrow_mut();
        log.input_changed += 1;
        log.last_changed_input = Some(changed.clone());
        Ok(())
    }

    fn on_validate(&self, inputs: &DialogInputs) -> HookResult<bool> {
        self.log.borrow_mut().validated += 1;
        let thickness = inputs
            .get("thickness")
            .and_then(|input| input.value.as_float())
            .unwrap_or(0.0);
        Ok(thickness > 0.0)
    }

    fn on_preview(&mut self, _inputs: &DialogInputs) -> HookResult {
        self.log.borrow_mut().previewed += 1;
        Ok(())
    }

    fn on_execute(&mut self, inputs: &DialogInputs) -> HookResult {
        let mut log = self.log.borrow_mut();
        log.executed += 1;
        log.last_snapshot = Some(inputs.clone());
        if self.fail_execute {
            return Err(HookError::new("injected execute failure"));
        }
        Ok(())
    }

    fn on_destroy(&mut self, reason: DestroyReason) -> HookResult {
        let mut log = self.log.borrow_mut();
        log.destroyed += 1;
        log.last_destroy_reason = Some(reason);
        if self.fail_destroy {
            return Err(HookError::new("injected destroy failure"));
        }
        Ok(())
    }
}

/// A command that declares nothing: icon click triggers default behavior.
pub struct NonInteractiveCommand;

impl Command for NonInteractiveCommand {}

pub fn info(id: &str) -> CommandInfo {
    CommandInfo::new(id, "Test Command", "A command under test")
}
