//! Startup and teardown tests: registration, placement attachment, shutdown.

mod common;

use addin_core::events::{CreationEvent, HookKind};
use addin_core::{Addin, AddinError, CommandId, CommandInfo, HookSet, PlacementDescriptor};
use common::{info, shared_log, InstrumentedCommand, MockHost, MockUi, NonInteractiveCommand};

#[test]
fn duplicate_identifier_fails_and_second_instance_is_absent() {
    let mut addin = Addin::new();
    addin
        .register(info("draw_bolt"), Box::new(NonInteractiveCommand))
        .unwrap();

    let err = addin
        .register(info("draw_bolt"), Box::new(NonInteractiveCommand))
        .unwrap_err();
    assert!(matches!(err, AddinError::DuplicateIdentifier { .. }));

    let dispatcher = addin.into_dispatcher();
    assert_eq!(dispatcher.registry().len(), 1);
}

#[test]
fn one_bad_placement_does_not_block_the_others() {
    let mut addin = Addin::new();
    let command_info = info("multi_home")
        .with_placement(PlacementDescriptor::new("SolidEnv", "CreatePanel").unwrap())
        .with_placement(PlacementDescriptor::new("SolidEnv", "NoSuchPanel").unwrap())
        .with_placement(PlacementDescriptor::new("SurfaceEnv", "ModifyPanel").unwrap());
    addin
        .register(command_info, Box::new(NonInteractiveCommand))
        .unwrap();

    let mut ui = MockUi::with_panels(&["CreatePanel", "ModifyPanel"]);
    let report = addin.startup(&mut ui);

    assert_eq!(report.attached, 2);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0],
        AddinError::PlacementAttachFailure { .. }
    ));
    assert_eq!(ui.attached.len(), 2);
}

#[test]
fn clean_startup_reports_no_failures() {
    let mut addin = Addin::new();
    addin
        .register(
            info("solo").with_placement(PlacementDescriptor::new("Env", "Panel").unwrap()),
            Box::new(NonInteractiveCommand),
        )
        .unwrap();

    let mut ui = MockUi::with_panels(&["Panel"]);
    let report = addin.startup(&mut ui);
    assert!(report.is_clean());
    assert_eq!(report.attached, 1);
}

#[test]
fn placements_fan_out_one_command_to_many_entry_points() {
    let mut addin = Addin::new();
    let command_info = info("everywhere")
        .with_placement(
            PlacementDescriptor::new("SolidEnv", "CreatePanel")
                .unwrap()
                .promoted(),
        )
        .with_placement(
            PlacementDescriptor::new("SurfaceEnv", "CreatePanel")
                .unwrap()
                .beside("ExtrudeCommand"),
        );
    addin
        .register(command_info, Box::new(NonInteractiveCommand))
        .unwrap();

    let mut ui = MockUi::with_panels(&["CreatePanel"]);
    let report = addin.startup(&mut ui);

    assert_eq!(report.attached, 2);
    let id = CommandId::new("everywhere");
    assert!(ui.attached.iter().all(|(cid, _)| *cid == id));
    assert!(ui.attached.iter().any(|(_, p)| p.is_promoted()));
    assert!(ui
        .attached
        .iter()
        .any(|(_, p)| p.beside_id() == Some("ExtrudeCommand")));
}

#[test]
fn startup_attaches_no_event_handlers() {
    let log = shared_log();
    let caps = HookSet::of(&[HookKind::Created, HookKind::Execute]);
    let mut addin = Addin::new();
    addin
        .register(
            info("lazy").with_placement(PlacementDescriptor::new("Env", "Panel").unwrap()),
            Box::new(InstrumentedCommand::new(log.clone(), caps)),
        )
        .unwrap();

    let mut ui = MockUi::with_panels(&["Panel"]);
    addin.startup(&mut ui);

    // Handlers are wired lazily, on the first creation event only.
    let dispatcher = addin.into_dispatcher();
    let cell = dispatcher.registry().lookup(&CommandId::new("lazy")).unwrap();
    assert!(cell.handlers().is_empty());
    assert_eq!(log.borrow().created, 0);
}

#[test]
fn shutdown_releases_everything() {
    let log = shared_log();
    let caps = HookSet::of(&[HookKind::Created, HookKind::InputChanged]);
    let mut addin = Addin::new();
    addin
        .register(
            info("open_dialog").with_placement(PlacementDescriptor::new("Env", "Panel").unwrap()),
            Box::new(InstrumentedCommand::new(log, caps)),
        )
        .unwrap();
    addin
        .register(info("idle_command"), Box::new(NonInteractiveCommand))
        .unwrap();

    let mut ui = MockUi::with_panels(&["Panel"]);
    addin.startup(&mut ui);
    let mut dispatcher = addin.into_dispatcher();
    let mut host = MockHost::new();

    // Leave one dialog session open, then shut the add-in down.
    dispatcher
        .on_definition_created(
            &mut host,
            &CreationEvent {
                command_id: CommandId::new("open_dialog"),
            },
        )
        .unwrap();
    assert!(host.live_count() > 0);

    dispatcher.shutdown(&mut host, &mut ui);

    assert_eq!(host.live_count(), 0);
    assert!(dispatcher.registry().is_empty());
    assert_eq!(ui.detached.len(), 1);
}

#[test]
fn invalid_placement_never_constructs() {
    let err = PlacementDescriptor::new("", "Panel").unwrap_err();
    assert!(err.is_startup_fatal());
}

#[test]
fn command_info_carries_presentation_fields() {
    let command_info = CommandInfo::new("bolt_gen", "Bolt Generator", "Parametric bolts")
        .with_icon_folder("resources/bolt_gen");
    assert_eq!(command_info.name(), "Bolt Generator");
    assert_eq!(command_info.description(), "Parametric bolts");
    assert_eq!(command_info.icon_folder(), Some("resources/bolt_gen"));
}
