//! Host integration tests for the activity parameter engine

use leash_activity::activity::editor::{
    step_discrete, step_interval, Direction, ParamEditor, Rendered,
};
use leash_activity::activity::limits::{
    ActivityLimits, LimitDescriptor, LimitResolver, LimitsCatalog, ParamInfo, SlotLimit,
    TargetDevice,
};
use leash_activity::activity::messages::{
    ActivityParams, Message, ParamsKind, RequestKind, SenderKind,
};
use leash_activity::activity::parameters::{ParamFlags, ParamStore, ParameterError};
use leash_activity::activity::traits::MockTransport;
use leash_activity::sync::{ControllerCell, LocalCell};
use leash_activity::{register_catalog_defaults, SyncConfig, SyncController, SyncError, SyncState};

static PARAMS: [ParamInfo; 3] = [
    ParamInfo::new("ACT_LEVEL", "Level", TargetDevice::ALL),
    ParamInfo::new("ACT_DIST", "Distance", TargetDevice::LEASH),
    ParamInfo::new("ACT_PACE", "Pace", TargetDevice::ALL),
];

static DEFAULT_LIMITS: [SlotLimit; 3] = [
    SlotLimit::new(0, LimitDescriptor::DiscreteInt(&[1.0, 2.0, 3.0])),
    SlotLimit::new(
        1,
        LimitDescriptor::Interval {
            start: 0.0,
            end: 10.0,
            step: 2.0,
        },
    ),
    SlotLimit::new(2, LimitDescriptor::Invisible),
];

static RUN_LIMITS: [SlotLimit; 1] = [SlotLimit::new(
    2,
    LimitDescriptor::DiscreteFloat(&[0.5, 1.5]),
)];

static ACTIVITIES: [ActivityLimits; 2] = [
    ActivityLimits::new("Idle", &DEFAULT_LIMITS),
    ActivityLimits::new("Run", &RUN_LIMITS),
];

static CATALOG: LimitsCatalog = LimitsCatalog::new(&PARAMS, &ACTIVITIES);

fn leash_store() -> ParamStore {
    let mut store = ParamStore::new();
    register_catalog_defaults(&mut store, &CATALOG, TargetDevice::LEASH).unwrap();
    store
}

fn leash_controller() -> SyncController<MockTransport, ParamStore> {
    SyncController::new(
        &CATALOG,
        SyncConfig::default(),
        MockTransport::new(),
        leash_store(),
    )
    .unwrap()
}

#[test]
fn test_resolve_run_activity_binds_overrides() {
    let mut editors: Vec<ParamEditor> = PARAMS
        .iter()
        .enumerate()
        .map(|(slot, info)| ParamEditor::new(slot, info, CATALOG.default_limit(slot).unwrap()))
        .collect();

    LimitResolver::new(&CATALOG).resolve(1, &mut editors).unwrap();

    assert!(core::ptr::eq(editors[0].limit(), &DEFAULT_LIMITS[0].limit));
    assert!(core::ptr::eq(editors[1].limit(), &DEFAULT_LIMITS[1].limit));
    assert!(core::ptr::eq(editors[2].limit(), &RUN_LIMITS[0].limit));

    LimitResolver::new(&CATALOG).resolve(0, &mut editors).unwrap();
    assert!(core::ptr::eq(editors[2].limit(), &DEFAULT_LIMITS[2].limit));
}

#[test]
fn test_navigation_cycles_visible_slots() {
    let mut controller = leash_controller();
    controller.set_activity(1).unwrap();

    assert_eq!(controller.current_param().slot(), 0);
    assert_eq!(controller.next_param().slot(), 1);
    assert_eq!(controller.next_param().slot(), 2);
    assert_eq!(controller.next_param().slot(), 0);

    controller.set_activity(0).unwrap();
    assert_eq!(controller.next_param().slot(), 1);
    assert_eq!(controller.next_param().slot(), 0);
}

#[test]
fn test_startup_apply_and_store_push() {
    let mut controller = leash_controller();
    assert_eq!(
        controller.transport().published(),
        &[Message::Request(RequestKind::Params)]
    );
    assert!(!controller.is_authoritative());
    assert_eq!(controller.poll(), Ok(false));

    controller
        .transport_mut()
        .deliver(ActivityParams::received(1, &[2.0, 4.0, 0.5]).unwrap());
    assert_eq!(controller.poll(), Ok(true));

    assert_eq!(controller.state(), SyncState::Synced);
    assert_eq!(controller.activity(), 1);
    assert_eq!(controller.activity_display_name(), "Run");
    let expected = [2.0, 4.0, 0.5];
    for (editor, value) in controller.editors().iter().zip(expected) {
        assert_eq!(editor.value(), value);
        assert_eq!(editor.saved_value(), value);
    }
    assert!(controller.editor(2).unwrap().is_visible());

    assert_eq!(controller.store().get("ACT_LEVEL"), Some(2.0));
    assert_eq!(controller.store().get("ACT_DIST"), Some(4.0));
    assert_eq!(controller.store().get("ACT_PACE"), Some(0.5));
}

#[test]
fn test_apply_fails_on_unregistered_param() {
    let mut store = ParamStore::new();
    store.register("ACT_LEVEL", 1.0, ParamFlags::empty()).unwrap();
    store.register("ACT_DIST", 0.0, ParamFlags::empty()).unwrap();
    let mut controller =
        SyncController::new(&CATALOG, SyncConfig::default(), MockTransport::new(), store).unwrap();

    let result = controller.apply(&ActivityParams::received(1, &[2.0, 4.0, 0.5]).unwrap());
    assert_eq!(
        result,
        Err(SyncError::StoreWrite {
            slot: 2,
            error: ParameterError::NotFound
        })
    );
    assert_eq!(controller.state(), SyncState::Unsynced);
    assert_eq!(controller.activity(), 0);
    assert_eq!(controller.editor(0).unwrap().value(), 1.0);
    // Earlier slots were already pushed
    assert_eq!(controller.store().get("ACT_DIST"), Some(4.0));
}

#[test]
fn test_apply_read_only_param_is_not_synced() {
    let mut store = ParamStore::new();
    store.register("ACT_LEVEL", 1.0, ParamFlags::READ_ONLY).unwrap();
    store.register("ACT_DIST", 0.0, ParamFlags::empty()).unwrap();
    let mut transport = MockTransport::new();
    let mut controller =
        SyncController::new(&CATALOG, SyncConfig::default(), &mut transport, store).unwrap();

    controller
        .transport_mut()
        .deliver(ActivityParams::received(0, &[3.0, 8.0, 0.0]).unwrap());
    assert_eq!(
        controller.poll(),
        Err(SyncError::StoreWrite {
            slot: 0,
            error: ParameterError::ReadOnly
        })
    );
    assert!(!controller.is_authoritative());
    assert_eq!(controller.store().get("ACT_DIST"), Some(0.0));
}

#[test]
fn test_dog_device_writes_dog_params() {
    let mut store = ParamStore::new();
    register_catalog_defaults(&mut store, &CATALOG, TargetDevice::DOG).unwrap();
    assert_eq!(store.get("ACT_DIST"), None);

    let mut controller = SyncController::new(
        &CATALOG,
        SyncConfig::for_device(TargetDevice::DOG),
        MockTransport::new(),
        store,
    )
    .unwrap();
    controller
        .apply(&ActivityParams::received(1, &[3.0, 6.0, 1.5]).unwrap())
        .unwrap();
    assert_eq!(controller.store().get("ACT_LEVEL"), Some(3.0));
    assert_eq!(controller.store().get("ACT_PACE"), Some(1.5));
}

#[test]
fn test_edit_save_and_refresh() {
    let mut controller = leash_controller();
    controller
        .apply(&ActivityParams::received(1, &[2.0, 4.0, 0.5]).unwrap())
        .unwrap();
    controller.transport_mut().clear_published();

    let (text, result) = controller.next_value();
    assert_eq!((text.as_str(), result), ("3", Ok(Rendered::Value)));
    controller.prev_param();
    let (text, _) = controller.next_value();
    assert_eq!(text.as_str(), "1.50");

    controller.save().unwrap();
    for editor in controller.editors() {
        assert_eq!(editor.saved_value(), editor.value());
        assert!(!editor.is_modified());
    }

    let published = controller.transport().published();
    assert_eq!(published.len(), 2);
    assert_eq!(
        published[0],
        Message::Params(ActivityParams::new(ParamsKind::Saved, 1, &[3.0, 4.0, 1.5]).unwrap())
    );
    assert_eq!(published[1], Message::Sender(SenderKind::Values));
    assert_eq!(controller.state(), SyncState::RefreshPending);

    assert_eq!(controller.poll(), Ok(false));
    controller
        .transport_mut()
        .deliver(ActivityParams::received(1, &[3.0, 4.0, 1.5]).unwrap());
    assert_eq!(controller.poll(), Ok(true));
    assert!(controller.is_authoritative());
}

#[test]
fn test_cancel_restores_last_known_good() {
    let mut controller = leash_controller();
    assert_eq!(controller.cancel(), Err(SyncError::NoSnapshot));

    controller
        .apply(&ActivityParams::received(0, &[1.0, 6.0, 0.0]).unwrap())
        .unwrap();
    for _ in 0..5 {
        controller.next_value();
    }
    controller.next_param();
    controller.prev_value();
    controller.cancel().unwrap();
    assert_eq!(controller.editor(0).unwrap().value(), 1.0);
    assert_eq!(controller.editor(1).unwrap().value(), 6.0);

    controller.next_param();
    controller.next_value();
    controller.save().unwrap();
    controller.next_value();
    controller.cancel().unwrap();
    assert_eq!(controller.editor(0).unwrap().value(), 2.0);
}

#[test]
fn test_stepping_stays_within_limits() {
    let mut controller = leash_controller();
    controller.set_activity(1).unwrap();
    for _ in 0..3 {
        for _ in 0..7 {
            controller.next_value();
            let editor = controller.current_param();
            assert!(editor.limit().contains(editor.value()));
            controller.prev_value();
            let editor = controller.current_param();
            assert!(editor.limit().contains(editor.value()));
            controller.next_value();
        }
        controller.next_param();
    }
}

#[test]
fn test_discrete_round_trip() {
    let values = [0.5_f32, 1.0, 1.5, 2.5];
    for &value in &values {
        let there = step_discrete(value, &values, Direction::Forward);
        let back = step_discrete(there, &values, Direction::Backward);
        assert_eq!(back, value);
    }
    for direction in [Direction::Forward, Direction::Backward] {
        assert_eq!(
            step_discrete(0.7, &values, direction),
            0.5
        );
    }
}

#[test]
fn test_interval_reaches_end_then_wraps() {
    let cases = [(0.0_f32, 10.0_f32, 2.0_f32), (0.0, 1.0, 0.3), (-5.0, 5.0, 3.0)];
    for (start, end, step) in cases {
        let ticks = ((end - start) / step).ceil() as usize;
        let mut value = start;
        for _ in 0..ticks {
            value = step_interval(
                value,
                start,
                end,
                step,
                Direction::Forward,
            );
            assert!(value <= end);
        }
        assert!(value >= end - step);
        let wrapped = step_interval(
            value,
            start,
            end,
            step,
            Direction::Forward,
        );
        assert_eq!(wrapped, start);
    }
}

#[test]
fn test_controller_shared_through_cell() {
    let cell = LocalCell::new(leash_controller());
    cell.lock(|controller| {
        controller
            .transport_mut()
            .deliver(ActivityParams::received(0, &[3.0, 2.0, 0.0]).unwrap());
    });
    assert_eq!(cell.poll(), Ok(true));
    assert_eq!(cell.state(), SyncState::Synced);
    assert_eq!(cell.next_value().0.as_str(), "1");
}
