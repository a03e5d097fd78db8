use std::cell::RefCell;

use transferfn_core::{ColorPoint, ControlPoints, OpacityPoint};
use transferfn_model::{
    PaletteSink, PaletteUpdate, Preset, TransferFunctionModel, UpdateBus,
};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.001,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Commit lifecycle through a channel
// ============================================================================

#[test]
fn edit_commit_publish_cycle() {
    let mut model = TransferFunctionModel::new(5);
    let (sender, receiver) = UpdateBus::create_pair(4);

    // A new model is dirty, so the first commit publishes.
    assert!(model.commit_and_publish(&sender));
    assert!(receiver.latest().is_some());

    // Clean model, nothing to publish.
    assert!(!model.commit_and_publish(&sender));
    assert!(receiver.latest().is_none());

    // An edit re-arms the commit.
    model.insert_color(0.5).unwrap();
    assert!(model.commit_and_publish(&sender));
    let update = receiver.latest().unwrap();
    assert_eq!(update.colors.len(), 5);
}

#[test]
fn rapid_commits_resolve_to_the_newest_palette() {
    let mut model = TransferFunctionModel::new(5);
    let (sender, receiver) = UpdateBus::create_pair(16);

    for scale in [0.5, 1.0, 2.0] {
        model.set_opacity_scale(scale);
        model.commit_and_publish(&sender);
    }

    let update = receiver.latest().unwrap();
    assert_close(update.opacities.last().unwrap().opacity, 2.0);
    assert!(!receiver.has_updates());
}

#[test]
fn a_tiny_bus_still_carries_the_newest_commit() {
    let mut model = TransferFunctionModel::new(4);
    let (sender, receiver) = UpdateBus::create_pair(1);

    model.set_opacity_scale(0.5);
    assert!(model.commit_and_publish(&sender));
    model.set_opacity_scale(2.0);
    assert!(model.commit_and_publish(&sender));
    assert!(!model.is_dirty());

    // The second commit displaced the first instead of being dropped.
    let update = receiver.latest().unwrap();
    assert_close(update.opacities.last().unwrap().opacity, 2.0);
    assert!(!receiver.has_updates());
}

// ============================================================================
// Custom sinks
// ============================================================================

struct RecordingSink {
    updates: RefCell<Vec<PaletteUpdate>>,
}

impl PaletteSink for RecordingSink {
    fn submit(&self, update: PaletteUpdate) {
        self.updates.borrow_mut().push(update);
    }
}

#[test]
fn any_sink_implementation_receives_commits() {
    let sink = RecordingSink {
        updates: RefCell::new(Vec::new()),
    };
    let mut model = TransferFunctionModel::new(4);

    model.commit_and_publish(&sink);
    model.select(1).unwrap();
    model.commit_and_publish(&sink);

    let updates = sink.updates.borrow();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[1].colors.len(), 17);
}

// ============================================================================
// Committed snapshots do not alias the model
// ============================================================================

#[test]
fn update_is_unaffected_by_later_edits() {
    let mut model = TransferFunctionModel::new(5);
    let before = model.commit_if_dirty().unwrap();

    model.insert_color(0.5).unwrap();
    model.move_opacity(0, OpacityPoint::new(0.0, 1.0)).unwrap();
    let after = model.commit_if_dirty().unwrap();

    // The first snapshot still describes the pre-edit curves.
    assert_eq!(before.colors.len(), 4);
    assert_eq!(after.colors.len(), 5);
    assert!((before.opacities[0].opacity - 0.0).abs() < 0.001);
    assert!((after.opacities[0].opacity - 1.0).abs() < 0.001);
}

// ============================================================================
// End-to-end resample through the model
// ============================================================================

#[test]
fn custom_preset_samples_to_expected_palette() {
    let mut model = TransferFunctionModel::new(5);
    let index = model.add_preset(Preset::new(
        "cool white hot",
        ControlPoints::new(vec![
            ColorPoint::new(0.0, 0.0, 0.0, 1.0),
            ColorPoint::new(0.5, 1.0, 1.0, 1.0),
            ColorPoint::new(1.0, 1.0, 0.0, 0.0),
        ]),
        ControlPoints::identity_ramp(),
    ));
    model.select(index).unwrap();
    let update = model.commit_if_dirty().unwrap();

    let expected_rgb = [
        [0.0, 0.0, 1.0],
        [0.5, 0.5, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.5, 0.5],
        [1.0, 0.0, 0.0],
    ];
    for (i, expected) in expected_rgb.iter().enumerate() {
        assert_close(update.palette.rgb[i * 3], expected[0]);
        assert_close(update.palette.rgb[i * 3 + 1], expected[1]);
        assert_close(update.palette.rgb[i * 3 + 2], expected[2]);
    }
    for (i, expected) in [0.0, 0.25, 0.5, 0.75, 1.0].iter().enumerate() {
        assert_close(update.palette.alpha[i * 2 + 1], *expected);
    }
}
