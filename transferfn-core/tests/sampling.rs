use transferfn_core::{sample, ColorPoint, ControlPoints};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.001,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Full resample of a three-stop curve
// ============================================================================

#[test]
fn five_samples_across_three_stops() {
    let colors = ControlPoints::new(vec![
        ColorPoint::new(0.0, 0.0, 0.0, 1.0),
        ColorPoint::new(0.5, 1.0, 1.0, 1.0),
        ColorPoint::new(1.0, 1.0, 0.0, 0.0),
    ]);
    let palette = sample(&colors, &ControlPoints::identity_ramp(), 5, 1.0);

    let expected_rgb = [
        [0.0, 0.0, 1.0],
        [0.5, 0.5, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.5, 0.5],
        [1.0, 0.0, 0.0],
    ];
    for (i, expected) in expected_rgb.iter().enumerate() {
        assert_close(palette.rgb[i * 3], expected[0]);
        assert_close(palette.rgb[i * 3 + 1], expected[1]);
        assert_close(palette.rgb[i * 3 + 2], expected[2]);
    }

    let expected_alpha = [0.0, 0.25, 0.5, 0.75, 1.0];
    for (i, expected) in expected_alpha.iter().enumerate() {
        assert_close(palette.alpha[i * 2], *expected);
        assert_close(palette.alpha[i * 2 + 1], *expected);
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn resampling_unchanged_curves_is_byte_identical() {
    let mut colors = ControlPoints::new(vec![
        ColorPoint::new(0.0, 0.1, 0.2, 0.3),
        ColorPoint::new(1.0, 0.9, 0.8, 0.7),
    ]);
    colors.insert(0.37);
    let mut opacities = ControlPoints::identity_ramp();
    opacities.insert(0.61);

    let first = sample(&colors, &opacities, 17, 1.3);
    let second = sample(&colors, &opacities, 17, 1.3);

    assert_eq!(first, second);
    assert_eq!(first.rgba, second.rgba);
}

// ============================================================================
// Coincident stops
// ============================================================================

#[test]
fn stacked_stops_produce_a_hard_edge() {
    let mut colors = ControlPoints::new(vec![
        ColorPoint::new(0.0, 0.0, 0.0, 0.0),
        ColorPoint::new(1.0, 1.0, 1.0, 1.0),
    ]);
    colors.insert(0.5);
    colors.insert(0.5);
    colors.move_point(1, ColorPoint::new(0.5, 0.0, 0.0, 0.0));
    colors.move_point(2, ColorPoint::new(0.5, 1.0, 1.0, 1.0));

    // Left of the stack interpolates toward black, right of it toward white.
    let palette = sample(&colors, &ControlPoints::identity_ramp(), 5, 1.0);
    assert_close(palette.rgb[3], 0.0);
    assert_close(palette.rgb[9], 1.0);
}
