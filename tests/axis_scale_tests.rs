use approx::assert_relative_eq;
use klima_rs::core::{axis_units, temperature_axis_units, SCALE_KINK_MM};

#[test]
fn scale_is_continuous_at_the_kink() {
    // Both branch formulas must agree at the 100 mm threshold.
    let below = SCALE_KINK_MM / 20.0;
    let above = 5.0 + (SCALE_KINK_MM - 100.0) / 100.0;
    assert_eq!(axis_units(SCALE_KINK_MM), 5.0);
    assert_eq!(below, above);
}

#[test]
fn linear_range_maps_twenty_millimeters_per_unit() {
    assert_eq!(axis_units(0.0), 0.0);
    assert_eq!(axis_units(20.0), 1.0);
    assert_eq!(axis_units(80.0), 4.0);
}

#[test]
fn compressed_range_maps_hundred_millimeters_per_unit() {
    assert_relative_eq!(axis_units(106.0), 5.06);
    assert_eq!(axis_units(200.0), 6.0);
    assert_eq!(axis_units(300.0), 7.0);
}

#[test]
fn temperature_track_pairs_two_degrees_per_unit() {
    assert_eq!(temperature_axis_units(50.0), 5.0);
    assert_eq!(temperature_axis_units(24.5), 2.45);
    assert_eq!(temperature_axis_units(-1.0), -0.1);
}
