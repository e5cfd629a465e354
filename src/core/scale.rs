/// Threshold where the shared vertical axis changes its unit ratio.
pub const SCALE_KINK_MM: f64 = 100.0;

/// Maps a millimeter-equivalent value onto the shared vertical axis.
///
/// Below the kink one axis unit equals 20 mm (and, via the ×2 temperature
/// convention, 2 °C); above it the axis compresses to 100 mm per unit.
/// Both branches meet at `axis_units(100.0) == 5.0`, so the curve is
/// continuous with a visible kink at the threshold.
#[must_use]
pub fn axis_units(y: f64) -> f64 {
    if y <= SCALE_KINK_MM {
        y / 20.0
    } else {
        5.0 + (y - SCALE_KINK_MM) / 100.0
    }
}

/// Places a temperature on the shared axis using the 2 °C-per-unit pairing.
#[must_use]
pub fn temperature_axis_units(celsius: f64) -> f64 {
    axis_units(celsius * 2.0)
}
