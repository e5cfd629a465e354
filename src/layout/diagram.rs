use smallvec::SmallVec;

use crate::core::{
    axis_units, precipitation_labels, subzero_labels, temperature_axis_units, Entry, MONTHS,
    MONTH_COUNT, SCALE_KINK_MM,
};
use crate::layout::annotations::{header_annotations, Annotation};

/// Bar width in month-slot units; each month slot is one unit wide.
pub const BAR_WIDTH: f64 = 0.5;

/// One vertex of the temperature curve, in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Color band of a precipitation bar. `High` marks the portion above the
/// 100 mm kink and is painted behind the `Low` bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipBand {
    Low,
    High,
}

/// Axis-aligned bar geometry for one month's precipitation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipBar {
    /// Zero-based month.
    pub month: usize,
    /// Bar center on the month axis.
    pub x: f64,
    /// Scaled bar height in shared axis units.
    pub height: f64,
    /// Unscaled millimeter value the bar represents (capped at the kink
    /// for `Low` bars).
    pub value_mm: f64,
    pub band: PrecipBand,
}

/// Integer tick row placement of the shared vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPlacement {
    /// Lowest tick row, `-(number of sub-zero labels)`.
    pub low: i64,
    /// One past the highest tick row, `number of positive labels`.
    pub high: i64,
    /// Month-axis height as a fraction of the plot, so the zero crossing
    /// aligns with the temperature-label baseline.
    pub zero_fraction: f64,
}

/// One month tick on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTick {
    pub x: f64,
    pub label: &'static str,
}

/// Renderable geometry and labels for one record's climate diagram.
///
/// Everything is expressed in plot coordinates: x in month slots (0..12),
/// y in shared axis units. Rasterization, colors and fonts are host
/// concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    /// 14-point closed temperature polyline wrapping December→January.
    pub temperature_curve: Vec<CurvePoint>,
    /// Precipitation bars in paint order (`High` before `Low` per month).
    pub bars: Vec<PrecipBar>,
    pub axis: AxisPlacement,
    /// Positive-side label values in millimeters.
    pub precipitation_label_values: SmallVec<[i64; 8]>,
    /// Sub-zero label values in °C, ascending.
    pub subzero_label_values: SmallVec<[i64; 4]>,
    /// Temperature-axis tick text per integer row, bottom to top.
    pub temperature_ticks: Vec<String>,
    /// Precipitation-axis tick text per integer row, bottom to top.
    pub precipitation_ticks: Vec<String>,
    pub month_ticks: [MonthTick; MONTH_COUNT],
    pub annotations: [Annotation; 4],
    /// Suggested figure height for hosts, in pixels.
    pub suggested_height_px: f64,
}

/// Computes the full diagram layout for one record.
///
/// Deterministic and infallible: degenerate inputs (all-zero series and
/// the like) produce a valid minimal layout rather than an error.
#[must_use]
pub fn compute_layout(entry: &Entry) -> DiagramLayout {
    let p_labels = precipitation_labels(&entry.temperatures, &entry.precipitation);
    let n_labels = subzero_labels(&entry.temperatures);

    let low = -(n_labels.len() as i64);
    let high = p_labels.len() as i64;
    let axis = AxisPlacement {
        low,
        high,
        zero_fraction: low.unsigned_abs() as f64 / (high - low) as f64,
    };

    let layout_rows = (n_labels.len() + p_labels.len()) as f64;

    DiagramLayout {
        temperature_curve: temperature_curve(&entry.temperatures),
        bars: precipitation_bars(&entry.precipitation),
        axis,
        temperature_ticks: temperature_ticks(&n_labels, &p_labels),
        precipitation_ticks: precipitation_ticks(&n_labels, &p_labels),
        month_ticks: month_ticks(),
        annotations: header_annotations(entry, high as f64 - 0.5),
        suggested_height_px: layout_rows * 50.0 + 100.0,
        precipitation_label_values: p_labels,
        subzero_label_values: n_labels,
    }
}

/// Closed 14-point sequence `[t11, t0..t11, t0]` plotted at half-slot x
/// positions so the line wraps visually across the year boundary.
fn temperature_curve(temperatures: &[f64; MONTH_COUNT]) -> Vec<CurvePoint> {
    let mut points = Vec::with_capacity(MONTH_COUNT + 2);
    points.push(CurvePoint {
        x: -0.5,
        y: temperature_axis_units(temperatures[MONTH_COUNT - 1]),
    });
    for (month, celsius) in temperatures.iter().enumerate() {
        points.push(CurvePoint {
            x: month as f64 + 0.5,
            y: temperature_axis_units(*celsius),
        });
    }
    points.push(CurvePoint {
        x: 12.5,
        y: temperature_axis_units(temperatures[0]),
    });
    points
}

/// Every month gets a `Low` bar capped at the kink; months above 100 mm
/// additionally get a full-height `High` bar painted behind it.
fn precipitation_bars(precipitation: &[f64; MONTH_COUNT]) -> Vec<PrecipBar> {
    let mut bars = Vec::with_capacity(MONTH_COUNT + 4);
    for (month, value_mm) in precipitation.iter().copied().enumerate() {
        let x = month as f64 + 0.5;
        if value_mm > SCALE_KINK_MM {
            bars.push(PrecipBar {
                month,
                x,
                height: axis_units(value_mm),
                value_mm,
                band: PrecipBand::High,
            });
        }
        bars.push(PrecipBar {
            month,
            x,
            height: axis_units(value_mm.min(SCALE_KINK_MM)),
            value_mm: value_mm.min(SCALE_KINK_MM),
            band: PrecipBand::Low,
        });
    }
    bars
}

/// Temperature-axis text: sub-zero labels verbatim, positive labels halved
/// back to °C through the linear range, blank above the kink.
fn temperature_ticks(n_labels: &[i64], p_labels: &[i64]) -> Vec<String> {
    let mut ticks: Vec<String> = Vec::with_capacity(n_labels.len() + p_labels.len());
    ticks.extend(n_labels.iter().map(i64::to_string));
    ticks.extend(p_labels.iter().map(|&mm| {
        if mm as f64 <= SCALE_KINK_MM {
            (mm / 2).to_string()
        } else {
            String::new()
        }
    }));
    ticks
}

/// Precipitation-axis text: blank over the sub-zero range, raw millimeter
/// values above.
fn precipitation_ticks(n_labels: &[i64], p_labels: &[i64]) -> Vec<String> {
    let mut ticks: Vec<String> = Vec::with_capacity(n_labels.len() + p_labels.len());
    ticks.extend(n_labels.iter().map(|_| String::new()));
    ticks.extend(p_labels.iter().map(i64::to_string));
    ticks
}

fn month_ticks() -> [MonthTick; MONTH_COUNT] {
    std::array::from_fn(|month| MonthTick {
        x: month as f64 + 0.5,
        label: MONTHS[month],
    })
}
