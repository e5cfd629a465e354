mod annotations;
mod diagram;

pub use annotations::{Annotation, TextAnchor};
pub use diagram::{
    compute_layout, AxisPlacement, CurvePoint, DiagramLayout, MonthTick, PrecipBand, PrecipBar,
    BAR_WIDTH,
};
