pub mod dataset;
pub mod legend;
pub mod line_pattern;
pub mod line_series;
pub mod marker;
pub mod scale;
pub mod types;

pub use dataset::{CountsByLabel, Dataset, DatasetSlot};
pub use legend::{FontTextStyle, LegendDirection, LegendForm, LegendOptions, LegendOrientation};
pub use line_pattern::{DashSegments, LinePattern};
pub use line_series::{SeriesGeometry, project_series};
pub use marker::MarkerMetrics;
pub use scale::{LinearScale, ScaleAxis};
pub use types::{DataPoint, Viewport};
