mod chart_config;
mod configuration;
mod json_contract;
mod line_chart;
mod rebuild;
mod render_bridge;
mod selection;

pub use chart_config::LineChartConfig;
pub use configuration::{ChartConfiguration, ChartFlags};
pub use json_contract::{RENDER_DESCRIPTION_JSON_SCHEMA_V1, RenderDescriptionJsonContractV1};
pub use line_chart::LineChart;
pub use rebuild::{FILL_ALPHA, MARKER_COLOR, derive_render_description};
pub use render_bridge::RenderBridge;
pub use selection::{SelectionHandler, SelectionSlot};
