//! line-chart-rs: embeddable single-series line chart widget.
//!
//! Configuration changes never patch what is on screen. Each one derives a
//! complete `RenderDescription` from the widget's configuration (a pure
//! function, see `api::derive_render_description`) and mounts a freshly
//! configured surface into the host in place of the previous one.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig, SelectionHandler};
pub use error::{ChartError, ChartResult};
