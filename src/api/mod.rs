mod axis_label_format;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod focus_report;
mod interaction_controller;
mod invalidation;
mod json_contract;
mod mode_controller;
mod panel_frame_builder;
mod redraw_orchestrator;
mod render_style;

pub use axis_label_format::format_si_abbreviated;
pub use engine::TimeSeriesChart;
pub use engine_config::HostConfig;
pub use engine_snapshot::{ChartSnapshot, FocusSnapshot, ValueScaleSnapshot};
pub use focus_report::{FocusReport, SeriesReading, is_latest_day};
pub use invalidation::{RedrawCause, RedrawOutcome, RedrawState, RedrawStats};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use panel_frame_builder::build_panel_frame;
pub use render_style::{ENCODING_ALPHA, PanelStyle};
