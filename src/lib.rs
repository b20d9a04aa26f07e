//! timeseries-chart: six synchronized cumulative/daily time-series panels.
//!
//! One dataset of daily records feeds six panels (confirmed, recovered and
//! deceased, each as running totals and as daily deltas). A single hover
//! focus is shared by all panels. The crate is headless: scale derivation,
//! panel scenes and pointer routing live here, drawing goes through a
//! `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{HostConfig, TimeSeriesChart};
pub use error::{ChartError, ChartResult};
