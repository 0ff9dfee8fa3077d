//! Chart construction for inline draft images.
//!
//! Charts are rendered by an external service; this crate only builds the
//! dataset and display options and defines the blob+dimensions contract the
//! draft tree consumes via `Image::from_chart`.

pub mod data;
pub mod error;
pub mod options;
pub mod service;

pub use data::{ColumnKind, DataTable};
pub use error::ChartError;
pub use options::{AxisTextStyle, ChartOptions, LegendPosition};
pub use service::{Chart, ChartKind, ChartService, ChartSpec, RenderedChart};
