//! Quire: a declarative builder for styled rich-text documents.
//!
//! Compose a [`Draft`] of paragraphs, list items, text runs, rules, and
//! inline images entirely in memory, then apply it to a document backend in
//! one deterministic pass. See `quire-draft` for the tree and protocol,
//! `quire-backend` for the backend seam, and `quire-chart` for chart-derived
//! images.

pub use quire_backend::{
    BackendError, BlockHandle, BlockKind, BlockRecord, DocumentBackend, ImageHandle,
    ImageRecord, MemoryBackend,
};
pub use quire_chart::{
    AxisTextStyle, Chart, ChartError, ChartKind, ChartOptions, ChartService, ChartSpec,
    ColumnKind, DataTable, LegendPosition, RenderedChart,
};
pub use quire_draft::{Block, Draft, DraftError, Image, ListItem, Paragraph, Rule, TextRun};
pub use quire_style::{BlockStyle, GlyphKind, TextStyle, BULLET_CYCLE, LATIN_CYCLE, NUMBER_CYCLE};
pub use quire_types::{Color, Margins, SharedData, Size};
