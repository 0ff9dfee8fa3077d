//! The external chart-rendering seam.

use crate::data::DataTable;
use crate::error::ChartError;
use crate::options::ChartOptions;
use quire_types::{SharedData, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Line,
    Column,
}

/// Everything the external service needs to produce an image.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub table: DataTable,
    pub options: ChartOptions,
}

/// The blob+dimensions pair handed back by the service. This is the whole
/// contract the draft tree consumes.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub blob: SharedData,
    pub size: Size,
}

/// External charting service. Implementations run out of process or over the
/// network; only the returned [`RenderedChart`] matters here.
pub trait ChartService {
    fn render(&self, spec: &ChartSpec) -> Result<RenderedChart, ChartError>;
}

/// Builder pairing a dataset with a chart kind and options.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    spec: ChartSpec,
}

impl Chart {
    pub fn line(table: DataTable) -> Self {
        Self::new(ChartKind::Line, table)
    }

    pub fn column(table: DataTable) -> Self {
        Self::new(ChartKind::Column, table)
    }

    fn new(kind: ChartKind, table: DataTable) -> Self {
        Self {
            spec: ChartSpec {
                kind,
                table,
                options: ChartOptions::default(),
            },
        }
    }

    pub fn options(mut self, options: ChartOptions) -> Self {
        self.spec.options = options;
        self
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Delegates to the external service. Empty tables are rejected before
    /// the service is invoked.
    pub fn render(self, service: &dyn ChartService) -> Result<RenderedChart, ChartError> {
        if self.spec.table.is_empty() {
            return Err(ChartError::EmptyTable);
        }
        log::debug!(
            "rendering {:?} chart: {} rows, {}x{}",
            self.spec.kind,
            self.spec.table.rows().len(),
            self.spec.options.width,
            self.spec.options.height
        );
        service.render(&self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct FixedService;

    impl ChartService for FixedService {
        fn render(&self, spec: &ChartSpec) -> Result<RenderedChart, ChartError> {
            Ok(RenderedChart {
                blob: SharedData::new(vec![0xff]),
                size: Size::new(spec.options.width, spec.options.height),
            })
        }
    }

    #[test]
    fn render_passes_option_dimensions_through() {
        let table = DataTable::new()
            .date_column("day")
            .number_column("count")
            .row(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), &[5.0])
            .unwrap();
        let rendered = Chart::line(table)
            .options(ChartOptions::default().dimensions(800.0, 300.0))
            .render(&FixedService)
            .unwrap();
        assert_eq!(rendered.size, Size::new(800.0, 300.0));
    }

    #[test]
    fn empty_table_is_rejected_before_the_service_runs() {
        let chart = Chart::column(DataTable::new().date_column("day").number_column("n"));
        assert!(matches!(
            chart.render(&FixedService),
            Err(ChartError::EmptyTable)
        ));
    }
}
