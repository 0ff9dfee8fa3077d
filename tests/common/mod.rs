#![allow(dead_code)]

use quire::{
    BackendError, BlockHandle, ChartError, ChartService, ChartSpec, DocumentBackend,
    RenderedChart, SharedData, Size,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Chart service stand-in that hands back a fixed blob with the requested
/// dimensions.
pub struct StubChartService;

impl ChartService for StubChartService {
    fn render(&self, spec: &ChartSpec) -> Result<RenderedChart, ChartError> {
        Ok(RenderedChart {
            blob: SharedData::new(vec![0x89, 0x50, 0x4e, 0x47]),
            size: Size::new(spec.options.width, spec.options.height),
        })
    }
}

/// Backend that fails every insertion, for error-propagation tests.
pub struct FailingBackend;

impl DocumentBackend for FailingBackend {
    fn insert_paragraph(
        &mut self,
        _index: usize,
        _text: &str,
    ) -> Result<Box<dyn BlockHandle>, BackendError> {
        Err(BackendError::Insertion("backend rejected paragraph".into()))
    }

    fn insert_list_item(
        &mut self,
        _index: usize,
        _text: &str,
    ) -> Result<Box<dyn BlockHandle>, BackendError> {
        Err(BackendError::Insertion("backend rejected list item".into()))
    }

    fn child_count(&self) -> usize {
        0
    }
}
