//! Leaves with no text contribution: horizontal rules and inline images.
//! Both ignore the character range they are handed and append themselves to
//! the owning block directly.

use crate::error::DraftError;
use quire_backend::BlockHandle;
use quire_chart::RenderedChart;
use quire_types::SharedData;

/// A horizontal rule. Contributes no text, so it always receives a
/// zero-width range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule;

impl Rule {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn apply(&self, handle: &mut dyn BlockHandle) -> Result<(), DraftError> {
        handle.append_horizontal_rule()?;
        Ok(())
    }
}

/// An inline image built from a blob plus explicit or chart-derived
/// dimensions. Contributes no text.
#[derive(Debug, Clone, Default)]
pub struct Image {
    blob: Option<SharedData>,
    width: Option<f32>,
    height: Option<f32>,
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts the blob and dimensions of an externally rendered chart.
    pub fn from_chart(chart: &RenderedChart) -> Self {
        Self {
            blob: Some(SharedData::clone(&chart.blob)),
            width: Some(chart.size.width),
            height: Some(chart.size.height),
        }
    }

    pub fn blob(mut self, data: SharedData) -> Self {
        self.blob = Some(data);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Multiplies both dimensions by a common factor. Errors when either
    /// dimension is still unset rather than silently producing an invalid
    /// size.
    pub fn scale(mut self, factor: f32) -> Result<Self, DraftError> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => {
                self.width = Some(w * factor);
                self.height = Some(h * factor);
                Ok(self)
            }
            _ => Err(DraftError::ScaleWithoutDimensions),
        }
    }

    pub fn dimensions(&self) -> (Option<f32>, Option<f32>) {
        (self.width, self.height)
    }

    pub(crate) fn apply(&self, handle: &mut dyn BlockHandle) -> Result<(), DraftError> {
        let blob = self.blob.as_ref().ok_or(DraftError::MissingBlob)?;
        let mut image = handle.append_inline_image(blob)?;
        if let Some(width) = self.width {
            image.set_width(width)?;
        }
        if let Some(height) = self.height {
            image.set_height(height)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_multiplies_both_dimensions() {
        let image = Image::new().width(100.0).height(50.0).scale(2.0).unwrap();
        assert_eq!(image.dimensions(), (Some(200.0), Some(100.0)));
    }

    #[test]
    fn scale_before_dimensions_fails_loudly() {
        let err = Image::new().width(100.0).scale(2.0).unwrap_err();
        assert!(matches!(err, DraftError::ScaleWithoutDimensions));
    }

    #[test]
    fn from_chart_adopts_blob_and_dimensions() {
        let chart = RenderedChart {
            blob: SharedData::new(vec![9, 9]),
            size: quire_types::Size::new(640.0, 480.0),
        };
        let image = Image::from_chart(&chart);
        assert_eq!(image.dimensions(), (Some(640.0), Some(480.0)));
        // Chart-derived images can still be rescaled afterwards.
        let scaled = image.scale(0.5).unwrap();
        assert_eq!(scaled.dimensions(), (Some(320.0), Some(240.0)));
    }
}
