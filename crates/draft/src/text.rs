use crate::error::DraftError;
use quire_backend::BlockHandle;
use quire_style::TextStyle;
use quire_types::Color;

const MONO_FONT_FAMILY: &str = "Courier New";
const MONO_COLOR: Color = Color::gray(102);
const LINK_COLOR: Color = Color::rgb(0x11, 0x55, 0xcc);

/// A run of literal text with character-level styling.
///
/// The text is fixed at construction; decorators mutate only the style and
/// return the run for further chaining.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRun {
    text: String,
    style: TextStyle,
}

impl TextRun {
    pub fn new(content: &str) -> Self {
        Self {
            text: content.to_string(),
            style: TextStyle::default(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.style.italic = Some(true);
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.style.strikethrough = Some(true);
        self
    }

    /// Monospace face paired with a muted color.
    pub fn mono(mut self) -> Self {
        self.style.font_family = Some(MONO_FONT_FAMILY.to_string());
        self.style.color = Some(MONO_COLOR);
        self
    }

    /// Link target paired with the standard link color.
    pub fn link(mut self, url: &str) -> Self {
        self.style.link_url = Some(url.to_string());
        self.style.color = Some(LINK_COLOR);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Styles the half-open range `[start, end)` of the owning block's text.
    /// The backend range is inclusive of its last character, so this styles
    /// `[start, max(start, end - 1)]`; the max guard keeps empty runs from
    /// producing an inverted range.
    pub(crate) fn apply(
        &self,
        handle: &mut dyn BlockHandle,
        start: usize,
        end: usize,
    ) -> Result<(), DraftError> {
        let end_inclusive = end.saturating_sub(1).max(start);
        handle.set_text_attributes(start, end_inclusive, &self.style)?;
        Ok(())
    }
}
