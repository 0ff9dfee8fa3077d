use crate::error::DraftError;
use crate::media::{Image, Rule};
use crate::text::TextRun;
use quire_backend::BlockHandle;

/// A non-subdivided child of a block element. The interface is total: every
/// kind reports its text (possibly empty) and applies itself to a range, so
/// the walk in `Element::apply` needs no capability probing.
#[derive(Debug, Clone)]
pub enum Leaf {
    Text(TextRun),
    Rule(Rule),
    Image(Image),
}

impl Leaf {
    /// The text this leaf contributes to its block. Rules and images
    /// contribute nothing and therefore never advance the running offset.
    pub fn text(&self) -> &str {
        match self {
            Leaf::Text(run) => run.text(),
            Leaf::Rule(_) | Leaf::Image(_) => "",
        }
    }

    /// Applies the leaf to its assigned half-open range `[start, end)`.
    /// Zero-width ranges (start == end) are valid and must succeed.
    pub(crate) fn apply(
        &self,
        handle: &mut dyn BlockHandle,
        start: usize,
        end: usize,
    ) -> Result<(), DraftError> {
        match self {
            Leaf::Text(run) => run.apply(handle, start, end),
            Leaf::Rule(rule) => rule.apply(handle),
            Leaf::Image(image) => image.apply(handle),
        }
    }
}
