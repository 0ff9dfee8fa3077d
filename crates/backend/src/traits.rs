use crate::error::BackendError;
use quire_style::{BlockStyle, TextStyle};
use quire_types::SharedData;

/// A document being edited. Insertion is per block kind; the returned handle
/// addresses the newly created block for the rest of apply/finish.
pub trait DocumentBackend {
    fn insert_paragraph(
        &mut self,
        index: usize,
        text: &str,
    ) -> Result<Box<dyn BlockHandle>, BackendError>;

    fn insert_list_item(
        &mut self,
        index: usize,
        text: &str,
    ) -> Result<Box<dyn BlockHandle>, BackendError>;

    /// Number of blocks currently in the document. New blocks are inserted
    /// at this index, i.e. appended.
    fn child_count(&self) -> usize;

    /// Whether list-item block attributes must be re-applied after all
    /// sibling blocks exist. The known target backend only honors certain
    /// list attributes once its siblings are in place, so this defaults to
    /// true; backends without the quirk opt out.
    fn needs_finish_pass(&self) -> bool {
        true
    }
}

/// A structural unit created by an insertion. Character indices are in
/// Unicode scalar values and `end_inclusive` includes the last styled
/// character.
pub trait BlockHandle {
    fn set_attributes(&mut self, attrs: &BlockStyle) -> Result<(), BackendError>;

    fn set_text_attributes(
        &mut self,
        start: usize,
        end_inclusive: usize,
        attrs: &TextStyle,
    ) -> Result<(), BackendError>;

    fn append_horizontal_rule(&mut self) -> Result<(), BackendError>;

    fn append_inline_image(
        &mut self,
        blob: &SharedData,
    ) -> Result<Box<dyn ImageHandle>, BackendError>;
}

/// An inline image created inside a block.
pub trait ImageHandle {
    fn set_width(&mut self, width: f32) -> Result<(), BackendError>;
    fn set_height(&mut self, height: f32) -> Result<(), BackendError>;
}
