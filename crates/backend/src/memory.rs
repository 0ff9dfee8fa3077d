//! An in-memory reference backend.
//!
//! Records every insertion and attribute application so tests can assert on
//! the exact sequence of backend effects. The draft tree is single-writer and
//! single-threaded, so handles share their record via `Rc<RefCell<..>>`.

use crate::error::BackendError;
use crate::traits::{BlockHandle, DocumentBackend, ImageHandle};
use quire_style::{BlockStyle, TextStyle};
use quire_types::SharedData;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    ListItem,
}

/// Everything that happened to one inserted block, in order.
#[derive(Debug)]
pub struct BlockRecord {
    pub kind: BlockKind,
    /// Index passed to the insertion call.
    pub index: usize,
    pub text: String,
    /// Block attribute applications, one entry per `set_attributes` call.
    /// The finish pass shows up here as a second entry.
    pub attribute_passes: Vec<BlockStyle>,
    /// `(start, end_inclusive, attrs)` per ranged text styling call.
    pub text_attributes: Vec<(usize, usize, TextStyle)>,
    pub rules: usize,
    pub images: Vec<Rc<RefCell<ImageRecord>>>,
}

#[derive(Debug)]
pub struct ImageRecord {
    pub blob: SharedData,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

pub struct MemoryBackend {
    blocks: Vec<Rc<RefCell<BlockRecord>>>,
    finish_pass: bool,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            finish_pass: true,
        }
    }

    /// A backend without the list-attribute quirk; the finish pass is skipped.
    pub fn without_finish_pass() -> Self {
        Self {
            blocks: Vec::new(),
            finish_pass: false,
        }
    }

    pub fn blocks(&self) -> &[Rc<RefCell<BlockRecord>>] {
        &self.blocks
    }

    fn insert(
        &mut self,
        kind: BlockKind,
        index: usize,
        text: &str,
    ) -> Result<Box<dyn BlockHandle>, BackendError> {
        if index > self.blocks.len() {
            return Err(BackendError::Insertion(format!(
                "index {} out of bounds for {} blocks",
                index,
                self.blocks.len()
            )));
        }
        let record = Rc::new(RefCell::new(BlockRecord {
            kind,
            index,
            text: text.to_string(),
            attribute_passes: Vec::new(),
            text_attributes: Vec::new(),
            rules: 0,
            images: Vec::new(),
        }));
        self.blocks.insert(index, Rc::clone(&record));
        log::trace!("inserted {:?} block at index {}", kind, index);
        Ok(Box::new(MemoryBlockHandle { record }))
    }
}

impl DocumentBackend for MemoryBackend {
    fn insert_paragraph(
        &mut self,
        index: usize,
        text: &str,
    ) -> Result<Box<dyn BlockHandle>, BackendError> {
        self.insert(BlockKind::Paragraph, index, text)
    }

    fn insert_list_item(
        &mut self,
        index: usize,
        text: &str,
    ) -> Result<Box<dyn BlockHandle>, BackendError> {
        self.insert(BlockKind::ListItem, index, text)
    }

    fn child_count(&self) -> usize {
        self.blocks.len()
    }

    fn needs_finish_pass(&self) -> bool {
        self.finish_pass
    }
}

struct MemoryBlockHandle {
    record: Rc<RefCell<BlockRecord>>,
}

impl BlockHandle for MemoryBlockHandle {
    fn set_attributes(&mut self, attrs: &BlockStyle) -> Result<(), BackendError> {
        self.record.borrow_mut().attribute_passes.push(attrs.clone());
        Ok(())
    }

    fn set_text_attributes(
        &mut self,
        start: usize,
        end_inclusive: usize,
        attrs: &TextStyle,
    ) -> Result<(), BackendError> {
        // An inverted range means the caller's range arithmetic is broken;
        // degenerate single-index ranges from empty runs are fine.
        if start > end_inclusive {
            return Err(BackendError::Range {
                start,
                end_inclusive,
            });
        }
        self.record
            .borrow_mut()
            .text_attributes
            .push((start, end_inclusive, attrs.clone()));
        Ok(())
    }

    fn append_horizontal_rule(&mut self) -> Result<(), BackendError> {
        self.record.borrow_mut().rules += 1;
        Ok(())
    }

    fn append_inline_image(
        &mut self,
        blob: &SharedData,
    ) -> Result<Box<dyn ImageHandle>, BackendError> {
        let record = Rc::new(RefCell::new(ImageRecord {
            blob: SharedData::clone(blob),
            width: None,
            height: None,
        }));
        self.record.borrow_mut().images.push(Rc::clone(&record));
        Ok(Box::new(MemoryImageHandle { record }))
    }
}

struct MemoryImageHandle {
    record: Rc<RefCell<ImageRecord>>,
}

impl ImageHandle for MemoryImageHandle {
    fn set_width(&mut self, width: f32) -> Result<(), BackendError> {
        self.record.borrow_mut().width = Some(width);
        Ok(())
    }

    fn set_height(&mut self, height: f32) -> Result<(), BackendError> {
        self.record.borrow_mut().height = Some(height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_insertions_in_order() {
        let mut backend = MemoryBackend::new();
        backend.insert_paragraph(0, "first").unwrap();
        backend.insert_list_item(1, "second").unwrap();

        let blocks = backend.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].borrow().kind, BlockKind::Paragraph);
        assert_eq!(blocks[1].borrow().kind, BlockKind::ListItem);
        assert_eq!(blocks[1].borrow().text, "second");
    }

    #[test]
    fn rejects_out_of_bounds_insertion_index() {
        let mut backend = MemoryBackend::new();
        assert!(matches!(
            backend.insert_paragraph(3, "x"),
            Err(BackendError::Insertion(_))
        ));
    }

    #[test]
    fn rejects_inverted_text_range() {
        let mut backend = MemoryBackend::new();
        let mut handle = backend.insert_paragraph(0, "abc").unwrap();
        let err = handle
            .set_text_attributes(2, 1, &TextStyle::default())
            .unwrap_err();
        assert!(matches!(
            err,
            BackendError::Range {
                start: 2,
                end_inclusive: 1
            }
        ));
    }

    #[test]
    fn degenerate_single_index_range_is_accepted() {
        let mut backend = MemoryBackend::new();
        let mut handle = backend.insert_paragraph(0, "").unwrap();
        handle
            .set_text_attributes(0, 0, &TextStyle::default())
            .unwrap();
        assert_eq!(backend.blocks()[0].borrow().text_attributes.len(), 1);
    }

    #[test]
    fn image_handle_writes_back_dimensions() {
        let mut backend = MemoryBackend::new();
        let mut handle = backend.insert_paragraph(0, "").unwrap();
        let blob = SharedData::new(vec![1, 2, 3]);
        let mut image = handle.append_inline_image(&blob).unwrap();
        image.set_width(320.0).unwrap();
        image.set_height(240.0).unwrap();

        let block = backend.blocks()[0].borrow();
        let record = block.images[0].borrow();
        assert_eq!(record.width, Some(320.0));
        assert_eq!(record.height, Some(240.0));
        assert_eq!(*record.blob, vec![1, 2, 3]);
    }
}
