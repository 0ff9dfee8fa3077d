use crate::element::{ListItem, Paragraph};
use crate::error::DraftError;
use quire_backend::DocumentBackend;

/// A top-level block of a draft.
pub enum Block {
    Paragraph(Paragraph),
    ListItem(ListItem),
}

impl Block {
    fn apply(&mut self, backend: &mut dyn DocumentBackend) -> Result<(), DraftError> {
        match self {
            Block::Paragraph(p) => p.element.apply(backend),
            Block::ListItem(li) => li.element.apply(backend),
        }
    }

    /// Second-phase pass. Paragraphs need nothing; list items re-assert
    /// their block attributes because the target backend only honors some of
    /// them once every sibling block has been inserted.
    fn finish(&mut self) -> Result<(), DraftError> {
        match self {
            Block::Paragraph(_) => Ok(()),
            Block::ListItem(li) => li.element.reapply_attributes(),
        }
    }
}

/// The root of a draft tree. Carries no style of its own and is never
/// assigned a character range; it only orders its blocks and drives the
/// apply/finish protocol.
#[derive(Default)]
pub struct Draft {
    children: Vec<Block>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.children.push(Block::Paragraph(paragraph));
        self
    }

    pub fn list_item(mut self, item: ListItem) -> Self {
        self.children.push(Block::ListItem(item));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Applies the whole tree to the backend in one pass, then runs the
    /// finish pass. Consumes the draft: the tree is single-shot and the
    /// backend is its only side effect.
    ///
    /// Blocks are processed strictly in insertion order — each range
    /// computation depends on the previous one. The first error aborts the
    /// remaining blocks and propagates unmodified; the backend keeps
    /// whatever partial state preceded the failure.
    pub fn apply(mut self, backend: &mut dyn DocumentBackend) -> Result<(), DraftError> {
        log::debug!("applying draft with {} blocks", self.children.len());
        for block in &mut self.children {
            block.apply(backend)?;
        }
        if backend.needs_finish_pass() {
            log::debug!("running finish pass");
            for block in &mut self.children {
                block.finish()?;
            }
        }
        Ok(())
    }
}
