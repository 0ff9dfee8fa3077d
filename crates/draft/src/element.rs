//! Block elements: the shared apply machinery plus the `Paragraph` and
//! `ListItem` builders.

use crate::error::DraftError;
use crate::leaf::Leaf;
use crate::media::{Image, Rule};
use crate::text::TextRun;
use quire_backend::{BlockHandle, DocumentBackend};
use quire_style::{BlockStyle, GlyphKind, BULLET_CYCLE, LATIN_CYCLE, NUMBER_CYCLE};

const DEFAULT_SPACING_BEFORE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    Paragraph,
    ListItem,
}

/// Shared body of a paragraph or list item: block style, ordered leaves, and
/// the backend handle created during apply.
pub(crate) struct Element {
    kind: ElementKind,
    pub(crate) style: BlockStyle,
    pub(crate) children: Vec<Leaf>,
    handle: Option<Box<dyn BlockHandle>>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            style: BlockStyle {
                spacing_before: Some(DEFAULT_SPACING_BEFORE),
                ..Default::default()
            },
            children: Vec::new(),
            handle: None,
        }
    }

    pub(crate) fn push(&mut self, leaf: Leaf) {
        self.children.push(leaf);
    }

    fn concatenated_text(&self) -> String {
        self.children.iter().map(Leaf::text).collect()
    }

    /// Inserts the block, applies its style, then walks the leaves assigning
    /// contiguous half-open ranges over the concatenated text. Offsets are in
    /// Unicode scalar values, matching the backend's character-indexed text
    /// view.
    pub(crate) fn apply(&mut self, backend: &mut dyn DocumentBackend) -> Result<(), DraftError> {
        let text = self.concatenated_text();
        let index = backend.child_count();
        log::debug!(
            "applying {:?} at index {}: {} leaves, {} chars",
            self.kind,
            index,
            self.children.len(),
            text.chars().count()
        );

        let mut handle = match self.kind {
            ElementKind::Paragraph => backend.insert_paragraph(index, &text)?,
            ElementKind::ListItem => backend.insert_list_item(index, &text)?,
        };
        handle.set_attributes(&self.style)?;

        let mut start = 0;
        for leaf in &self.children {
            let end = start + leaf.text().chars().count();
            log::trace!("leaf range [{}, {})", start, end);
            leaf.apply(handle.as_mut(), start, end)?;
            start = end;
        }

        // Created exactly once; the finish pass reuses it and never re-inserts.
        self.handle = Some(handle);
        Ok(())
    }

    /// Re-applies the block style on the stored handle. Only meaningful after
    /// a successful apply.
    pub(crate) fn reapply_attributes(&mut self) -> Result<(), DraftError> {
        if let Some(handle) = self.handle.as_mut() {
            handle.set_attributes(&self.style)?;
        }
        Ok(())
    }
}

/// Builder for a paragraph block.
pub struct Paragraph {
    pub(crate) element: Element,
}

impl Paragraph {
    pub fn new() -> Self {
        Self {
            element: Element::new(ElementKind::Paragraph),
        }
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a list-item block with a nesting depth and a per-depth glyph
/// table.
pub struct ListItem {
    pub(crate) element: Element,
    level: usize,
    glyphs: Vec<GlyphKind>,
}

impl ListItem {
    pub fn new() -> Self {
        Self {
            element: Element::new(ElementKind::ListItem),
            level: 0,
            glyphs: BULLET_CYCLE.to_vec(),
        }
    }

    /// Sets the nesting depth and the marker glyph for that depth. A level
    /// past the end of the glyph table leaves the glyph unset; the table is
    /// never wrapped and never panicked over.
    pub fn nest(mut self, level: usize) -> Self {
        self.level = level;
        self.element.style.nesting_level = Some(level);
        self.element.style.glyph = self.glyphs.get(level).copied();
        self
    }

    /// Replaces the glyph table and re-selects the marker at the *current*
    /// depth, so switching glyph family preserves nesting.
    pub fn with_glyphs(mut self, glyphs: &[GlyphKind]) -> Self {
        self.glyphs = glyphs.to_vec();
        let level = self.level;
        self.nest(level)
    }

    pub fn bullet(self) -> Self {
        self.with_glyphs(&BULLET_CYCLE)
    }

    pub fn numbered(self) -> Self {
        self.with_glyphs(&NUMBER_CYCLE)
    }

    pub fn latin(self) -> Self {
        self.with_glyphs(&LATIN_CYCLE)
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn glyph(&self) -> Option<GlyphKind> {
        self.element.style.glyph
    }
}

impl Default for ListItem {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_block_content {
    ($($name:ident),+) => {$(
        impl $name {
            /// Appends a plain text run.
            pub fn text(self, content: &str) -> Self {
                self.run(TextRun::new(content))
            }

            /// Appends a styled text run.
            pub fn run(mut self, run: TextRun) -> Self {
                self.element.push(Leaf::Text(run));
                self
            }

            /// Appends a horizontal rule.
            pub fn rule(mut self) -> Self {
                self.element.push(Leaf::Rule(Rule::new()));
                self
            }

            /// Appends an inline image.
            pub fn image(mut self, image: Image) -> Self {
                self.element.push(Leaf::Image(image));
                self
            }

            pub fn spacing_before(mut self, points: f32) -> Self {
                self.element.style.spacing_before = Some(points);
                self
            }

            pub fn spacing_after(mut self, points: f32) -> Self {
                self.element.style.spacing_after = Some(points);
                self
            }
        }
    )+};
}

impl_block_content!(Paragraph, ListItem);

#[cfg(test)]
mod tests {
    use super::*;
    use quire_backend::MemoryBackend;
    use quire_style::GlyphKind;

    #[test]
    fn ranges_partition_the_concatenated_text() {
        let mut backend = MemoryBackend::new();
        let mut paragraph = Paragraph::new()
            .run(TextRun::new("one ").bold())
            .rule()
            .run(TextRun::new("two").italic());
        paragraph.element.apply(&mut backend).unwrap();

        let block = backend.blocks()[0].borrow();
        assert_eq!(block.text, "one two");
        // Bold over "one " -> [0,3]; the rule sits at the zero-width seam;
        // italic over "two" -> [4,6].
        assert_eq!(block.text_attributes[0], (0, 3, TextRun::new("").bold().style().clone()));
        assert_eq!(block.text_attributes[1].0, 4);
        assert_eq!(block.text_attributes[1].1, 6);
        assert_eq!(block.rules, 1);
    }

    #[test]
    fn offsets_count_chars_not_bytes() {
        let mut backend = MemoryBackend::new();
        let mut paragraph = Paragraph::new()
            .run(TextRun::new("héllo").bold())
            .run(TextRun::new("!").italic());
        paragraph.element.apply(&mut backend).unwrap();

        let block = backend.blocks()[0].borrow();
        assert_eq!(block.text_attributes[0].1, 4);
        assert_eq!(block.text_attributes[1].0, 5);
    }

    #[test]
    fn spacing_before_defaults_to_ten_points() {
        let paragraph = Paragraph::new();
        assert_eq!(paragraph.element.style.spacing_before, Some(10.0));
    }

    #[test]
    fn nest_within_bounds_picks_the_cycle_glyph() {
        let item = ListItem::new().latin().nest(1);
        assert_eq!(item.glyph(), Some(GlyphKind::LatinLower));
        assert_eq!(item.element.style.nesting_level, Some(1));
    }

    #[test]
    fn nest_past_the_table_leaves_the_glyph_unset() {
        let item = ListItem::new()
            .with_glyphs(&[GlyphKind::Bullet, GlyphKind::Number])
            .nest(3);
        assert_eq!(item.glyph(), None);
        assert_eq!(item.element.style.nesting_level, Some(3));
    }

    #[test]
    fn switching_glyph_family_preserves_depth() {
        let item = ListItem::new().nest(2).numbered();
        assert_eq!(item.level(), 2);
        assert_eq!(item.glyph(), Some(GlyphKind::RomanLower));
    }
}
