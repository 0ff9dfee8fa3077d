pub mod block;
pub mod glyph;
pub mod text;

pub use block::BlockStyle;
pub use glyph::{GlyphKind, BULLET_CYCLE, LATIN_CYCLE, NUMBER_CYCLE};
pub use text::TextStyle;
