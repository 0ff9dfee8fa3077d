//! Block-level styling applied to a whole paragraph or list item.

use crate::glyph::GlyphKind;
use serde::{Deserialize, Serialize};

/// Attributes for a block element. Applied wholesale to the backend handle
/// right after insertion; list items re-apply theirs during the finish pass.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_before: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_after: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<GlyphKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nesting_level: Option<usize>,
}
