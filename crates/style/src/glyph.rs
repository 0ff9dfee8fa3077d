//! List marker glyphs and the predefined per-depth cycles.

use serde::{Deserialize, Serialize};

/// A list marker style understood by the target backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum GlyphKind {
    #[default]
    Bullet,
    HollowBullet,
    SquareBullet,
    Number,
    LatinUpper,
    LatinLower,
    RomanUpper,
    RomanLower,
}

/// Filled, hollow, then square bullets as nesting deepens.
pub const BULLET_CYCLE: [GlyphKind; 3] = [
    GlyphKind::Bullet,
    GlyphKind::HollowBullet,
    GlyphKind::SquareBullet,
];

/// Arabic numerals, then lowercase letters, then lowercase roman numerals.
pub const NUMBER_CYCLE: [GlyphKind; 3] = [
    GlyphKind::Number,
    GlyphKind::LatinLower,
    GlyphKind::RomanLower,
];

/// Uppercase letters, then lowercase letters, then lowercase roman numerals.
pub const LATIN_CYCLE: [GlyphKind; 3] = [
    GlyphKind::LatinUpper,
    GlyphKind::LatinLower,
    GlyphKind::RomanLower,
];
