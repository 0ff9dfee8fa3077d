pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{Margins, Size};

use std::sync::Arc;

/// A reference-counted container for shared, immutable binary data like
/// image blobs.
pub type SharedData = Arc<Vec<u8>>;
