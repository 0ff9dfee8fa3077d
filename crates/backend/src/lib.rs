//! Abstractions over the rich-text document backend.
//!
//! The draft tree never talks to a concrete document API directly; it drives
//! the traits defined here. [`MemoryBackend`] is an in-memory implementation
//! that records every structural insertion and attribute application, used as
//! the reference backend in tests.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::BackendError;
pub use memory::{BlockKind, BlockRecord, ImageRecord, MemoryBackend};
pub use traits::{BlockHandle, DocumentBackend, ImageHandle};
