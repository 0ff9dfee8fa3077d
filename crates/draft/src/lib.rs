//! A fluent, code-based API for composing styled rich-text drafts.
//!
//! This crate provides builder structs for assembling a document tree —
//! paragraphs, list items, text runs, rules, and inline images — entirely in
//! memory, then applying it to a [`DocumentBackend`] in one deterministic
//! pass. Builder calls perform no backend I/O; only the terminal
//! [`Draft::apply`] does.
//!
//! ```ignore
//! use quire_draft::{Draft, Paragraph, ListItem, TextRun};
//!
//! let draft = Draft::new()
//!     .paragraph(
//!         Paragraph::new()
//!             .run(TextRun::new("Weekly report").bold())
//!             .spacing_after(6.0),
//!     )
//!     .list_item(ListItem::new().text("first finding").bullet())
//!     .list_item(ListItem::new().text("supporting detail").bullet().nest(1));
//!
//! draft.apply(&mut backend)?;
//! ```
//!
//! Applying walks the tree twice: an apply phase that inserts each block and
//! styles its text ranges, then a finish phase that re-asserts list-item
//! block attributes for backends that only honor them once all sibling
//! blocks exist.

mod draft;
mod element;
mod error;
mod leaf;
mod media;
mod text;

pub use draft::{Block, Draft};
pub use element::{ListItem, Paragraph};
pub use error::DraftError;
pub use media::{Image, Rule};
pub use text::TextRun;

pub use quire_backend::DocumentBackend;
