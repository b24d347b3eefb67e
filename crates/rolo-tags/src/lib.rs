//! rolo-tags: Tag-list parsing and the in-memory tag index.
//!
//! Tags are free-text labels attached to contacts, many-to-many. On the
//! wire they travel as a comma-joined string (`"work,family"`); in memory
//! the [`TagIndex`] maps each tag name to the ordered set of ids carrying
//! it. The index is a derived cache, never the source of truth.

pub mod index;
pub mod parse;

pub use index::*;
pub use parse::*;
