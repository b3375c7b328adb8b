//! Directory tree walking logic
//!
//! `TreeWalker` applies the classification rules while descending and builds a
//! `DirectoryEntry` tree in memory. The tree is small (bounded by depth and
//! the extension filter) and is shared by the text and JSON outputs.

mod entry;
mod walker;

pub use entry::{DirectoryEntry, entry_name};
pub use walker::TreeWalker;
