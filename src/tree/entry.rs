//! The walked tree, kept in memory so it can be rendered or serialized.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One visible entry of the walked tree.
///
/// Directories carry their visible children, directories first then files,
/// each group in name order. The root sits at depth 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Display label. Usually the basename; a relative path for key
    /// directories surfaced from under a hidden directory.
    pub name: String,
    pub path: PathBuf,
    pub depth: usize,
    pub is_dir: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DirectoryEntry>,
    /// Listing the directory was refused; `children` is empty.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub permission_denied: bool,
}

impl DirectoryEntry {
    pub fn dir(name: impl Into<String>, path: impl Into<PathBuf>, depth: usize) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            depth,
            is_dir: true,
            children: Vec::new(),
            permission_denied: false,
        }
    }

    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>, depth: usize) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            depth,
            is_dir: false,
            children: Vec::new(),
            permission_denied: false,
        }
    }

    /// Basename of the entry on disk (differs from `name` for surfaced directories).
    pub fn basename(&self) -> String {
        entry_name(&self.path)
    }

    /// Depth-first iterator over every descendant, excluding `self`.
    pub fn descendants(&self) -> Box<dyn Iterator<Item = &DirectoryEntry> + '_> {
        Box::new(
            self.children
                .iter()
                .flat_map(|child| std::iter::once(child).chain(child.descendants())),
        )
    }
}

/// Get the name of a path, defaulting to "." for root
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
