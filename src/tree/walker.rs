//! TreeWalker - depth-bounded walk that classifies and sorts entries

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TreeError;
use crate::rules::ClassificationRules;

use super::entry::{DirectoryEntry, entry_name};

/// Walks a directory tree, keeping only entries the rules allow.
pub struct TreeWalker<'a> {
    rules: &'a ClassificationRules,
    max_depth: usize,
}

impl<'a> TreeWalker<'a> {
    pub fn new(rules: &'a ClassificationRules, max_depth: usize) -> Self {
        Self { rules, max_depth }
    }

    /// Walk from `root`, which must be an existing directory.
    ///
    /// The root is depth 0. A directory at depth `d` is listed only while
    /// `d <= max_depth`; deeper directories still appear, without children.
    pub fn walk(&self, root: &Path) -> Result<DirectoryEntry, TreeError> {
        let metadata = fs::metadata(root).map_err(|e| TreeError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut tree = DirectoryEntry::dir(entry_name(root), root, 0);
        self.fill(&mut tree)?;
        Ok(tree)
    }

    fn fill(&self, dir: &mut DirectoryEntry) -> Result<(), TreeError> {
        if dir.depth > self.max_depth {
            return Ok(());
        }

        let listing = match read_sorted(&dir.path) {
            Ok(paths) => paths,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                warn!(path = %dir.path.display(), "permission denied, skipping contents");
                dir.permission_denied = true;
                return Ok(());
            }
            Err(e) => return Err(TreeError::io(&dir.path, e)),
        };

        let child_depth = dir.depth + 1;
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for path in listing {
            let name = entry_name(&path);
            if path.is_dir() {
                if self.rules.should_show_directory(&path) {
                    dirs.push(DirectoryEntry::dir(name, path, child_depth));
                } else {
                    debug!(path = %path.display(), "hidden directory");
                    self.surface_key_dirs(&path, &name, child_depth, &mut dirs);
                }
            } else if path.is_file() && self.rules.includes_file(&path) {
                files.push(DirectoryEntry::file(name, path, child_depth));
            } else {
                debug!(path = %path.display(), "omitted entry");
            }
        }

        for child in &mut dirs {
            self.fill(child)?;
        }

        dirs.extend(files);
        dir.children = dirs;
        Ok(())
    }

    /// Look inside a hidden directory for always-show descendants.
    ///
    /// Each one found is pushed with a label relative to the visible parent
    /// (`node_modules/scripts`). Read errors here are skipped: nothing under a
    /// hidden directory is displayed unless it is surfaced.
    fn surface_key_dirs(
        &self,
        hidden: &Path,
        label: &str,
        depth: usize,
        out: &mut Vec<DirectoryEntry>,
    ) {
        if depth > self.max_depth {
            return;
        }

        let listing = match read_sorted(hidden) {
            Ok(paths) => paths,
            Err(e) => {
                debug!(path = %hidden.display(), error = %e, "skipping hidden directory");
                return;
            }
        };

        for path in listing.into_iter().filter(|p| p.is_dir()) {
            let nested = format!("{}/{}", label, entry_name(&path));
            if self.rules.should_show_directory(&path) {
                out.push(DirectoryEntry::dir(nested, path, depth + 1));
            } else {
                self.surface_key_dirs(&path, &nested, depth + 1, out);
            }
        }
    }
}

/// Read a directory's entries sorted by file name.
fn read_sorted(path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries.into_iter().map(|entry| entry.path()).collect())
}
