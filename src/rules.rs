//! Classification rules deciding which directories and files appear in a report.

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Directory names that stop traversal unless overridden.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "__pycache__",
    ".git",
    ".pytest_cache",
    ".ipynb_checkpoints",
    "uv.venv",
    "node_modules",
];

/// Key project directories, always shown and traversed.
pub const DEFAULT_ALWAYS_SHOW_DIRS: &[&str] =
    &["child_envs", "mother_env", "HELPFILES", "notebooks", "scripts"];

/// File extensions (with the leading dot) eligible to appear in the tree.
pub const DEFAULT_INCLUDED_EXTENSIONS: &[&str] = &[
    ".py", ".ipynb", ".md", ".txt", ".csv", ".xlsx", ".json", ".pdf", ".docx", ".bat", ".yml",
    ".yaml",
];

/// The three rule sets used while walking a tree.
///
/// Rules are fixed once a renderer is built; the `with_*` methods exist so
/// callers (tests mostly) can inject their own sets at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRules {
    excluded_dirs: BTreeSet<String>,
    always_show_dirs: BTreeSet<String>,
    included_extensions: BTreeSet<String>,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            excluded_dirs: to_set(DEFAULT_EXCLUDED_DIRS),
            always_show_dirs: to_set(DEFAULT_ALWAYS_SHOW_DIRS),
            included_extensions: to_set(DEFAULT_INCLUDED_EXTENSIONS),
        }
    }
}

impl ClassificationRules {
    pub fn with_excluded_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_always_show_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.always_show_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the included extensions. Each extension carries its leading dot.
    pub fn with_included_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn excluded_dirs(&self) -> impl Iterator<Item = &str> {
        self.excluded_dirs.iter().map(String::as_str)
    }

    pub fn always_show_dirs(&self) -> impl Iterator<Item = &str> {
        self.always_show_dirs.iter().map(String::as_str)
    }

    pub fn included_extensions(&self) -> impl Iterator<Item = &str> {
        self.included_extensions.iter().map(String::as_str)
    }

    /// Check if a directory basename is a key project directory.
    pub fn is_always_shown(&self, name: &str) -> bool {
        self.always_show_dirs.contains(name)
    }

    /// Check if a directory should be displayed and descended into.
    ///
    /// Always-show names win outright. Anything else is hidden when its own
    /// name, or any segment of its path, is an excluded name.
    pub fn should_show_directory(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();

        if self.is_always_shown(&name) {
            return true;
        }
        if self.excluded_dirs.contains(name.as_ref()) {
            return false;
        }

        !path.components().any(|component| match component {
            Component::Normal(segment) => self
                .excluded_dirs
                .contains(segment.to_string_lossy().as_ref()),
            _ => false,
        })
    }

    /// Check if a file's extension is in the included set.
    pub fn includes_file(&self, path: &Path) -> bool {
        file_suffix(path).is_some_and(|suffix| self.included_extensions.contains(&suffix))
    }
}

/// The final extension of a path with its leading dot, e.g. `.py`.
///
/// Dotfiles such as `.bashrc` and names ending in a bare dot have no suffix.
pub fn file_suffix(path: &Path) -> Option<String> {
    path.extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
