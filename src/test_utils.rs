//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests, benchmarks and the `test-utils` feature.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree, removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a small project layout: source files, a key directory, an
    /// excluded cache and files the extension filter drops.
    pub fn sample_project() -> Self {
        let tree = Self::new();
        tree.add_file("README.md", "# Sample");
        tree.add_file("main.py", "print('hi')");
        tree.add_file("data.dat", "binary");
        tree.add_file("config.yaml", "key: value");
        tree.add_file("notebooks/analysis.ipynb", "{}");
        tree.add_file("src/app.py", "");
        tree.add_file("src/util.txt", "");
        tree.add_file("src/__pycache__/app.cpython-312.pyc", "");
        tree.add_file("HELPFILES/guide.pdf", "");
        tree
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
