//! TreeRenderer - turns a walked tree into the header and tree body lines

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::TreeError;
use crate::icons::{Icon, legend_lines};
use crate::rules::{ClassificationRules, file_suffix};
use crate::tree::{DirectoryEntry, TreeWalker};

use super::line::{Connector, RenderLine, TreeLine};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const RULE_WIDTH: usize = 80;

/// A rendered report: header block, tree body and the tree it came from.
#[derive(Debug, Clone)]
pub struct Report {
    pub header: Vec<String>,
    pub body: Vec<TreeLine>,
    pub tree: DirectoryEntry,
}

impl Report {
    /// Header followed by body, one string per line.
    pub fn lines(&self) -> Vec<String> {
        self.header
            .iter()
            .cloned()
            .chain(self.body.iter().map(ToString::to_string))
            .collect()
    }

    /// The full report joined with newlines.
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    /// The walked tree as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(&self.tree)?)
    }
}

/// Renders icon-annotated project trees with a fixed set of classification rules.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    rules: ClassificationRules,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ClassificationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ClassificationRules {
        &self.rules
    }

    /// Render `root` down to `max_depth`, stamped with the current local time.
    pub fn render(&self, root: &Path, max_depth: usize) -> Result<Vec<String>, TreeError> {
        Ok(self.report(root, max_depth)?.lines())
    }

    /// Like [`render`](Self::render) with a fixed generation time.
    pub fn render_at(
        &self,
        root: &Path,
        max_depth: usize,
        generated: NaiveDateTime,
    ) -> Result<Vec<String>, TreeError> {
        Ok(self.report_at(root, max_depth, generated)?.lines())
    }

    pub fn report(&self, root: &Path, max_depth: usize) -> Result<Report, TreeError> {
        self.report_at(root, max_depth, Local::now().naive_local())
    }

    pub fn report_at(
        &self,
        root: &Path,
        max_depth: usize,
        generated: NaiveDateTime,
    ) -> Result<Report, TreeError> {
        let tree = self.walk(root, max_depth)?;
        Ok(Report {
            header: header_lines(root, generated),
            body: self.body(&tree),
            tree,
        })
    }

    pub fn walk(&self, root: &Path, max_depth: usize) -> Result<DirectoryEntry, TreeError> {
        TreeWalker::new(&self.rules, max_depth).walk(root)
    }

    /// Body lines for a walked tree. The root itself has no line.
    pub fn body(&self, tree: &DirectoryEntry) -> Vec<TreeLine> {
        let mut lines = Vec::new();
        self.push_children(tree, "", &mut lines);
        lines
    }

    fn push_children(&self, dir: &DirectoryEntry, prefix: &str, lines: &mut Vec<TreeLine>) {
        if dir.permission_denied {
            lines.push(TreeLine::PermissionDenied {
                prefix: prefix.to_string(),
            });
            return;
        }

        // Children hold directories then files, so the last index spans both groups.
        let last = dir.children.len().saturating_sub(1);
        for (i, child) in dir.children.iter().enumerate() {
            let connector = Connector::new(i == last);
            lines.push(TreeLine::Entry(RenderLine {
                prefix: prefix.to_string(),
                connector,
                icon: self.icon_for(child),
                label: child.name.clone(),
                trailing_slash: child.is_dir,
            }));
            if child.is_dir {
                self.push_children(child, &connector.child_prefix(prefix), lines);
            }
        }
    }

    fn icon_for(&self, entry: &DirectoryEntry) -> Icon {
        if entry.is_dir {
            Icon::for_directory(self.rules.is_always_shown(&entry.basename()))
        } else {
            file_suffix(&entry.path)
                .map(|suffix| Icon::for_suffix(&suffix))
                .unwrap_or(Icon::Document)
        }
    }
}

/// The fixed header and legend block.
pub fn header_lines(root: &Path, generated: NaiveDateTime) -> Vec<String> {
    let mut lines = vec![
        format!(
            "JPNB-DYAD Project Tree Generated on {}",
            generated.format(TIMESTAMP_FORMAT)
        ),
        format!("Root: {}", absolute_root(root).display()),
        "(c) 2024 Hans Hendrickx - MIT License".to_string(),
        "In cooperation with v0 AI Assistant".to_string(),
        String::new(),
        "Project Structure Legend:".to_string(),
    ];
    lines.extend(legend_lines());
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(String::new());
    lines
}

/// Absolute form of the root without resolving symlinks.
fn absolute_root(root: &Path) -> PathBuf {
    std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf())
}
