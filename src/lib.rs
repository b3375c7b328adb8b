//! dyad-tree - icon-annotated project tree reports
//!
//! Walks a directory down to a maximum depth, keeps directories and files
//! allowed by a fixed set of classification rules, and renders them as a
//! text tree under a header and icon legend.

pub mod error;
pub mod icons;
pub mod output;
pub mod rules;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use icons::Icon;
pub use output::{
    Connector, RenderLine, Report, TreeLine, TreeRenderer, print_report, write_report,
};
pub use rules::ClassificationRules;
pub use tree::{DirectoryEntry, TreeWalker};
