//! One line of the rendered tree body

use std::fmt;

use crate::icons::Icon;

/// Text substituted for the children of a directory that cannot be listed.
pub const PERMISSION_DENIED: &str = "!!! Permission Denied !!!";

const BLANK_SEGMENT: &str = "    ";
const BAR_SEGMENT: &str = "│   ";

/// Branch glyph in front of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `├──`, more siblings follow.
    Middle,
    /// `└──`, last visible sibling.
    Last,
}

impl Connector {
    pub fn new(is_last: bool) -> Self {
        if is_last {
            Connector::Last
        } else {
            Connector::Middle
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Middle => "├──",
            Connector::Last => "└──",
        }
    }

    /// Prefix handed to the children of an entry with this connector.
    pub fn child_prefix(self, prefix: &str) -> String {
        match self {
            Connector::Last => format!("{}{}", prefix, BLANK_SEGMENT),
            Connector::Middle => format!("{}{}", prefix, BAR_SEGMENT),
        }
    }
}

/// A directory or file entry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub prefix: String,
    pub connector: Connector,
    pub icon: Icon,
    pub label: String,
    pub trailing_slash: bool,
}

/// A line of the tree body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeLine {
    Entry(RenderLine),
    /// Stands in for the contents of an unreadable directory.
    PermissionDenied { prefix: String },
}

impl TreeLine {
    pub fn prefix(&self) -> &str {
        match self {
            TreeLine::Entry(line) => &line.prefix,
            TreeLine::PermissionDenied { prefix } => prefix,
        }
    }
}

impl fmt::Display for RenderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.prefix,
            self.connector.glyph(),
            self.icon,
            self.label
        )?;
        if self.trailing_slash {
            f.write_str("/")?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeLine::Entry(line) => fmt::Display::fmt(line, f),
            TreeLine::PermissionDenied { prefix } => write!(f, "{}{}", prefix, PERMISSION_DENIED),
        }
    }
}
