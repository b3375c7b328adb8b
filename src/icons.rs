//! Icon glyphs for directories and files, and the legend printed in the header.

use std::fmt;

/// Glyph attached to every entry line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    KeyDirectory,
    Directory,
    Python,
    Notebook,
    Markdown,
    Spreadsheet,
    Pdf,
    WordDocument,
    Batch,
    Config,
    /// Fallback for included extensions without a dedicated glyph.
    Document,
}

/// Extension → icon lookup. Extensions missing here fall back to [`Icon::Document`].
const FILE_ICONS: &[(&str, Icon)] = &[
    (".py", Icon::Python),
    (".ipynb", Icon::Notebook),
    (".md", Icon::Markdown),
    (".csv", Icon::Spreadsheet),
    (".xlsx", Icon::Spreadsheet),
    (".pdf", Icon::Pdf),
    (".docx", Icon::WordDocument),
    (".bat", Icon::Batch),
    (".json", Icon::Config),
    (".yml", Icon::Config),
    (".yaml", Icon::Config),
];

/// Legend rows in display order.
pub const LEGEND: &[(Icon, &str)] = &[
    (Icon::KeyDirectory, "Key Project Directory"),
    (Icon::Directory, "Regular Directory"),
    (Icon::Python, "Python Source File"),
    (Icon::Notebook, "Jupyter Notebook"),
    (Icon::Markdown, "Markdown File"),
    (Icon::Spreadsheet, "Excel or CSV File"),
    (Icon::Pdf, "PDF File"),
    (Icon::WordDocument, "Word Document"),
    (Icon::Batch, "Batch File"),
    (Icon::Config, "JSON or YAML File"),
];

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::KeyDirectory => "📂",
            Icon::Directory => "📁",
            Icon::Python => "🐍",
            Icon::Notebook => "📓",
            Icon::Markdown => "📝",
            Icon::Spreadsheet => "📊",
            Icon::Pdf | Icon::Document => "📄",
            Icon::WordDocument => "📃",
            Icon::Batch => "⚙️",
            Icon::Config => "🔧",
        }
    }

    /// Icon for a file suffix such as `.py` (leading dot included).
    pub fn for_suffix(suffix: &str) -> Icon {
        FILE_ICONS
            .iter()
            .find(|(ext, _)| *ext == suffix)
            .map(|&(_, icon)| icon)
            .unwrap_or(Icon::Document)
    }

    pub fn for_directory(always_shown: bool) -> Icon {
        if always_shown {
            Icon::KeyDirectory
        } else {
            Icon::Directory
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Legend lines formatted as `{glyph} - {meaning}`.
pub fn legend_lines() -> impl Iterator<Item = String> {
    LEGEND
        .iter()
        .map(|(icon, meaning)| format!("{} - {}", icon, meaning))
}
