//! Report rendering and output
//!
//! - `line` - one body line (`RenderLine`, `TreeLine`, connectors)
//! - `render` - `TreeRenderer`, header block and `Report`
//! - `console` - stdout printing with optional colors
//! - `writer` - report file output

mod console;
mod line;
mod render;
mod writer;

pub use console::print_report;
pub use line::{Connector, PERMISSION_DENIED, RenderLine, TreeLine};
pub use render::{Report, TreeRenderer, header_lines};
pub use writer::write_report;
