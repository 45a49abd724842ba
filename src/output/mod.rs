//! Document rendering and console reporting
//!
//! - `markdown` - renders a `TreeDocument` into the generated Markdown file
//! - `console` - progress messages printed while generating

mod console;
mod markdown;

pub use console::ConsoleReporter;
pub use markdown::{TIMESTAMP_FORMAT, format_timestamp, render_markdown};
