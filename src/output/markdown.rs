//! Markdown rendering
//!
//! The document layout is fixed: title, generation timestamp, the tree in a
//! fenced block, then a statistics section.

use chrono::NaiveDateTime;

use crate::icons::FOLDER_ICON;
use crate::tree::TreeDocument;

/// Timestamp layout used in the generated document (day/month/year hour:minute).
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the full document for `project_name`.
pub fn render_markdown(
    project_name: &str,
    doc: &TreeDocument,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();

    push_line(&mut out, &format!("# {} {}", FOLDER_ICON, project_name));
    push_line(&mut out, "");
    push_line(&mut out, "> Project structure documentation");
    push_line(
        &mut out,
        &format!("> *Generated automatically on {}*", format_timestamp(generated_at)),
    );
    push_line(&mut out, "");
    push_line(&mut out, "---");
    push_line(&mut out, "");

    push_line(&mut out, "## 🗂️ Project Structure");
    push_line(&mut out, "");
    push_line(&mut out, "```");
    for line in doc.lines() {
        push_line(&mut out, &line.to_string());
    }
    push_line(&mut out, "```");
    push_line(&mut out, "");
    push_line(&mut out, "---");
    push_line(&mut out, "");

    push_line(&mut out, "## 📊 Statistics");
    push_line(&mut out, "");
    push_line(&mut out, &format!("- **Total items:** {}", doc.total()));
    push_line(&mut out, &format!("- **Folders:** {}", doc.folders()));
    push_line(&mut out, &format!("- **Files:** {}", doc.files()));

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
