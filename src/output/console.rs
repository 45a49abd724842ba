//! Progress messages printed while generating

use std::io;
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const RULE_WIDTH: usize = 70;

/// Writes progress to a terminal stream. Nothing here is part of the
/// generated document.
pub struct ConsoleReporter<W: WriteColor> {
    out: W,
}

impl ConsoleReporter<StandardStream> {
    /// Reporter on stdout, colored when `use_color` is set.
    pub fn stdout(use_color: bool) -> Self {
        let color_choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }

    fn bold_line(&mut self, color: Option<Color>, text: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true).set_fg(color);
        self.out.set_color(&spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn start(&mut self, project_name: &str, root: &Path) -> io::Result<()> {
        self.rule()?;
        self.bold_line(None, "  📁 PROJECT TREE GENERATOR")?;
        self.rule()?;
        writeln!(self.out, "Project: {}", project_name)?;
        writeln!(self.out, "Path: {}", root.display())?;
        writeln!(self.out)
    }

    pub fn scanning(&mut self) -> io::Result<()> {
        writeln!(self.out, "🔍 Scanning project structure...")
    }

    pub fn found(&mut self, items: usize) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        write!(self.out, "   ")?;
        self.out.set_color(&spec)?;
        write!(self.out, "✅ {} items found", items)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn finished(&mut self, output_path: &Path, line_count: usize) -> io::Result<()> {
        let file_name = output_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        writeln!(self.out)?;
        self.rule()?;
        self.bold_line(
            Some(Color::Green),
            &format!("✅ {} generated successfully!", file_name),
        )?;
        self.rule()?;
        writeln!(self.out, "📝 File: {}", output_path.display())?;
        writeln!(self.out, "📏 Lines: {}", line_count)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
