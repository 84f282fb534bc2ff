//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Format markdown for the terminal.
    ///
    /// Header lines keep their hash symbols and are only colored; table
    /// rows and list items go through termimad's inline styling.
    pub fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }

        let mut output = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            if line.starts_with('#') {
                output.push_str(&format!("\x1b[34m{line}\x1b[0m"));
            } else {
                output.push_str(&self.skin.inline(line).to_string());
            }
            output.push('\n');
        }
        output
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        Self::write_stdout(&self.format(markdown))
    }

    /// Print preformatted text (the bordered summary, JSON) untouched
    pub fn render_plain(&self, text: &str) -> Result<()> {
        Self::write_stdout(text)
    }

    fn write_stdout(text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
