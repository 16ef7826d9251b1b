//! Terminal rendering of the markdown produced by the core display types.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout.
    ///
    /// Header lines keep their leading hashes so the page structure survives
    /// in both modes; other lines go through the termimad skin.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if !self.rich_enabled {
            write!(stdout, "{markdown}")?;
            return Ok(stdout.flush()?);
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(stdout, "\x1b[36m{line}\x1b[0m")?;
            } else {
                writeln!(stdout, "{}", self.skin.inline(line))?;
            }
        }
        Ok(stdout.flush()?)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
