//! Terminal rendering for markdown output
//!
//! Rich mode styles the markdown with termimad; plain mode prints it as is,
//! which is what scripts and `--no-color` get.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line_color(line) {
                Some(color) => println!("{color}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Lines printed verbatim in a fixed color instead of going through the
/// skin. Headers keep their hash marks.
fn line_color(line: &str) -> Option<&'static str> {
    if line.starts_with("## ") {
        Some(CYAN)
    } else if line.starts_with('#') {
        Some(BLUE)
    } else if line.starts_with("Success:") {
        Some(GREEN)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Listings\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_line_colors() {
        assert_eq!(line_color("# Quote for Tea Garden Cottage"), Some(BLUE));
        assert_eq!(line_color("## Price breakdown"), Some(CYAN));
        assert_eq!(line_color("Success: Imported 4 listings"), Some(GREEN));
        assert_eq!(line_color("- **Total**: BDT 450"), None);
    }
}
