//! Coloured status lines for the terminal

use owo_colors::{OwoColorize, colors::css};

/// How a line of output should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Something changed (green)
    Success,
    /// Input was not understood (amber)
    Warning,
    /// Plain listing output (blue)
    Info,
    /// Nothing happened (dimmed)
    Muted,
}

/// Applies a [`Tone`] to text, or leaves it alone when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colours output only if stdout supports it.
    pub fn detect() -> Self {
        Self::new(supports_color::on(supports_color::Stream::Stdout).is_some())
    }

    pub fn paint(self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match tone {
            Tone::Success => text.fg::<css::Green>().to_string(),
            Tone::Warning => text.fg::<css::Orange>().to_string(),
            Tone::Info => text.fg::<css::LightBlue>().to_string(),
            Tone::Muted => text.dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_painter_leaves_text_alone() {
        assert_eq!(Painter::new(false).paint("Library is empty.", Tone::Muted), "Library is empty.");
    }

    #[test]
    fn enabled_painter_wraps_text_in_escapes() {
        let painted = Painter::new(true).paint("Book added", Tone::Success);
        assert!(painted.starts_with('\u{1b}'));
        assert!(painted.contains("Book added"));
    }
}
