//! Style types for terminal rendering
//!
//! A `Style` is a small, copyable description of how a token is
//! painted. Conversion to ANSI escape sequences goes through
//! crossterm so the same palette works on every platform it supports.

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};

use crate::error::{HighlightError, Result};

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color name such as `cyan` or `bright-cyan`
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "grey" | "gray" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    /// Map onto crossterm's color names (SGR 30-37 are its `Dark*` variants)
    fn to_term(self) -> Option<TermColor> {
        match self {
            Color::Default => None,
            Color::Black => Some(TermColor::Black),
            Color::Red => Some(TermColor::DarkRed),
            Color::Green => Some(TermColor::DarkGreen),
            Color::Yellow => Some(TermColor::DarkYellow),
            Color::Blue => Some(TermColor::DarkBlue),
            Color::Magenta => Some(TermColor::DarkMagenta),
            Color::Cyan => Some(TermColor::DarkCyan),
            Color::White => Some(TermColor::Grey),
            Color::BrightBlack => Some(TermColor::DarkGrey),
            Color::BrightRed => Some(TermColor::Red),
            Color::BrightGreen => Some(TermColor::Green),
            Color::BrightYellow => Some(TermColor::Yellow),
            Color::BrightBlue => Some(TermColor::Blue),
            Color::BrightMagenta => Some(TermColor::Magenta),
            Color::BrightCyan => Some(TermColor::Cyan),
            Color::BrightWhite => Some(TermColor::White),
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a palette entry such as `"bright-cyan bold"`
    ///
    /// Words are either a color name or one of `bold`, `italic`,
    /// `underline`. The last color named wins.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut style = Style::default();
        for word in spec.split_whitespace() {
            match word.to_ascii_lowercase().as_str() {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                other => {
                    style.fg = Color::from_name(other)
                        .ok_or_else(|| HighlightError::UnknownColor(word.to_string()))?;
                }
            }
        }
        Ok(style)
    }

    /// Build the crossterm style for this description
    fn to_content_style(self) -> ContentStyle {
        let mut content = ContentStyle::new();
        content.foreground_color = self.fg.to_term();
        if self.bold {
            content.attributes.set(Attribute::Bold);
        }
        if self.italic {
            content.attributes.set(Attribute::Italic);
        }
        if self.underline {
            content.attributes.set(Attribute::Underlined);
        }
        content
    }

    /// Render `text` with ANSI escapes; the default style passes text through
    pub fn paint(&self, text: &str) -> String {
        if self.is_default() {
            return text.to_string();
        }
        self.to_content_style().apply(text).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bold().with_underline();
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        assert!(style.underline);
        assert!(!style.italic);
        assert!(!style.is_default());
    }

    #[test]
    fn test_parse_spec() {
        let style = Style::parse("bright-cyan bold").unwrap();
        assert_eq!(style, Style::fg(Color::BrightCyan).with_bold());

        let style = Style::parse("  Green  ").unwrap();
        assert_eq!(style, Style::fg(Color::Green));

        assert!(Style::parse("").unwrap().is_default());
    }

    #[test]
    fn test_parse_unknown_color() {
        let err = Style::parse("chartreuse").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownColor(name) if name == "chartreuse"));
    }

    #[test]
    fn test_paint_default_is_passthrough() {
        assert_eq!(Style::default().paint("x"), "x");
    }

    #[test]
    fn test_paint_wraps_in_escapes() {
        let painted = Style::fg(Color::Green).paint("hello");
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains("hello"));
        assert_ne!(painted, "hello");
    }
}
