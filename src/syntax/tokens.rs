//! Token categories for syntax highlighting
//!
//! This module defines the syntactic categories a SwiftFlow token can
//! be classified into and their default visual styles.

use std::fmt;

use super::style::{Color, Style};

/// Syntactic category of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Reserved words (var, if, func, print, ...)
    Keyword,
    /// Built-in type names (int, float, string, ...)
    Type,
    /// Symbolic and word operators (+, ==, and, in, ...)
    Operator,
    /// Integer or simple decimal literals
    Number,
    /// Quote characters and everything between them
    String,
    /// Names that are not reserved words
    Identifier,
    /// Anything else; rendered without styling
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 7] = [
        Category::Keyword,
        Category::Type,
        Category::Operator,
        Category::Number,
        Category::String,
        Category::Identifier,
        Category::Other,
    ];

    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Keyword => Style::fg(Color::BrightCyan).with_bold(),
            Category::Type => Style::fg(Color::Magenta),
            Category::Operator => Style::fg(Color::Yellow),
            Category::Number => Style::fg(Color::Blue),
            Category::String => Style::fg(Color::Green),
            Category::Identifier => Style::fg(Color::White),
            Category::Other => Style::default(),
        }
    }

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::Type => "Type",
            Category::Operator => "Operator",
            Category::Number => "Number",
            Category::String => "String",
            Category::Identifier => "Identifier",
            Category::Other => "Other",
        }
    }

    /// Parse a category from its name (for palette loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Keyword" => Some(Category::Keyword),
            "Type" => Some(Category::Type),
            "Operator" => Some(Category::Operator),
            "Number" => Some(Category::Number),
            "String" => Some(Category::String),
            "Identifier" => Some(Category::Identifier),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        for category in Category::ALL {
            if category == Category::Other {
                assert!(category.default_style().is_default());
            } else {
                assert!(!category.default_style().is_default(), "{category} is unstyled");
            }
        }
    }

    #[test]
    fn test_default_styles_distinct() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.default_style(), b.default_style(), "{a} and {b} look alike");
            }
        }
    }

    #[test]
    fn test_from_name_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(Category::from_name("Comment"), None);
        assert_eq!(Category::from_name("keyword"), None);
        assert_eq!(Category::from_name(""), None);
    }
}
