//! Highlighter
//!
//! Coordinates tokenizing, classification and styling of a source
//! string. Each call is self-contained: string-tracking state starts
//! fresh and never leaks into the next call.

use std::collections::HashMap;

use log::{debug, trace, warn};

use super::language::Language;
use super::rules::StringState;
use super::style::Style;
use super::tokenizer::{Tokenizer, WordTokenizer};
use super::tokens::Category;
use crate::error::{HighlightError, Result};

/// Renders token text for display in a given category
pub trait Styler: Send + Sync {
    fn style(&self, text: &str, category: Category) -> String;
}

/// Category to style mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: HashMap<Category, Style>,
}

impl Palette {
    /// Style used for a category
    pub fn get(&self, category: Category) -> Style {
        if category == Category::Other {
            return Style::default();
        }
        self.styles
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_style())
    }

    /// Override the style of one category
    ///
    /// `Other` always renders plain and cannot be overridden.
    pub fn set(&mut self, category: Category, style: Style) -> Result<()> {
        if category == Category::Other {
            return Err(HighlightError::Message(
                "the Other category cannot be styled".to_string(),
            ));
        }
        self.styles.insert(category, style);
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: Category::ALL
                .iter()
                .map(|&category| (category, category.default_style()))
                .collect(),
        }
    }
}

/// ANSI terminal styler
#[derive(Debug, Clone, Default)]
pub struct AnsiStyler {
    pub palette: Palette,
}

impl AnsiStyler {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Styler for AnsiStyler {
    fn style(&self, text: &str, category: Category) -> String {
        self.palette.get(category).paint(text)
    }
}

/// Styler that leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn style(&self, text: &str, _category: Category) -> String {
        text.to_string()
    }
}

/// A token together with the category it was assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub text: String,
    pub category: Category,
}

/// Tokenizes, classifies and styles source text
pub struct Highlighter {
    language: Language,
    tokenizer: Box<dyn Tokenizer>,
    styler: Box<dyn Styler>,
}

impl Highlighter {
    /// Create a highlighter from its three parts
    pub fn new(language: Language, tokenizer: Box<dyn Tokenizer>, styler: Box<dyn Styler>) -> Self {
        Self {
            language,
            tokenizer,
            styler,
        }
    }

    /// SwiftFlow with the default tokenizer and the given styler
    pub fn swiftflow(styler: Box<dyn Styler>) -> Result<Self> {
        Ok(Self::new(
            Language::swiftflow()?,
            Box::new(WordTokenizer::new()?),
            styler,
        ))
    }

    /// Split and classify `source`, in token order
    ///
    /// Blank input yields no tokens.
    pub fn classify(&self, source: &str) -> Result<Vec<ClassifiedToken>> {
        if source.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tokens = self.tokenizer.tokenize(source)?;
        let mut state = StringState::default();
        let mut classified = Vec::with_capacity(tokens.len());

        for text in tokens {
            let (category, next) = self.language.classify(&text, state);
            match (state.delimiter(), next.delimiter()) {
                (None, Some(quote)) => trace!("string opened by {}", quote.as_char()),
                (Some(quote), None) => trace!("string closed by {}", quote.as_char()),
                _ => {}
            }
            state = next;
            classified.push(ClassifiedToken { text, category });
        }

        if state.in_string() {
            debug!("input ended inside an unterminated string");
        }
        debug!("classified {} tokens", classified.len());
        Ok(classified)
    }

    /// Render `source` with each token styled by category
    ///
    /// Blank input is returned unchanged. Otherwise tokens are joined
    /// with single spaces, so original spacing is not preserved.
    pub fn colorize(&self, source: &str) -> Result<String> {
        if source.trim().is_empty() {
            return Ok(source.to_string());
        }

        let rendered: Vec<String> = self
            .classify(source)?
            .iter()
            .map(|token| self.styler.style(&token.text, token.category))
            .collect();
        Ok(rendered.join(" "))
    }

    /// Like `colorize`, but falls back to the unstyled source on failure
    pub fn colorize_or_plain(&self, source: &str) -> String {
        match self.colorize(source) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!("highlighting unavailable: {}", e);
                source.to_string()
            }
        }
    }

    /// One `Category<TAB>token` line per token
    ///
    /// Falls back to the unclassified source as a single line on failure.
    pub fn token_lines_or_plain(&self, source: &str) -> Vec<String> {
        match self.classify(source) {
            Ok(tokens) => tokens
                .iter()
                .map(|token| format!("{}\t{}", token.category, token.text))
                .collect(),
            Err(e) => {
                warn!("highlighting unavailable: {}", e);
                vec![source.to_string()]
            }
        }
    }
}

/// Colorize SwiftFlow source with the default tokenizer and palette
pub fn colorize(source: &str) -> Result<String> {
    Highlighter::swiftflow(Box::new(AnsiStyler::default()))?.colorize(source)
}
