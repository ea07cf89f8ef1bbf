//! Syntax classification and styling
//!
//! This module provides the pieces of the highlighting pipeline:
//! - Tokenizing raw source into word and punctuation tokens
//! - Classifying tokens into categories, tracking string context
//! - Styling each category for terminal display

mod style;
mod tokens;
mod rules;
mod tokenizer;
mod language;
mod highlighter;

pub use style::{Color, Style};
pub use tokens::Category;
pub use rules::{Quote, StringState};
pub use tokenizer::{Tokenizer, WordTokenizer};
pub use language::Language;
pub use highlighter::{colorize, AnsiStyler, ClassifiedToken, Highlighter, Palette, PlainStyler, Styler};
