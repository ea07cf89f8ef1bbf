//! SwiftFlow source highlighter
//!
//! Splits SwiftFlow code into tokens, classifies each one (keyword,
//! type, operator, number, string, identifier, other) and renders it
//! with per-category terminal styling. Also offers a few completion
//! hints for partially typed code.
//!
//! ```
//! use swiftflow_highlight::{Highlighter, PlainStyler};
//!
//! let hl = Highlighter::swiftflow(Box::new(PlainStyler)).unwrap();
//! assert_eq!(hl.colorize("x==1").unwrap(), "x == 1");
//! ```

pub mod complete;
pub mod config;
pub mod error;
pub mod syntax;

pub use complete::{suggest, MAX_SUGGESTIONS};
pub use config::Config;
pub use error::{HighlightError, Result};
pub use syntax::{
    colorize, AnsiStyler, Category, ClassifiedToken, Highlighter, Language, Palette, PlainStyler,
    Styler, Tokenizer, WordTokenizer,
};
