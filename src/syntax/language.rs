//! Language vocabulary and token classification
//!
//! A `Language` bundles the reserved-word sets and the identifier rule
//! for one language. It is built once and only read afterwards.

use std::collections::HashSet;

use super::rules::{is_number, PatternRule, Quote, StringState};
use super::tokens::Category;
use crate::error::Result;

const SWIFTFLOW_KEYWORDS: &[&str] = &[
    "var", "net", "clog", "dos", "sel", "let", "const",
    "if", "else", "elif", "while", "for", "do",
    "func", "return", "import", "export", "from",
    "print", "weld", "pass", "dbvar", "main",
    "true", "false", "null", "undefined",
];

const SWIFTFLOW_TYPES: &[&str] = &["int", "float", "string", "bool", "char", "void", "any", "auto"];

const SWIFTFLOW_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "=", "==", "!=",
    ">", "<", ">=", "<=", "and", "or", "not", "in", "is",
];

const IDENTIFIER_PATTERN: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";

/// Immutable vocabulary of a highlighted language
#[derive(Debug, Clone)]
pub struct Language {
    /// Language name
    pub name: String,
    keywords: HashSet<String>,
    types: HashSet<String>,
    operators: HashSet<String>,
    identifier: PatternRule,
}

impl Language {
    /// Create a language with empty vocabulary
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            keywords: HashSet::new(),
            types: HashSet::new(),
            operators: HashSet::new(),
            identifier: PatternRule::new(IDENTIFIER_PATTERN)?,
        })
    }

    /// The SwiftFlow language
    pub fn swiftflow() -> Result<Self> {
        let mut lang = Self::new("SwiftFlow")?;
        lang.add_keywords(SWIFTFLOW_KEYWORDS);
        lang.add_types(SWIFTFLOW_TYPES);
        lang.add_operators(SWIFTFLOW_OPERATORS);
        Ok(lang)
    }

    /// Add reserved words
    pub fn add_keywords(&mut self, words: &[&str]) {
        self.keywords.extend(words.iter().map(|w| w.to_string()));
    }

    /// Add built-in type names
    pub fn add_types(&mut self, words: &[&str]) {
        self.types.extend(words.iter().map(|w| w.to_string()));
    }

    /// Add operators
    pub fn add_operators(&mut self, words: &[&str]) {
        self.operators.extend(words.iter().map(|w| w.to_string()));
    }

    pub fn is_keyword(&self, token: &str) -> bool {
        self.keywords.contains(token)
    }

    pub fn is_type(&self, token: &str) -> bool {
        self.types.contains(token)
    }

    pub fn is_operator(&self, token: &str) -> bool {
        self.operators.contains(token)
    }

    /// Classify one token given the string state before it
    ///
    /// Returns the token's category and the state for the next token.
    /// Rules apply in order, first match wins: opening quote, matching
    /// closing quote, string contents, keyword, type, operator, number,
    /// identifier, and finally `Other`.
    pub fn classify(&self, token: &str, state: StringState) -> (Category, StringState) {
        let quote = Quote::from_token(token);

        match state {
            StringState::Code => {
                if let Some(quote) = quote {
                    return (Category::String, StringState::Inside(quote));
                }
            }
            StringState::Inside(open) => {
                // A different quote character is just string content.
                if quote == Some(open) {
                    return (Category::String, StringState::Code);
                }
                return (Category::String, state);
            }
        }

        let category = if self.is_keyword(token) {
            Category::Keyword
        } else if self.is_type(token) {
            Category::Type
        } else if self.is_operator(token) {
            Category::Operator
        } else if is_number(token) {
            Category::Number
        } else if self.identifier.matches(token) {
            Category::Identifier
        } else {
            Category::Other
        };
        (category, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang() -> Language {
        Language::swiftflow().unwrap()
    }

    fn code(token: &str) -> Category {
        lang().classify(token, StringState::Code).0
    }

    #[test]
    fn test_vocabulary_sizes() {
        let lang = lang();
        assert_eq!(lang.keywords.len(), 27);
        assert_eq!(lang.types.len(), 8);
        assert_eq!(lang.operators.len(), 18);
    }

    #[test]
    fn test_reserved_words() {
        assert_eq!(code("var"), Category::Keyword);
        assert_eq!(code("weld"), Category::Keyword);
        assert_eq!(code("undefined"), Category::Keyword);
        assert_eq!(code("int"), Category::Type);
        assert_eq!(code("auto"), Category::Type);
        assert_eq!(code("**"), Category::Operator);
        assert_eq!(code("and"), Category::Operator);
        assert_eq!(code("is"), Category::Operator);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(code("Var"), Category::Identifier);
        assert_eq!(code("INT"), Category::Identifier);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(code("10"), Category::Number);
        assert_eq!(code("3.14"), Category::Number);
        assert_eq!(code("3.1.4"), Category::Other);
    }

    #[test]
    fn test_identifiers_and_other() {
        assert_eq!(code("x"), Category::Identifier);
        assert_eq!(code("_private9"), Category::Identifier);
        assert_eq!(code("9lives"), Category::Other);
        assert_eq!(code(";"), Category::Other);
        assert_eq!(code("("), Category::Other);
        assert_eq!(code("&&"), Category::Other);
    }

    #[test]
    fn test_string_open_and_close() {
        let lang = lang();
        let (category, state) = lang.classify("\"", StringState::Code);
        assert_eq!(category, Category::String);
        assert_eq!(state, StringState::Inside(Quote::Double));

        let (category, state) = lang.classify("\"", state);
        assert_eq!(category, Category::String);
        assert_eq!(state, StringState::Code);
    }

    #[test]
    fn test_string_contents_not_reclassified() {
        let lang = lang();
        let inside = StringState::Inside(Quote::Single);
        for token in ["if", "int", "==", "10", "x", ";"] {
            assert_eq!(lang.classify(token, inside), (Category::String, inside));
        }
    }

    #[test]
    fn test_mismatched_quote_is_content() {
        let lang = lang();
        let inside = StringState::Inside(Quote::Single);
        assert_eq!(lang.classify("\"", inside), (Category::String, inside));
    }

    #[test]
    fn test_custom_language() {
        let mut lang = Language::new("Tiny").unwrap();
        lang.add_keywords(&["loop"]);
        assert_eq!(lang.classify("loop", StringState::Code).0, Category::Keyword);
        assert_eq!(lang.classify("var", StringState::Code).0, Category::Identifier);
    }
}
