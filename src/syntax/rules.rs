//! Classification rules
//!
//! Pattern rules for whole-token matching, the numeric literal test,
//! and the string-context state carried from one token to the next.

use regex::Regex;

use crate::error::Result;

/// A whole-token pattern rule
///
/// The pattern is anchored on both ends at construction, so a rule
/// matches a token only if it describes all of it.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Compiled, anchored regex
    pub pattern: Regex,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{pattern})$");
        Ok(Self {
            pattern: Regex::new(&anchored)?,
        })
    }

    /// Check whether the rule covers the whole token
    pub fn matches(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }
}

/// Integer or simple decimal: digits with at most one `.`
///
/// Any Unicode numeric character counts as a digit, so `٣` and `３`
/// are numbers. No sign, no exponent. A lone `.` is not a number,
/// while `10.` and `.5` are.
pub fn is_number(token: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;
    for c in token.chars() {
        match c {
            '.' => dots += 1,
            c if c.is_numeric() => digits += 1,
            _ => return false,
        }
    }
    digits > 0 && dots < 2
}

/// Quote character that opened a string context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
}

impl Quote {
    /// Recognize a token consisting of exactly one quote character
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "\"" => Some(Quote::Double),
            "'" => Some(Quote::Single),
            _ => None,
        }
    }

    /// The delimiter character
    pub fn as_char(&self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// String-tracking state threaded through one classification pass
///
/// A delimiter exists exactly when the pass is inside a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StringState {
    /// Outside any string literal
    #[default]
    Code,
    /// Inside a string opened by this quote
    Inside(Quote),
}

impl StringState {
    /// Check if we're inside a string literal
    pub fn in_string(&self) -> bool {
        matches!(self, StringState::Inside(_))
    }

    /// The active delimiter, if any
    pub fn delimiter(&self) -> Option<Quote> {
        match self {
            StringState::Code => None,
            StringState::Inside(quote) => Some(*quote),
        }
    }
}
