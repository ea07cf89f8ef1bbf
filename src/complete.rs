//! Completion hints
//!
//! Proposes short fragments to type next. These are plain substring
//! heuristics over the raw text, not a real completion engine: `ifoo`
//! contains `if` and triggers the `if` hint.

/// Upper bound on returned suggestions
pub const MAX_SUGGESTIONS: usize = 3;

/// A substring-triggered hint
struct ContainsHint {
    /// Substring that must be present
    trigger: &'static str,
    /// Substring that must be absent, if any
    unless: Option<&'static str>,
    suggestion: &'static str,
}

/// Checked in order; every match contributes
const CONTAINS_HINTS: &[ContainsHint] = &[
    ContainsHint { trigger: "print", unless: Some("("), suggestion: "print()" },
    ContainsHint { trigger: "if", unless: Some("("), suggestion: "if () {" },
    ContainsHint { trigger: "while", unless: Some("("), suggestion: "while () {" },
    ContainsHint { trigger: "func", unless: None, suggestion: "func name() {" },
    ContainsHint { trigger: "var", unless: Some("="), suggestion: "var name = value" },
];

/// Hints keyed on the last whitespace-delimited word; at most one applies
const LAST_WORD_HINTS: &[(&str, &str)] = &[
    ("import", "\"module\" from \"package\""),
    ("print", "(\"message\")"),
    ("if", "(condition) {"),
];

impl ContainsHint {
    fn applies(&self, source: &str) -> bool {
        source.contains(self.trigger) && !self.unless.is_some_and(|s| source.contains(s))
    }
}

/// Suggest up to `MAX_SUGGESTIONS` fragments for `source`
///
/// Substring hints come first in table order, then the last-word hint.
pub fn suggest(source: &str) -> Vec<String> {
    let mut suggestions: Vec<String> = CONTAINS_HINTS
        .iter()
        .filter(|hint| hint.applies(source))
        .map(|hint| hint.suggestion.to_string())
        .collect();

    let last_word = source.split_whitespace().last().unwrap_or("");
    if let Some((_, suggestion)) = LAST_WORD_HINTS.iter().find(|(word, _)| *word == last_word) {
        suggestions.push(suggestion.to_string());
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(suggest("").is_empty());
        assert!(suggest("   ").is_empty());
    }

    #[test]
    fn test_func() {
        assert_eq!(suggest("func add")[0], "func name() {");
    }

    #[test]
    fn test_import_last_word() {
        assert_eq!(suggest("import"), ["\"module\" from \"package\""]);
    }

    #[test]
    fn test_print_both_kinds() {
        assert_eq!(suggest("print"), ["print()", "(\"message\")"]);
        assert_eq!(suggest("print("), Vec::<String>::new());
    }

    #[test]
    fn test_if_last_word() {
        assert_eq!(suggest("x if"), ["if () {", "(condition) {"]);
    }

    #[test]
    fn test_parenthesis_suppresses() {
        assert_eq!(suggest("while (x)"), Vec::<String>::new());
        assert_eq!(suggest("if (x) func"), ["func name() {"]);
    }

    #[test]
    fn test_var_without_assignment() {
        assert_eq!(suggest("var count"), ["var name = value"]);
        assert!(suggest("var count = 1").is_empty());
    }

    #[test]
    fn test_substring_false_positive_kept() {
        assert_eq!(suggest("ifoo"), ["if () {"]);
    }

    #[test]
    fn test_trailing_whitespace_keeps_last_word() {
        assert_eq!(suggest("import  "), ["\"module\" from \"package\""]);
    }

    #[test]
    fn test_capped_at_three_in_order() {
        let suggestions = suggest("print if while func var");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions, ["print()", "if () {", "while () {"]);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(suggest("func var if"), suggest("func var if"));
    }
}
