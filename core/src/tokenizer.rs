use regex::escape;
use tantivy::tokenizer::{LowerCaser, RawTokenizer, TextAnalyzer};

/// Name the title analyzer is registered under on every index.
pub const TITLE_TOKENIZER: &str = "title_raw";

/// Whole-title analyzer: the title is kept as a single lower-cased term so
/// wildcard queries see substrings across word boundaries.
pub fn title_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(RawTokenizer::default()).filter(LowerCaser).build()
}

/// Compile a `*`/`?` wildcard pattern into an anchored regex over one term.
/// Every other character is taken literally, and wildcards also match `\n`.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 12);
    out.push_str("(?s)");
    let mut literal = String::new();
    for ch in pattern.chars() {
        match ch {
            '*' | '?' => {
                out.push_str(&escape(&literal));
                literal.clear();
                out.push_str(if ch == '*' { ".*" } else { "." });
            }
            _ => literal.push(ch),
        }
    }
    out.push_str(&escape(&literal));
    out
}

/// The "contains `term` anywhere" wildcard, folded the same way titles are.
pub fn contains_pattern(term: &str) -> String {
    format!("*{}*", term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcards_translate() {
        assert_eq!(wildcard_to_regex("*99*"), "(?s).*99.*");
        assert_eq!(wildcard_to_regex("a?c"), "(?s)a.c");
    }

    #[test]
    fn metacharacters_are_literal() {
        assert_eq!(wildcard_to_regex("*a.b(c)*"), r"(?s).*a\.b\(c\).*");
    }

    #[test]
    fn wildcards_span_newlines() {
        let re = regex::Regex::new(&format!("^{}$", wildcard_to_regex("*99*"))).unwrap();
        assert!(re.is_match("ops\nlatency 99"));
    }

    #[test]
    fn contains_folds_case() {
        assert_eq!(contains_pattern("CPU"), "*cpu*");
    }
}
