use dashsearch_core::tokenizer::{contains_pattern, title_analyzer, wildcard_to_regex};
use tantivy::tokenizer::TokenStream;

fn tokens(text: &str) -> Vec<String> {
    let mut analyzer = title_analyzer();
    let mut stream = analyzer.token_stream(text);
    let mut out = Vec::new();
    while stream.advance() {
        out.push(stream.token().text.clone());
    }
    out
}

#[test]
fn it_keeps_the_whole_title_as_one_lowercased_term() {
    assert_eq!(tokens("CPU Usage (Prod)"), vec!["cpu usage (prod)".to_string()]);
}

#[test]
fn it_builds_a_contains_regex_for_multiword_terms() {
    let re = regex::Regex::new(&format!("^{}$", wildcard_to_regex(&contains_pattern("Usage (P"))))
        .unwrap();
    assert!(re.is_match("cpu usage (prod)"));
    assert!(!re.is_match("cpu usage prod"));
}
