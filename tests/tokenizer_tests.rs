use minidex::Analyzer;

#[test]
fn it_lowercases_and_stems() {
    let analyzer = Analyzer::new();
    let terms = analyzer.tokenize("Running Runners RUN!");
    assert!(terms.contains(&"run".to_string()));
    assert_eq!(terms.len(), 3);
}

#[test]
fn it_filters_stopwords() {
    let analyzer = Analyzer::new();
    let terms = analyzer.tokenize("The quick brown fox and the lazy dog");
    assert!(!terms.contains(&"the".to_string()));
    assert!(!terms.contains(&"and".to_string()));
    assert!(terms.contains(&"fox".to_string()));
}

#[test]
fn it_is_deterministic() {
    let analyzer = Analyzer::new();
    let text = "Determinism: tokenize twice, get the same terms twice.";
    assert_eq!(analyzer.tokenize(text), analyzer.tokenize(text));
}

#[test]
fn empty_input_yields_empty_output() {
    let analyzer = Analyzer::new();
    assert!(analyzer.tokenize("").is_empty());
}

#[test]
fn digits_survive_but_single_characters_do_not() {
    let analyzer = Analyzer::new();
    let terms = analyzer.tokenize("version 2 of the http2 spec");
    assert!(terms.contains(&"http2".to_string()));
    assert!(!terms.contains(&"2".to_string()));
}

#[test]
fn binary_garbage_degrades_to_separators() {
    let analyzer = Analyzer::new();
    let terms = analyzer.tokenize("\u{0}\u{1}caf\u{e9}\u{fffd} hello\u{0}world");
    // Non-alphanumeric bytes split tokens; nothing panics.
    assert!(terms.contains(&"hello".to_string()));
    assert!(terms.contains(&"world".to_string()));
    assert!(terms.contains(&"caf".to_string()));
}
