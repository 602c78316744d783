//! Integration tests for the cached stemming API

use graupel::{stem, Language, Stemmer};

#[test]
fn repeated_calls_agree() {
    let mut stemmer = Stemmer::new(Language::Russian);
    let first = stemmer.stem_word("красивая");
    let second = stemmer.stem_word("красивая");
    assert_eq!(first, second);
    assert_eq!(first, "красив");
}

#[test]
fn stem_words_preserves_order() {
    let mut stemmer = Stemmer::new(Language::Spanish);
    let stems = stemmer.stem_words(["canciones", "absoluto", "canciones", "niños"]);
    assert_eq!(stems, vec!["cancion", "absolut", "cancion", "niñ"]);
}

#[test]
fn clear_cache_resets_but_results_hold() {
    let mut stemmer = Stemmer::new(Language::Turkish);
    let before = stemmer.stem_word("arabalarında");
    assert!(stemmer.cache_len() > 0);
    stemmer.clear_cache();
    assert_eq!(stemmer.cache_len(), 0);
    assert_eq!(stemmer.stem_word("arabalarında"), before);
}

#[test]
fn languages_stay_independent() {
    let mut ro = Stemmer::new(Language::Romanian);
    let mut ru = Stemmer::new(Language::Russian);
    assert_eq!(ro.stem_word("absolutul"), "absolut");
    assert_eq!(ru.stem_word("дома"), "дом");
    assert_eq!(ro.language(), Language::Romanian);
    assert_eq!(ru.language(), Language::Russian);
}

#[test]
fn unknown_language_code_errors() {
    let err = "xx".parse::<Language>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown language: xx");
}

#[test]
fn language_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Language::Turkish).unwrap();
    assert_eq!(json, "\"turkish\"");
    let back: Language = serde_json::from_str("\"spanish\"").unwrap();
    assert_eq!(back, Language::Spanish);
}

#[test]
fn free_function_needs_no_state() {
    assert_eq!(stem("kitaplar", Language::Turkish), "kitap");
    assert_eq!(stem("", Language::Romanian), "");
}
