//! Cached word-to-stem API
//!
//! A [`Stemmer`] wraps one language's rule program together with a word →
//! stem cache, so repeated words in a document are stemmed once. Instances
//! are cheap to create and `Send`; use one per thread.
//!
//! ```
//! use graupel::{Language, Stemmer};
//!
//! let mut stemmer = Stemmer::new(Language::Spanish);
//! assert_eq!(stemmer.stem_word("canciones"), "cancion");
//! ```

#![warn(missing_docs)]

mod error;
mod language;

pub use error::{Result, StemError};
pub use language::Language;

use std::collections::HashMap;

use graupel_core::{language as programs, StemContext};
use tracing::{debug, trace};

/// A single-language stemmer with an unbounded word → stem cache.
#[derive(Debug, Clone)]
pub struct Stemmer {
    language: Language,
    env: StemContext,
    cache: HashMap<String, String>,
}

impl Stemmer {
    /// Create a stemmer for `language` with an empty cache.
    pub fn new(language: Language) -> Self {
        debug!(language = %language, "creating stemmer");
        Self {
            language,
            env: StemContext::new(),
            cache: HashMap::new(),
        }
    }

    /// The language this stemmer was built for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Stem one word, consulting the cache first.
    pub fn stem_word(&mut self, word: &str) -> String {
        if let Some(stem) = self.cache.get(word) {
            trace!(word, "cache hit");
            return stem.clone();
        }
        trace!(word, "cache miss");
        self.env.set_current(word);
        run_program(self.language, &mut self.env);
        let stem = self.env.get_current();
        self.cache.insert(word.to_string(), stem.clone());
        stem
    }

    /// Stem a sequence of words, preserving order.
    pub fn stem_words<I, S>(&mut self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| self.stem_word(w.as_ref()))
            .collect()
    }

    /// Number of cached entries.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached entry. The cache is otherwise unbounded, so long
    /// running callers over open-ended vocabularies call this between
    /// documents.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Stem one word without keeping a cache around.
pub fn stem(word: &str, language: Language) -> String {
    let mut env = StemContext::new();
    env.set_current(word);
    run_program(language, &mut env);
    env.get_current()
}

fn run_program(language: Language, env: &mut StemContext) {
    let _ = match language {
        Language::Romanian => programs::romanian::stem(env),
        Language::Russian => programs::russian::stem(env),
        Language::Spanish => programs::spanish::stem(env),
        Language::Turkish => programs::turkish::stem(env),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_matches_stemmer() {
        let mut stemmer = Stemmer::new(Language::Romanian);
        assert_eq!(stemmer.stem_word("absolutul"), stem("absolutul", Language::Romanian));
    }

    #[test]
    fn cache_counts_distinct_words() {
        let mut stemmer = Stemmer::new(Language::Turkish);
        stemmer.stem_word("kitaplar");
        stemmer.stem_word("kitaplar");
        stemmer.stem_word("evde");
        assert_eq!(stemmer.cache_len(), 2);
    }
}
