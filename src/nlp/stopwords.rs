//! Stopword filtering
//!
//! A stopword set is either supplied by the caller or loaded from the
//! `stop-words` crate's language lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of words excluded from frequency and concordance analysis
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Stopwords, lowercased unless the filter is case-sensitive
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl StopwordFilter {
    /// Load the built-in list for a language code ("en", "de", ...).
    ///
    /// Unknown codes fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => LANGUAGE::English,
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_string()).collect(),
            case_sensitive: false,
        }
    }

    /// A filter that removes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a filter from a caller-supplied list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
            case_sensitive: false,
        }
    }

    /// Match words exactly instead of by their lowercase form
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("weather"));
        assert!(!filter.is_stopword("concordance"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("xx");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["The", "is"]);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("a"));
        assert_eq!(filter.len(), 2);

        filter.add_stopwords(&["a"]);
        assert!(filter.is_stopword("a"));

        filter.remove_stopwords(&["THE"]);
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = StopwordFilter::from_list(&["the"]).with_case_sensitive(true);
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }
}
