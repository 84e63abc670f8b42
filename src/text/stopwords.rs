use std::collections::HashSet;

/// English stop words, matching the list the classifier was trained against.
/// Apostrophe contractions are listed in their split form since punctuation is
/// collapsed before stop-word removal ("don't" reaches this set as "don", "t").
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Immutable stop-word set, built once at startup and shared read-only.
#[derive(Debug)]
pub struct StopWords {
    words: HashSet<&'static str>,
}

impl StopWords {
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().copied().collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_common_filler_words() {
        let sw = StopWords::english();
        assert!(sw.contains("the"));
        assert!(sw.contains("is"));
        assert!(sw.contains("a"));
    }

    #[test]
    fn keeps_signal_words_out_of_the_set() {
        let sw = StopWords::english();
        assert!(!sw.contains("free"));
        assert!(!sw.contains("click"));
        assert!(!sw.contains("now"));
    }

    #[test]
    fn list_has_no_duplicates() {
        let sw = StopWords::english();
        assert_eq!(sw.len(), ENGLISH.len());
    }
}
